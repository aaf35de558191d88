use crate::emit::Emitter;
use proc_macro2::TokenStream;
use quote::quote;

/// Implement the domain interface on this pass's getters type.
///
/// Domain reads its own fields; storage and api read through `data`.
/// `builder` rebuilds a domain builder in declaration order.
pub fn generate(e: &Emitter) -> TokenStream {
    let interface = &e.names.interface;
    let getters = &e.names.getters;
    let builder = &e.names.builder;

    let access = |ident: &syn::Ident| {
        if e.policy.is_domain() {
            quote!(self.#ident)
        } else {
            quote!(self.data.#ident)
        }
    };

    let getters_fns = e.fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let value = access(ident);

        quote! {
            fn #ident(&self) -> &#ty {
                &#value
            }
        }
    });

    let chain = e.fields.iter().map(|f| {
        let setter = &f.setter;
        let value = access(&f.ident);

        quote!(.#setter(#value.clone()))
    });

    quote! {
        impl #interface for #getters {
            #(#getters_fns)*

            fn builder(&self) -> #builder {
                #builder::new()
                    #(#chain)*
            }
        }
    }
}

use crate::{emit::Emitter, helper::doc};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Render the domain build error, the chainable setters, `build` and
/// `must_build`.
pub fn generate(e: &Emitter) -> TokenStream {
    let mut tokens = build_error(e);
    tokens.extend(setters(e));

    tokens
}

fn build_error(e: &Emitter) -> TokenStream {
    let error = &e.names.build_error;
    let line = doc(format!(
        "{error} is returned when a {} fails validation.",
        e.noun()
    ));
    let message = format!("{} is missing required field '{{0}}'", e.noun());

    quote! {
        #line
        #[derive(Clone, Debug, Eq, PartialEq, ::thiserror::Error)]
        pub enum #error {
            #[error(#message)]
            MissingField(&'static str),
        }
    }
}

fn setters(e: &Emitter) -> TokenStream {
    let external = &e.names.external;
    let data = &e.names.data;
    let error = &e.names.build_error;
    let iface = format_ident!("{}", e.spec.interface_name());

    let with_fns = e.fields.iter().map(|f| {
        let ident = &f.ident;
        let setter = &f.setter;
        let ty = &f.ty;
        let line = doc(format!(
            "Sets the {} of the {external}.",
            f.field.internal_name()
        ));

        quote! {
            #line
            #[must_use]
            pub fn #setter(mut self, #ident: #ty) -> Self {
                self.data.#ident = #ident;
                self
            }
        }
    });

    let copies = e.fields.iter().map(|f| {
        let ident = &f.ident;

        quote!(#ident: self.data.#ident.clone(),)
    });

    // a required field still holding its default counts as unset
    let checks = e.fields.iter().filter(|f| f.field.is_required()).map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let name = f.field.internal_name();

        quote! {
            if built.#ident == <#ty as ::std::default::Default>::default() {
                return ::std::result::Result::Err(#error::MissingField(#name));
            }
        }
    });

    let build_doc = doc(format!("Builds a new {iface}, checking required fields."));
    let must_doc = doc("Calls `build`, panicking if it fails.");
    let panic_message = format!("failed to build {}: {{err}}", e.noun());

    quote! {
        impl #external {
            #(#with_fns)*

            #build_doc
            pub fn build(&self) -> ::std::result::Result<::std::boxed::Box<dyn #iface>, #error> {
                let built = #data {
                    #(#copies)*
                };

                #(#checks)*

                ::std::result::Result::Ok(::std::boxed::Box::new(built))
            }

            #must_doc
            #[must_use]
            pub fn must_build(&self) -> ::std::boxed::Box<dyn #iface> {
                match self.build() {
                    ::std::result::Result::Ok(built) => built,
                    ::std::result::Result::Err(err) => ::std::panic!(#panic_message),
                }
            }
        }
    }
}

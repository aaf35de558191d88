use crate::{emit::Emitter, helper::doc};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Render `to_<entity>` (suffixed for text) from any domain value, plus the
/// `is_default` predicate when an omit-empty tag refers to it.
pub fn generate(e: &Emitter) -> TokenStream {
    let Some(codec) = e.policy.codec else {
        return quote!();
    };

    let external = &e.names.external;
    let data = &e.names.data;
    let interface = &e.names.interface;
    let converter = format_ident!("{}", codec.converter_name(&e.spec.snake_name()));

    let receiver = if e.fields.is_empty() {
        format_ident!("_{}", e.spec.receiver_name())
    } else {
        format_ident!("{}", e.spec.receiver_name())
    };

    let members = e.fields.iter().map(|f| {
        let ident = &f.ident;

        quote!(#ident: #receiver.#ident().clone(),)
    });

    let line = doc(format!(
        "Converts any {} into a {} {external}.",
        interface.to_string().replace(' ', ""),
        e.policy.representation
    ));

    let is_default = e.spec.has_omit_empty().then(|| {
        quote! {
            fn is_default<T: ::std::default::Default + ::std::cmp::PartialEq>(value: &T) -> bool {
                *value == T::default()
            }
        }
    });

    quote! {
        #line
        #[must_use]
        pub fn #converter(#receiver: &dyn #interface) -> #external {
            #external {
                data: #data {
                    #(#members)*
                },
            }
        }

        #is_default
    }
}

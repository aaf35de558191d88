use crate::{emit::Emitter, helper::doc};
use proc_macro2::TokenStream;
use quote::quote;

pub fn generate(e: &Emitter) -> TokenStream {
    let external = &e.names.external;
    let line = doc(format!("Returns an empty {external}."));

    quote! {
        impl #external {
            #line
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }
    }
}

use crate::emit::Emitter;
use proc_macro2::TokenStream;
use quote::quote;

/// Render the imports every artifact starts with.
///
/// Imports are module aliases only, so they never collide with the
/// UpperCamel type names the rest of the artifact declares.
pub fn generate(e: &Emitter) -> TokenStream {
    if e.policy.is_domain() {
        return quote! {
            use ::std::fmt;
        };
    }

    let domain = &e.domain_path;

    quote! {
        use #domain as domain;
    }
}

use crate::{
    emit::Emitter,
    helper::{doc, doc_lines},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Render the domain trait: one accessor per field plus `builder`.
pub fn generate(e: &Emitter) -> TokenStream {
    let iface = format_ident!("{}", e.spec.interface_name());
    let builder = &e.names.builder;

    let iface_doc = match e.spec.description() {
        Some(description) => doc_lines(description.lines()),
        None => doc(format!("{iface} is the domain representation of a {}.", e.noun())),
    };

    let accessors = e.fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let line = doc(format!("Returns the {} of this {iface}.", f.field.internal_name()));

        quote! {
            #line
            fn #ident(&self) -> &#ty;
        }
    });

    let builder_doc = doc(format!(
        "Returns a {builder} pre-populated with this {}'s values.",
        e.noun()
    ));

    quote! {
        #iface_doc
        pub trait #iface: fmt::Debug {
            #(#accessors)*

            #builder_doc
            fn builder(&self) -> #builder;
        }
    }
}

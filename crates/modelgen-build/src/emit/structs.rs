use crate::{emit::Emitter, helper::doc};
use proc_macro2::TokenStream;
use quote::quote;

/// Render the wrapper struct followed by the data struct it holds.
pub fn generate(e: &Emitter) -> TokenStream {
    let mut tokens = external(e);
    tokens.extend(internal(e));

    tokens
}

// external
// builder wrapper for domain, serde-transparent entity struct otherwise
fn external(e: &Emitter) -> TokenStream {
    let external = &e.names.external;
    let data = &e.names.data;

    if e.policy.is_domain() {
        let line = doc(format!(
            "{external} provides a convenient interface for building a {}.",
            e.noun()
        ));

        return quote! {
            #line
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct #external {
                data: #data,
            }
        };
    }

    let line = doc(format!(
        "{external} is the {} representation of a {}.",
        e.policy.representation,
        e.names.interface.to_string().replace(' ', "")
    ));

    quote! {
        #line
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct #external {
            data: #data,
        }
    }
}

fn internal(e: &Emitter) -> TokenStream {
    let data = &e.names.data;

    let members = e.fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;

        let serde = e.tag(f.field).map(|tag| {
            if f.field.is_omit_empty() {
                quote!(#[serde(rename = #tag, default, skip_serializing_if = "is_default")])
            } else {
                quote!(#[serde(rename = #tag)])
            }
        });

        if e.policy.public_fields {
            quote! {
                #serde
                pub #ident: #ty,
            }
        } else {
            quote! {
                #ident: #ty,
            }
        }
    });

    if e.policy.is_domain() {
        quote! {
            #[derive(Clone, Debug, Default, PartialEq)]
            struct #data {
                #(#members)*
            }
        }
    } else {
        let line = doc(format!("{data} is the tagged document body of a {}.", e.noun()));

        quote! {
            #line
            #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            pub struct #data {
                #(#members)*
            }
        }
    }
}

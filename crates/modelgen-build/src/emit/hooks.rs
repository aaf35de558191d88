use crate::{emit::Emitter, helper::doc, policy::Codec};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Render the marshalling hooks for the pass's document format.
pub fn generate(e: &Emitter) -> TokenStream {
    let Some(codec) = e.policy.codec else {
        return quote!();
    };

    let external = &e.names.external;
    let hooks = match codec {
        Codec::Binary => binary(e, codec),
        Codec::Text => text(e, codec),
    };

    quote! {
        impl #external {
            #hooks
        }
    }
}

fn binary(e: &Emitter, codec: Codec) -> TokenStream {
    let external = &e.names.external;
    let data = &e.names.data;
    let label = codec.label();
    let [marshal, unmarshal, get, set] = hook_idents(codec);

    let marshal_doc = doc(format!("Encodes the {external} as {label} bytes."));
    let unmarshal_doc = doc(format!("Replaces the {external} with one decoded from {label} bytes."));
    let get_doc = doc(format!("Returns the inner {data} as a {label} value."));
    let set_doc = doc(format!("Replaces the inner {data} with a decoded {label} value."));

    quote! {
        #marshal_doc
        pub fn #marshal(&self) -> ::std::result::Result<::std::vec::Vec<u8>, ::serde_cbor::Error> {
            ::serde_cbor::to_vec(self)
        }

        #unmarshal_doc
        pub fn #unmarshal(&mut self, data: &[u8]) -> ::std::result::Result<(), ::serde_cbor::Error> {
            *self = ::serde_cbor::from_slice(data)?;
            ::std::result::Result::Ok(())
        }

        #get_doc
        pub fn #get(&self) -> ::std::result::Result<::serde_cbor::Value, ::serde_cbor::Error> {
            ::serde_cbor::value::to_value(&self.data)
        }

        #set_doc
        pub fn #set(&mut self, raw: ::serde_cbor::Value) -> ::std::result::Result<(), ::serde_cbor::Error> {
            self.data = ::serde_cbor::value::from_value(raw)?;
            ::std::result::Result::Ok(())
        }
    }
}

fn text(e: &Emitter, codec: Codec) -> TokenStream {
    let data = &e.names.data;
    let label = codec.label();
    let [marshal, unmarshal, ..] = hook_idents(codec);

    let marshal_doc = doc(format!("Encodes the inner {data} as {label} text."));
    let unmarshal_doc = doc(format!("Replaces the inner {data} with one decoded from {label} text."));

    quote! {
        #marshal_doc
        pub fn #marshal(&self) -> ::std::result::Result<::std::string::String, ::serde_json::Error> {
            ::serde_json::to_string(&self.data)
        }

        #unmarshal_doc
        pub fn #unmarshal(&mut self, data: &str) -> ::std::result::Result<(), ::serde_json::Error> {
            self.data = ::serde_json::from_str(data)?;
            ::std::result::Result::Ok(())
        }
    }
}

// hook_idents
// marshal, unmarshal, get, set
fn hook_idents(codec: Codec) -> [syn::Ident; 4] {
    let suffix = codec.suffix();

    [
        format_ident!("marshal_{suffix}"),
        format_ident!("unmarshal_{suffix}"),
        format_ident!("get_{suffix}"),
        format_ident!("set_{suffix}"),
    ]
}

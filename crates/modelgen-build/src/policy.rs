use modelgen_schema::{
    node::ModelSpec,
    types::{Representation, TagCase},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

///
/// TagStyle
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagStyle {
    /// No serialization tags (domain).
    Untagged,

    /// Tag is the field's serialized name, `_id` for the identifier.
    Serialized,

    /// Tag is the plain internal name in the given case.
    Plain(TagCase),
}

///
/// Codec
///
/// Document format the storage and api structs marshal through.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Codec {
    /// Binary document (CBOR).
    Binary,

    /// Text document (JSON).
    Text,
}

impl Codec {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Binary => "cbor",
            Self::Text => "json",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "CBOR",
            Self::Text => "JSON",
        }
    }

    /// Binary documents also expose the decoded value, not just bytes.
    #[must_use]
    pub const fn has_value_hooks(self) -> bool {
        matches!(self, Self::Binary)
    }

    // converter_name
    // storage keeps the bare To<Entity>, text gets its suffix
    #[must_use]
    pub fn converter_name(self, snake_entity: &str) -> String {
        match self {
            Self::Binary => format!("to_{snake_entity}"),
            Self::Text => format!("to_{snake_entity}_{}", self.suffix()),
        }
    }
}

///
/// RepresentationPolicy
///
/// The small record that separates the three emission passes. The emitter
/// itself is shared; only these switches differ.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RepresentationPolicy {
    pub representation: Representation,
    pub interface: bool,
    pub public_fields: bool,
    pub tags: TagStyle,
    pub codec: Option<Codec>,
}

impl RepresentationPolicy {
    #[must_use]
    pub const fn new(representation: Representation, api_tag_case: TagCase) -> Self {
        match representation {
            Representation::Domain => Self {
                representation,
                interface: true,
                public_fields: false,
                tags: TagStyle::Untagged,
                codec: None,
            },
            Representation::Storage => Self {
                representation,
                interface: false,
                public_fields: true,
                tags: TagStyle::Serialized,
                codec: Some(Codec::Binary),
            },
            Representation::Api => Self {
                representation,
                interface: false,
                public_fields: true,
                tags: TagStyle::Plain(api_tag_case),
                codec: Some(Codec::Text),
            },
        }
    }

    #[must_use]
    pub const fn for_spec(spec: &ModelSpec, representation: Representation) -> Self {
        Self::new(representation, spec.api_tag_case())
    }

    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self.representation, Representation::Domain)
    }
}

///
/// PassNames
///
/// Names one emission pass resolves against. Computed fresh for every
/// representation from the frozen model, so no pass depends on another.
///

#[derive(Clone, Debug)]
pub struct PassNames {
    /// Wrapper struct: the builder for domain, the entity struct otherwise.
    pub external: Ident,

    /// Data struct the wrapper holds.
    pub data: Ident,

    /// Type the accessors are implemented on.
    pub getters: Ident,

    /// Path to the domain interface from inside this artifact.
    pub interface: TokenStream,

    /// Path to the domain builder from inside this artifact.
    pub builder: TokenStream,

    pub build_error: Ident,
}

impl PassNames {
    #[must_use]
    pub fn new(spec: &ModelSpec, representation: Representation) -> Self {
        let interface = format_ident!("{}", spec.interface_name());
        let builder = format_ident!("{}", spec.builder_name());
        let data = format_ident!("{}", spec.data_struct_name());
        let build_error = format_ident!("{}", spec.build_error_name());

        match representation {
            Representation::Domain => Self {
                external: builder.clone(),
                getters: data.clone(),
                data,
                interface: quote!(#interface),
                builder: quote!(#builder),
                build_error,
            },
            Representation::Storage | Representation::Api => Self {
                external: interface.clone(),
                getters: interface.clone(),
                data,
                interface: quote!(domain::#interface),
                builder: quote!(domain::#builder),
                build_error,
            },
        }
    }
}

///
/// TESTS
///

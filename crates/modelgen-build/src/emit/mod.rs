mod accessors;
mod builder;
mod constructor;
mod convert;
mod header;
mod hooks;
mod interface;
mod structs;

use crate::{
    GenerateError,
    policy::{PassNames, RepresentationPolicy, TagStyle},
};
use modelgen_schema::{
    SpecError,
    node::{Field, ModelSpec},
    types::Representation,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Path, Type};

///
/// Emitter
///
/// One emitter for all three representations. The policy decides which
/// sections are emitted and how fields are tagged; section order is fixed.
///

pub(crate) struct Emitter<'a> {
    pub(crate) spec: &'a ModelSpec,
    pub(crate) policy: RepresentationPolicy,
    pub(crate) names: PassNames,
    pub(crate) fields: Vec<EmitField<'a>>,
    pub(crate) domain_path: Path,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(
        spec: &'a ModelSpec,
        representation: Representation,
    ) -> Result<Self, GenerateError> {
        let fields = spec
            .fields()
            .iter()
            .map(EmitField::new)
            .collect::<Result<Vec<_>, _>>()?;

        let domain_path = syn::parse_str::<Path>(spec.domain_path()).map_err(|e| {
            SpecError::InvalidDomainPath {
                path: spec.domain_path().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            spec,
            policy: RepresentationPolicy::for_spec(spec, representation),
            names: PassNames::new(spec, representation),
            fields,
            domain_path,
        })
    }

    /// Assemble all sections in declaration order.
    pub(crate) fn emit(&self) -> TokenStream {
        let mut tokens = quote!();

        tokens.extend(header::generate(self));
        if self.policy.interface {
            tokens.extend(interface::generate(self));
        }
        tokens.extend(structs::generate(self));
        tokens.extend(constructor::generate(self));
        tokens.extend(accessors::generate(self));

        if self.policy.is_domain() {
            tokens.extend(builder::generate(self));
        } else {
            tokens.extend(hooks::generate(self));
            tokens.extend(convert::generate(self));
        }

        tokens
    }

    /// `widget`, the name prose in doc comments refers to.
    pub(crate) fn noun(&self) -> &str {
        self.spec.internal_struct_name()
    }

    /// Serialization tag for a field under this pass, if tagged at all.
    pub(crate) fn tag(&self, field: &Field) -> Option<String> {
        match self.policy.tags {
            TagStyle::Untagged => None,
            TagStyle::Serialized => Some(field.serialized_name().to_string()),
            TagStyle::Plain(case) => Some(field.api_name(case)),
        }
    }
}

///
/// EmitField
///
/// A field with its Rust tokens resolved once per pass.
///

pub(crate) struct EmitField<'a> {
    pub(crate) field: &'a Field,
    pub(crate) ident: Ident,
    pub(crate) setter: Ident,
    pub(crate) ty: Type,
}

impl<'a> EmitField<'a> {
    fn new(field: &'a Field) -> Result<Self, SpecError> {
        let ty = syn::parse_str::<Type>(field.ty()).map_err(|e| SpecError::InvalidFieldType {
            field: field.raw_name().to_string(),
            ty: field.ty().to_string(),
            reason: e.to_string(),
        })?;
        let name = field.rust_name();

        Ok(Self {
            field,
            ident: format_ident!("{name}"),
            setter: format_ident!("with_{name}"),
            ty,
        })
    }
}

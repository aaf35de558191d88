pub mod naming;
pub mod node;
pub mod source;
pub mod types;

mod validate;

use thiserror::Error as ThisError;

/// Maximum length for entity, package and field identifiers.
pub const MAX_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        SpecError,
        node::{Field, ModelSpec, ModelSpecBuilder},
        source::ModelSource,
        types::{Representation, TagCase},
    };
}

///
/// SpecError
///
/// Raised while freezing a specification, before any source is emitted.
///

#[derive(Debug, ThisError)]
pub enum SpecError {
    #[error("entity name is empty")]
    EmptyEntityName,

    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("invalid receiver name '{name}': {reason}")]
    InvalidReceiver { name: String, reason: String },

    #[error("invalid package name '{name}': {reason}")]
    InvalidPackage { name: String, reason: String },

    #[error("invalid domain path '{path}': {reason}")]
    InvalidDomainPath { path: String, reason: String },

    #[error("field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    #[error("invalid field name '{name}': {reason}")]
    InvalidFieldName { name: String, reason: String },

    #[error("field '{name}' collides with the generated '{member}' method")]
    ReservedFieldName { name: String, member: String },

    #[error("field '{field}' has invalid type '{ty}': {reason}")]
    InvalidFieldType {
        field: String,
        ty: String,
        reason: String,
    },
}

use crate::{
    naming::{FieldNames, derive_names, is_identifier, rust_name},
    types::TagCase,
};
use serde::Serialize;

///
/// Field
///
/// One attribute of a model. Every name variant is derived from `raw_name`
/// at construction; `ty` is carried through to every representation untouched.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    raw_name: String,
    display_name: String,
    internal_name: String,
    serialized_name: String,
    ty: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    required: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    omit_empty: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let raw_name = name.into();
        let FieldNames {
            display,
            internal,
            serialized,
        } = derive_names(&raw_name);

        Self {
            raw_name,
            display_name: display,
            internal_name: internal,
            serialized_name: serialized,
            ty: ty.into(),
            required: false,
            omit_empty: false,
        }
    }

    /// Mark the field as one the domain builder must see set before `build`.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Skip the field in storage/api documents while it holds its default.
    #[must_use]
    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    //
    // names
    //

    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    #[must_use]
    pub fn serialized_name(&self) -> &str {
        &self.serialized_name
    }

    /// Tag used by the api representation. The identifier field keeps its
    /// plain internal name here rather than the storage sentinel.
    #[must_use]
    pub fn api_name(&self, case: TagCase) -> String {
        match case {
            TagCase::Camel => self.internal_name.clone(),
            TagCase::Snake => rust_name(&self.internal_name),
        }
    }

    /// snake_case ident shared by struct fields, accessors and setters.
    #[must_use]
    pub fn rust_name(&self) -> String {
        rust_name(&self.internal_name)
    }

    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn is_omit_empty(&self) -> bool {
        self.omit_empty
    }

    #[must_use]
    pub fn is_identifier(&self) -> bool {
        is_identifier(&self.raw_name)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_field_api_name_is_plain() {
        let field = Field::new("ID", "String");

        assert!(field.is_identifier());
        assert_eq!(field.serialized_name(), "_id");
        assert_eq!(field.api_name(TagCase::Camel), "id");
        assert_eq!(field.api_name(TagCase::Snake), "id");
        assert_eq!(field.rust_name(), "id");
    }

    #[test]
    fn snake_tag_case_converts_internal_name() {
        let field = Field::new("TranspiledSource", "String");

        assert_eq!(field.internal_name(), "transpiledSource");
        assert_eq!(field.api_name(TagCase::Camel), "transpiledSource");
        assert_eq!(field.api_name(TagCase::Snake), "transpiled_source");
    }

    #[test]
    fn flags_default_off() {
        let field = Field::new("label", "String");
        assert!(!field.is_required());
        assert!(!field.is_omit_empty());

        let field = field.required().omit_empty();
        assert!(field.is_required());
        assert!(field.is_omit_empty());
    }

    #[test]
    fn serializes_derived_names() {
        let field = Field::new("ID", "u64");
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(value["display_name"], "ID");
        assert_eq!(value["serialized_name"], "_id");
        assert!(value.get("required").is_none());
    }
}

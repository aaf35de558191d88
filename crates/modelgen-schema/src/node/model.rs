use crate::{
    SpecError,
    naming::{internal_name, rust_name, type_name},
    node::Field,
    types::TagCase,
    validate::{validate_ident, validate_path, validate_type},
};
use serde::Serialize;

///
/// ModelSpec
///
/// The unit of generation: one entity, its package wiring and its ordered
/// fields. Immutable once built; every derived name is computed here once
/// and each representation pass reads it without mutating anything.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ModelSpec {
    entity_name: String,
    interface_name: String,
    internal_struct_name: String,
    builder_name: String,
    receiver_name: String,
    package_name: String,
    storage_package: String,
    api_package: String,
    domain_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    api_tag_case: TagCase,
    fields: Vec<Field>,
}

impl ModelSpec {
    /// Build a specification from entity, receiver, owning package and fields.
    pub fn new(
        entity: impl Into<String>,
        receiver: impl Into<String>,
        package: impl Into<String>,
        fields: Vec<Field>,
    ) -> Result<Self, SpecError> {
        Self::builder(entity, receiver, package).fields(fields).build()
    }

    #[must_use]
    pub fn builder(
        entity: impl Into<String>,
        receiver: impl Into<String>,
        package: impl Into<String>,
    ) -> ModelSpecBuilder {
        ModelSpecBuilder::new(entity, receiver, package)
    }

    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Capitalised entity name, used for the domain trait and storage/api structs.
    #[must_use]
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Lower-cased entity name naming the unexported data the builder wraps.
    #[must_use]
    pub fn internal_struct_name(&self) -> &str {
        &self.internal_struct_name
    }

    #[must_use]
    pub fn builder_name(&self) -> &str {
        &self.builder_name
    }

    /// Rust ident of the data struct every representation wraps.
    #[must_use]
    pub fn data_struct_name(&self) -> String {
        format!("{}Data", self.interface_name)
    }

    #[must_use]
    pub fn build_error_name(&self) -> String {
        format!("{}BuildError", self.interface_name)
    }

    /// snake_case entity name (`asset_metadata`), for converters and file names.
    #[must_use]
    pub fn snake_name(&self) -> String {
        rust_name(&self.interface_name)
    }

    #[must_use]
    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn storage_package(&self) -> &str {
        &self.storage_package
    }

    #[must_use]
    pub fn api_package(&self) -> &str {
        &self.api_package
    }

    /// Path storage and api artifacts use to reach the domain package.
    #[must_use]
    pub fn domain_path(&self) -> &str {
        &self.domain_path
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn api_tag_case(&self) -> TagCase {
        self.api_tag_case
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_required())
    }

    #[must_use]
    pub fn has_omit_empty(&self) -> bool {
        self.fields.iter().any(Field::is_omit_empty)
    }
}

///
/// ModelSpecBuilder
///

#[derive(Clone, Debug, Default)]
pub struct ModelSpecBuilder {
    entity: String,
    receiver: String,
    package: String,
    storage_package: Option<String>,
    api_package: Option<String>,
    domain_path: Option<String>,
    description: Option<String>,
    api_tag_case: TagCase,
    fields: Vec<Field>,
}

impl ModelSpecBuilder {
    #[must_use]
    pub fn new(
        entity: impl Into<String>,
        receiver: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            receiver: receiver.into(),
            package: package.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    #[must_use]
    pub fn storage_package(mut self, package: impl Into<String>) -> Self {
        self.storage_package = Some(package.into());
        self
    }

    #[must_use]
    pub fn api_package(mut self, package: impl Into<String>) -> Self {
        self.api_package = Some(package.into());
        self
    }

    #[must_use]
    pub fn domain_path(mut self, path: impl Into<String>) -> Self {
        self.domain_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn api_tag_case(mut self, case: TagCase) -> Self {
        self.api_tag_case = case;
        self
    }

    /// Validate and freeze the specification.
    ///
    /// Fails before any emission is attempted; an empty field list is legal.
    pub fn build(self) -> Result<ModelSpec, SpecError> {
        if self.entity.is_empty() {
            return Err(SpecError::EmptyEntityName);
        }

        let interface_name = type_name(&self.entity);
        validate_ident(&interface_name).map_err(|reason| SpecError::InvalidEntityName {
            name: self.entity.clone(),
            reason,
        })?;

        validate_ident(&self.receiver).map_err(|reason| SpecError::InvalidReceiver {
            name: self.receiver.clone(),
            reason,
        })?;

        let storage_package = self
            .storage_package
            .unwrap_or_else(|| format!("{}_store", self.package));
        let api_package = self
            .api_package
            .unwrap_or_else(|| format!("{}_api", self.package));

        for package in [&self.package, &storage_package, &api_package] {
            validate_ident(package).map_err(|reason| SpecError::InvalidPackage {
                name: package.clone(),
                reason,
            })?;
        }

        let domain_path = self
            .domain_path
            .unwrap_or_else(|| format!("crate::{}", self.package));
        validate_path(&domain_path).map_err(|reason| SpecError::InvalidDomainPath {
            path: domain_path.clone(),
            reason,
        })?;

        for (index, field) in self.fields.iter().enumerate() {
            validate_field(index, field)?;
        }

        Ok(ModelSpec {
            internal_struct_name: internal_name(&self.entity),
            builder_name: format!("{interface_name}Builder"),
            interface_name,
            entity_name: self.entity,
            receiver_name: self.receiver,
            package_name: self.package,
            storage_package,
            api_package,
            domain_path,
            description: self.description,
            api_tag_case: self.api_tag_case,
            fields: self.fields,
        })
    }
}

// members every interface declares next to the field accessors
const RESERVED_MEMBERS: &[&str] = &["builder"];

fn validate_field(index: usize, field: &Field) -> Result<(), SpecError> {
    if field.raw_name().is_empty() {
        return Err(SpecError::EmptyFieldName { index });
    }

    let rust_name = field.rust_name();
    validate_ident(&rust_name)
        .and_then(|()| validate_ident(&format!("with_{rust_name}")))
        .map_err(|reason| SpecError::InvalidFieldName {
            name: field.raw_name().to_string(),
            reason,
        })?;

    if RESERVED_MEMBERS.contains(&rust_name.as_str()) {
        return Err(SpecError::ReservedFieldName {
            name: field.raw_name().to_string(),
            member: rust_name,
        });
    }

    validate_type(field.ty()).map_err(|reason| SpecError::InvalidFieldType {
        field: field.raw_name().to_string(),
        ty: field.ty().to_string(),
        reason,
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ModelSpec {
        ModelSpec::new(
            "widget",
            "w",
            "widgets",
            vec![Field::new("ID", "String"), Field::new("Label", "String")],
        )
        .unwrap()
    }

    #[test]
    fn derives_entity_names() {
        let spec = ModelSpec::new("assetMetadata", "amd", "hostingmodels", vec![]).unwrap();

        assert_eq!(spec.interface_name(), "AssetMetadata");
        assert_eq!(spec.internal_struct_name(), "assetMetadata");
        assert_eq!(spec.builder_name(), "AssetMetadataBuilder");
        assert_eq!(spec.data_struct_name(), "AssetMetadataData");
        assert_eq!(spec.build_error_name(), "AssetMetadataBuildError");
        assert_eq!(spec.snake_name(), "asset_metadata");
    }

    #[test]
    fn package_wiring_defaults() {
        let spec = widget();

        assert_eq!(spec.package_name(), "widgets");
        assert_eq!(spec.storage_package(), "widgets_store");
        assert_eq!(spec.api_package(), "widgets_api");
        assert_eq!(spec.domain_path(), "crate::widgets");
        assert_eq!(spec.api_tag_case(), TagCase::Camel);
    }

    #[test]
    fn package_wiring_overrides() {
        let spec = ModelSpec::builder("widget", "w", "widgets")
            .storage_package("appstore")
            .api_package("apiv3")
            .domain_path("crate::models::widgets")
            .description("a thing with a label")
            .api_tag_case(TagCase::Snake)
            .build()
            .unwrap();

        assert_eq!(spec.storage_package(), "appstore");
        assert_eq!(spec.api_package(), "apiv3");
        assert_eq!(spec.domain_path(), "crate::models::widgets");
        assert_eq!(spec.description(), Some("a thing with a label"));
        assert_eq!(spec.api_tag_case(), TagCase::Snake);
    }

    #[test]
    fn field_order_is_preserved() {
        let spec = ModelSpec::builder("widget", "w", "widgets")
            .field(Field::new("zeta", "u8"))
            .fields([Field::new("alpha", "u8"), Field::new("mid", "u8")])
            .build()
            .unwrap();

        let names: Vec<_> = spec.fields().iter().map(Field::raw_name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_field_list_is_legal() {
        let spec = ModelSpec::new("empty", "e", "empties", vec![]).unwrap();

        assert!(spec.fields().is_empty());
        assert!(!spec.has_omit_empty());
        assert_eq!(spec.required_fields().count(), 0);
    }

    #[test]
    fn empty_entity_name_fails_fast() {
        let err = ModelSpec::new("", "w", "widgets", vec![]).unwrap_err();
        assert!(matches!(err, SpecError::EmptyEntityName));
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(matches!(
            ModelSpec::new("widget", "", "widgets", vec![]),
            Err(SpecError::InvalidReceiver { .. })
        ));
        assert!(matches!(
            ModelSpec::new("widget", "w", "mod", vec![]),
            Err(SpecError::InvalidPackage { .. })
        ));
        assert!(matches!(
            ModelSpec::new("wid get", "w", "widgets", vec![]),
            Err(SpecError::InvalidEntityName { .. })
        ));
        assert!(matches!(
            ModelSpec::builder("widget", "w", "widgets")
                .domain_path("crate::")
                .build(),
            Err(SpecError::InvalidDomainPath { .. })
        ));
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(matches!(
            ModelSpec::new("widget", "w", "widgets", vec![Field::new("", "String")]),
            Err(SpecError::EmptyFieldName { index: 0 })
        ));
        assert!(matches!(
            ModelSpec::new("widget", "w", "widgets", vec![Field::new("type", "String")]),
            Err(SpecError::InvalidFieldName { .. })
        ));
        assert!(matches!(
            ModelSpec::new("widget", "w", "widgets", vec![Field::new("label", "Vec<")]),
            Err(SpecError::InvalidFieldType { .. })
        ));
    }

    #[test]
    fn rejects_fields_shadowing_generated_members() {
        for raw in ["builder", "Builder"] {
            let err = ModelSpec::new("part", "p", "parts", vec![Field::new(raw, "String")])
                .unwrap_err();

            match err {
                SpecError::ReservedFieldName { name, member } => {
                    assert_eq!(name, raw);
                    assert_eq!(member, "builder");
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        // near misses are ordinary fields
        ModelSpec::new("part", "p", "parts", vec![Field::new("builderName", "String")]).unwrap();
    }

    #[test]
    fn duplicate_internal_names_are_not_detected() {
        let spec = ModelSpec::new(
            "widget",
            "w",
            "widgets",
            vec![Field::new("Label", "String"), Field::new("label", "String")],
        )
        .unwrap();

        assert_eq!(spec.fields()[0].internal_name(), spec.fields()[1].internal_name());
    }

    #[test]
    fn colliding_snake_names_are_not_detected() {
        let spec = ModelSpec::new(
            "widget",
            "w",
            "widgets",
            vec![Field::new("fooBar", "String"), Field::new("foo_bar", "String")],
        )
        .unwrap();

        assert_ne!(spec.fields()[0].internal_name(), spec.fields()[1].internal_name());
        assert_eq!(spec.fields()[0].rust_name(), spec.fields()[1].rust_name());
    }
}

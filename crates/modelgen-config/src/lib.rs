//! TOML model-definition files.
//!
//! A definition file lists `[[model]]` tables, each with its own
//! `[[model.field]]` entries. Loading a file only parses it; the
//! specifications are frozen and validated when they are requested.

use modelgen_schema::{
    SpecError,
    node::{Field, ModelSpec},
    source::ModelSource,
    types::TagCase,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model definitions: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("model '{entity}': {source}")]
    Spec {
        entity: String,
        #[source]
        source: SpecError,
    },
}

///
/// ConfigSource
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSource {
    #[serde(default, rename = "model")]
    models: Vec<ModelConfig>,
}

impl ConfigSource {
    /// Read and parse a definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source: Self = content.parse()?;
        debug!(path = %path.display(), models = source.models.len(), "loaded model definitions");

        Ok(source)
    }

    #[must_use]
    pub fn entries(&self) -> &[ModelConfig] {
        &self.models
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromStr for ConfigSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl ModelSource for ConfigSource {
    type Error = ConfigError;

    fn models(&self) -> Result<Vec<ModelSpec>, Self::Error> {
        self.models.iter().map(ModelConfig::to_spec).collect()
    }
}

///
/// ModelConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub entity: String,
    pub receiver: String,
    pub package: String,

    #[serde(default)]
    pub storage_package: Option<String>,

    #[serde(default)]
    pub api_package: Option<String>,

    #[serde(default)]
    pub domain_path: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub api_tag_case: TagCase,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
}

impl ModelConfig {
    /// Freeze this entry into a validated specification.
    pub fn to_spec(&self) -> Result<ModelSpec, ConfigError> {
        let mut builder = ModelSpec::builder(&self.entity, &self.receiver, &self.package)
            .fields(self.fields.iter().map(FieldConfig::to_field))
            .api_tag_case(self.api_tag_case);

        if let Some(package) = &self.storage_package {
            builder = builder.storage_package(package);
        }
        if let Some(package) = &self.api_package {
            builder = builder.api_package(package);
        }
        if let Some(path) = &self.domain_path {
            builder = builder.domain_path(path);
        }
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }

        builder.build().map_err(|source| ConfigError::Spec {
            entity: self.entity.clone(),
            source,
        })
    }
}

///
/// FieldConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub omit_empty: bool,
}

impl FieldConfig {
    #[must_use]
    pub fn to_field(&self) -> Field {
        let mut field = Field::new(&self.name, &self.ty);
        if self.required {
            field = field.required();
        }
        if self.omit_empty {
            field = field.omit_empty();
        }

        field
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGETS: &str = r#"
        [[model]]
        entity = "widget"
        receiver = "w"
        package = "widgets"

        [[model.field]]
        name = "ID"
        type = "String"

        [[model.field]]
        name = "label"
        type = "String"
        required = true

        [[model]]
        entity = "function"
        receiver = "fn_"
        package = "funcmodels"
        api_tag_case = "snake"
        domain_path = "crate::functions"
        description = "A deployable function."

        [[model.field]]
        name = "transpiledSource"
        type = "Vec<u8>"
        omit_empty = true
    "#;

    #[test]
    fn parses_models_in_order() {
        let source: ConfigSource = WIDGETS.parse().unwrap();
        let specs = ModelSource::models(&source).unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].interface_name(), "Widget");
        assert_eq!(specs[1].interface_name(), "Function");

        let names: Vec<_> = specs[0].fields().iter().map(Field::serialized_name).collect();
        assert_eq!(names, ["_id", "label"]);
        assert!(specs[0].fields()[1].is_required());
    }

    #[test]
    fn optional_settings_reach_the_spec() {
        let source: ConfigSource = WIDGETS.parse().unwrap();
        let specs = ModelSource::models(&source).unwrap();
        let function = &specs[1];

        assert_eq!(function.api_tag_case(), TagCase::Snake);
        assert_eq!(function.domain_path(), "crate::functions");
        assert_eq!(function.description(), Some("A deployable function."));
        assert_eq!(function.storage_package(), "funcmodels_store");
        assert!(function.fields()[0].is_omit_empty());
    }

    #[test]
    fn empty_file_has_no_models() {
        let source: ConfigSource = "".parse().unwrap();

        assert!(source.is_empty());
        assert!(ModelSource::models(&source).unwrap().is_empty());
    }

    #[test]
    fn model_without_fields_is_accepted() {
        let source: ConfigSource = r#"
            [[model]]
            entity = "empty"
            receiver = "e"
            package = "empties"
        "#
        .parse()
        .unwrap();

        let specs = ModelSource::models(&source).unwrap();
        assert!(specs[0].fields().is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = r#"
            [[model]]
            entity = "widget"
            receiver = "w"
            package = "widgets"
            colour = "blue"
        "#
        .parse::<ConfigSource>()
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_model_names_its_entity() {
        let source: ConfigSource = r#"
            [[model]]
            entity = "widget"
            receiver = "w"
            package = "widgets"

            [[model.field]]
            name = "type"
            type = "String"
        "#
        .parse()
        .unwrap();

        let err = ModelSource::models(&source).unwrap_err();
        match err {
            ConfigError::Spec { entity, source } => {
                assert_eq!(entity, "widget");
                assert!(matches!(source, SpecError::InvalidFieldName { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigSource::from_path("does/not/exist.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}

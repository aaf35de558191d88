mod emit;
mod helper;
mod macros;

pub mod policy;
pub mod render;

pub use render::{Artifact, Formatter, PrettyFormatter, render};

use modelgen_schema::{SpecError, node::ModelSpec, source::ModelSource, types::Representation};
use thiserror::Error as ThisError;
use tracing::info;

///
/// GenerateError
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("{representation} artifact for '{entity}' is not valid source: {source}")]
    InvalidSource {
        representation: Representation,
        entity: String,
        #[source]
        source: syn::Error,
    },

    #[error("model source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

// generate
/// Render all three representations of one specification.
pub fn generate(spec: &ModelSpec) -> Result<GeneratedModel, GenerateError> {
    ModelGenerator::new(spec).generate()
}

/// Render every specification a source yields, in source order.
pub fn generate_all<S>(source: &S) -> Result<Vec<GeneratedModel>, GenerateError>
where
    S: ModelSource + ?Sized,
{
    let specs = source
        .models()
        .map_err(|e| GenerateError::Source(Box::new(e)))?;

    let models = specs
        .iter()
        .map(generate)
        .collect::<Result<Vec<_>, _>>()?;

    info!(models = models.len(), "generated models");

    Ok(models)
}

///
/// ModelGenerator
///

pub struct ModelGenerator<'a> {
    spec: &'a ModelSpec,
}

impl<'a> ModelGenerator<'a> {
    #[must_use]
    pub const fn new(spec: &'a ModelSpec) -> Self {
        Self { spec }
    }

    /// Render a single representation.
    pub fn render(&self, representation: Representation) -> Result<Artifact, GenerateError> {
        render(self.spec, representation)
    }

    /// Render domain, storage and api. Any failing pass fails the whole model.
    pub fn generate(&self) -> Result<GeneratedModel, GenerateError> {
        Ok(GeneratedModel {
            domain: self.render(Representation::Domain)?,
            storage: self.render(Representation::Storage)?,
            api: self.render(Representation::Api)?,
        })
    }
}

///
/// GeneratedModel
///

#[derive(Clone, Debug)]
pub struct GeneratedModel {
    pub domain: Artifact,
    pub storage: Artifact,
    pub api: Artifact,
}

impl GeneratedModel {
    #[must_use]
    pub const fn artifacts(&self) -> [&Artifact; 3] {
        [&self.domain, &self.storage, &self.api]
    }

    #[must_use]
    pub const fn get(&self, representation: Representation) -> &Artifact {
        match representation {
            Representation::Domain => &self.domain,
            Representation::Storage => &self.storage,
            Representation::Api => &self.api,
        }
    }
}

///
/// TESTS
///

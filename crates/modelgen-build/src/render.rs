use crate::{GenerateError, emit::Emitter};
use modelgen_schema::{node::ModelSpec, types::Representation};
use proc_macro2::TokenStream;
use quote::ToTokens;
use tracing::debug;

///
/// Artifact
///
/// One rendered representation. Holds a fully parsed source file; a
/// representation that fails to parse never becomes an artifact.
///

#[derive(Clone, Debug)]
pub struct Artifact {
    representation: Representation,
    entity: String,
    package: String,
    file: syn::File,
}

impl Artifact {
    #[must_use]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    /// snake_case entity name the artifact was rendered for.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Package (module) the artifact belongs in.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Suggested file name, e.g. `widget_storage.rs`. Writers may ignore it.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}_{}.rs", self.entity, self.representation)
    }

    #[must_use]
    pub const fn file(&self) -> &syn::File {
        &self.file
    }

    #[must_use]
    pub fn tokens(&self) -> TokenStream {
        self.file.to_token_stream()
    }

    /// Unformatted source text, ready for an external formatter.
    #[must_use]
    pub fn source(&self) -> String {
        self.tokens().to_string()
    }

    #[must_use]
    pub fn format_with<F: Formatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.format(&self.file)
    }
}

///
/// Formatter
///
/// Hand-off point to whatever lays out the final text.
///

pub trait Formatter {
    fn format(&self, file: &syn::File) -> String;
}

///
/// PrettyFormatter
///

#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyFormatter;

impl Formatter for PrettyFormatter {
    fn format(&self, file: &syn::File) -> String {
        prettyplease::unparse(file)
    }
}

/// Render one representation of a specification.
///
/// Sections are assembled in fixed declaration order, then the whole
/// artifact is parsed as a Rust file before it is handed back.
pub fn render(spec: &ModelSpec, representation: Representation) -> Result<Artifact, GenerateError> {
    let emitter = Emitter::new(spec, representation)?;
    let tokens = emitter.emit();

    let file = syn::parse2::<syn::File>(tokens).map_err(|source| GenerateError::InvalidSource {
        representation,
        entity: spec.interface_name().to_string(),
        source,
    })?;

    debug!(
        entity = spec.interface_name(),
        %representation,
        items = file.items.len(),
        fields = spec.fields().len(),
        "rendered artifact"
    );

    let package = match representation {
        Representation::Domain => spec.package_name(),
        Representation::Storage => spec.storage_package(),
        Representation::Api => spec.api_package(),
    };

    Ok(Artifact {
        representation,
        entity: spec.snake_name(),
        package: package.to_string(),
        file,
    })
}

///
/// TESTS
///

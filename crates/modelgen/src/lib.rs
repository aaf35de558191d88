//! ## Crate layout
//! - `build`: renders the domain, storage and api artifacts of a model.
//! - `config`: TOML model-definition files.
//! - `schema`: model specifications, the naming engine and validation.
//!
//! Build scripts normally only need the `build!` macro:
//!
//! ```ignore
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     modelgen::build!("models.toml");
//!     Ok(())
//! }
//! ```

pub use modelgen_build as build;
pub use modelgen_config as config;
pub use modelgen_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use modelgen_build::build;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Artifact, GeneratedModel, ModelGenerator, generate, generate_all},
        config::ConfigSource,
        schema::prelude::*,
    };
}

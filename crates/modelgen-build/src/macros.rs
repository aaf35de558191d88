//! Build-script helper that renders every model in a definition file into `OUT_DIR`.
//!
//! Each artifact is written to its own file (`<entity>_<representation>.rs`)
//! and is meant to be `include!`d into its own module.
#[macro_export]
macro_rules! build {
    ($config:expr) => {{
        use std::{env::var, fs, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $config);

        let out_dir = PathBuf::from(var("OUT_DIR")?);
        let manifest_dir = PathBuf::from(var("CARGO_MANIFEST_DIR")?);

        //
        // MODELS
        //

        let source = ::modelgen::config::ConfigSource::from_path(manifest_dir.join($config))?;
        let models = ::modelgen::build::generate_all(&source)?;

        // write every artifact, formatted
        for model in &models {
            for artifact in model.artifacts() {
                let text = artifact.format_with(&::modelgen::build::PrettyFormatter);
                fs::write(out_dir.join(artifact.file_name()), text)?;
            }
        }
    }};
}

mod field;
mod model;

pub use field::Field;
pub use model::{ModelSpec, ModelSpecBuilder};

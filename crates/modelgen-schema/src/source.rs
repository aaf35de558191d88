use crate::node::ModelSpec;
use std::convert::Infallible;

///
/// ModelSource
///
/// Anything that can hand the generator finished model specifications:
/// a definition file, an interactive prompt, or a fixed list in a test.
///

pub trait ModelSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn models(&self) -> Result<Vec<ModelSpec>, Self::Error>;
}

impl ModelSource for [ModelSpec] {
    type Error = Infallible;

    fn models(&self) -> Result<Vec<ModelSpec>, Self::Error> {
        Ok(self.to_vec())
    }
}

impl ModelSource for Vec<ModelSpec> {
    type Error = Infallible;

    fn models(&self) -> Result<Vec<ModelSpec>, Self::Error> {
        Ok(self.clone())
    }
}

impl ModelSource for ModelSpec {
    type Error = Infallible;

    fn models(&self) -> Result<Vec<ModelSpec>, Self::Error> {
        Ok(vec![self.clone()])
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Representation
///
/// One of the three coordinated output shapes rendered for a model.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Domain,
    Storage,
    Api,
}

impl Representation {
    /// Rendering order. Each pass is independent, the order only fixes
    /// the order artifacts are handed to the writer.
    pub const ALL: [Self; 3] = [Self::Domain, Self::Storage, Self::Api];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Storage => "storage",
            Self::Api => "api",
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// TagCase
///
/// Casing applied to API serialization tags.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCase {
    /// Tag is the field's internal name (`transpiledSource`).
    #[default]
    Camel,

    /// Tag is the snake_case form of the internal name (`transpiled_source`).
    Snake,
}

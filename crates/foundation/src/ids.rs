use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-chosen string id of a graphic on the map.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphicId(String);

impl GraphicId {
    pub fn new(id: impl Into<String>) -> Self {
        GraphicId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GraphicId {
    fn from(id: &str) -> Self {
        GraphicId::new(id)
    }
}

impl From<String> for GraphicId {
    fn from(id: String) -> Self {
        GraphicId(id)
    }
}

impl fmt::Display for GraphicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

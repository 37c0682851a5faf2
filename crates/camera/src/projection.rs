use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scene projection as reported by the engine.
///
/// Only `Scene2D` and `Scene3D` can be planned for; the engine may also
/// report a Columbus view or an in-flight morph, which callers must treat
/// as unsupported rather than guess at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionMode {
    #[serde(rename = "2d")]
    Scene2D,
    #[serde(rename = "3d")]
    Scene3D,
    #[serde(rename = "columbus")]
    ColumbusView,
    #[serde(rename = "morphing")]
    Morphing,
}

impl ProjectionMode {
    /// The mode a 2D/3D switch goes to.
    pub fn toggled(self) -> Option<ProjectionMode> {
        match self {
            ProjectionMode::Scene2D => Some(ProjectionMode::Scene3D),
            ProjectionMode::Scene3D => Some(ProjectionMode::Scene2D),
            ProjectionMode::ColumbusView | ProjectionMode::Morphing => None,
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectionMode::Scene2D => "2d",
            ProjectionMode::Scene3D => "3d",
            ProjectionMode::ColumbusView => "columbus",
            ProjectionMode::Morphing => "morphing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown projection mode: {:?}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for ProjectionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2d" | "scene2d" => Ok(ProjectionMode::Scene2D),
            "3d" | "scene3d" => Ok(ProjectionMode::Scene3D),
            "columbus" | "columbus_view" => Ok(ProjectionMode::ColumbusView),
            "morphing" => Ok(ProjectionMode::Morphing),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

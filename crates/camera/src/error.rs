use foundation::math::GeoPoint;

use crate::ProjectionMode;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The engine reported a projection the planner has no formula for.
    UnsupportedMode(ProjectionMode),
    InvalidTarget(GeoPoint),
    InvalidInput { field: &'static str, value: f64 },
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::UnsupportedMode(mode) => {
                write!(f, "unsupported projection mode: {mode}")
            }
            ViewError::InvalidTarget(p) => write!(
                f,
                "target out of range: lng={} lat={} alt={}",
                p.lng, p.lat, p.alt
            ),
            ViewError::InvalidInput { field, value } => {
                write!(f, "invalid {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ViewError {}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ViewError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewError::InvalidInput { field, value })
    }
}

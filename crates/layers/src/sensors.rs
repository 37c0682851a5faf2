//! Conic sensor footprints.

use foundation::ids::GraphicId;
use foundation::math::GeoPoint;
use scene::{ConeGraphic, Graphic, RegistryError};
use tracing::{debug, warn};

use crate::layer::GraphicLayer;

pub const DEFAULT_CONE_HALF_ANGLE_DEG: f64 = 5.0;
pub const DEFAULT_CONE_LENGTH_M: f64 = 1000.0;
pub const DEFAULT_CONE_HEADING_DEG: f64 = 0.0;
pub const DEFAULT_CONE_PITCH_DEG: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConeSpec {
    pub id: GraphicId,
    pub position: GeoPoint,
    pub heading_deg: Option<f64>,
    pub pitch_deg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConeUpdate {
    pub id: GraphicId,
    pub heading_deg: Option<f64>,
    pub pitch_deg: Option<f64>,
}

impl GraphicLayer {
    /// Creates a cone unless `spec.id` is already taken.
    ///
    /// Returns `true` if a cone was created.
    pub fn set_cone(&mut self, spec: ConeSpec) -> bool {
        if self.registry().contains(&spec.id) {
            debug!(id = %spec.id, "cone already present");
            return false;
        }
        let cone = Graphic::Cone(ConeGraphic {
            position: spec.position,
            half_angle_deg: DEFAULT_CONE_HALF_ANGLE_DEG,
            length_m: DEFAULT_CONE_LENGTH_M,
            heading_deg: spec.heading_deg.unwrap_or(DEFAULT_CONE_HEADING_DEG),
            pitch_deg: spec.pitch_deg.unwrap_or(DEFAULT_CONE_PITCH_DEG),
        });
        self.registry_mut().insert(spec.id, cone);
        true
    }

    /// Re-aims a cone. Absent angles fall back to the defaults, not to the
    /// cone's current orientation.
    pub fn update_cone(&mut self, update: &ConeUpdate) -> Result<(), RegistryError> {
        let graphic = self.registry_mut().get_mut(&update.id).ok_or_else(|| {
            warn!(id = %update.id, "no cone to update");
            RegistryError::NotFound(update.id.clone())
        })?;
        let found = graphic.kind_name();
        let Graphic::Cone(cone) = graphic else {
            return Err(RegistryError::KindMismatch {
                id: update.id.clone(),
                expected: "cone",
                found,
            });
        };
        cone.heading_deg = update.heading_deg.unwrap_or(DEFAULT_CONE_HEADING_DEG);
        cone.pitch_deg = update.pitch_deg.unwrap_or(DEFAULT_CONE_PITCH_DEG);
        Ok(())
    }
}

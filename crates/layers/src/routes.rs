//! Live drone tracks and recorded route playback.

use foundation::ids::GraphicId;
use foundation::math::GeoPoint;
use foundation::time::{Time, TimeSpan};
use scene::{DroneRoute, Graphic, MarkerGraphic, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::layer::GraphicLayer;

/// Seconds of flown path kept behind a live drone.
pub const LIVE_TRAIL_S: f64 = 10.0;
pub const DRONE_MODEL_URL: &str = "glb/drone.glb";
pub const INDEX_MARKER_IMAGE: &str = "img/marker/poi-num.png";

/// One telemetry fix as reported by a drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneFix {
    pub sn: String,
    pub time: Time,
    #[serde(flatten)]
    pub position: GeoPoint,
}

pub fn index_marker_id(route: &str, index: usize) -> GraphicId {
    GraphicId::new(format!("{route}_index_{index}"))
}

impl GraphicLayer {
    /// Appends a live fix, creating the drone's route on first sight of
    /// its serial number.
    ///
    /// Returns `Ok(false)` when the fix carries a non-finite time.
    pub fn update_drone_route(&mut self, fix: &DroneFix) -> Result<bool, RegistryError> {
        let id = GraphicId::new(fix.sn.as_str());
        if !self.registry().contains(&id) {
            info!(sn = %fix.sn, "tracking new drone");
            let route = DroneRoute::new(format!("Drone {}", fix.sn), DRONE_MODEL_URL, Some(LIVE_TRAIL_S));
            self.registry_mut().insert(id.clone(), Graphic::Route(route));
        }

        let graphic = self
            .registry_mut()
            .get_mut(&id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        let found = graphic.kind_name();
        let Graphic::Route(route) = graphic else {
            return Err(RegistryError::KindMismatch {
                id,
                expected: "route",
                found,
            });
        };

        let added = route.add_time_position(fix.time, fix.position);
        if !added {
            warn!(sn = %fix.sn, time = fix.time.0, "dropped fix with invalid time");
        }
        Ok(added)
    }

    /// Replays recorded fixes as one route with numbered markers `1..N`.
    ///
    /// Any previous route or markers under `id` are replaced. Returns the
    /// playback span, or `None` if no fix had a usable time.
    pub fn playback_route(&mut self, id: &str, model_url: &str, fixes: &[DroneFix]) -> Option<TimeSpan> {
        self.clear_index_markers(id);

        let mut route = DroneRoute::new("Drone route", model_url, None);
        for fix in fixes {
            route.add_time_position(fix.time, fix.position);
        }
        let span = route.span();
        self.registry_mut().insert(GraphicId::from(id), Graphic::Route(route));

        for (i, fix) in fixes.iter().enumerate() {
            let n = i + 1;
            let marker = Graphic::Marker(MarkerGraphic {
                position: fix.position,
                image: INDEX_MARKER_IMAGE.to_string(),
                text: Some(n.to_string()),
                clamp_to_ground: false,
            });
            self.registry_mut().insert(index_marker_id(id, n), marker);
        }

        info!(
            route = id,
            fixes = fixes.len(),
            duration_s = span.map_or(0.0, |s| s.duration()),
            "route playback ready"
        );
        span
    }

    fn clear_index_markers(&mut self, id: &str) {
        let mut n = 1;
        while self.registry_mut().remove(&index_marker_id(id, n)).is_some() {
            n += 1;
        }
        if n > 1 {
            debug!(route = id, removed = n - 1, "cleared index markers");
        }
    }
}

//! Strike, warning and detection range rings around one center.

use foundation::ids::GraphicId;
use foundation::math::GeoPoint;
use scene::{Graphic, ZoneGraphic, ZoneKind};
use tracing::debug;

use crate::layer::GraphicLayer;

pub const ZONE_ID_PREFIX: &str = "circle_";

const ZONE_KINDS: [ZoneKind; 3] = [ZoneKind::Strike, ZoneKind::Warning, ZoneKind::Detection];

pub fn zone_id(index: usize) -> GraphicId {
    GraphicId::new(format!("{ZONE_ID_PREFIX}{index}"))
}

fn zone_ids() -> impl Iterator<Item = GraphicId> {
    (1..=ZONE_KINDS.len()).map(zone_id)
}

impl GraphicLayer {
    /// Places the three rings as `circle_1..circle_3`, replacing earlier ones.
    pub fn set_three_zones(
        &mut self,
        center: GeoPoint,
        radii_m: [f64; 3],
        labels: [&str; 3],
    ) -> [GraphicId; 3] {
        let ids = [zone_id(1), zone_id(2), zone_id(3)];
        for (i, id) in ids.iter().enumerate() {
            let zone = Graphic::Zone(ZoneGraphic {
                center,
                radius_m: radii_m[i],
                kind: ZONE_KINDS[i],
                label: labels[i].to_string(),
            });
            self.registry_mut().insert(id.clone(), zone);
        }
        debug!(lng = center.lng, lat = center.lat, "placed range rings");
        ids
    }

    fn is_zone(&self, id: &GraphicId) -> bool {
        matches!(self.registry().get(id), Some(Graphic::Zone(_)))
    }

    fn set_zone_visible(&mut self, id: &GraphicId, visible: bool) -> bool {
        self.is_zone(id) && self.registry_mut().set_visible(id, visible).is_ok()
    }

    /// Returns `false` if there is no zone with that id.
    pub fn show_zone(&mut self, id: &str) -> bool {
        self.set_zone_visible(&id.into(), true)
    }

    pub fn hide_zone(&mut self, id: &str) -> bool {
        self.set_zone_visible(&id.into(), false)
    }

    /// New visibility, or `None` if there is no zone with that id.
    pub fn toggle_zone(&mut self, id: &str) -> Option<bool> {
        let id = GraphicId::from(id);
        if !self.is_zone(&id) {
            return None;
        }
        self.registry_mut().toggle_visible(&id).ok()
    }

    /// Returns how many rings were found.
    pub fn show_all_zones(&mut self) -> usize {
        self.set_all_zones_visible(true)
    }

    pub fn hide_all_zones(&mut self) -> usize {
        self.set_all_zones_visible(false)
    }

    fn set_all_zones_visible(&mut self, visible: bool) -> usize {
        zone_ids()
            .filter(|id| self.set_zone_visible(id, visible))
            .count()
    }
}

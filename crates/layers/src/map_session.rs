use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::layer::{GraphicLayer, LayerId};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLoadStatus {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

impl MapLoadStatus {
    pub fn code(self) -> u8 {
        match self {
            MapLoadStatus::Unloaded => 0,
            MapLoadStatus::Loading => 1,
            MapLoadStatus::Loaded => 2,
            MapLoadStatus::Failed => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MapLoadStatus::Unloaded),
            1 => Some(MapLoadStatus::Loading),
            2 => Some(MapLoadStatus::Loaded),
            3 => Some(MapLoadStatus::Failed),
            _ => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            MapLoadStatus::Unloaded => "not loaded",
            MapLoadStatus::Loading => "loading",
            MapLoadStatus::Loaded => "loaded",
            MapLoadStatus::Failed => "failed to load",
        }
    }
}

impl fmt::Display for MapLoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Map load state plus the lazily created graphic layer.
///
/// The layer only exists once the map reports [`MapLoadStatus::Loaded`];
/// it lives until [`MapSession::reset_layer`].
#[derive(Debug, Default)]
pub struct MapSession {
    status: MapLoadStatus,
    layer: Option<GraphicLayer>,
    next_layer_id: u64,
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> MapLoadStatus {
        self.status
    }

    pub fn set_status(&mut self, status: MapLoadStatus) {
        if status != self.status {
            info!(from = %self.status, to = %status, "map status changed");
        }
        self.status = status;
    }

    pub fn reset_status(&mut self) {
        self.set_status(MapLoadStatus::Unloaded);
    }

    pub fn is_loaded(&self) -> bool {
        self.status == MapLoadStatus::Loaded
    }

    /// Returns the layer, creating it on first use.
    ///
    /// `None` until the map is loaded.
    pub fn get_or_create_layer(&mut self) -> Option<&mut GraphicLayer> {
        if !self.is_loaded() {
            warn!(status = %self.status, "map not loaded; graphic layer unavailable");
            return None;
        }
        if self.layer.is_none() {
            self.next_layer_id += 1;
            let id = LayerId(self.next_layer_id);
            info!(layer = id.0, "created graphic layer");
            self.layer = Some(GraphicLayer::new(id));
        }
        self.layer.as_mut()
    }

    pub fn layer(&self) -> Option<&GraphicLayer> {
        self.layer.as_ref()
    }

    /// Empties the layer but keeps it attached. Returns the removed count.
    pub fn clear_layer(&mut self) -> usize {
        self.layer.as_mut().map_or(0, GraphicLayer::clear)
    }

    /// Drops the layer; the next [`get_or_create_layer`](Self::get_or_create_layer)
    /// starts from an empty one. Returns whether a layer existed.
    pub fn reset_layer(&mut self) -> bool {
        match self.layer.take() {
            Some(layer) => {
                info!(layer = layer.id().0, graphics = layer.len(), "dropped graphic layer");
                true
            }
            None => false,
        }
    }
}

use std::collections::BTreeMap;

use foundation::ids::GraphicId;
use foundation::math::GeoPoint;
use tracing::debug;

use crate::graphic::{Capability, Graphic, coordinate_text};

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    NotFound(GraphicId),
    Unsupported {
        id: GraphicId,
        kind: &'static str,
        capability: Capability,
    },
    KindMismatch {
        id: GraphicId,
        expected: &'static str,
        found: &'static str,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound(id) => write!(f, "no graphic with id {id}"),
            RegistryError::Unsupported {
                id,
                kind,
                capability,
            } => write!(f, "graphic {id} ({kind}) does not support {capability:?} updates"),
            RegistryError::KindMismatch {
                id,
                expected,
                found,
            } => write!(f, "graphic {id} is a {found}, expected a {expected}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Request to move a point graphic.
///
/// `heading_deg`/`pitch_deg` are applied only to graphics that support them.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePoint {
    pub id: GraphicId,
    pub position: GeoPoint,
    pub heading_deg: Option<f64>,
    pub pitch_deg: Option<f64>,
}

impl MovePoint {
    pub fn to(id: impl Into<GraphicId>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            position,
            heading_deg: None,
            pitch_deg: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    graphic: Graphic,
    visible: bool,
}

/// Id -> graphic map for one graphic layer.
///
/// Entries are keyed in a `BTreeMap` so iteration order is stable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraphicRegistry {
    entries: BTreeMap<GraphicId, Entry>,
}

impl GraphicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a visible graphic, returning the one it replaced.
    pub fn insert(&mut self, id: GraphicId, graphic: Graphic) -> Option<Graphic> {
        self.entries
            .insert(
                id,
                Entry {
                    graphic,
                    visible: true,
                },
            )
            .map(|e| e.graphic)
    }

    pub fn contains(&self, id: &GraphicId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &GraphicId) -> Option<&Graphic> {
        self.entries.get(id).map(|e| &e.graphic)
    }

    pub fn get_mut(&mut self, id: &GraphicId) -> Option<&mut Graphic> {
        self.entries.get_mut(id).map(|e| &mut e.graphic)
    }

    pub fn remove(&mut self, id: &GraphicId) -> Option<Graphic> {
        self.entries.remove(id).map(|e| e.graphic)
    }

    /// Removes everything, returning how many graphics were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GraphicId, &Graphic)> {
        self.entries.iter().map(|(id, e)| (id, &e.graphic))
    }

    pub fn visible(&self) -> impl Iterator<Item = (&GraphicId, &Graphic)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.visible)
            .map(|(id, e)| (id, &e.graphic))
    }

    pub fn is_visible(&self, id: &GraphicId) -> Option<bool> {
        self.entries.get(id).map(|e| e.visible)
    }

    pub fn set_visible(&mut self, id: &GraphicId, visible: bool) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        entry.visible = visible;
        Ok(())
    }

    /// Flips visibility, returning the new state.
    pub fn toggle_visible(&mut self, id: &GraphicId) -> Result<bool, RegistryError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        entry.visible = !entry.visible;
        Ok(entry.visible)
    }

    /// Moves a point graphic and refreshes whatever else it can show.
    ///
    /// Position is mandatory: graphics that cannot move are an error. Heading
    /// and pitch are applied when given and supported; text-bearing graphics
    /// have their caption rewritten to the new coordinate.
    pub fn move_point(&mut self, request: &MovePoint) -> Result<(), RegistryError> {
        let graphic = self
            .get_mut(&request.id)
            .ok_or_else(|| RegistryError::NotFound(request.id.clone()))?;

        if !graphic.supports(Capability::Position) {
            return Err(RegistryError::Unsupported {
                id: request.id.clone(),
                kind: graphic.kind_name(),
                capability: Capability::Position,
            });
        }

        if let Some(heading) = request.heading_deg {
            graphic.set_heading(heading);
        }
        if let Some(pitch) = request.pitch_deg {
            graphic.set_pitch(pitch);
        }
        if graphic.supports(Capability::Text) {
            graphic.set_text(coordinate_text(request.position.lng, request.position.lat));
        }
        graphic.set_position(request.position);

        debug!(id = %request.id, kind = graphic.kind_name(), "moved graphic");
        Ok(())
    }
}

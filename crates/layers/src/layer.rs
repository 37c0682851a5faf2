use foundation::ids::GraphicId;
use scene::{Graphic, GraphicRegistry, MovePoint, RegistryError};
use tracing::{debug, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// The single graphic layer of a map session.
///
/// Owns the registry every graphic helper goes through. Ids supplied by the
/// caller are used verbatim; missing ones are generated as `<prefix>_<n>`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicLayer {
    id: LayerId,
    registry: GraphicRegistry,
    next_auto_id: u64,
}

impl GraphicLayer {
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            registry: GraphicRegistry::new(),
            next_auto_id: 1,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn registry(&self) -> &GraphicRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GraphicRegistry {
        &mut self.registry
    }

    pub fn get(&self, id: &str) -> Option<&Graphic> {
        self.registry.get(&GraphicId::from(id))
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Adds `graphic` under `id`, or under a fresh `<prefix>_<n>` id when
    /// `id` is absent or empty. Returns the id actually used.
    pub fn insert(&mut self, id: Option<&str>, prefix: &str, graphic: Graphic) -> GraphicId {
        let id = match id.filter(|id| !id.is_empty()) {
            Some(id) => GraphicId::from(id),
            None => self.next_id(prefix),
        };
        if self.registry.insert(id.clone(), graphic).is_some() {
            debug!(%id, "replaced existing graphic");
        }
        id
    }

    fn next_id(&mut self, prefix: &str) -> GraphicId {
        loop {
            let id = GraphicId::new(format!("{prefix}_{}", self.next_auto_id));
            self.next_auto_id += 1;
            if !self.registry.contains(&id) {
                return id;
            }
        }
    }

    /// Removes one graphic, or every graphic when `id` is `None`.
    /// Returns how many were removed.
    pub fn clear_by_id(&mut self, id: Option<&str>) -> usize {
        match id {
            Some(id) => usize::from(self.registry.remove(&GraphicId::from(id)).is_some()),
            None => self.registry.clear(),
        }
    }

    pub fn clear(&mut self) -> usize {
        self.registry.clear()
    }

    pub fn move_point(&mut self, request: &MovePoint) -> Result<(), RegistryError> {
        self.registry.move_point(request).inspect_err(|err| {
            warn!(%err, "move point failed");
        })
    }
}

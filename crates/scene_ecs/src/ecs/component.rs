//! Component contract and per-kind storage
//!
//! A component is a data record describing one aspect of an entity. Every
//! component belongs to exactly one entity for its whole lifetime; systems
//! own the storage and behavior for their component kinds.

use std::any::Any;
use std::collections::HashMap;

use super::Entity;

/// Contract every component data record satisfies.
///
/// A component is associated with exactly one owning entity, fixed at
/// construction; there is no re-parenting. The trait exposes only a
/// read-only accessor, so the association stays immutable.
pub trait Component: Any + Send + Sync {
    /// The entity this component belongs to.
    ///
    /// [`Entity::INVALID`] means "no association"; such a component is never
    /// stored by a [`ComponentPool`].
    fn owner(&self) -> Entity;
}

/// Hash-based component storage keyed by each component's owning entity.
///
/// Concrete component types get keyed storage without redefining hashing:
/// the pool derives the key from [`Component::owner`] on insert. Systems
/// typically hold one pool per component kind they recognize.
pub struct ComponentPool<C: Component> {
    data: HashMap<Entity, C>,
}

impl<C: Component> ComponentPool<C> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert a component, keyed by its owner.
    ///
    /// Components owned by [`Entity::INVALID`] are dropped without creating
    /// storage. Returns the previously stored component for that owner, if
    /// any (the insert replaces it).
    pub fn insert(&mut self, component: C) -> Option<C> {
        let owner = component.owner();
        if !owner.is_valid() {
            log::debug!("discarding unowned component; no storage created");
            return None;
        }
        self.data.insert(owner, component)
    }

    /// The component owned by `entity`, if stored.
    pub fn get(&self, entity: Entity) -> Option<&C> {
        self.data.get(&entity)
    }

    /// Mutable access to the component owned by `entity`, if stored.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut C> {
        self.data.get_mut(&entity)
    }

    /// Remove and return the component owned by `entity`.
    ///
    /// A no-op returning `None` when nothing is stored for `entity`.
    pub fn remove(&mut self, entity: Entity) -> Option<C> {
        self.data.remove(&entity)
    }

    /// Whether a component is stored for `entity`.
    pub fn contains(&self, entity: Entity) -> bool {
        self.data.contains_key(&entity)
    }

    /// Number of stored components.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(owner, component)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.data.iter().map(|(entity, component)| (*entity, component))
    }
}

impl<C: Component> Default for ComponentPool<C> {
    fn default() -> Self {
        Self::new()
    }
}

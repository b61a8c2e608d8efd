//! Name system
//!
//! Identifier system: associates unique human-readable names with entities
//! and answers lookups in both directions. Tooling and scene files address
//! entities by name; everything else uses the raw ids.

use std::any::Any;
use std::collections::HashMap;

use log::debug;

use crate::ecs::components::NameComponent;
use crate::ecs::{ComponentPool, Entity, Orchestrator, System, TypeKey};

/// System authoritative for [`NameComponent`].
///
/// Names are unique across the scene: attaching a name already held by a
/// different entity fails. Renaming an entity replaces its previous name.
/// The component pool and the reverse name index always move together, so
/// a destroyed entity disappears from both or neither.
pub struct NameSystem {
    pool: ComponentPool<NameComponent>,
    index: HashMap<String, Entity>,
}

impl NameSystem {
    /// Create the system and register its component kind with the
    /// orchestrator.
    pub fn new(orchestrator: &mut Orchestrator) -> Self {
        orchestrator
            .register_system_for_type(TypeKey::of::<Self>(), TypeKey::of::<NameComponent>());
        Self {
            pool: ComponentPool::new(),
            index: HashMap::new(),
        }
    }

    /// Name `entity`, replacing any previous name it held.
    ///
    /// Returns `false` if the name is held by a different entity, or if
    /// `entity` is invalid.
    pub fn assign(&mut self, entity: Entity, name: &str) -> bool {
        if !entity.is_valid() {
            return false;
        }
        if let Some(&holder) = self.index.get(name) {
            if holder != entity {
                debug!("name {name:?} already held by {holder}; rejected for {entity}");
                return false;
            }
            return true;
        }
        if let Some(previous) = self.pool.remove(entity) {
            self.index.remove(previous.name());
        }
        self.index.insert(name.to_owned(), entity);
        self.pool.insert(NameComponent::new(entity, name));
        true
    }

    /// The entity holding `name`, if any.
    pub fn find(&self, name: &str) -> Option<Entity> {
        self.index.get(name).copied()
    }

    /// The name held by `entity`, if any.
    pub fn name_of(&self, entity: Entity) -> Option<&str> {
        self.pool.get(entity).map(NameComponent::name)
    }

    /// Number of named entities.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether no entity is named.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl System for NameSystem {
    fn create(&mut self, entity: Entity, kind: TypeKey, data: &dyn Any) -> bool {
        if kind != TypeKey::of::<NameComponent>() {
            return false;
        }
        match data.downcast_ref::<NameComponent>() {
            Some(payload) => self.assign(entity, payload.name()),
            None => false,
        }
    }

    fn destroy(&mut self, entity: Entity) {
        // Pool entry and index entry leave together.
        if let Some(previous) = self.pool.remove(entity) {
            self.index.remove(previous.name());
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> (Orchestrator, NameSystem) {
        let mut orchestrator = Orchestrator::new();
        let system = NameSystem::new(&mut orchestrator);
        (orchestrator, system)
    }

    #[test]
    fn test_assign_and_lookup_both_ways() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        assert!(system.assign(entity, "player"));
        assert_eq!(system.find("player"), Some(entity));
        assert_eq!(system.name_of(entity), Some("player"));
    }

    #[test]
    fn test_names_are_unique() {
        let (orchestrator, mut system) = system();
        let first = orchestrator.create_entity();
        let second = orchestrator.create_entity();

        assert!(system.assign(first, "camera"));
        assert!(!system.assign(second, "camera"));
        assert_eq!(system.find("camera"), Some(first));
        assert!(system.name_of(second).is_none());
    }

    #[test]
    fn test_rename_releases_old_name() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();
        let other = orchestrator.create_entity();

        assert!(system.assign(entity, "old"));
        assert!(system.assign(entity, "new"));

        assert_eq!(system.name_of(entity), Some("new"));
        assert!(system.find("old").is_none());
        assert!(system.assign(other, "old"));
    }

    #[test]
    fn test_reassigning_same_name_is_idempotent() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        assert!(system.assign(entity, "sun"));
        assert!(system.assign(entity, "sun"));
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn test_create_via_type_erased_payload() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();
        let payload = NameComponent::new(Entity::INVALID, "spawned");

        assert!(system.create(entity, TypeKey::of::<NameComponent>(), &payload));
        assert_eq!(system.find("spawned"), Some(entity));

        assert!(!system.create(entity, TypeKey::of::<String>(), &payload));
    }

    #[test]
    fn test_destroy_is_all_or_nothing() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        system.assign(entity, "doomed");
        system.destroy(entity);

        assert!(system.name_of(entity).is_none());
        assert!(system.find("doomed").is_none());
        assert!(system.is_empty());

        system.destroy(entity); // nothing held: stays a no-op
    }

    #[test]
    fn test_invalid_entity_never_stored() {
        let (_orchestrator, mut system) = system();
        assert!(!system.assign(Entity::INVALID, "ghost"));
        assert!(system.is_empty());
    }
}

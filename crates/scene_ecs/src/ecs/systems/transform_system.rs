//! Transform system
//!
//! Owns the spatial transform data for every entity that has any. The
//! renderer reads world matrices out of this system each frame.

use std::any::Any;

use crate::ecs::components::TransformComponent;
use crate::ecs::{ComponentPool, Entity, Orchestrator, System, TypeKey};
use crate::foundation::math::{Mat4, Transform};

/// System authoritative for [`TransformComponent`].
///
/// Holds at most one transform per entity; attaching again replaces the
/// previous transform.
pub struct TransformSystem {
    pool: ComponentPool<TransformComponent>,
}

impl TransformSystem {
    /// Create the system and register its component kind with the
    /// orchestrator.
    pub fn new(orchestrator: &mut Orchestrator) -> Self {
        orchestrator
            .register_system_for_type(TypeKey::of::<Self>(), TypeKey::of::<TransformComponent>());
        Self {
            pool: ComponentPool::new(),
        }
    }

    /// Attach or replace the transform for `entity`.
    pub fn set(&mut self, entity: Entity, transform: Transform) {
        self.pool.insert(TransformComponent::new(entity, transform));
    }

    /// The transform component for `entity`, if attached.
    pub fn get(&self, entity: Entity) -> Option<&TransformComponent> {
        self.pool.get(entity)
    }

    /// Mutable access to the transform component for `entity`.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut TransformComponent> {
        self.pool.get_mut(entity)
    }

    /// World matrix (TRS) for `entity`, if it has a transform.
    pub fn world_matrix(&self, entity: Entity) -> Option<Mat4> {
        self.pool
            .get(entity)
            .map(|component| component.transform.to_matrix())
    }

    /// Number of entities with a transform.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether no entity has a transform.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl System for TransformSystem {
    fn create(&mut self, entity: Entity, kind: TypeKey, data: &dyn Any) -> bool {
        if kind != TypeKey::of::<TransformComponent>() || !entity.is_valid() {
            return false;
        }
        match data.downcast_ref::<TransformComponent>() {
            Some(payload) => {
                // Re-own the payload under the entity being created for.
                self.pool
                    .insert(TransformComponent::new(entity, payload.transform.clone()));
                true
            }
            None => false,
        }
    }

    fn destroy(&mut self, entity: Entity) {
        self.pool.remove(entity);
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
    use crate::ecs::Component;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn system() -> (Orchestrator, TransformSystem) {
        let mut orchestrator = Orchestrator::new();
        let system = TransformSystem::new(&mut orchestrator);
        (orchestrator, system)
    }

    #[test]
    fn test_registers_its_kind() {
        let (orchestrator, _system) = system();
        assert_eq!(
            orchestrator.system_for_kind(TypeKey::of::<TransformComponent>()),
            Some(TypeKey::of::<TransformSystem>())
        );
    }

    #[test]
    fn test_create_reowns_payload() {
        let (orchestrator, mut system) = system();
        let source = orchestrator.create_entity();
        let target = orchestrator.create_entity();

        let payload =
            TransformComponent::from_position(source, Vec3::new(4.0, 0.0, 0.0));
        assert!(system.create(target, TypeKey::of::<TransformComponent>(), &payload));

        let stored = system.get(target).unwrap();
        assert_eq!(stored.owner(), target);
        assert_eq!(stored.transform.position, Vec3::new(4.0, 0.0, 0.0));
        assert!(system.get(source).is_none());
    }

    #[test]
    fn test_unrecognized_kind_rejected() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        assert!(!system.create(entity, TypeKey::of::<u32>(), &0_u32));
        assert!(system.is_empty());
    }

    #[test]
    fn test_repeat_create_replaces() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        system.set(entity, Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));
        system.set(entity, Transform::from_position(Vec3::new(2.0, 0.0, 0.0)));

        assert_eq!(system.len(), 1);
        assert_eq!(
            system.get(entity).unwrap().transform.position,
            Vec3::new(2.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_world_matrix() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        system.set(entity, Transform::from_position(Vec3::new(0.0, 3.0, 0.0)));
        let matrix = system.world_matrix(entity).unwrap();
        assert_relative_eq!(matrix[(1, 3)], 3.0, epsilon = 1e-6);

        assert!(system.world_matrix(orchestrator.create_entity()).is_none());
    }

    #[test]
    fn test_destroy_then_noop() {
        let (orchestrator, mut system) = system();
        let entity = orchestrator.create_entity();

        system.set(entity, Transform::identity());
        system.destroy(entity);
        system.destroy(entity);

        assert!(system.get(entity).is_none());
        assert!(system.is_empty());
    }
}

//! Transform component
//!
//! Pure data component representing spatial transformation in world space.

use crate::ecs::{Component, Entity};
use crate::foundation::math::{Transform, Vec3};

/// Spatial transform attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    owner: Entity,

    /// World space position, rotation, and scale
    pub transform: Transform,
}

impl Component for TransformComponent {
    fn owner(&self) -> Entity {
        self.owner
    }
}

impl TransformComponent {
    /// Create a transform component owned by `owner`.
    pub fn new(owner: Entity, transform: Transform) -> Self {
        Self { owner, transform }
    }

    /// Create an identity transform owned by `owner`.
    pub fn identity(owner: Entity) -> Self {
        Self::new(owner, Transform::identity())
    }

    /// Create from a position only, owned by `owner`.
    pub fn from_position(owner: Entity, position: Vec3) -> Self {
        Self::new(owner, Transform::from_position(position))
    }
}

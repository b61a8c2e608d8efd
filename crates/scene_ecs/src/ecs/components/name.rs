//! Name component
//!
//! Human-readable identifier attached to an entity, managed by the name
//! system, which keeps names unique across the scene.

use crate::ecs::{Component, Entity};

/// Unique human-readable name for an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameComponent {
    owner: Entity,
    name: String,
}

impl Component for NameComponent {
    fn owner(&self) -> Entity {
        self.owner
    }
}

impl NameComponent {
    /// Create a name component owned by `owner`.
    pub fn new(owner: Entity, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    /// The name itself.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let owner = Entity::from_raw(3);
        let component = NameComponent::new(owner, "debug-icosahedron-3");

        assert_eq!(component.owner(), owner);
        assert_eq!(component.name(), "debug-icosahedron-3");
    }
}

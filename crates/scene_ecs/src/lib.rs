//! # Scene ECS
//!
//! Entity-component runtime for a real-time 3D rendering engine.
//!
//! The crate provides the orchestration core that the engine's subsystems
//! plug into: a thread-safe entity identity allocator, a type-erased
//! registration/dispatch protocol for attaching component data, and the
//! lifecycle contract every system honors. Rendering, input, and asset
//! subsystems live elsewhere and consume this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_ecs::prelude::*;
//!
//! let mut orchestrator = Orchestrator::new();
//! let transforms = TransformSystem::new(&mut orchestrator);
//! orchestrator.create_system(transforms);
//!
//! let entity = orchestrator.create_entity();
//! let component = TransformComponent::from_position(entity, Vec3::new(0.0, 1.0, 0.0));
//!
//! // Type-erased attach, routed through the registration table.
//! assert!(orchestrator.create_component(
//!     entity,
//!     TypeKey::of::<TransformComponent>(),
//!     &component,
//! ));
//!
//! // Direct, typed access to the same system.
//! let transforms = orchestrator.system::<TransformSystem>().unwrap();
//! assert!(transforms.world_matrix(entity).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]
#![forbid(unsafe_code)]

pub mod ecs;
pub mod foundation;
pub mod scene;

pub use ecs::{Component, ComponentPool, Entity, Orchestrator, System, TypeKey};
pub use scene::{SceneError, SceneManifest};

/// Common imports for runtime users
pub mod prelude {
    pub use crate::ecs::{
        components::{NameComponent, TransformComponent},
        systems::{NameSystem, TransformSystem},
        Component, ComponentPool, Entity, Orchestrator, System, TypeKey,
    };
    pub use crate::foundation::math::{Mat4, Quat, Transform, Vec3};
    pub use crate::scene::{SceneError, SceneManifest};
}

//! Reference system implementations
//!
//! Concrete systems built on the [`System`](crate::ecs::System) contract.
//! They own their component storage, register the kinds they handle during
//! construction, and double as the worked examples for downstream engine
//! systems (rendering, collision, ...).

pub mod name_system;
pub mod transform_system;

pub use name_system::NameSystem;
pub use transform_system::TransformSystem;

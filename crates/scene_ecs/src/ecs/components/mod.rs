//! Reference component records
//!
//! Concrete data records for the reference systems. These consume the
//! component contract; the core protocol does not depend on them.

pub mod name;
pub mod transform;

pub use name::NameComponent;
pub use transform::TransformComponent;

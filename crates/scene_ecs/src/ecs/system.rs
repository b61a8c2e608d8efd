//! System contract
//!
//! Systems own the component data instances associated with entities and
//! perform all the logic for manipulating them. This trait is the uniform,
//! type-erased attachment protocol that lets a generic caller (the
//! orchestrator, or scene deserialization) create components without static
//! knowledge of the concrete system type.

use std::any::Any;

use super::{Entity, TypeKey};

/// Polymorphic contract every subsystem implements.
///
/// The set of systems is open-ended: downstream engine code (rendering,
/// collision, identifiers, ...) plugs in by implementing this trait and
/// registering with the [`Orchestrator`]. Concrete systems register the
/// component kinds they handle in their constructors, via
/// [`Orchestrator::register_system_for_type`], once per (system, kind) pair.
///
/// Systems synchronize their own storage if they expect concurrent access;
/// the orchestrator provides no cross-system transaction. Attaching
/// components to several systems for one logical spawn is not atomic, and a
/// partially constructed entity is an observable, expected intermediate
/// state.
///
/// [`Orchestrator`]: crate::ecs::Orchestrator
/// [`Orchestrator::register_system_for_type`]: crate::ecs::Orchestrator::register_system_for_type
pub trait System: Any + Send + Sync {
    /// Associate component data with `entity` from a type-erased payload.
    ///
    /// The system inspects `kind` first: a kind it does not recognize fails
    /// with `false` and no storage mutation, rather than misinterpreting the
    /// payload. A recognized kind is recovered with a checked downcast; a
    /// payload of the wrong concrete type also fails with `false`. On
    /// success the system copies the payload into its own storage, owned by
    /// `entity`.
    ///
    /// Failure is an expected, recoverable outcome the caller checks; a
    /// generic dispatcher may probe several systems with the same payload
    /// until one accepts it. Calling again for the same entity is allowed;
    /// whether that replaces, rejects, or multiplexes is system-defined and
    /// documented per concrete system.
    fn create(&mut self, entity: Entity, kind: TypeKey, data: &dyn Any) -> bool;

    /// Remove all component data this system holds for `entity`.
    ///
    /// A no-op (not an error) when the system holds nothing for `entity`.
    /// A system holding several component kinds for one entity removes them
    /// all-or-nothing; partially destroyed state is never left behind.
    fn destroy(&mut self, entity: Entity);

    /// Upcast for typed lookups out of the orchestrator's instance table.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed lookups out of the instance table.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

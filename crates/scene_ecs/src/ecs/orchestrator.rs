//! Entity orchestration
//!
//! The orchestrator is the top-level coordinator of the runtime: it
//! allocates entity ids thread-safely, owns the singleton instance of every
//! registered system, and maintains the mapping from component kind to the
//! system authoritative for it.

use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, warn};

use super::{Entity, System, TypeKey};

/// Registry and factory coordinating entities and systems.
///
/// Three protected resources live here: the entity counter, the system
/// instance table, and the component-kind registration table. The counter
/// is serialized by its own mutex so [`create_entity`] may be called from
/// any number of threads sharing `&Orchestrator`. The two tables are
/// mutated through `&mut self` only; the borrow checker therefore enforces
/// the setup contract that all system construction and registration happens
/// single-threaded, before concurrent entity traffic begins.
///
/// The orchestrator exclusively owns its systems; dropping it drops them
/// all. Several orchestrators can coexist (nothing here is process-global),
/// which keeps tests isolated.
///
/// [`create_entity`]: Orchestrator::create_entity
pub struct Orchestrator {
    // Autoincrementing value to generate unique ids.
    entity_counter: Mutex<u64>,
    systems: HashMap<TypeKey, Box<dyn System>>,
    kind_registry: HashMap<TypeKey, TypeKey>,
}

impl Orchestrator {
    /// Create an orchestrator with no systems and no issued entities.
    pub fn new() -> Self {
        Self {
            entity_counter: Mutex::new(0),
            systems: HashMap::new(),
            kind_registry: HashMap::new(),
        }
    }

    /// Allocate a fresh entity id.
    ///
    /// Thread-safe: ids are issued under a mutex held only for the
    /// increment-and-read, giving a total order consistent with lock
    /// acquisition order. Ids are strictly increasing, never reused, and
    /// never [`Entity::INVALID`].
    pub fn create_entity(&self) -> Entity {
        let mut counter = self.entity_counter.lock().unwrap();
        *counter += 1;
        Entity::from_raw(*counter)
    }

    /// Number of entity ids issued so far.
    pub fn entities_issued(&self) -> u64 {
        *self.entity_counter.lock().unwrap()
    }

    /// Store `system` as the singleton instance of `S` and return it.
    ///
    /// First registration wins: if an instance of `S` is already stored,
    /// the incoming `system` is dropped immediately and the stored instance
    /// is returned instead, so callers must not rely on calling this twice
    /// for the same type. The returned borrow is tied to the orchestrator's
    /// lifetime, for direct (non-type-erased) use.
    pub fn create_system<S: System>(&mut self, system: S) -> &mut S {
        let key = TypeKey::of::<S>();
        let slot = match self.systems.entry(key) {
            Entry::Occupied(entry) => {
                debug!("system {key} already present; dropping duplicate instance");
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Box::new(system)),
        };
        slot.as_any_mut()
            .downcast_mut::<S>()
            .expect("system table entry does not match its type key")
    }

    /// Store a type-erased system under an explicit system kind.
    ///
    /// Inserts only if no entry exists for `system_kind` yet; otherwise a
    /// silent no-op that drops `system` (the stored instance is not
    /// replaced).
    pub fn add_system(&mut self, system_kind: TypeKey, system: Box<dyn System>) {
        match self.systems.entry(system_kind) {
            Entry::Occupied(_) => {
                debug!("system {system_kind} already present; add_system ignored");
            }
            Entry::Vacant(entry) => {
                entry.insert(system);
            }
        }
    }

    /// Record that `system_kind` is authoritative for `component_kind`.
    ///
    /// Called once per (system, kind) pair, typically from the system's
    /// constructor. First write wins, matching the instance table's policy:
    /// a second system claiming an already-claimed component kind is
    /// ignored with a warning, since that is usually a wiring mistake.
    pub fn register_system_for_type(&mut self, system_kind: TypeKey, component_kind: TypeKey) {
        match self.kind_registry.entry(component_kind) {
            Entry::Occupied(entry) => {
                if *entry.get() != system_kind {
                    warn!(
                        "component kind {component_kind} already handled by {}; ignoring {system_kind}",
                        entry.get()
                    );
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(system_kind);
            }
        }
    }

    /// The system kind registered as authoritative for `component_kind`.
    pub fn system_for_kind(&self, component_kind: TypeKey) -> Option<TypeKey> {
        self.kind_registry.get(&component_kind).copied()
    }

    /// Typed access to the stored instance of `S`, if any.
    pub fn system<S: System>(&self) -> Option<&S> {
        self.systems
            .get(&TypeKey::of::<S>())
            .and_then(|system| system.as_any().downcast_ref::<S>())
    }

    /// Typed mutable access to the stored instance of `S`, if any.
    pub fn system_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems
            .get_mut(&TypeKey::of::<S>())
            .and_then(|system| system.as_any_mut().downcast_mut::<S>())
    }

    /// Attach a component to `entity` from a type-erased payload.
    ///
    /// Routes through the registration table to the system authoritative
    /// for `kind` and forwards to its [`System::create`]. Returns `false`
    /// when no system is registered for the kind, or when the system
    /// rejects the payload; the caller decides the fallback.
    pub fn create_component(&mut self, entity: Entity, kind: TypeKey, data: &dyn Any) -> bool {
        let system_kind = match self.kind_registry.get(&kind) {
            Some(system_kind) => *system_kind,
            None => {
                debug!("no system registered for component kind {kind}");
                return false;
            }
        };
        match self.systems.get_mut(&system_kind) {
            Some(system) => system.create(entity, kind, data),
            None => {
                debug!("component kind {kind} registered to absent system {system_kind}");
                false
            }
        }
    }

    /// Destroy all component data held for `entity`, across every system.
    ///
    /// Every owned system is notified; systems holding nothing for
    /// `entity` treat the call as a no-op. The entity id itself is never
    /// reissued.
    pub fn destroy_entity(&mut self, entity: Entity) {
        for system in self.systems.values_mut() {
            system.destroy(entity);
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

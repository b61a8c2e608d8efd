//! Stable per-type identity for type-erased dispatch
//!
//! Component kinds and system kinds are identified by [`TypeKey`] rather than
//! by runtime type names, so registries can be plain hash maps.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Process-wide identity for a statically known type.
///
/// Obtainable purely from the type, with no registration step:
/// `TypeKey::of::<T>()` returns the same value for the same `T` on every
/// call, and distinct types never compare equal. The type's name rides
/// along for diagnostics only.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Identity of the type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name, for log and error text.
    ///
    /// Not stable across compiler versions; never part of the identity.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId alone; the name is diagnostic.
impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Alpha;
    struct Beta;

    #[test]
    fn test_same_type_same_key() {
        assert_eq!(TypeKey::of::<Alpha>(), TypeKey::of::<Alpha>());
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
    }

    #[test]
    fn test_distinct_types_distinct_keys() {
        assert_ne!(TypeKey::of::<Alpha>(), TypeKey::of::<Beta>());
        assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<i32>());
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(TypeKey::of::<Alpha>(), "alpha");
        map.insert(TypeKey::of::<Beta>(), "beta");

        assert_eq!(map.get(&TypeKey::of::<Alpha>()), Some(&"alpha"));
        assert_eq!(map.get(&TypeKey::of::<Beta>()), Some(&"beta"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_name_is_diagnostic_only() {
        let key = TypeKey::of::<Alpha>();
        assert!(key.name().contains("Alpha"));
        assert_eq!(format!("{key}"), key.name());
    }
}

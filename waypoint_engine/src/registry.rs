// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier → handle storage with one shared namespace.
//!
//! Targets are registered under an [`Address`]: either a single key, or a
//! (collection, item) pair. Both kinds live in the **same** namespace — a
//! registration of one kind overwrites any prior registration of the other
//! kind under the same key, last write wins. The [`Slot`] enum makes that
//! rule a visible invariant rather than an accident of storage.
//!
//! Lookups never panic and never error: an unknown key, an absent item, or a
//! shape mismatch (asking for an item under a singular registration) all
//! answer `None`. Entries are overwritten by re-registration but never
//! deleted by the engine; stale handles are detected downstream when the
//! adapter fails to resolve them.
//!
//! Collection item order is registration order, and re-registering an item
//! keeps its original position. Navigation defaults depend on this, which is
//! why items live in an insertion-ordered map.

use core::hash::Hash;

use hashbrown::HashMap;
use indexmap::IndexMap;

/// Insertion-ordered item map used inside [`Slot::Collection`].
pub type ItemMap<K, H> = IndexMap<K, H, hashbrown::DefaultHashBuilder>;

/// Where a target lives in the registry namespace.
///
/// Resolving the addressing shape once, here, replaces call-site overloading:
/// every operation that takes an identifier takes an `Address`, and the two
/// shapes cannot be confused after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Address<K> {
    /// A single target stored directly under a key.
    One(K),
    /// An item within a named collection.
    Item {
        /// The collection's key in the shared namespace.
        collection: K,
        /// The item's key within the collection.
        item: K,
    },
}

impl<K> Address<K> {
    /// Address a singular target.
    pub const fn one(key: K) -> Self {
        Self::One(key)
    }

    /// Address an item within a collection.
    pub const fn item(collection: K, item: K) -> Self {
        Self::Item { collection, item }
    }

    /// The namespace key: the singular key, or the collection key.
    pub const fn key(&self) -> &K {
        match self {
            Self::One(key) => key,
            Self::Item { collection, .. } => collection,
        }
    }

    /// The item key, for the collection shape.
    pub const fn item_key(&self) -> Option<&K> {
        match self {
            Self::One(_) => None,
            Self::Item { item, .. } => Some(item),
        }
    }
}

/// A namespace entry: one target, or an ordered map of items.
#[derive(Clone, Debug)]
pub enum Slot<K, H> {
    /// A singular registration.
    Singular(H),
    /// A collection of item registrations in registration order.
    Collection(ItemMap<K, H>),
}

/// Identifier → handle storage for one engine instance.
///
/// `K` is the identifier key type (any map key works); `H` is the host's
/// opaque target handle.
#[derive(Clone, Debug)]
pub struct Registry<K, H> {
    slots: HashMap<K, Slot<K, H>>,
}

impl<K, H> Default for Registry<K, H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H> Registry<K, H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target, overwriting whatever the address named before.
    ///
    /// Registering an item under a key that previously held a singular
    /// target replaces the singular target with a fresh collection, and vice
    /// versa — the two kinds share one namespace and are never merged.
    pub fn set(&mut self, address: Address<K>, target: H) {
        match address {
            Address::One(key) => {
                self.slots.insert(key, Slot::Singular(target));
            }
            Address::Item { collection, item } => {
                let slot = self
                    .slots
                    .entry(collection)
                    .or_insert_with(|| Slot::Collection(ItemMap::default()));
                if !matches!(slot, Slot::Collection(_)) {
                    *slot = Slot::Collection(ItemMap::default());
                }
                if let Slot::Collection(items) = slot {
                    items.insert(item, target);
                }
            }
        }
    }

    /// Look up a target. Never panics; any miss or shape mismatch is `None`.
    pub fn get(&self, address: &Address<K>) -> Option<&H> {
        match address {
            Address::One(key) => match self.slots.get(key)? {
                Slot::Singular(target) => Some(target),
                Slot::Collection(_) => None,
            },
            Address::Item { collection, item } => match self.slots.get(collection)? {
                Slot::Collection(items) => items.get(item),
                Slot::Singular(_) => None,
            },
        }
    }

    /// True iff the address resolves to a registered target.
    pub fn contains(&self, address: &Address<K>) -> bool {
        self.get(address).is_some()
    }

    /// Item keys of a collection in registration order.
    ///
    /// Empty for unknown keys and for keys holding a singular registration.
    pub fn collection_keys<'s>(&'s self, collection: &K) -> impl Iterator<Item = &'s K> {
        match self.slots.get(collection) {
            Some(Slot::Collection(items)) => Some(items.keys()),
            _ => None,
        }
        .into_iter()
        .flatten()
    }

    /// Number of items registered under a collection key.
    pub fn collection_len(&self, collection: &K) -> usize {
        match self.slots.get(collection) {
            Some(Slot::Collection(items)) => items.len(),
            _ => 0,
        }
    }

    /// Number of namespace entries (singular targets and collections).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True iff nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn singular_round_trip() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::one("header"), 7);
        assert_eq!(reg.get(&Address::one("header")), Some(&7));
    }

    #[test]
    fn item_round_trip() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::item("menu", "open"), 1);
        assert_eq!(reg.get(&Address::item("menu", "open")), Some(&1));
        assert_eq!(reg.collection_len(&"menu"), 1);
    }

    #[test]
    fn overwrite_keeps_last_write() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::one("header"), 1);
        reg.set(Address::one("header"), 2);
        assert_eq!(reg.get(&Address::one("header")), Some(&2));
    }

    #[test]
    fn unknown_keys_are_quiet() {
        let reg: Registry<&str, u32> = Registry::new();
        assert_eq!(reg.get(&Address::one("nope")), None);
        assert_eq!(reg.get(&Address::item("nope", "nope")), None);
        assert!(!reg.contains(&Address::one("nope")));
        assert_eq!(reg.collection_keys(&"nope").count(), 0);
    }

    #[test]
    fn item_registration_evicts_singular() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::one("menu"), 1);
        reg.set(Address::item("menu", "open"), 2);
        // The namespace is shared: the singular target is gone.
        assert_eq!(reg.get(&Address::one("menu")), None);
        assert_eq!(reg.get(&Address::item("menu", "open")), Some(&2));
    }

    #[test]
    fn singular_registration_evicts_collection() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::item("menu", "open"), 1);
        reg.set(Address::item("menu", "save"), 2);
        reg.set(Address::one("menu"), 3);
        assert_eq!(reg.get(&Address::item("menu", "open")), None);
        assert_eq!(reg.get(&Address::one("menu")), Some(&3));
        assert_eq!(reg.collection_len(&"menu"), 0);
    }

    #[test]
    fn shape_mismatch_is_a_miss_not_a_panic() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::one("header"), 1);
        assert_eq!(reg.get(&Address::item("header", "x")), None);

        reg.set(Address::item("menu", "open"), 2);
        assert_eq!(reg.get(&Address::one("menu")), None);
    }

    #[test]
    fn collection_keys_preserve_registration_order() {
        let mut reg: Registry<&str, u32> = Registry::new();
        reg.set(Address::item("menu", "open"), 1);
        reg.set(Address::item("menu", "save"), 2);
        reg.set(Address::item("menu", "quit"), 3);
        // Re-registering an existing item keeps its original position.
        reg.set(Address::item("menu", "open"), 10);

        let keys: Vec<_> = reg.collection_keys(&"menu").copied().collect();
        assert_eq!(keys, ["open", "save", "quit"]);
        assert_eq!(reg.get(&Address::item("menu", "open")), Some(&10));
    }

    #[test]
    fn address_accessors() {
        let one = Address::one("a");
        assert_eq!(*one.key(), "a");
        assert_eq!(one.item_key(), None);

        let item = Address::item("c", "i");
        assert_eq!(*item.key(), "c");
        assert_eq!(item.item_key(), Some(&"i"));
    }
}

// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: focus, directional navigation, and scroll over a registry.
//!
//! [`Engine`] composes the pieces: it owns the [`Registry`], the
//! [`FocusState`], and the host's [`TargetAdapter`], and exposes the
//! operations callers actually invoke. Nothing here decides *when* focus
//! should move — that is event-handler logic in the host — only *where* a
//! request lands and the mechanical act of applying it.
//!
//! Every focus operation, hit or miss, produces a [`FocusRecord`] and routes
//! it through the state's single dispatch path, so listeners observe failed
//! attempts the same way they observe successes. Scroll operations produce
//! [`ScrollRecord`]s and leave focus state untouched.

use core::hash::Hash;

use smallvec::SmallVec;
use waypoint_nav::{Direction, GridLayout, advance};

use crate::adapter::TargetAdapter;
use crate::record::{FocusRecord, ScrollRecord};
use crate::registry::{Address, Registry};
use crate::state::{FocusState, ListenerId};

/// Caller-supplied identifiers and context for a focus operation.
///
/// For [`Engine::focus`] all three fields are taken as given. For
/// [`Engine::focus_at`] the address always derives `id` (it names which
/// target was resolved, not an arbitrary label), and derives `collection`
/// only when the caller leaves it `None`.
#[derive(Clone, Debug)]
pub struct FocusOptions<K, C> {
    /// Item identifier to record the attempt under.
    pub id: Option<K>,
    /// Collection identifier to record the attempt under.
    pub collection: Option<K>,
    /// Opaque context carried into the resulting record.
    pub context: Option<C>,
}

impl<K, C> Default for FocusOptions<K, C> {
    fn default() -> Self {
        Self {
            id: None,
            collection: None,
            context: None,
        }
    }
}

impl<K, C> FocusOptions<K, C> {
    /// Options carrying only a context payload.
    pub fn with_context(context: C) -> Self {
        Self {
            id: None,
            collection: None,
            context: Some(context),
        }
    }
}

/// Configuration for a directional navigation request.
#[derive(Clone, Debug)]
pub struct NextOptions<K, C> {
    /// Explicit traversal sequence. When `None`, the collection's item keys
    /// in registration order are used.
    pub candidates: Option<alloc::vec::Vec<K>>,
    /// Declared grid shape and wrap policy of the sequence.
    pub layout: GridLayout,
    /// Opaque context carried into the resulting record.
    pub context: Option<C>,
}

impl<K, C> Default for NextOptions<K, C> {
    fn default() -> Self {
        Self {
            candidates: None,
            layout: GridLayout::flat(),
            context: None,
        }
    }
}

impl<K, C> NextOptions<K, C> {
    /// Options navigating the default sequence with the given layout.
    pub fn with_layout(layout: GridLayout) -> Self {
        Self {
            candidates: None,
            layout,
            context: None,
        }
    }
}

/// One focus/scroll engine instance.
///
/// `K` is the identifier key type, `A` the host's adapter, and `C` the
/// caller's context payload (defaults to `()`). An engine exclusively owns
/// its registry, focus state, and adapter; instances are independent values
/// with no cross-instance coordination.
pub struct Engine<K, A: TargetAdapter, C = ()> {
    registry: Registry<K, A::Handle>,
    state: FocusState<K, A::Handle, A::Element, C>,
    adapter: A,
}

impl<K, A, C> core::fmt::Debug for Engine<K, A, C>
where
    K: core::fmt::Debug + Eq + Hash,
    A: TargetAdapter,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("registered", &self.registry.len())
            .field("listeners", &self.state.listener_count())
            .finish_non_exhaustive()
    }
}

impl<K, A, C> Engine<K, A, C>
where
    K: Clone + Eq + Hash,
    A: TargetAdapter,
{
    /// Create an engine over the given adapter, with an empty registry and
    /// the empty focus record.
    pub fn new(adapter: A) -> Self {
        Self {
            registry: Registry::new(),
            state: FocusState::new(),
            adapter,
        }
    }

    /// The host adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the host adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// The target registry.
    pub fn registry(&self) -> &Registry<K, A::Handle> {
        &self.registry
    }

    /// Register a target handle under an address (see [`Registry::set`]).
    pub fn register(&mut self, address: Address<K>, target: A::Handle) {
        self.registry.set(address, target);
    }

    /// Look up a registered handle without focusing it.
    pub fn target(&self, address: &Address<K>) -> Option<&A::Handle> {
        self.registry.get(address)
    }

    /// The current focus record. Side-effect free.
    pub fn current_focus(&self) -> &FocusRecord<K, A::Handle, A::Element, C> {
        self.state.current()
    }

    /// Replace the current focus record from outside the engine.
    ///
    /// Fires listeners exactly like an internal focus operation; this is the
    /// same dispatch path.
    pub fn set_current_focus(
        &mut self,
        record: FocusRecord<K, A::Handle, A::Element, C>,
    ) -> &FocusRecord<K, A::Handle, A::Element, C> {
        self.state.replace(record)
    }

    /// True iff the current record's element is still mounted and is the
    /// platform's active input target, per the adapter.
    pub fn is_current_focus_live(&self) -> bool {
        match &self.state.current().element {
            Some(element) => self.adapter.is_live(element),
            None => false,
        }
    }

    /// Register a focus-change listener; fired on every record replacement.
    pub fn add_focus_listener(
        &mut self,
        listener: impl FnMut(
            &FocusRecord<K, A::Handle, A::Element, C>,
            &FocusRecord<K, A::Handle, A::Element, C>,
        ) + 'static,
    ) -> ListenerId {
        self.state.add_listener(listener)
    }

    /// Remove a focus-change listener; unknown tokens are a no-op.
    pub fn remove_focus_listener(&mut self, id: ListenerId) -> bool {
        self.state.remove_listener(id)
    }

    /// Apply platform focus to a handle and record the outcome.
    ///
    /// With no target the adapter is not consulted at all and the attempt is
    /// recorded as a registry miss. With a target, the adapter resolves and
    /// focuses it; `applied` reflects whether an element came back. Either
    /// way the record becomes current and listeners fire.
    pub fn focus(
        &mut self,
        target: Option<A::Handle>,
        options: FocusOptions<K, C>,
    ) -> &FocusRecord<K, A::Handle, A::Element, C> {
        let record = match target {
            None => FocusRecord {
                target: None,
                element: None,
                id: options.id,
                collection: options.collection,
                context: options.context,
                applied: false,
            },
            Some(handle) => {
                let element = self.adapter.resolve_and_focus(&handle);
                FocusRecord {
                    applied: element.is_some(),
                    target: Some(handle),
                    element,
                    id: options.id,
                    collection: options.collection,
                    context: options.context,
                }
            }
        };
        self.state.replace(record)
    }

    /// Focus the target registered at an address.
    ///
    /// The record's `id` is derived from the address and is not
    /// caller-overridable; `collection` is derived unless `options` already
    /// carries one. A lookup miss still produces (and dispatches) a record.
    pub fn focus_at(
        &mut self,
        address: Address<K>,
        options: FocusOptions<K, C>,
    ) -> &FocusRecord<K, A::Handle, A::Element, C> {
        let target = self.registry.get(&address).cloned();
        let (id, derived_collection) = match &address {
            Address::One(key) => (Some(key.clone()), None),
            Address::Item { collection, item } => (Some(item.clone()), Some(collection.clone())),
        };
        self.focus(
            target,
            FocusOptions {
                id,
                collection: options.collection.or(derived_collection),
                context: options.context,
            },
        )
    }

    /// Move focus one step within a collection.
    ///
    /// The candidate sequence is `options.candidates` when supplied,
    /// otherwise the collection's item keys in registration order. The
    /// current focus is the navigation origin only when it belongs to this
    /// collection *and* its id is in the sequence; anything else is a cold
    /// start onto the first candidate.
    ///
    /// The chosen identifier is focused even when no target is registered
    /// under it, so an empty or stale sequence still yields an observable
    /// record with `applied == false`.
    pub fn focus_next(
        &mut self,
        collection: K,
        direction: Direction,
        options: NextOptions<K, C>,
    ) -> &FocusRecord<K, A::Handle, A::Element, C> {
        let candidates: SmallVec<[K; 8]> = match options.candidates {
            Some(sequence) => SmallVec::from_vec(sequence),
            None => self.registry.collection_keys(&collection).cloned().collect(),
        };

        let current = self.state.current();
        let origin = match (&current.collection, &current.id) {
            (Some(c), Some(id)) if *c == collection => Some(id),
            _ => None,
        };

        let next = advance(&candidates, origin, direction, options.layout).cloned();
        match next {
            None => self.focus(
                None,
                FocusOptions {
                    id: None,
                    collection: Some(collection),
                    context: options.context,
                },
            ),
            Some(item) => {
                let target = self
                    .registry
                    .get(&Address::item(collection.clone(), item.clone()))
                    .cloned();
                self.focus(
                    target,
                    FocusOptions {
                        id: Some(item),
                        collection: Some(collection),
                        context: options.context,
                    },
                )
            }
        }
    }

    /// Scroll the target registered at an address into view.
    ///
    /// Focus state is not consulted and not mutated; no listeners fire.
    pub fn scroll_to(
        &mut self,
        address: &Address<K>,
        options: &A::ScrollOptions,
    ) -> ScrollRecord<K, A::Handle, A::Element> {
        let (id, collection) = match address {
            Address::One(key) => (Some(key.clone()), None),
            Address::Item { collection, item } => (Some(item.clone()), Some(collection.clone())),
        };
        let target = self.registry.get(address).cloned();
        self.scroll_target(target, id, collection, options)
    }

    /// Scroll the currently focused target into view.
    ///
    /// The returned record reflects the current focus identifiers. When
    /// nothing is focused (or the focused attempt was a registry miss), the
    /// record reports `applied == false`.
    pub fn scroll_to_focused(
        &mut self,
        options: &A::ScrollOptions,
    ) -> ScrollRecord<K, A::Handle, A::Element> {
        let current = self.state.current();
        let id = current.id.clone();
        let collection = current.collection.clone();
        let target = current.target.clone();
        self.scroll_target(target, id, collection, options)
    }

    fn scroll_target(
        &mut self,
        target: Option<A::Handle>,
        id: Option<K>,
        collection: Option<K>,
        options: &A::ScrollOptions,
    ) -> ScrollRecord<K, A::Handle, A::Element> {
        match target {
            None => ScrollRecord {
                target: None,
                element: None,
                id,
                collection,
                applied: false,
            },
            Some(handle) => {
                let element = self.adapter.resolve_and_scroll(&handle, options);
                ScrollRecord {
                    applied: element.is_some(),
                    target: Some(handle),
                    element,
                    id,
                    collection,
                }
            }
        }
    }
}

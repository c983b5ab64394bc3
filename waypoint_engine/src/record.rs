// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Result records describing the outcome of focus and scroll attempts.
//!
//! Records are how the engine reports both success and failure: no operation
//! throws for a miss. The two `Option` fields encode where an attempt fell
//! short:
//!
//! | `target` | `element` | meaning                                         |
//! |----------|-----------|-------------------------------------------------|
//! | `None`   | `None`    | identifier not found in the registry            |
//! | `Some`   | `None`    | registered, but unresolvable on the live surface |
//! | `Some`   | `Some`    | applied (`applied == true`)                     |

/// Outcome and identity of a focus attempt.
///
/// Exactly one `FocusRecord` is current per engine at any time; it is
/// replaced wholesale on every focus operation. The generic parameters are
/// the identifier key `K`, the adapter's handle `H` and element `E`, and the
/// caller's context payload `C`.
#[derive(Clone, Debug)]
pub struct FocusRecord<K, H, E, C> {
    /// The registered handle the attempt targeted; `None` on a registry miss.
    pub target: Option<H>,
    /// The platform element actually focused; `None` when unresolvable.
    pub element: Option<E>,
    /// Item identifier (or singular key) the attempt addressed.
    pub id: Option<K>,
    /// Collection identifier the attempt addressed, if any.
    pub collection: Option<K>,
    /// Opaque caller context carried through the operation.
    pub context: Option<C>,
    /// True iff platform focus was applied to a resolved element.
    pub applied: bool,
}

impl<K, H, E, C> Default for FocusRecord<K, H, E, C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, H, E, C> FocusRecord<K, H, E, C> {
    /// The record an engine starts with: nothing targeted, nothing applied.
    pub const fn empty() -> Self {
        Self {
            target: None,
            element: None,
            id: None,
            collection: None,
            context: None,
            applied: false,
        }
    }

    /// True iff the attempt addressed an identifier with no registered target.
    pub const fn is_registry_miss(&self) -> bool {
        !self.applied && self.target.is_none() && self.id.is_some()
    }

    /// True iff a registered target could not be resolved on the live surface.
    pub const fn is_resolve_miss(&self) -> bool {
        self.target.is_some() && self.element.is_none()
    }
}

/// Outcome and identity of a scroll attempt.
///
/// Structurally a [`FocusRecord`] minus the context payload. Produced
/// independently of focus state and never stored by the engine.
#[derive(Clone, Debug)]
pub struct ScrollRecord<K, H, E> {
    /// The registered handle the attempt targeted; `None` on a registry miss.
    pub target: Option<H>,
    /// The platform element actually scrolled; `None` when unresolvable.
    pub element: Option<E>,
    /// Item identifier (or singular key) the attempt addressed.
    pub id: Option<K>,
    /// Collection identifier the attempt addressed, if any.
    pub collection: Option<K>,
    /// True iff the element was resolved and scrolled into view.
    pub applied: bool,
}

impl<K, H, E> Default for ScrollRecord<K, H, E> {
    fn default() -> Self {
        Self {
            target: None,
            element: None,
            id: None,
            collection: None,
            applied: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Record = FocusRecord<u32, u32, u32, ()>;

    #[test]
    fn empty_record_is_unapplied() {
        let r = Record::empty();
        assert!(!r.applied);
        assert!(r.target.is_none());
        assert!(r.element.is_none());
        assert!(r.id.is_none());
        assert!(!r.is_registry_miss());
        assert!(!r.is_resolve_miss());
    }

    #[test]
    fn miss_shapes_are_distinguishable() {
        let registry_miss = Record {
            id: Some(7),
            ..Record::empty()
        };
        assert!(registry_miss.is_registry_miss());
        assert!(!registry_miss.is_resolve_miss());

        let resolve_miss = Record {
            id: Some(7),
            target: Some(99),
            ..Record::empty()
        };
        assert!(!resolve_miss.is_registry_miss());
        assert!(resolve_miss.is_resolve_miss());
    }
}

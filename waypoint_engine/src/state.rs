// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The current-focus record and its change notification.
//!
//! [`FocusState`] holds exactly one [`FocusRecord`] and an ordered list of
//! change listeners. [`FocusState::replace`] is the **only** path by which
//! listeners fire — every focus operation and every external replacement
//! routes through it, so observing it means observing all focus changes,
//! including failed attempts.
//!
//! Dispatch is synchronous and in registration order at the time of
//! dispatch. Listeners are identified by the [`ListenerId`] issued at
//! registration; closures have no usable identity of their own, so the token
//! *is* the identity. A listener that panics is not isolated — the panic
//! propagates to whoever triggered the replacement.
//!
//! Re-entrant dispatch (a listener triggering another focus change on the
//! same state) is structurally impossible here: `replace` holds the state
//! mutably for the duration, so a listener can only reach it through shared
//! interior mutability supplied by the caller, which is on the caller to
//! keep bounded.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::record::FocusRecord;

/// Boxed focus-change callback, invoked as `(previous, next)`.
pub type FocusListener<K, H, E, C> =
    Box<dyn FnMut(&FocusRecord<K, H, E, C>, &FocusRecord<K, H, E, C>)>;

/// Identity token for a registered listener.
///
/// Tokens are issued monotonically per state and never reused, so a stale
/// token simply fails to remove anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Holder of the single current [`FocusRecord`] for one engine instance.
pub struct FocusState<K, H, E, C> {
    current: FocusRecord<K, H, E, C>,
    listeners: Vec<(ListenerId, FocusListener<K, H, E, C>)>,
    next_token: u64,
}

impl<K, H, E, C> core::fmt::Debug for FocusState<K, H, E, C>
where
    K: core::fmt::Debug,
    H: core::fmt::Debug,
    E: core::fmt::Debug,
    C: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusState")
            .field("current", &self.current)
            .field("listener_count", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<K, H, E, C> Default for FocusState<K, H, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H, E, C> FocusState<K, H, E, C> {
    /// A state holding the empty record and no listeners.
    pub const fn new() -> Self {
        Self {
            current: FocusRecord::empty(),
            listeners: Vec::new(),
            next_token: 0,
        }
    }

    /// The current record. Reading is side-effect free and idempotent.
    pub const fn current(&self) -> &FocusRecord<K, H, E, C> {
        &self.current
    }

    /// Replace the current record wholesale and notify every listener.
    ///
    /// Listeners run synchronously, in registration order, each receiving
    /// the same `(previous, next)` pair. Returns the new current record.
    pub fn replace(&mut self, next: FocusRecord<K, H, E, C>) -> &FocusRecord<K, H, E, C> {
        let previous = mem::replace(&mut self.current, next);
        let current = &self.current;
        for (_, listener) in &mut self.listeners {
            listener(&previous, current);
        }
        &self.current
    }

    /// Register a change listener; returns its identity token.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&FocusRecord<K, H, E, C>, &FocusRecord<K, H, E, C>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_token);
        self.next_token += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener by token. Unknown tokens are a no-op, not an error.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    type Record = FocusRecord<&'static str, u32, u32, ()>;
    type State = FocusState<&'static str, u32, u32, ()>;

    fn applied(id: &'static str, handle: u32) -> Record {
        Record {
            target: Some(handle),
            element: Some(handle),
            id: Some(id),
            collection: None,
            context: None,
            applied: true,
        }
    }

    #[test]
    fn starts_with_empty_record() {
        let state = State::new();
        assert!(!state.current().applied);
        assert!(state.current().id.is_none());
    }

    #[test]
    fn replace_swaps_and_reports_pair() {
        let mut state = State::new();
        let seen: Rc<RefCell<Vec<(Option<&'static str>, Option<&'static str>)>>> =
            Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        state.add_listener(move |previous, next| {
            log.borrow_mut().push((previous.id, next.id));
        });

        state.replace(applied("a", 1));
        state.replace(applied("b", 2));

        assert_eq!(state.current().id, Some("b"));
        assert_eq!(*seen.borrow(), vec![(None, Some("a")), (Some("a"), Some("b"))]);
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let mut state = State::new();
        let order: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));

        let first = order.clone();
        state.add_listener(move |_, _| first.borrow_mut().push(1));
        let second = order.clone();
        state.add_listener(move |_, _| second.borrow_mut().push(2));

        state.replace(applied("a", 1));
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn removed_listener_stops_firing() {
        let mut state = State::new();
        let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

        let bump = count.clone();
        let id = state.add_listener(move |_, _| *bump.borrow_mut() += 1);

        state.replace(applied("a", 1));
        assert!(state.remove_listener(id));
        state.replace(applied("b", 2));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(state.listener_count(), 0);
    }

    #[test]
    fn removing_unknown_token_is_a_noop() {
        let mut state = State::new();
        let id = state.add_listener(|_, _| {});
        assert!(state.remove_listener(id));
        // Second removal of the same token finds nothing.
        assert!(!state.remove_listener(id));
    }

    #[test]
    fn removal_preserves_order_of_remaining_listeners() {
        let mut state = State::new();
        let order: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));

        let a = order.clone();
        let id_a = state.add_listener(move |_, _| a.borrow_mut().push(1));
        let b = order.clone();
        state.add_listener(move |_, _| b.borrow_mut().push(2));
        let c = order.clone();
        state.add_listener(move |_, _| c.borrow_mut().push(3));

        state.remove_listener(id_a);
        state.replace(applied("a", 1));
        assert_eq!(*order.borrow(), vec![2, 3]);
    }
}

// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-toolkit capability seam.
//!
//! Everything platform-specific — finding the backing element for a handle,
//! invoking native focus, scrolling into view, asking whether an element is
//! still the active input target — lives behind [`TargetAdapter`]. The engine
//! stores handles and passes them back here; it never looks inside one.

/// Capability contract supplied by the host toolkit integration.
///
/// ## Contract
///
/// - `Handle` is an opaque reference to a renderable unit. The engine keeps
///   non-owning clones of it in the registry and in result records, and must
///   tolerate a handle going stale (its element unmounting): staleness is
///   only ever detected by a resolve method returning `None`.
/// - `Element` is the concrete platform element a handle resolved to, as
///   reported back by the adapter.
/// - The resolve methods are synchronous and must run to completion; there
///   is no cancellation once one is invoked.
///
/// Implementations should not panic for unresolvable handles — `None` is the
/// designated answer — so that every engine operation can degrade to a
/// result record instead of unwinding.
pub trait TargetAdapter {
    /// Opaque reference to a focusable/scrollable unit, owned by the host.
    type Handle: Clone;
    /// Concrete platform element a handle resolves to.
    type Element: Clone;
    /// Platform options forwarded verbatim to scroll-into-view.
    type ScrollOptions;

    /// Bring the handle's backing element into platform focus.
    ///
    /// Returns the element actually focused, or `None` if the handle could
    /// not be resolved or the element refused focus.
    fn resolve_and_focus(&mut self, handle: &Self::Handle) -> Option<Self::Element>;

    /// Scroll the handle's backing element into view.
    ///
    /// Returns the element actually scrolled, or `None` if the handle could
    /// not be resolved.
    fn resolve_and_scroll(
        &mut self,
        handle: &Self::Handle,
        options: &Self::ScrollOptions,
    ) -> Option<Self::Element>;

    /// True iff the element is still mounted and is the platform's currently
    /// active input target.
    fn is_live(&self, element: &Self::Element) -> bool;
}

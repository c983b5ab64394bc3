// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Engine: registry-addressed focus and scroll for UI applications.
//!
//! ## Overview
//!
//! A host application registers opaque handles to its rendered elements under
//! stable identifiers — either a single key, or a (collection, item) key pair
//! with an optional declared grid shape. Focus and scroll requests are then
//! expressed against those identifiers instead of against the render tree, so
//! "which element is focused" stops depending on how the tree happened to be
//! built.
//!
//! The engine owns three pieces of state and one seam:
//!
//! - [`Registry`](registry::Registry): identifier → handle storage with a
//!   single shared namespace for singular and collection registrations.
//! - [`FocusState`](state::FocusState): the one current [`FocusRecord`]
//!   per engine, with synchronous change notification.
//! - [`Engine`](engine::Engine): the operations — apply focus, navigate
//!   directionally, scroll into view — composed over the registry, the
//!   [`waypoint_nav`] navigator, and the adapter.
//! - [`TargetAdapter`](adapter::TargetAdapter): the host-toolkit capability
//!   that resolves handles to live platform elements and performs the actual
//!   focus/scroll. The engine never inspects a handle itself.
//!
//! ## Results, not errors
//!
//! No operation fails with an error for ordinary misses. Every focus or
//! scroll attempt produces a record whose `applied` flag and null fields say
//! what happened: a `None` target means the identifier was not registered; a
//! registered target with a `None` element means the adapter could not
//! resolve it on the live surface (for example, the element has unmounted).
//! Callers branch on the record instead of catching anything.
//!
//! ## Minimal example
//!
//! A toy adapter over a set of "mounted" element ids:
//!
//! ```rust
//! use waypoint_engine::{Address, Engine, FocusOptions, NextOptions, TargetAdapter};
//! use waypoint_engine::nav::Direction;
//!
//! struct Surface {
//!     mounted: Vec<u32>,
//!     active: Option<u32>,
//! }
//!
//! impl TargetAdapter for Surface {
//!     type Handle = u32;
//!     type Element = u32;
//!     type ScrollOptions = ();
//!
//!     fn resolve_and_focus(&mut self, handle: &u32) -> Option<u32> {
//!         self.mounted.contains(handle).then(|| {
//!             self.active = Some(*handle);
//!             *handle
//!         })
//!     }
//!
//!     fn resolve_and_scroll(&mut self, handle: &u32, _options: &()) -> Option<u32> {
//!         self.mounted.contains(handle).then_some(*handle)
//!     }
//!
//!     fn is_live(&self, element: &u32) -> bool {
//!         self.active == Some(*element)
//!     }
//! }
//!
//! let surface = Surface { mounted: vec![10, 11, 12], active: None };
//! let mut engine: Engine<&str, Surface> = Engine::new(surface);
//!
//! // Register a row of menu items as they render.
//! engine.register(Address::item("menu", "open"), 10);
//! engine.register(Address::item("menu", "save"), 11);
//! engine.register(Address::item("menu", "quit"), 12);
//!
//! // Focus by identifier.
//! let record = engine.focus_at(Address::item("menu", "save"), FocusOptions::default());
//! assert!(record.applied);
//! assert_eq!(record.id, Some("save"));
//!
//! // Navigate one step right within the collection.
//! let record = engine.focus_next("menu", Direction::Right, NextOptions::default());
//! assert_eq!(record.id, Some("quit"));
//! assert!(engine.is_current_focus_live());
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded, synchronous, and run-to-completion: there
//! are no suspension points, no interior mutability, and no cross-instance
//! sharing. Listener dispatch happens inline inside the focus operation, in
//! registration order. Multiple engines are fully independent values.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod engine;
pub mod record;
pub mod registry;
pub mod state;

pub use adapter::TargetAdapter;
pub use engine::{Engine, FocusOptions, NextOptions};
pub use record::{FocusRecord, ScrollRecord};
pub use registry::{Address, Registry, Slot};
pub use state::{FocusState, ListenerId};

/// Re-export of the navigation crate for callers that configure layouts.
pub use waypoint_nav as nav;

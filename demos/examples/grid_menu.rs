// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry-addressed focus over a toy surface: `waypoint_engine` + `waypoint_nav`.
//!
//! This demo shows how to combine:
//! - a `TargetAdapter` implementation standing in for a host toolkit,
//! - the engine's registry and focus operations,
//! - grid navigation with per-axis wrap policy.
//!
//! Run:
//! - `cargo run -p waypoint_demos --example grid_menu`

use std::collections::HashSet;

use waypoint_engine::{Address, Engine, FocusOptions, NextOptions, TargetAdapter};
use waypoint_nav::{Direction, GridLayout, Wrap};

/// A pretend platform surface: elements are just ids, one of which may hold
/// input focus. A real integration would resolve handles to DOM nodes or
/// native widgets here.
struct Surface {
    mounted: HashSet<u32>,
    active: Option<u32>,
}

impl TargetAdapter for Surface {
    type Handle = u32;
    type Element = u32;
    type ScrollOptions = &'static str;

    fn resolve_and_focus(&mut self, handle: &u32) -> Option<u32> {
        self.mounted.contains(handle).then(|| {
            self.active = Some(*handle);
            println!("  [surface] focused element {handle}");
            *handle
        })
    }

    fn resolve_and_scroll(&mut self, handle: &u32, options: &&'static str) -> Option<u32> {
        self.mounted.contains(handle).then(|| {
            println!("  [surface] scrolled element {handle} into view (align: {options})");
            *handle
        })
    }

    fn is_live(&self, element: &u32) -> bool {
        self.active == Some(*element)
    }
}

fn main() {
    let surface = Surface {
        mounted: (10..16).collect(),
        active: None,
    };
    let mut engine: Engine<&str, Surface> = Engine::new(surface);

    engine.add_focus_listener(|previous, next| {
        println!(
            "  [listener] focus {:?} -> {:?} (applied: {})",
            previous.id, next.id, next.applied
        );
    });

    // A 2x3 launcher grid registered as it "renders".
    println!("registering launcher items:");
    for (i, id) in ["files", "editor", "terminal", "mail", "music", "settings"]
        .into_iter()
        .enumerate()
    {
        engine.register(Address::item("launcher", id), 10 + i as u32);
        println!("  launcher/{id} -> handle {}", 10 + i as u32);
    }

    let layout = GridLayout::with_width(3).wrapping(Wrap::X);

    println!("\nfocus by identifier:");
    engine.focus_at(Address::item("launcher", "editor"), FocusOptions::default());

    println!("\narrow-key walk (horizontal wrap, vertical clamp):");
    for direction in [
        Direction::Right, // editor -> terminal
        Direction::Right, // horizontal moves cross rows: -> mail
        Direction::Down,  // already in the bottom row: clamps to its start
        Direction::Left,  // -> terminal
        Direction::Up,    // -> files
        Direction::Left,  // horizontal wrap: head -> settings
    ] {
        println!("  -> {direction:?}");
        engine.focus_next("launcher", direction, NextOptions::with_layout(layout));
    }

    println!("\nscrolling the focused item into view:");
    let record = engine.scroll_to_focused(&"nearest");
    println!(
        "  scrolled {:?} (applied: {}), focus is live: {}",
        record.id,
        record.applied,
        engine.is_current_focus_live()
    );

    println!("\na miss is an observable record, not an error:");
    let record = engine.focus_at(Address::one("missing"), FocusOptions::default());
    println!(
        "  target: {:?}, applied: {} (registry miss: {})",
        record.target,
        record.applied,
        record.is_registry_miss()
    );
}

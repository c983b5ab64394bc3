// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Nav: directional navigation over logically addressed sequences.
//!
//! This crate is the pure half of the Waypoint focus engine. It answers one
//! question: given an ordered sequence of candidate identifiers, the position
//! of the current focus within it, and a direction, which identifier should
//! be focused next?
//!
//! The sequence is treated as a logical grid:
//!
//! - A [`GridLayout`] declares a row width (`1` means a flat list) and a
//!   per-axis [`Wrap`] policy.
//! - [`Direction::Left`]/[`Direction::Right`] move by one position through
//!   the whole sequence; row boundaries do not stop horizontal movement.
//! - [`Direction::Up`]/[`Direction::Down`] move by one row width.
//! - Overflow past an axis end either clamps to the boundary or wraps to the
//!   opposite end, depending on the matching [`Wrap`] flag.
//!
//! No geometry is involved: layouts are declared, not measured, so the same
//! arithmetic serves DOM grids, terminal panes, and virtual lists alike.
//!
//! ## Minimal example
//!
//! A 2×3 grid of menu ids, arrow-down from the middle of the first row:
//!
//! ```rust
//! use waypoint_nav::{advance, Direction, GridLayout, Wrap};
//!
//! let ids = ["a", "b", "c", "d", "e", "f"];
//! let layout = GridLayout::with_width(3);
//!
//! // Down from "b" (row 0, column 1) lands on "e" (row 1, column 1).
//! assert_eq!(advance(&ids, Some(&"b"), Direction::Down, layout), Some(&"e"));
//!
//! // Down from the last row clamps into the last row…
//! assert_eq!(advance(&ids, Some(&"e"), Direction::Down, layout), Some(&"d"));
//!
//! // …unless vertical wrap is enabled, in which case it carries over.
//! let wrapping = layout.wrapping(Wrap::Y);
//! assert_eq!(advance(&ids, Some(&"e"), Direction::Down, wrapping), Some(&"b"));
//! ```
//!
//! ## Cold start
//!
//! When the origin is `None`, or names an identifier that is not in the
//! candidate sequence (focus coming from another collection, or a stale id),
//! [`advance`] selects the **first** candidate. A cold start is an ordinary
//! outcome, never an error:
//!
//! ```rust
//! use waypoint_nav::{advance, Direction, GridLayout};
//!
//! let ids = ["a", "b", "c"];
//! assert_eq!(advance(&ids, None, Direction::Down, GridLayout::flat()), Some(&"a"));
//! assert_eq!(advance(&ids, Some(&"zzz"), Direction::Right, GridLayout::flat()), Some(&"a"));
//! ```
//!
//! The only input with no answer is an empty candidate sequence, which yields
//! `None`; callers decide how to surface that miss.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

bitflags::bitflags! {
    /// Per-axis wrap policy for out-of-range moves.
    ///
    /// An unset axis clamps: moving past the boundary stops at it. A set axis
    /// wraps: the move carries over to the opposite end of the sequence.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Wrap: u8 {
        /// Wrap horizontal moves ([`Direction::Left`]/[`Direction::Right`]).
        const X = 0b01;
        /// Wrap vertical moves ([`Direction::Up`]/[`Direction::Down`]).
        const Y = 0b10;
    }
}

/// Direction of a navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One position backward in the sequence.
    Left,
    /// One position forward in the sequence.
    Right,
    /// One row backward in the sequence.
    Up,
    /// One row forward in the sequence.
    Down,
}

impl Direction {
    /// True for [`Self::Left`] and [`Self::Right`].
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// True for [`Self::Up`] and [`Self::Down`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Declared shape of a candidate sequence.
///
/// `width` is the logical row width; multi-dimensional layouts are modeled as
/// a flat sequence plus this declared width, so a plain list is simply
/// `width == 1`. `wrap` selects clamp-vs-wrap per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridLayout {
    /// Row width of the logical grid. `0` is treated as `1`.
    pub width: usize,
    /// Per-axis wrap policy.
    pub wrap: Wrap,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::flat()
    }
}

impl GridLayout {
    /// A flat list: width 1, clamping on both axes.
    pub const fn flat() -> Self {
        Self {
            width: 1,
            wrap: Wrap::empty(),
        }
    }

    /// A grid with the given row width, clamping on both axes.
    pub const fn with_width(width: usize) -> Self {
        Self {
            width,
            wrap: Wrap::empty(),
        }
    }

    /// The same layout with the given wrap policy.
    pub const fn wrapping(self, wrap: Wrap) -> Self {
        Self {
            width: self.width,
            wrap,
        }
    }

    /// Next position in a sequence of `len` items, or `None` iff `len == 0`.
    ///
    /// `current` values past the end are treated as the last position, and
    /// widths outside `1..=len` are clamped into it, so any input yields a
    /// valid index.
    ///
    /// Boundary policy on overflow:
    ///
    /// - clamped axes stop at the edge — `Left`/`Up` at position 0, `Right`
    ///   at the last position, `Down` at `len - width` (the start of the last
    ///   row, so a vertical move never leaves the grid's row structure);
    /// - wrapped axes carry the move over modulo `len`, which for a flat
    ///   list is a plain jump to the opposite end.
    pub fn step(&self, current: usize, len: usize, direction: Direction) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let width = self.width.clamp(1, len);
        let i = if current < len { current } else { len - 1 };
        let next = match direction {
            Direction::Left => {
                if i == 0 {
                    if self.wrap.contains(Wrap::X) { len - 1 } else { 0 }
                } else {
                    i - 1
                }
            }
            Direction::Right => {
                if i + 1 >= len {
                    if self.wrap.contains(Wrap::X) { 0 } else { len - 1 }
                } else {
                    i + 1
                }
            }
            Direction::Up => {
                if i < width {
                    if self.wrap.contains(Wrap::Y) {
                        (i + len - width) % len
                    } else {
                        0
                    }
                } else {
                    i - width
                }
            }
            Direction::Down => {
                if i + width >= len {
                    if self.wrap.contains(Wrap::Y) {
                        (i + width) % len
                    } else {
                        len - width
                    }
                } else {
                    i + width
                }
            }
        };
        Some(next)
    }
}

/// Select the next identifier from an ordered candidate sequence.
///
/// `origin` is the identifier currently holding focus, if any. An origin that
/// is `None` or absent from `candidates` is a cold start and selects the
/// first candidate regardless of `direction`. Otherwise the move is computed
/// by [`GridLayout::step`] from the origin's position.
///
/// Returns `None` iff `candidates` is empty.
pub fn advance<'a, K: PartialEq>(
    candidates: &'a [K],
    origin: Option<&K>,
    direction: Direction,
    layout: GridLayout,
) -> Option<&'a K> {
    let pos = origin.and_then(|o| candidates.iter().position(|c| c == o));
    match pos {
        // Cold start or collection switch: reset to the head of the sequence.
        None => candidates.first(),
        Some(i) => layout
            .step(i, candidates.len(), direction)
            .map(|j| &candidates[j]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_left_clamps_at_head() {
        let ids = ["a", "b", "c", "d"];
        let layout = GridLayout::flat();
        assert_eq!(advance(&ids, Some(&"a"), Direction::Left, layout), Some(&"a"));
    }

    #[test]
    fn flat_left_wraps_to_tail() {
        let ids = ["a", "b", "c", "d"];
        let layout = GridLayout::flat().wrapping(Wrap::X);
        assert_eq!(advance(&ids, Some(&"a"), Direction::Left, layout), Some(&"d"));
    }

    #[test]
    fn flat_right_clamps_and_wraps() {
        let ids = ["a", "b", "c", "d"];
        let clamped = GridLayout::flat();
        assert_eq!(advance(&ids, Some(&"d"), Direction::Right, clamped), Some(&"d"));

        let wrapped = clamped.wrapping(Wrap::X);
        assert_eq!(advance(&ids, Some(&"d"), Direction::Right, wrapped), Some(&"a"));
    }

    #[test]
    fn flat_steps_move_by_one() {
        let ids = ["a", "b", "c", "d"];
        let layout = GridLayout::flat();
        assert_eq!(advance(&ids, Some(&"b"), Direction::Right, layout), Some(&"c"));
        assert_eq!(advance(&ids, Some(&"b"), Direction::Left, layout), Some(&"a"));
    }

    #[test]
    fn grid_down_moves_one_row() {
        // Two rows of three: index 1 is (row 0, col 1), index 4 is (row 1, col 1).
        let ids = [0, 1, 2, 3, 4, 5];
        let layout = GridLayout::with_width(3);
        assert_eq!(advance(&ids, Some(&1), Direction::Down, layout), Some(&4));
        assert_eq!(advance(&ids, Some(&4), Direction::Up, layout), Some(&1));
    }

    #[test]
    fn grid_down_clamps_into_last_row() {
        let ids = [0, 1, 2, 3, 4, 5];
        let layout = GridLayout::with_width(3);
        // From (row 1, col 1) there is no row below; clamp lands on the
        // first index of the last row.
        assert_eq!(advance(&ids, Some(&4), Direction::Down, layout), Some(&3));
    }

    #[test]
    fn grid_down_wraps_modulo_sequence() {
        let ids = [0, 1, 2, 3, 4, 5];
        let layout = GridLayout::with_width(3).wrapping(Wrap::Y);
        assert_eq!(advance(&ids, Some(&4), Direction::Down, layout), Some(&1));
    }

    #[test]
    fn grid_up_clamps_to_head_and_wraps_by_row() {
        let ids = [0, 1, 2, 3, 4, 5];
        let clamped = GridLayout::with_width(3);
        assert_eq!(advance(&ids, Some(&1), Direction::Up, clamped), Some(&0));

        let wrapped = clamped.wrapping(Wrap::Y);
        assert_eq!(advance(&ids, Some(&1), Direction::Up, wrapped), Some(&4));
    }

    #[test]
    fn horizontal_moves_cross_row_boundaries() {
        let ids = [0, 1, 2, 3, 4, 5];
        let layout = GridLayout::with_width(3);
        // Right from the end of row 0 continues into row 1.
        assert_eq!(advance(&ids, Some(&2), Direction::Right, layout), Some(&3));
        assert_eq!(advance(&ids, Some(&3), Direction::Left, layout), Some(&2));
    }

    #[test]
    fn cold_start_selects_first() {
        let ids = ["a", "b", "c"];
        let layout = GridLayout::flat();
        assert_eq!(advance(&ids, None, Direction::Down, layout), Some(&"a"));
        // An origin from another collection is not in the sequence: same reset.
        assert_eq!(advance(&ids, Some(&"elsewhere"), Direction::Left, layout), Some(&"a"));
    }

    #[test]
    fn empty_candidates_have_no_answer() {
        let ids: [u32; 0] = [];
        assert_eq!(advance(&ids, None, Direction::Right, GridLayout::flat()), None);
        assert_eq!(GridLayout::flat().step(0, 0, Direction::Right), None);
    }

    #[test]
    fn zero_width_behaves_as_flat() {
        let ids = [0, 1, 2];
        let layout = GridLayout::with_width(0);
        assert_eq!(advance(&ids, Some(&1), Direction::Down, layout), Some(&2));
    }

    #[test]
    fn oversized_width_is_one_row() {
        let ids = [0, 1, 2];
        let clamped = GridLayout::with_width(10);
        // One row: vertical moves overflow immediately.
        assert_eq!(advance(&ids, Some(&1), Direction::Up, clamped), Some(&0));
        assert_eq!(advance(&ids, Some(&1), Direction::Down, clamped), Some(&0));

        // Wrapping a full-row step is a no-op move back onto the origin.
        let wrapped = clamped.wrapping(Wrap::Y);
        assert_eq!(advance(&ids, Some(&1), Direction::Down, wrapped), Some(&1));
    }

    #[test]
    fn out_of_range_position_is_treated_as_last() {
        let layout = GridLayout::flat();
        assert_eq!(layout.step(99, 4, Direction::Left), Some(2));
    }

    #[test]
    fn single_item_grid_is_stable() {
        let ids = ["only"];
        let layout = GridLayout::flat().wrapping(Wrap::all());
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert_eq!(advance(&ids, Some(&"only"), dir, layout), Some(&"only"));
        }
    }
}

// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Waypoint crates. See the `examples/` directory.

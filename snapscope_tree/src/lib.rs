// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapscope Tree: hierarchy snapshots and point hit testing for UI inspectors.
//!
//! Snapscope Tree is the core of a viewer for UI-automation and accessibility
//! dumps: a flat list of on-screen elements, each with a rectangle and a parent
//! index, captured from a device or desktop session.
//!
//! - Links the flat records into a rooted tree, filling in depth, sibling
//!   index, and other defaulted attributes.
//! - Resolves a clicked screen point to a small, ordered set of elements,
//!   pruning containers that are visually redundant.
//! - Walks the tree depth-first without recursion, optionally pruning subtrees.
//! - Formats short node labels for tree views.
//!
//! ## Where this fits
//!
//! Payload decoding and metadata live in `snapscope_payload`; screenshot size
//! probing lives in `snapscope_probe`. This crate only sees [`RawNode`]
//! records and [`kurbo`] geometry, and performs no I/O.
//!
//! ## Not a geometry library
//!
//! Rectangles are axis-aligned, the hierarchy must be a strict tree, and a
//! snapshot is never updated in place: a new capture means a new
//! [`Snapshot`]. Float inputs are assumed to be finite (no NaNs).
//!
//! ## API overview
//!
//! - [`RawNode`] / [`NodeAttrs`]: one snapshot record and its attributes.
//! - [`NodeId`]: handle of a node (its position in the flat array).
//! - [`Snapshot`]: owns the node array, links it, and answers queries.
//! - [`Hit`]: best node under a point plus its root path.
//!
//! Key operations:
//! - [`build_tree`] links records in place and returns the root.
//! - [`find_nodes_at`] resolves a point to candidates, smallest area first;
//!   [`hit_test_point`] returns just the best one.
//! - [`traverse`] is a pre-order walk with subtree pruning;
//!   [`next_depth_first`] and [`prev_depth_first`] step one node at a time.
//! - [`is_ancestor`], [`ancestors`], and [`path_to`] follow parent links.
//! - [`label()`] formats a display label, cached per node.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: `no_std` builds relying on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`RawNode`] and [`NodeAttrs`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod build;
mod label;
mod resolve;
mod snapshot;
mod traverse;
mod types;
mod util;

pub use build::{DEFAULT_NAME, build_tree};
pub use label::{ELLIPSIS, label};
pub use resolve::{Hit, find_nodes_at, hit_test_point};
pub use snapshot::Snapshot;
pub use traverse::{
    Ancestors, Traverse, ancestors, is_ancestor, next_depth_first, path_to, prev_depth_first,
    traverse,
};
pub use types::{NodeAttrs, NodeId, RawNode};

// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for snapshot nodes: identifiers, raw records, and attributes.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::OnceCell;

use kurbo::Rect;

/// Identifier for a node in a snapshot.
///
/// This is the node's position in the flat array it was loaded from. It stays
/// valid for as long as that array is not reordered, which holds for the whole
/// viewing session of a snapshot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create an identifier from a position in the flat node array.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub const fn from_index(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// The position of this node in the flat node array.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Display and geometry attributes of a node.
///
/// Every field is optional in the source payload. [`build_tree`](crate::build_tree)
/// fills in `name`, `index`, `depth`, `source_id`, `source_pid`, and
/// `child_count` without overwriting values that were already supplied
/// (`depth` excepted, which is always derived from the tree).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeAttrs {
    /// Element class or role, for example `android.widget.TextView`.
    pub name: Option<String>,
    /// Position among the parent's children.
    pub index: Option<usize>,
    /// Distance from the root (root is 0).
    pub depth: Option<usize>,
    /// Copy of the record's `id`.
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub source_id: Option<i64>,
    /// Copy of the record's `pid`.
    #[cfg_attr(feature = "serde", serde(rename = "_pid"))]
    pub source_pid: Option<i64>,
    /// Left edge in screen coordinates.
    pub left: Option<f64>,
    /// Top edge in screen coordinates.
    pub top: Option<f64>,
    /// Right edge in screen coordinates.
    pub right: Option<f64>,
    /// Bottom edge in screen coordinates.
    pub bottom: Option<f64>,
    /// Explicit width; overrides `right - left` for area computations.
    pub width: Option<f64>,
    /// Explicit height; overrides `bottom - top` for area computations.
    pub height: Option<f64>,
    /// Number of children reported by the source.
    #[cfg_attr(feature = "serde", serde(rename = "childCount"))]
    pub child_count: Option<usize>,
    /// Visible text content.
    pub text: Option<String>,
    /// Accessibility description.
    pub description: Option<String>,
    /// Resource or automation identifier.
    pub identifier: Option<String>,
}

impl NodeAttrs {
    /// Screen rectangle of the node, if all four edges are known.
    ///
    /// The rectangle is taken as given: `[left, right] x [top, bottom]`.
    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.left?, self.top?, self.right?, self.bottom?))
    }

    /// Area used to rank hit candidates.
    ///
    /// Explicit `width`/`height` win over the extents derived from the edges.
    /// Zero-area and missing geometry both yield `0.0`.
    pub fn area(&self) -> f64 {
        let derived = self.bounds().unwrap_or(Rect::ZERO);
        let width = self.width.unwrap_or_else(|| derived.width());
        let height = self.height.unwrap_or_else(|| derived.height());
        width * height
    }
}

/// One element of a hierarchy snapshot.
///
/// Records arrive as a flat array where each entry names its parent by array
/// position (`pid`). [`build_tree`](crate::build_tree) links them in place:
/// children are owned by position in the array, and the parent link is a
/// plain [`NodeId`] back into that same array.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNode {
    /// Identifier, unique within a snapshot.
    pub id: i64,
    /// Array position of the parent; absent or negative for the root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pid: Option<i64>,
    /// Display and geometry attributes.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_support::null_as_default")
    )]
    pub attr: NodeAttrs,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) parent: Option<NodeId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) children: Vec<NodeId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) label: OnceCell<String>,
}

impl RawNode {
    /// Create an unlinked record.
    pub fn new(id: i64, pid: Option<i64>, attr: NodeAttrs) -> Self {
        Self {
            id,
            pid,
            attr,
            ..Self::default()
        }
    }

    /// The parent's array position, if `pid` is present and non-negative.
    ///
    /// The position is not checked against the array length here.
    pub fn parent_index(&self) -> Option<usize> {
        self.pid.and_then(|pid| usize::try_from(pid).ok())
    }

    /// The linked parent, or `None` for the root and for unbuilt records.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Linked children in source order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node currently has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth assigned by the builder (0 for roots and unbuilt records).
    pub fn depth(&self) -> usize {
        self.attr.depth.unwrap_or(0)
    }

    /// Screen rectangle, see [`NodeAttrs::bounds`].
    pub fn bounds(&self) -> Option<Rect> {
        self.attr.bounds()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Deserializer};

    /// Accept `null` wherever a defaulted struct is expected.
    pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

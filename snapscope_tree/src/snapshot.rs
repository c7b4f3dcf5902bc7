// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned snapshot: a node arena plus its root, with the queries a viewer needs.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::build::build_tree;
use crate::label::label;
use crate::resolve::{Hit, find_nodes_at, hit_test_point};
use crate::traverse::{
    Traverse, ancestors, is_ancestor, next_depth_first, path_to, prev_depth_first, traverse,
};
use crate::types::{NodeId, RawNode};

/// A built hierarchy snapshot.
///
/// Owns the flat node array (the arena) and links it on construction. Node
/// handles are [`NodeId`]s: positions in that array. Queries taking a handle
/// return `None` (or an empty result) for positions outside the arena.
///
/// The snapshot is read-only once built; load a new one to view new data.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use snapscope_tree::{NodeAttrs, RawNode, Snapshot};
///
/// let bounds = |left, top, right, bottom| NodeAttrs {
///     left: Some(left),
///     top: Some(top),
///     right: Some(right),
///     bottom: Some(bottom),
///     ..NodeAttrs::default()
/// };
/// let snapshot = Snapshot::new(vec![
///     RawNode::new(0, None, bounds(0.0, 0.0, 100.0, 100.0)),
///     RawNode::new(1, Some(0), bounds(10.0, 10.0, 50.0, 50.0)),
/// ]);
///
/// let root = snapshot.root().unwrap();
/// assert_eq!(snapshot.depth(root), Some(0));
///
/// let hit = snapshot.hit_test_point(Point::new(20.0, 20.0)).unwrap();
/// assert_eq!(snapshot.node(hit.node).unwrap().id, 1);
/// assert_eq!(hit.path.first().copied(), Some(root));
/// ```
#[derive(Clone, Default)]
pub struct Snapshot {
    nodes: Vec<RawNode>,
    root: Option<NodeId>,
}

impl core::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        f.debug_struct("Snapshot")
            .field("nodes_total", &self.nodes.len())
            .field("leaves", &leaves)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl From<Vec<RawNode>> for Snapshot {
    fn from(nodes: Vec<RawNode>) -> Self {
        Self::new(nodes)
    }
}

impl Snapshot {
    /// Take ownership of `nodes` and link them with [`build_tree`].
    pub fn new(mut nodes: Vec<RawNode>) -> Self {
        let root = build_tree(&mut nodes);
        Self { nodes, root }
    }

    /// The root node, or `None` for an empty snapshot.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// All nodes in their original array order.
    pub fn nodes(&self) -> &[RawNode] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Give the enriched node array back.
    pub fn into_nodes(self) -> Vec<RawNode> {
        self.nodes
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&RawNode> {
        self.nodes.get(id.index())
    }

    /// Find the handle of the node whose record `id` is `raw_id`.
    pub fn find_by_id(&self, raw_id: i64) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id == raw_id)
            .map(NodeId::from_index)
    }

    /// Returns the parent of a node, or `None` for the root or unknown handles.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent()
    }

    /// Get the children of a node, or an empty slice for unknown handles.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(RawNode::children).unwrap_or(&[])
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self, id: NodeId) -> Option<bool> {
        self.node(id).map(RawNode::is_leaf)
    }

    /// Distance of the node from the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(RawNode::depth)
    }

    /// Screen rectangle of the node, if it has full geometry.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.node(id)?.bounds()
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        is_ancestor(&self.nodes, ancestor, node)
    }

    /// Ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        ancestors(&self.nodes, id)
    }

    /// Path from the root down to `id` (inclusive), or empty for unknown handles.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        if self.node(id).is_none() {
            return Vec::new();
        }
        path_to(&self.nodes, id)
    }

    /// Pre-order walk from the root, pruning subtrees whose record id is in `skip_ids`.
    pub fn traverse<I>(&self, skip_ids: I) -> Traverse<'_>
    where
        I: IntoIterator<Item = i64>,
    {
        match self.root {
            Some(root) => traverse(&self.nodes, root, skip_ids),
            None => traverse(&[], NodeId::from_index(0), skip_ids),
        }
    }

    /// Pre-order walk of the subtree under `start`.
    pub fn traverse_from<I>(&self, start: NodeId, skip_ids: I) -> Traverse<'_>
    where
        I: IntoIterator<Item = i64>,
    {
        traverse(&self.nodes, start, skip_ids)
    }

    /// Get the next node in depth-first traversal order.
    ///
    /// Returns `None` at the end of the tree or for unknown handles.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        next_depth_first(&self.nodes, current)
    }

    /// Get the previous node in depth-first traversal order.
    ///
    /// Returns `None` at the root or for unknown handles.
    pub fn prev_depth_first(&self, current: NodeId) -> Option<NodeId> {
        prev_depth_first(&self.nodes, current)
    }

    /// Candidate nodes under a point, smallest first. See [`find_nodes_at`].
    pub fn find_nodes_at(&self, point: Point) -> Vec<NodeId> {
        find_nodes_at(&self.nodes, point)
    }

    /// Best node under a point with its root path. See [`hit_test_point`].
    pub fn hit_test_point(&self, point: Point) -> Option<Hit> {
        hit_test_point(&self.nodes, point)
    }

    /// Display label of a node. See [`label`](crate::label()).
    pub fn label(&self, id: NodeId, limit: Option<usize>) -> Option<Cow<'_, str>> {
        self.node(id).map(|n| label(n, limit))
    }
}

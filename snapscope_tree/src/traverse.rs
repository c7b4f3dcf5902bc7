// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a built tree: depth-first iteration, single-step navigation, and
//! ancestor chains.
//!
//! Everything here reads the links written by [`build_tree`](crate::build_tree)
//! and takes the node slice explicitly, so it works the same over a bare
//! `&[RawNode]` and over a [`Snapshot`](crate::Snapshot).

use alloc::vec::Vec;
use core::iter::FusedIterator;

use hashbrown::HashSet;

use crate::types::{NodeId, RawNode};

/// Lazy pre-order depth-first iterator over a subtree.
///
/// Created by [`traverse`]. The walk uses an explicit stack, so tree depth is
/// not limited by the call stack. Once exhausted it stays exhausted.
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    nodes: &'a [RawNode],
    stack: Vec<NodeId>,
    skip: HashSet<i64>,
}

impl Iterator for Traverse<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.stack.pop() {
            let node = &self.nodes[id.index()];
            if self.skip.contains(&node.id) {
                // Pruned: its children are never pushed.
                continue;
            }
            // Reverse so children pop in source order.
            self.stack.extend(node.children.iter().rev().copied());
            return Some(id);
        }
        None
    }
}

impl FusedIterator for Traverse<'_> {}

/// Walk the subtree under `start` in pre-order.
///
/// Children are visited in source order. A node whose record `id` appears in
/// `skip_ids` is not yielded, and neither is anything below it.
///
/// ```rust
/// use snapscope_tree::{NodeAttrs, NodeId, RawNode, build_tree, traverse};
///
/// let mut nodes = vec![
///     RawNode::new(0, None, NodeAttrs::default()),
///     RawNode::new(1, Some(0), NodeAttrs::default()),
///     RawNode::new(2, Some(1), NodeAttrs::default()),
/// ];
/// let root = build_tree(&mut nodes).unwrap();
///
/// let all: Vec<NodeId> = traverse(&nodes, root, []).collect();
/// assert_eq!(all.len(), 3);
///
/// let pruned: Vec<NodeId> = traverse(&nodes, root, [1]).collect();
/// assert_eq!(pruned, vec![root]);
/// ```
pub fn traverse<I>(nodes: &[RawNode], start: NodeId, skip_ids: I) -> Traverse<'_>
where
    I: IntoIterator<Item = i64>,
{
    let mut stack = Vec::new();
    if start.index() < nodes.len() {
        stack.push(start);
    }
    Traverse {
        nodes,
        stack,
        skip: skip_ids.into_iter().collect(),
    }
}

/// Iterator over the strict ancestors of a node, nearest first.
///
/// Created by [`ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    nodes: &'a [RawNode],
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.nodes.get(current.index()).and_then(RawNode::parent);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

/// Iterate the ancestors of `id`, starting with its parent and ending at the root.
///
/// A node is never its own ancestor. Parent links must be acyclic (see the
/// caller contract on [`build_tree`](crate::build_tree)).
pub fn ancestors(nodes: &[RawNode], id: NodeId) -> Ancestors<'_> {
    Ancestors {
        nodes,
        next: nodes.get(id.index()).and_then(RawNode::parent),
    }
}

/// Whether `ancestor` is reached by following parent links up from `node`.
pub fn is_ancestor(nodes: &[RawNode], ancestor: NodeId, node: NodeId) -> bool {
    ancestors(nodes, node).any(|a| a == ancestor)
}

/// Path from the root down to `id`, inclusive on both ends.
pub fn path_to(nodes: &[RawNode], id: NodeId) -> Vec<NodeId> {
    let mut path: Vec<NodeId> = ancestors(nodes, id).collect();
    path.reverse();
    path.push(id);
    path
}

/// The node after `current` in pre-order, without wrapping around.
pub fn next_depth_first(nodes: &[RawNode], current: NodeId) -> Option<NodeId> {
    let node = nodes.get(current.index())?;
    if let Some(&first_child) = node.children.first() {
        return Some(first_child);
    }

    let mut id = current;
    while let Some(parent) = nodes[id.index()].parent {
        if let Some(next_sibling) = sibling(nodes, id, 1) {
            return Some(next_sibling);
        }
        id = parent;
    }
    None
}

/// The node before `current` in pre-order, without wrapping around.
pub fn prev_depth_first(nodes: &[RawNode], current: NodeId) -> Option<NodeId> {
    let node = nodes.get(current.index())?;
    match sibling(nodes, current, -1) {
        Some(prev_sibling) => Some(last_in_subtree(nodes, prev_sibling)),
        None => node.parent,
    }
}

/// Sibling at `offset` positions from `id` in its parent's child list.
fn sibling(nodes: &[RawNode], id: NodeId, offset: isize) -> Option<NodeId> {
    let parent = nodes[id.index()].parent?;
    let siblings = &nodes[parent.index()].children;
    let pos = siblings.iter().position(|&c| c == id)?;
    siblings.get(pos.checked_add_signed(offset)?).copied()
}

fn last_in_subtree(nodes: &[RawNode], mut id: NodeId) -> NodeId {
    while let Some(&last) = nodes[id.index()].children.last() {
        id = last;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_tree;
    use crate::types::NodeAttrs;
    use alloc::vec;

    fn id(idx: usize) -> NodeId {
        NodeId::from_index(idx)
    }

    /// root(0) -> [a(1) -> [c(3), d(4)], b(2)]
    fn sample() -> Vec<RawNode> {
        let mut nodes: Vec<RawNode> = [None, Some(0), Some(0), Some(1), Some(1)]
            .into_iter()
            .enumerate()
            .map(|(i, pid)| RawNode::new(i as i64, pid, NodeAttrs::default()))
            .collect();
        build_tree(&mut nodes);
        nodes
    }

    #[test]
    fn pre_order_visits_children_left_to_right() {
        let nodes = sample();
        let order: Vec<NodeId> = traverse(&nodes, id(0), []).collect();
        assert_eq!(order, vec![id(0), id(1), id(3), id(4), id(2)]);
    }

    #[test]
    fn skipping_prunes_subtree() {
        let mut nodes: Vec<RawNode> = vec![
            RawNode::new(0, None, NodeAttrs::default()),
            RawNode::new(1, Some(0), NodeAttrs::default()),
            RawNode::new(2, Some(1), NodeAttrs::default()),
        ];
        build_tree(&mut nodes);
        let order: Vec<NodeId> = traverse(&nodes, id(0), [1]).collect();
        assert_eq!(order, vec![id(0)]);
    }

    #[test]
    fn skipping_matches_record_ids_not_positions() {
        let mut nodes = sample();
        nodes[1].id = 100;
        let order: Vec<NodeId> = traverse(&nodes, id(0), [100]).collect();
        assert_eq!(order, vec![id(0), id(2)]);
        let order: Vec<NodeId> = traverse(&nodes, id(0), [1]).collect();
        assert_eq!(order.len(), 5);
    }

    #[test]
    fn skipping_start_yields_nothing() {
        let nodes = sample();
        assert_eq!(traverse(&nodes, id(0), [0]).count(), 0);
    }

    #[test]
    fn exhausted_traversal_stays_exhausted() {
        let nodes = sample();
        let mut walk = traverse(&nodes, id(1), []);
        assert_eq!(walk.by_ref().count(), 3);
        assert_eq!(walk.next(), None);
        assert_eq!(traverse(&nodes, id(1), []).count(), 3);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut nodes: Vec<RawNode> = (0..50_000_i64)
            .map(|i| RawNode::new(i, (i > 0).then(|| i - 1), NodeAttrs::default()))
            .collect();
        build_tree(&mut nodes);
        assert_eq!(traverse(&nodes, id(0), []).count(), 50_000);
        assert_eq!(nodes[49_999].depth(), 49_999);
    }

    #[test]
    fn ancestor_relation() {
        let nodes = sample();
        assert!(is_ancestor(&nodes, id(0), id(3)));
        assert!(is_ancestor(&nodes, id(1), id(4)));
        assert!(!is_ancestor(&nodes, id(2), id(3)));
        assert!(!is_ancestor(&nodes, id(3), id(0)));
        assert!(!is_ancestor(&nodes, id(1), id(1)), "never its own ancestor");
    }

    #[test]
    fn path_runs_root_to_node() {
        let nodes = sample();
        assert_eq!(path_to(&nodes, id(4)), vec![id(0), id(1), id(4)]);
        assert_eq!(path_to(&nodes, id(0)), vec![id(0)]);
    }

    #[test]
    fn depth_first_steps() {
        let nodes = sample();
        // Forward: root -> a -> c -> d -> b
        assert_eq!(next_depth_first(&nodes, id(0)), Some(id(1)));
        assert_eq!(next_depth_first(&nodes, id(1)), Some(id(3)));
        assert_eq!(next_depth_first(&nodes, id(3)), Some(id(4)));
        assert_eq!(next_depth_first(&nodes, id(4)), Some(id(2)));
        assert_eq!(next_depth_first(&nodes, id(2)), None);

        // Backward: b -> d -> c -> a -> root
        assert_eq!(prev_depth_first(&nodes, id(2)), Some(id(4)));
        assert_eq!(prev_depth_first(&nodes, id(4)), Some(id(3)));
        assert_eq!(prev_depth_first(&nodes, id(3)), Some(id(1)));
        assert_eq!(prev_depth_first(&nodes, id(1)), Some(id(0)));
        assert_eq!(prev_depth_first(&nodes, id(0)), None);
    }

    #[test]
    fn out_of_range_ids_are_inert() {
        let nodes = sample();
        assert_eq!(traverse(&nodes, id(42), []).count(), 0);
        assert_eq!(ancestors(&nodes, id(42)).count(), 0);
        assert_eq!(next_depth_first(&nodes, id(42)), None);
        assert_eq!(prev_depth_first(&nodes, id(42)), None);
    }
}

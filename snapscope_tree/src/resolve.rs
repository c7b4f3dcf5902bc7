// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a screen point to the nodes a user most likely meant.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::traverse::{is_ancestor, path_to};
use crate::types::{NodeId, RawNode};
use crate::util::{contains_point, contains_rect};

/// Result of resolving a single best node under a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The matched node: the smallest-area candidate.
    pub node: NodeId,
    /// Path from root to node (inclusive).
    pub path: Vec<NodeId>,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    id: NodeId,
    rect: Rect,
    area: f64,
}

type Candidates = SmallVec<[Candidate; 8]>;

/// Find the nodes under `point`, pruned and ordered for display.
///
/// 1. Every node whose rectangle contains `point` (all edges inclusive) is a
///    candidate. Nodes without full geometry never are.
/// 2. An ancestor is dropped when it contains one of its descendant
///    candidates.
/// 3. A node is dropped when it lies inside an ancestor or an uncle candidate
///    (a sibling of one of its ancestors), such as an overlay panel covering
///    part of the screen.
/// 4. Survivors are ordered by ascending area; ties keep array order.
///
/// Two candidates with exactly equal rectangles never prune each other, since
/// geometry alone cannot tell which one the user means. With zero or one
/// candidate after any step, the remaining list is returned as is.
///
/// `nodes` must have been linked by [`build_tree`](crate::build_tree).
///
/// ```rust
/// use kurbo::Point;
/// use snapscope_tree::{NodeAttrs, NodeId, RawNode, build_tree, find_nodes_at};
///
/// fn rect(left: f64, top: f64, right: f64, bottom: f64) -> NodeAttrs {
///     NodeAttrs {
///         left: Some(left),
///         top: Some(top),
///         right: Some(right),
///         bottom: Some(bottom),
///         ..NodeAttrs::default()
///     }
/// }
///
/// let mut nodes = vec![
///     RawNode::new(0, None, rect(0.0, 0.0, 100.0, 100.0)),
///     RawNode::new(1, Some(0), rect(10.0, 10.0, 50.0, 50.0)),
/// ];
/// build_tree(&mut nodes);
///
/// // The root only shadows its child, so the child is the answer.
/// let hits = find_nodes_at(&nodes, Point::new(20.0, 20.0));
/// assert_eq!(hits, vec![NodeId::from_index(1)]);
/// ```
pub fn find_nodes_at(nodes: &[RawNode], point: Point) -> Vec<NodeId> {
    let candidates: Candidates = nodes
        .iter()
        .enumerate()
        .filter_map(|(idx, node)| {
            let rect = node.bounds()?;
            contains_point(rect, point).then(|| Candidate {
                id: NodeId::from_index(idx),
                rect,
                area: node.attr.area(),
            })
        })
        .collect();
    tracing::trace!(?point, candidates = candidates.len(), "containment filter");
    if candidates.len() <= 1 {
        return ids(&candidates);
    }

    let unshadowed: Candidates = candidates
        .iter()
        .filter(|n| {
            !candidates.iter().any(|m| {
                m.id != n.id
                    && m.rect != n.rect
                    && contains_rect(n.rect, m.rect)
                    && is_ancestor(nodes, n.id, m.id)
            })
        })
        .copied()
        .collect();
    if unshadowed.len() <= 1 {
        return ids(&unshadowed);
    }

    let mut survivors: Candidates = unshadowed
        .iter()
        .filter(|n| {
            !unshadowed.iter().any(|m| {
                m.id != n.id
                    && m.rect != n.rect
                    && contains_rect(m.rect, n.rect)
                    && (is_ancestor(nodes, m.id, n.id) || is_uncle(nodes, m.id, n.id))
            })
        })
        .copied()
        .collect();

    // Stable, so equal areas keep array order.
    survivors.sort_by(|a, b| a.area.total_cmp(&b.area));
    tracing::trace!(
        unshadowed = unshadowed.len(),
        survivors = survivors.len(),
        "pruned hit candidates"
    );
    ids(&survivors)
}

/// Resolve the single best node under `point` together with its root path.
///
/// This is the first entry of [`find_nodes_at`].
pub fn hit_test_point(nodes: &[RawNode], point: Point) -> Option<Hit> {
    let node = find_nodes_at(nodes, point).into_iter().next()?;
    Some(Hit {
        node,
        path: path_to(nodes, node),
    })
}

/// Whether `uncle` hangs off the ancestor chain of `node`: its parent is a
/// strict ancestor of `node`'s parent.
fn is_uncle(nodes: &[RawNode], uncle: NodeId, node: NodeId) -> bool {
    let (Some(uncle_parent), Some(node_parent)) =
        (nodes[uncle.index()].parent, nodes[node.index()].parent)
    else {
        return false;
    };
    is_ancestor(nodes, uncle_parent, node_parent)
}

fn ids(candidates: &[Candidate]) -> Vec<NodeId> {
    candidates.iter().map(|c| c.id).collect()
}

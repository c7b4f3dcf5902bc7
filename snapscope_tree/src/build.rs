// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linking a flat array of records into a rooted tree.

use alloc::string::String;
use alloc::vec;

use crate::types::{NodeId, RawNode};

/// Name given to records that arrive without one.
pub const DEFAULT_NAME: &str = "NULL";

/// Link `nodes` into a tree in place and return the root.
///
/// Each record's `pid` is read as a position in `nodes`. For every record, in
/// array order:
///
/// - `attr.name` defaults to [`DEFAULT_NAME`].
/// - If the parent position resolves, the record is appended to the parent's
///   children and `attr.index` defaults to its position among them.
/// - `attr.source_id` / `attr.source_pid` default to `id` / `pid`.
///
/// Once all links exist, `attr.depth` is assigned top-down from each root
/// (so parents may appear after their children in the array), and
/// `attr.child_count` defaults to the number of linked children.
///
/// Attributes that are already set are never overwritten, except `depth`,
/// which always reflects the built tree. Running the builder again over the
/// same slice rebuilds the same links.
///
/// The root is the node without a resolvable parent. Well-formed snapshots
/// have exactly one, usually at position 0; debug builds assert this. Returns
/// `None` for an empty slice.
///
/// ## Caller contract
///
/// A `pid` past the end of the slice resolves to no parent. A record naming
/// itself as parent, or a chain of `pid`s forming a cycle, is not a tree: such
/// input is not repaired and the resulting links are unspecified. Queries that
/// walk parent links ([`is_ancestor`](crate::is_ancestor) and the resolver)
/// may not terminate on such links.
pub fn build_tree(nodes: &mut [RawNode]) -> Option<NodeId> {
    for node in nodes.iter_mut() {
        node.parent = None;
        node.children.clear();
    }

    let len = nodes.len();
    for idx in 0..len {
        let id = NodeId::from_index(idx);
        let parent = nodes[idx].parent_index().filter(|&p| p < len);
        debug_assert_ne!(parent, Some(idx), "node at {idx} names itself as parent");

        if let Some(p) = parent {
            let position = nodes[p].children.len();
            nodes[p].children.push(id);
            let node = &mut nodes[idx];
            node.parent = Some(NodeId::from_index(p));
            node.attr.index.get_or_insert(position);
        }

        let node = &mut nodes[idx];
        node.attr
            .name
            .get_or_insert_with(|| String::from(DEFAULT_NAME));
        let (raw_id, raw_pid) = (node.id, node.pid);
        node.attr.source_id.get_or_insert(raw_id);
        if let Some(pid) = raw_pid {
            node.attr.source_pid.get_or_insert(pid);
        }
    }

    let mut root = None;
    let mut root_count = 0_usize;
    for idx in 0..len {
        if nodes[idx].parent.is_some() {
            continue;
        }
        root_count += 1;
        let id = NodeId::from_index(idx);
        root.get_or_insert(id);
        assign_depths(nodes, id);
    }

    if root_count > 1 {
        tracing::warn!(roots = root_count, "snapshot has more than one root");
    }
    debug_assert!(root_count <= 1, "snapshot has {root_count} roots");
    tracing::debug!(nodes = len, root = ?root, "built snapshot tree");
    root
}

/// Assign `depth` and default `child_count` for the subtree under `root`.
fn assign_depths(nodes: &mut [RawNode], root: NodeId) {
    let mut stack = vec![(root, 0_usize)];
    while let Some((id, depth)) = stack.pop() {
        let node = &mut nodes[id.index()];
        node.attr.depth = Some(depth);
        node.attr.child_count.get_or_insert(node.children.len());
        for &child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
}

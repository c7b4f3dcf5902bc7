// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Short display labels for nodes in hierarchy views.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::Write as _;

use crate::types::RawNode;

/// Marker appended to a truncated suffix.
pub const ELLIPSIS: &str = "\u{2026}";

/// Format the display label of `node`.
///
/// The label is the last dot-separated segment of `attr.name`, then the child
/// count in brackets when non-zero, then the first non-empty of `text`,
/// `description`, and `identifier` after a dash:
///
/// ```text
/// TextView [2] - Sign in
/// ```
///
/// With `limit`, a suffix longer than `limit` characters is cut to `limit`
/// characters followed by [`ELLIPSIS`]. The unlimited label is computed once
/// per node and cached on it; limited labels are built on every call.
pub fn label(node: &RawNode, limit: Option<usize>) -> Cow<'_, str> {
    match limit {
        None => Cow::Borrowed(node.label.get_or_init(|| format_label(node, None))),
        Some(limit) => Cow::Owned(format_label(node, Some(limit))),
    }
}

fn format_label(node: &RawNode, limit: Option<usize>) -> String {
    let attr = &node.attr;
    let name = attr.name.as_deref().unwrap_or_default();
    let short = name.rsplit('.').next().unwrap_or(name);
    let mut out = String::from(short);

    let child_count = attr.child_count.unwrap_or(node.children.len());
    if child_count > 0 {
        let _ = write!(out, " [{child_count}]");
    }

    let suffix = [&attr.text, &attr.description, &attr.identifier]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .find(|s| !s.is_empty());
    if let Some(suffix) = suffix {
        out.push_str(" - ");
        match limit {
            Some(limit) if suffix.chars().count() > limit => {
                out.extend(suffix.chars().take(limit));
                out.push_str(ELLIPSIS);
            }
            _ => out.push_str(suffix),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeAttrs, NodeId};

    fn named(name: &str) -> RawNode {
        RawNode::new(
            0,
            None,
            NodeAttrs {
                name: Some(String::from(name)),
                ..NodeAttrs::default()
            },
        )
    }

    #[test]
    fn short_name_drops_package() {
        assert_eq!(label(&named("android.widget.TextView"), None), "TextView");
        assert_eq!(label(&named("XCUIElementTypeButton"), None), "XCUIElementTypeButton");
    }

    #[test]
    fn child_count_prefers_reported_value() {
        let mut node = named("a.Frame");
        node.children.push(NodeId::from_index(1));
        assert_eq!(label(&node, Some(10)), "Frame [1]");
        node.attr.child_count = Some(4);
        assert_eq!(label(&node, Some(10)), "Frame [4]");
        node.attr.child_count = Some(0);
        assert_eq!(label(&node, Some(10)), "Frame");
    }

    #[test]
    fn suffix_uses_first_non_empty_field() {
        let mut node = named("a.Button");
        node.attr.text = Some(String::new());
        node.attr.description = Some(String::from("Submit form"));
        node.attr.identifier = Some(String::from("com.app:id/submit"));
        assert_eq!(label(&node, None), "Button - Submit form");
    }

    #[test]
    fn limit_truncates_suffix_only() {
        let mut node = named("android.widget.TextView");
        node.attr.text = Some(String::from("Hello, world"));
        assert_eq!(label(&node, Some(5)), "TextView - Hello\u{2026}");
        assert_eq!(label(&node, Some(12)), "TextView - Hello, world");
        assert_eq!(label(&node, Some(0)), "TextView - \u{2026}");
    }

    #[test]
    fn truncation_counts_characters() {
        let mut node = named("Label");
        node.attr.text = Some(String::from("\u{e9}t\u{e9} \u{e0} Paris"));
        assert_eq!(label(&node, Some(3)), "Label - \u{e9}t\u{e9}\u{2026}");
    }

    #[test]
    fn unlimited_label_is_cached() {
        let mut node = named("a.View");
        node.attr.text = Some(String::from("first"));
        let first = label(&node, None).into_owned();
        assert!(matches!(label(&node, None), Cow::Borrowed(_)));

        // The cache is never invalidated; limited labels always recompute.
        node.attr.text = Some(String::from("second"));
        assert_eq!(label(&node, None), first);
        assert_eq!(label(&node, Some(20)), "View - second");
    }

    #[test]
    fn missing_name_is_empty() {
        let node = RawNode::new(3, None, NodeAttrs::default());
        assert_eq!(label(&node, None), "");
    }
}

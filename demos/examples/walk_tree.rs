// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print a hierarchy capture as an indented outline.
//!
//! Subtrees can be collapsed by record id, the same way a tree view hides
//! the children of a collapsed row.
//!
//! Run:
//! - `cargo run -p snapscope_demos --example walk_tree -- capture.json`
//! - `cargo run -p snapscope_demos --example walk_tree -- capture.json --collapse 12 --collapse 40`

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use snapscope_payload::Payload;
use tracing_subscriber::EnvFilter;

/// Print the hierarchy of a capture.
#[derive(Debug, Parser)]
#[command(name = "walk_tree")]
struct Args {
    /// Capture file (JSON with a `nodes` array).
    payload: PathBuf,

    /// Record id whose descendants are hidden. May be repeated.
    #[arg(long = "collapse")]
    collapsed: Vec<i64>,

    /// Maximum characters of text shown per label.
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let snapshot = Payload::from_path(&args.payload)
        .with_context(|| format!("loading {}", args.payload.display()))?
        .into_snapshot();

    // Collapsed rows stay visible; only their children are pruned.
    let mut collapsed = Vec::new();
    for raw in &args.collapsed {
        match snapshot.find_by_id(*raw) {
            Some(id) => collapsed.push(id),
            None => tracing::warn!(id = raw, "no such record"),
        }
    }
    let skip: Vec<i64> = collapsed
        .iter()
        .flat_map(|id| snapshot.children_of(*id))
        .filter_map(|child| snapshot.node(*child))
        .map(|node| node.id)
        .collect();

    for id in snapshot.traverse(skip) {
        let Some(label) = snapshot.label(id, args.limit) else {
            continue;
        };
        let depth = snapshot.depth(id).unwrap_or(0);
        let marker = if collapsed.contains(&id) && snapshot.is_leaf(id) == Some(false) {
            "+"
        } else {
            " "
        };
        println!("{:indent$}{marker} {label}", "", indent = depth * 2);
    }
    Ok(())
}

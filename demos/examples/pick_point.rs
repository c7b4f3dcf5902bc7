// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve a screen point in a hierarchy capture, the way an inspector does
//! when the user clicks on the screenshot.
//!
//! This example shows how to combine:
//! - `snapscope_payload` to load a capture and its device metadata,
//! - `snapscope_probe` to read the screenshot size,
//! - `snapscope_tree` to resolve the point and label the candidates.
//!
//! Run:
//! - `cargo run -p snapscope_demos --example pick_point -- capture.json 540 960`
//! - `RUST_LOG=debug cargo run -p snapscope_demos --example pick_point -- capture.json 540 960`

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use kurbo::Point;
use snapscope_payload::{Payload, app_info, device_info, tool_info};
use snapscope_tree::Snapshot;
use tracing_subscriber::EnvFilter;

/// Pick the elements under a point of a hierarchy capture.
#[derive(Debug, Parser)]
#[command(name = "pick_point")]
#[command(version)]
struct Args {
    /// Capture file (JSON with a `nodes` array).
    payload: PathBuf,

    /// X coordinate in device pixels.
    x: f64,

    /// Y coordinate in device pixels.
    y: f64,

    /// Maximum characters of text shown per label.
    #[arg(short, long, default_value_t = 40)]
    limit: usize,

    /// Screenshot to probe instead of the one named by the capture.
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let payload = Payload::from_path(&args.payload)
        .with_context(|| format!("loading {}", args.payload.display()))?;

    let device = device_info(&payload);
    let app = app_info(&payload);
    let tool = tool_info(&payload);
    println!(
        "device: {} ({}, {})",
        device.serial.as_deref().unwrap_or("?"),
        device.model.as_deref().unwrap_or("?"),
        device.platform.as_deref().unwrap_or("?"),
    );
    println!(
        "app:    {} {}",
        app.package.as_deref().unwrap_or("?"),
        app.activity.as_deref().unwrap_or(""),
    );
    println!(
        "tool:   {} {}",
        tool.name,
        tool.version.as_deref().unwrap_or("")
    );

    let screenshot = args.screenshot.clone().or_else(|| {
        payload
            .screenshot
            .as_deref()
            .map(|s| relative_to(&args.payload, s))
    });
    if let Some(path) = screenshot {
        match snapscope_probe::probe_path(&path).await {
            Ok(size) => println!("screen: {}x{} ({})", size.width, size.height, path.display()),
            Err(err) => tracing::warn!(%err, "screenshot unavailable"),
        }
    }

    let snapshot = payload.into_snapshot();
    tracing::info!(nodes = snapshot.len(), "snapshot loaded");

    let point = Point::new(args.x, args.y);
    let candidates = snapshot.find_nodes_at(point);
    if candidates.is_empty() {
        println!("nothing at ({}, {})", args.x, args.y);
        return Ok(());
    }

    println!("candidates at ({}, {}), smallest first:", args.x, args.y);
    for id in &candidates {
        print_node(&snapshot, *id, args.limit);
    }

    if let Some(hit) = snapshot.hit_test_point(point) {
        let crumbs: Vec<String> = hit
            .path
            .iter()
            .filter_map(|id| snapshot.label(*id, Some(12)))
            .map(|label| label.into_owned())
            .collect();
        println!("path: {}", crumbs.join(" > "));
    }
    Ok(())
}

fn print_node(snapshot: &Snapshot, id: snapscope_tree::NodeId, limit: usize) {
    let Some(node) = snapshot.node(id) else {
        return;
    };
    let bounds = node
        .bounds()
        .map(|r| format!("[{},{}][{},{}]", r.x0, r.y0, r.x1, r.y1))
        .unwrap_or_default();
    let label = snapscope_tree::label(node, Some(limit));
    println!("  #{:<5} depth {:<3} {bounds:<28} {label}", node.id, node.depth());
}

fn relative_to(payload: &Path, screenshot: &str) -> PathBuf {
    let path = Path::new(screenshot);
    match payload.parent() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The captured hierarchy document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use snapscope_tree::{RawNode, Snapshot};

use crate::error::PayloadError;

/// Structured device block (`"device": {...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceFields {
    /// Serial number or UDID.
    pub serial: Option<String>,
    /// Marketing or hardware model name.
    pub model: Option<String>,
    /// Platform, for example `android` or `ios`.
    pub platform: Option<String>,
}

/// Structured application block (`"app": {...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppFields {
    /// Package name or bundle identifier.
    pub package: Option<String>,
    /// Foreground activity or view controller.
    pub activity: Option<String>,
}

/// Structured tool block (`"tool": {...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolFields {
    /// Name of the program that produced the dump.
    pub name: Option<String>,
    /// Version of that program.
    pub version: Option<String>,
}

/// Flat top-level fields written by older capture tools.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LegacyFields {
    /// Device serial.
    pub serial: Option<String>,
    /// Device model.
    #[serde(rename = "deviceModel")]
    pub device_model: Option<String>,
    /// Device platform.
    pub platform: Option<String>,
    /// Application package.
    #[serde(rename = "packageName")]
    pub package_name: Option<String>,
    /// Foreground activity.
    pub activity: Option<String>,
    /// Capture tool name.
    pub generator: Option<String>,
    /// Capture tool version.
    #[serde(rename = "generatorVersion")]
    pub generator_version: Option<String>,
}

/// A decoded hierarchy capture.
///
/// Only `nodes` is required. Identity metadata may come as structured blocks
/// or as flat legacy fields; see [`device_info`](crate::device_info) and its
/// siblings for how the two are reconciled.
///
/// ```rust
/// use snapscope_payload::Payload;
///
/// let payload = Payload::from_json_str(r#"{
///     "nodes": [
///         {"id": 0, "attr": {"left": 0, "top": 0, "right": 1080, "bottom": 1920}},
///         {"id": 1, "pid": 0, "attr": {"name": "android.widget.Button"}}
///     ],
///     "device": {"serial": "emulator-5554"}
/// }"#).unwrap();
///
/// let snapshot = payload.into_snapshot();
/// assert_eq!(snapshot.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    /// Flat node records, parents referenced by array position.
    pub nodes: Vec<RawNode>,
    /// Structured device identity.
    #[serde(default)]
    pub device: Option<DeviceFields>,
    /// Structured application identity.
    #[serde(default)]
    pub app: Option<AppFields>,
    /// Structured tool identity.
    #[serde(default)]
    pub tool: Option<ToolFields>,
    /// Screenshot taken with the dump, as a path or URL.
    #[serde(default)]
    pub screenshot: Option<String>,
    /// Flat fields from older capture formats.
    #[serde(flatten)]
    pub legacy: LegacyFields,
}

impl Payload {
    /// Decode a payload from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        Ok(Self::decoded(serde_json::from_str(json)?))
    }

    /// Decode a payload from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, PayloadError> {
        Ok(Self::decoded(serde_json::from_slice(json)?))
    }

    /// Decode a payload from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PayloadError> {
        Ok(Self::decoded(serde_json::from_reader(reader)?))
    }

    /// Read and decode a payload file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PayloadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading hierarchy payload");
        Self::from_reader(BufReader::new(file))
    }

    /// Link the node records into a [`Snapshot`], dropping the metadata.
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(self.nodes)
    }

    fn decoded(payload: Self) -> Self {
        tracing::debug!(
            nodes = payload.nodes.len(),
            screenshot = payload.screenshot.is_some(),
            "decoded hierarchy payload"
        );
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use snapscope_tree::NodeId;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "nodes": [
            {"id": 0, "pid": -1, "attr": {"name": "android.widget.FrameLayout",
                "left": 0, "top": 0, "right": 1080, "bottom": 1920}},
            {"id": 1, "pid": 0, "attr": {"name": "android.widget.Button",
                "left": 40, "top": 100, "right": 400, "bottom": 220,
                "text": "Sign in", "_id": 41}},
            {"id": 2, "pid": 0, "attr": null},
            {"id": 3, "pid": 0}
        ],
        "screenshot": "shot.png",
        "serial": "emulator-5554"
    }"#;

    #[test]
    fn decodes_nodes_and_defaults_missing_attrs() {
        let payload = Payload::from_json_str(SAMPLE).unwrap();
        assert_eq!(payload.nodes.len(), 4);
        assert_eq!(payload.nodes[0].pid, Some(-1));
        assert_eq!(payload.nodes[1].attr.text.as_deref(), Some("Sign in"));
        assert_eq!(payload.nodes[1].attr.source_id, Some(41));
        assert_eq!(payload.nodes[2].attr, Default::default());
        assert_eq!(payload.nodes[3].attr, Default::default());
        assert_eq!(payload.screenshot.as_deref(), Some("shot.png"));
        assert_eq!(payload.legacy.serial.as_deref(), Some("emulator-5554"));
    }

    #[test]
    fn snapshot_is_linked_and_enriched() {
        let snap = Payload::from_json_str(SAMPLE).unwrap().into_snapshot();
        assert_eq!(snap.root(), Some(NodeId::from_index(0)));
        assert_eq!(snap.children_of(NodeId::from_index(0)).len(), 3);

        let unnamed = snap.node(NodeId::from_index(2)).unwrap();
        assert_eq!(unnamed.attr.name.as_deref(), Some(snapscope_tree::DEFAULT_NAME));
        // Pre-set `_id` survives enrichment.
        let button = snap.node(NodeId::from_index(1)).unwrap();
        assert_eq!(button.attr.source_id, Some(41));

        let hits = snap.find_nodes_at(Point::new(100.0, 150.0));
        assert_eq!(hits, vec![NodeId::from_index(1)]);
    }

    #[test]
    fn nodes_are_required() {
        let err = Payload::from_json_str(r#"{"serial": "x"}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let payload = Payload::from_path(file.path()).unwrap();
        assert_eq!(payload.nodes.len(), 4);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = Payload::from_path(&path).unwrap_err();
        match err {
            PayloadError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn slice_and_str_agree() {
        let a = Payload::from_json_str(SAMPLE).unwrap();
        let b = Payload::from_json_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(a.nodes.len(), b.nodes.len());
        assert_eq!(a.legacy, b.legacy);
    }
}

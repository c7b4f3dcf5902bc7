// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapscope Payload: JSON hierarchy captures and their identity metadata.
//!
//! A capture is a JSON document holding a flat `nodes` array (see
//! [`snapscope_tree::RawNode`]) plus optional information about the device,
//! the foreground application, and the tool that produced it.
//!
//! - [`Payload`] decodes a capture from text, bytes, a reader, or a file, and
//!   turns its nodes into a [`Snapshot`](snapscope_tree::Snapshot).
//! - [`device_info`], [`app_info`], and [`tool_info`] reconcile structured
//!   metadata blocks with the flat fields written by older capture tools.
//!
//! ```rust
//! use snapscope_payload::{Payload, device_info, tool_info};
//!
//! let payload = Payload::from_json_str(r#"{
//!     "nodes": [{"id": 0}],
//!     "serial": "emulator-5554",
//!     "device": {"model": "Pixel 8"}
//! }"#).unwrap();
//!
//! let device = device_info(&payload);
//! assert_eq!(device.serial.as_deref(), Some("emulator-5554"));
//! assert_eq!(device.model.as_deref(), Some("Pixel 8"));
//! assert_eq!(tool_info(&payload).name, "unknown");
//! ```

mod error;
mod meta;
mod payload;

pub use error::PayloadError;
pub use meta::{AppInfo, DeviceInfo, ToolInfo, UNKNOWN_TOOL, app_info, device_info, tool_info};
pub use payload::{AppFields, DeviceFields, LegacyFields, Payload, ToolFields};

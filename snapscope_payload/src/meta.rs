// Copyright 2026 the Snapscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity metadata extracted from a payload.
//!
//! Each field is read from the structured block first (`device`, `app`,
//! `tool`), then from the flat legacy field.

use crate::payload::Payload;

/// Tool name reported when a payload names no capture tool.
pub const UNKNOWN_TOOL: &str = "unknown";

/// Device the hierarchy was captured from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Serial number or UDID.
    pub serial: Option<String>,
    /// Device model.
    pub model: Option<String>,
    /// Platform, for example `android` or `ios`.
    pub platform: Option<String>,
}

/// Application in the foreground at capture time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppInfo {
    /// Package name or bundle identifier.
    pub package: Option<String>,
    /// Activity or view controller.
    pub activity: Option<String>,
}

/// Program that produced the dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInfo {
    /// Tool name, [`UNKNOWN_TOOL`] if the payload names none.
    pub name: String,
    /// Tool version.
    pub version: Option<String>,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: UNKNOWN_TOOL.to_owned(),
            version: None,
        }
    }
}

fn pick(structured: Option<&Option<String>>, legacy: &Option<String>) -> Option<String> {
    structured
        .and_then(Option::as_ref)
        .or(legacy.as_ref())
        .cloned()
}

/// Device identity of a payload.
pub fn device_info(payload: &Payload) -> DeviceInfo {
    let device = payload.device.as_ref();
    let legacy = &payload.legacy;
    DeviceInfo {
        serial: pick(device.map(|d| &d.serial), &legacy.serial),
        model: pick(device.map(|d| &d.model), &legacy.device_model),
        platform: pick(device.map(|d| &d.platform), &legacy.platform),
    }
}

/// Application identity of a payload.
pub fn app_info(payload: &Payload) -> AppInfo {
    let app = payload.app.as_ref();
    let legacy = &payload.legacy;
    AppInfo {
        package: pick(app.map(|a| &a.package), &legacy.package_name),
        activity: pick(app.map(|a| &a.activity), &legacy.activity),
    }
}

/// Capture tool identity of a payload.
pub fn tool_info(payload: &Payload) -> ToolInfo {
    let tool = payload.tool.as_ref();
    let legacy = &payload.legacy;
    ToolInfo {
        name: pick(tool.map(|t| &t.name), &legacy.generator)
            .unwrap_or_else(|| UNKNOWN_TOOL.to_owned()),
        version: pick(tool.map(|t| &t.version), &legacy.generator_version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_json_str(&value.to_string()).unwrap()
    }

    #[test]
    fn structured_blocks() {
        let p = payload(json!({
            "nodes": [],
            "device": {"serial": "R58M", "model": "SM-G991B", "platform": "android"},
            "app": {"package": "com.example.shop", "activity": ".MainActivity"},
            "tool": {"name": "uiautomator", "version": "2.3.0"}
        }));
        assert_eq!(
            device_info(&p),
            DeviceInfo {
                serial: Some("R58M".into()),
                model: Some("SM-G991B".into()),
                platform: Some("android".into()),
            }
        );
        assert_eq!(app_info(&p).package.as_deref(), Some("com.example.shop"));
        assert_eq!(app_info(&p).activity.as_deref(), Some(".MainActivity"));
        assert_eq!(tool_info(&p).name, "uiautomator");
        assert_eq!(tool_info(&p).version.as_deref(), Some("2.3.0"));
    }

    #[test]
    fn legacy_fields() {
        let p = payload(json!({
            "nodes": [],
            "serial": "00008030",
            "deviceModel": "iPhone12,1",
            "platform": "ios",
            "packageName": "com.apple.Preferences",
            "activity": "PSUIPrefsListController",
            "generator": "wda",
            "generatorVersion": "5.1"
        }));
        let device = device_info(&p);
        assert_eq!(device.serial.as_deref(), Some("00008030"));
        assert_eq!(device.model.as_deref(), Some("iPhone12,1"));
        assert_eq!(device.platform.as_deref(), Some("ios"));
        assert_eq!(app_info(&p).package.as_deref(), Some("com.apple.Preferences"));
        assert_eq!(
            tool_info(&p),
            ToolInfo {
                name: "wda".into(),
                version: Some("5.1".into()),
            }
        );
    }

    #[test]
    fn structured_wins_per_field() {
        let p = payload(json!({
            "nodes": [],
            "device": {"serial": "structured"},
            "serial": "flat",
            "deviceModel": "Pixel 8"
        }));
        let device = device_info(&p);
        assert_eq!(device.serial.as_deref(), Some("structured"));
        // Missing structured field falls through to the flat one.
        assert_eq!(device.model.as_deref(), Some("Pixel 8"));
        assert_eq!(device.platform, None);
    }

    #[test]
    fn defaults_when_absent() {
        let p = payload(json!({"nodes": []}));
        assert_eq!(device_info(&p), DeviceInfo::default());
        assert_eq!(app_info(&p), AppInfo::default());
        assert_eq!(tool_info(&p), ToolInfo::default());
        assert_eq!(tool_info(&p).name, UNKNOWN_TOOL);
    }

    #[test]
    fn null_structured_field_falls_back() {
        let p = payload(json!({
            "nodes": [],
            "tool": {"name": null, "version": "1.0"},
            "generator": "appium"
        }));
        let tool = tool_info(&p);
        assert_eq!(tool.name, "appium");
        assert_eq!(tool.version.as_deref(), Some("1.0"));
    }
}

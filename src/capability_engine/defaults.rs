//! Named answers for "no model" and "unknown series" queries.

use crate::domain::TimeReference;
use crate::domain::gnss_patterns::DetectionMethod;
use std::time::Duration;

/// Placeholder page objects use before the hardware model has been read from the device.
pub const UNKNOWN_MODEL: &str = "Unknown";
/// Placeholder left behind when a missing model was formatted as text.
pub const NONE_MODEL: &str = "None";

pub const DEFAULT_TIME_REFERENCES: &[TimeReference] = &[TimeReference::Utc, TimeReference::Local];
pub const DEFAULT_TIMEOUT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

pub const GENERIC_SAVE_SELECTOR: &str = "button#button_save";
pub const GENERIC_CANCEL_SELECTOR: &str = "button#button_cancel";
pub const ALL_FIELDS: &str = "all_fields";
pub const UNKNOWN_SERIES_SAVE_DESCRIPTION: &str = "Generic fallback save button";

pub const DEFAULT_GNSS_CONSTELLATIONS: &[&str] = &["GPS", "GLONASS", "Galileo", "BeiDou"];
pub const DEFAULT_ENABLED_CONSTELLATION: &str = "GPS";
pub const ALL_DETECTION_METHODS: &[DetectionMethod] = &[DetectionMethod::Checkbox, DetectionMethod::Select, DetectionMethod::Radio];
pub const SATELLITE_STATUS_INDICATORS: &[&str] = &["Detected", "Tracking", "Locked"];
pub const ANTENNA_TYPES: &[&str] = &["Active", "Passive"];
pub const SATELLITE_FIELD_SELECTORS: &[&str] = &["input[name*='satellite']", "input[id*='satellite']", ".satellite-field"];
pub const SERIES_3_SATELLITE_FIELD_SELECTORS: &[&str] = &["input[name*='satellite']", "input[id*='satellite']", ".satellite-field", ".gnss-field"];
pub const MINIMAL_SATELLITE_FIELD_SELECTORS: &[&str] = &["input[name*='satellite']", "input[id*='satellite']"];
pub const SAVE_BUTTON_SELECTORS: &[&str] = &[GENERIC_SAVE_SELECTOR];
pub const CANCEL_BUTTON_SELECTORS: &[&str] = &[GENERIC_CANCEL_SELECTOR];
pub const SATELLITE_LOADING_INDICATORS: &[&str] = &["Loading satellite data"];

pub const SERIES_2_SECTIONS: &[&str] = &["general", "network", "time", "gnss", "outputs", "display", "access", "snmp", "syslog"];
pub const SERIES_3_SECTIONS: &[&str] = &[
    "general", "network", "time", "gnss", "outputs", "display", "access", "snmp", "syslog", "upload", "ptp",
];

/// Whether `model` is absent or one of the placeholders used for a model that was never read.
pub fn is_placeholder_model(model: Option<&str>) -> bool {
    matches!(model, None | Some("") | Some(UNKNOWN_MODEL) | Some(NONE_MODEL))
}

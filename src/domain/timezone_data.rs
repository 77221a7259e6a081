use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct TimezoneData {
    #[serde(default)]
    available_timezones: Vec<String>,
    /// Display name as shown in the UI → canonical identifier.
    #[serde(default)]
    timezone_mapping: BTreeMap<String, String>,
    #[serde(default)]
    timezone_count: usize,
    #[serde(default)]
    includes_utc: bool,
}

impl TimezoneData {
    pub fn available_timezones(&self) -> &[String] {
        &self.available_timezones
    }

    pub fn timezone_mapping(&self) -> &BTreeMap<String, String> {
        &self.timezone_mapping
    }

    pub fn timezone_count(&self) -> usize {
        self.timezone_count
    }

    pub fn includes_utc(&self) -> bool {
        self.includes_utc
    }

    pub fn is_available(&self, timezone: &str) -> bool {
        self.available_timezones.iter().any(|available| available == timezone)
    }

    pub fn canonical_name(&self, display_name: &str) -> Option<&str> {
        self.timezone_mapping.get(display_name).map(String::as_str)
    }
}

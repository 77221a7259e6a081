use crate::capability_engine::defaults::DEFAULT_SESSION_TIMEOUT;
use crate::domain::time_reference::TimeReferenceRule;
use crate::domain::{BehaviorData, Capabilities, Series, TimezoneData};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Everything known about one hardware model. Loaded once, never mutated.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct DeviceProfile {
    device_info: DeviceInfo,
    capabilities: Capabilities,
    #[serde(default)]
    network_config: NetworkConfig,
    #[serde(default)]
    performance_baseline: PerformanceBaseline,
    #[serde(default)]
    known_issues: Vec<String>,
    #[serde(default)]
    output_signal_types: BTreeMap<u8, Vec<String>>,
    #[serde(default)]
    time_reference_rules: Vec<TimeReferenceRule>,
    #[serde(default)]
    timezone_data: TimezoneData,
    #[serde(default)]
    behavior_data: BehaviorData,
}

impl DeviceProfile {
    pub fn model(&self) -> &str {
        &self.device_info.hardware_model
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    pub fn performance_baseline(&self) -> &PerformanceBaseline {
        &self.performance_baseline
    }

    pub fn known_issues(&self) -> &[String] {
        &self.known_issues
    }

    pub fn output_signal_types(&self) -> &BTreeMap<u8, Vec<String>> {
        &self.output_signal_types
    }

    pub fn signal_types_for(&self, output: u8) -> &[String] {
        self.output_signal_types.get(&output).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn time_reference_rules(&self) -> &[TimeReferenceRule] {
        &self.time_reference_rules
    }

    pub fn timezone_data(&self) -> &TimezoneData {
        &self.timezone_data
    }

    pub fn behavior_data(&self) -> &BehaviorData {
        &self.behavior_data
    }
}

#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct DeviceInfo {
    series: Series,
    model: String,
    hardware_model: String,
    serial_number: String,
    firmware_version: String,
}

impl DeviceInfo {
    pub fn series(&self) -> Series {
        self.series
    }

    /// Marketing label, e.g. "Series 3".
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn hardware_model(&self) -> &str {
        &self.hardware_model
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }
}

/// Configurable fields per network interface. Empty for single-interface devices.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    interface_configs: BTreeMap<String, Vec<String>>,
}

impl NetworkConfig {
    pub fn interface_configs(&self) -> &BTreeMap<String, Vec<String>> {
        &self.interface_configs
    }

    pub fn fields_for(&self, interface: &str) -> &[String] {
        self.interface_configs.get(interface).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PerformanceBaseline {
    #[serde(default)]
    page_load_times: BTreeMap<String, PageLoadTime>,
    #[serde(with = "humantime_serde", default = "default_session_timeout")]
    session_timeout: Duration,
    #[serde(default)]
    max_concurrent_sessions: u32,
}

fn default_session_timeout() -> Duration {
    DEFAULT_SESSION_TIMEOUT
}

impl Default for PerformanceBaseline {
    fn default() -> Self {
        PerformanceBaseline {
            page_load_times: BTreeMap::new(),
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            max_concurrent_sessions: 0,
        }
    }
}

impl PerformanceBaseline {
    pub fn session_timeout(&self) -> Duration {
        self.session_timeout
    }

    pub fn max_concurrent_sessions(&self) -> u32 {
        self.max_concurrent_sessions
    }

    pub fn page_load_time(&self, page: &str) -> Option<Duration> {
        self.page_load_times.get(page).map(|time| time.duration)
    }

    pub fn page_load_times(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.page_load_times.iter().map(|(page, time)| (page.as_str(), time.duration))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
struct PageLoadTime {
    #[serde(with = "humantime_serde")]
    duration: Duration,
}

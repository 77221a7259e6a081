use crate::capability_engine::defaults::DEFAULT_ENABLED_CONSTELLATION;
use serde::Deserialize;

/// Hardware feature flags and small scalars of a model.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    ptp_supported: bool,
    network_interfaces: usize,
    interface_names: Vec<String>,
    #[serde(default)]
    ptp_interfaces: Vec<String>,
    max_outputs: u8,
    #[serde(default = "default_gnss_constellations")]
    gnss_constellations: Vec<String>,
    #[serde(default)]
    authentication_levels: Vec<String>,
    #[serde(default)]
    http_redirect: bool,
}

fn default_gnss_constellations() -> Vec<String> {
    vec![DEFAULT_ENABLED_CONSTELLATION.to_string()]
}

impl Capabilities {
    pub fn ptp_supported(&self) -> bool {
        self.ptp_supported
    }

    pub fn network_interfaces(&self) -> usize {
        self.network_interfaces
    }

    pub fn interface_names(&self) -> &[String] {
        &self.interface_names
    }

    pub fn ptp_interfaces(&self) -> &[String] {
        &self.ptp_interfaces
    }

    pub fn max_outputs(&self) -> u8 {
        self.max_outputs
    }

    pub fn gnss_constellations(&self) -> &[String] {
        &self.gnss_constellations
    }

    pub fn authentication_levels(&self) -> &[String] {
        &self.authentication_levels
    }

    pub fn http_redirect(&self) -> bool {
        self.http_redirect
    }

    /// Whether the named capability is present: flags by value, counts when non-zero, lists when non-empty.
    /// Unknown names are never present.
    pub fn is_present(&self, name: &str) -> bool {
        match name {
            "ptp_supported" => self.ptp_supported,
            "http_redirect" => self.http_redirect,
            "network_interfaces" => self.network_interfaces > 0,
            "max_outputs" => self.max_outputs > 0,
            "interface_names" => !self.interface_names.is_empty(),
            "ptp_interfaces" => !self.ptp_interfaces.is_empty(),
            "gnss_constellations" => !self.gnss_constellations.is_empty(),
            "authentication_levels" => !self.authentication_levels.is_empty(),
            _ => false,
        }
    }
}

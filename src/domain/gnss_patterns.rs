use crate::domain::Series;
use serde::{Serialize, Serializer};

/// GNSS page conventions for a model, derived from its constellations and series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GnssPatterns {
    pub constellation_patterns: Vec<ConstellationPattern>,
    pub satellite_detection: SatelliteDetection,
    pub configuration: GnssConfigurationPatterns,
    pub ui_elements: UiElementPatterns,
    pub device_specific: Option<DeviceSpecificGnss>,
}

impl GnssPatterns {
    pub fn constellation(&self, name: &str) -> Option<&ConstellationPattern> {
        self.constellation_patterns.iter().find(|pattern| pattern.constellation == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConstellationPattern {
    pub constellation: String,
    pub enabled_by_default: bool,
    pub checkbox_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SatelliteDetection {
    pub satellite_types: Vec<String>,
    pub detection_methods: Vec<DetectionMethod>,
    pub status_indicators: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GnssConfigurationPatterns {
    pub antenna_types: &'static [&'static str],
    pub constellation_input: Option<ConstellationInput>,
    pub satellite_field_selectors: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UiElementPatterns {
    pub save_button_selectors: &'static [&'static str],
    pub cancel_button_selectors: &'static [&'static str],
    pub loading_indicators: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceSpecificGnss {
    #[serde(serialize_with = "serialize_series")]
    pub series: Series,
    pub supports_multiple_constellations: bool,
    pub selection_method: SelectionMethod,
}

fn serialize_series<S: Serializer>(series: &Series, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(series.as_number())
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    Checkbox,
    Select,
    Radio,
}

/// Widget used to pick constellations on the GNSS page.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstellationInput {
    SelectDropdown,
    MultipleCheckboxes,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    SingleSelect,
    MultipleCheckboxes,
    Unknown,
}

use crate::capability_engine::defaults::*;
use crate::domain::gnss_patterns::*;
use crate::domain::{GnssPatterns, Series};

/// Derives the GNSS page conventions of a model. Nothing here is stored per model.
pub fn derive_gnss_patterns(constellations: &[String], series: Series) -> GnssPatterns {
    let (detection_methods, constellation_input, satellite_field_selectors, supports_multiple_constellations, selection_method) = match series {
        Series::Two => (
            vec![DetectionMethod::Select],
            Some(ConstellationInput::SelectDropdown),
            SATELLITE_FIELD_SELECTORS,
            false,
            SelectionMethod::SingleSelect,
        ),
        Series::Three => (
            vec![DetectionMethod::Checkbox],
            Some(ConstellationInput::MultipleCheckboxes),
            SERIES_3_SATELLITE_FIELD_SELECTORS,
            true,
            SelectionMethod::MultipleCheckboxes,
        ),
        Series::Unknown => (
            vec![DetectionMethod::Checkbox, DetectionMethod::Select],
            None,
            MINIMAL_SATELLITE_FIELD_SELECTORS,
            true,
            SelectionMethod::Unknown,
        ),
    };

    GnssPatterns {
        constellation_patterns: constellation_patterns(constellations.iter().map(String::as_str)),
        satellite_detection: SatelliteDetection {
            satellite_types: constellations.to_vec(),
            detection_methods,
            status_indicators: SATELLITE_STATUS_INDICATORS,
        },
        configuration: GnssConfigurationPatterns {
            antenna_types: ANTENNA_TYPES,
            constellation_input,
            satellite_field_selectors,
        },
        ui_elements: ui_element_patterns(),
        device_specific: Some(DeviceSpecificGnss {
            series,
            supports_multiple_constellations,
            selection_method,
        }),
    }
}

/// Patterns for a query without a usable model: all common constellations, every detection method.
pub fn default_gnss_patterns() -> GnssPatterns {
    GnssPatterns {
        constellation_patterns: constellation_patterns(DEFAULT_GNSS_CONSTELLATIONS.iter().copied()),
        satellite_detection: SatelliteDetection {
            satellite_types: DEFAULT_GNSS_CONSTELLATIONS.iter().map(ToString::to_string).collect(),
            detection_methods: ALL_DETECTION_METHODS.to_vec(),
            status_indicators: SATELLITE_STATUS_INDICATORS,
        },
        configuration: GnssConfigurationPatterns {
            antenna_types: ANTENNA_TYPES,
            constellation_input: None,
            satellite_field_selectors: SATELLITE_FIELD_SELECTORS,
        },
        ui_elements: ui_element_patterns(),
        device_specific: None,
    }
}

fn constellation_patterns<'a>(constellations: impl Iterator<Item = &'a str>) -> Vec<ConstellationPattern> {
    constellations
        .map(|constellation| ConstellationPattern {
            constellation: constellation.to_string(),
            enabled_by_default: constellation == DEFAULT_ENABLED_CONSTELLATION,
            checkbox_name: format!("{}_enabled", constellation.to_lowercase()),
        })
        .collect()
}

fn ui_element_patterns() -> UiElementPatterns {
    UiElementPatterns {
        save_button_selectors: SAVE_BUTTON_SELECTORS,
        cancel_button_selectors: CANCEL_BUTTON_SELECTORS,
        loading_indicators: SATELLITE_LOADING_INDICATORS,
    }
}

use crate::capability_engine::matching_rule;
use crate::domain::save_controls::GENERIC_ENTRY;
use crate::domain::{ControlCategory, DeviceProfile, SaveControlCatalog, SeriesTwoControls, TimeReferencePattern};
use crate::profile_loader::serialized_save_controls::{SerializedControlCategory, SerializedSaveControls};
use thiserror::Error;

const OFF_SIGNAL: &str = "OFF";
const IRIG_B_FAMILY: &str = "IRIG-B";

pub fn from_json(json: &str) -> Result<DeviceProfile, ProfileFactoryError> {
    let profile = serde_json::from_str::<DeviceProfile>(json)?;
    validate(&profile)?;
    Ok(profile)
}

fn validate(profile: &DeviceProfile) -> Result<(), ProfileFactoryError> {
    if profile.model().is_empty() {
        return Err(ProfileFactoryError::MissingHardwareModel);
    }

    let capabilities = profile.capabilities();
    let interface_names = capabilities.interface_names();
    if capabilities.network_interfaces() != interface_names.len() {
        return Err(ProfileFactoryError::InterfaceCountMismatch {
            declared: capabilities.network_interfaces(),
            named: interface_names.len(),
        });
    }

    if let Some(interface) = capabilities.ptp_interfaces().iter().find(|interface| !interface_names.contains(interface)) {
        return Err(ProfileFactoryError::UnknownPtpInterface(interface.clone()));
    }

    if let Some(interface) = profile
        .network_config()
        .interface_configs()
        .keys()
        .find(|interface| !interface_names.contains(interface))
    {
        return Err(ProfileFactoryError::UnknownConfiguredInterface(interface.clone()));
    }

    for (&output, signal_types) in profile.output_signal_types() {
        if output == 0 || output > capabilities.max_outputs() {
            return Err(ProfileFactoryError::OutputOutOfRange {
                output,
                max_outputs: capabilities.max_outputs(),
            });
        }
        if signal_types.is_empty() {
            return Err(ProfileFactoryError::EmptySignalTypes(output));
        }
    }

    if let Some(output) = (1..=capabilities.max_outputs()).find(|output| !profile.output_signal_types().contains_key(output)) {
        return Err(ProfileFactoryError::MissingOutput(output));
    }

    if !profile.output_signal_types().is_empty() {
        let rules = profile.time_reference_rules();
        if matching_rule(rules, OFF_SIGNAL).is_none() {
            return Err(ProfileFactoryError::MissingTimeReferenceRule(OFF_SIGNAL));
        }

        let covers_irig_b = rules
            .iter()
            .any(|rule| matches!(rule.pattern(), TimeReferencePattern::Prefix(prefix) if IRIG_B_FAMILY.starts_with(prefix.as_str())));
        if !covers_irig_b {
            return Err(ProfileFactoryError::MissingTimeReferenceRule("IRIG-B*"));
        }
    }

    let timezone_data = profile.timezone_data();
    if timezone_data.timezone_count() != timezone_data.available_timezones().len() {
        return Err(ProfileFactoryError::TimezoneCountMismatch {
            declared: timezone_data.timezone_count(),
            available: timezone_data.available_timezones().len(),
        });
    }

    Ok(())
}

pub fn save_controls_from_json(json: &str) -> Result<SaveControlCatalog, ProfileFactoryError> {
    let serialized = serde_json::from_str::<SerializedSaveControls>(json)?;

    let series_3 = serialized
        .series_3
        .into_iter()
        .map(|(category, controls)| to_control_category(&category, controls).map(|controls| (category, controls)))
        .collect::<Result<_, _>>()?;

    let series_2 = SeriesTwoControls::new(serialized.series_2.generic, serialized.series_2.categories);
    Ok(SaveControlCatalog::new(series_2, series_3))
}

fn to_control_category(category: &str, serialized: SerializedControlCategory) -> Result<ControlCategory, ProfileFactoryError> {
    let default_entry = match serialized.fallback {
        Some(fallback) if serialized.entries.contains_key(&fallback) => fallback,
        Some(fallback) => {
            return Err(ProfileFactoryError::UnknownFallbackControl {
                category: category.to_owned(),
                fallback,
            });
        }
        None if serialized.entries.contains_key(GENERIC_ENTRY) => GENERIC_ENTRY.to_string(),
        None => return Err(ProfileFactoryError::MissingFallbackControl(category.to_owned())),
    };

    Ok(ControlCategory::new(serialized.entries, default_entry))
}

#[derive(Error, Debug)]
pub enum ProfileFactoryError {
    #[error("json deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("missing hardware model")]
    MissingHardwareModel,
    #[error("{declared} network interface(s) declared, but {named} named")]
    InterfaceCountMismatch { declared: usize, named: usize },
    #[error("ptp interface '{0}' is not a network interface of the device")]
    UnknownPtpInterface(String),
    #[error("network configuration for unknown interface '{0}'")]
    UnknownConfiguredInterface(String),
    #[error("output {output} is out of range, the device has {max_outputs} output(s)")]
    OutputOutOfRange { output: u8, max_outputs: u8 },
    #[error("output {0} has no signal types")]
    EmptySignalTypes(u8),
    #[error("output {0} has no signal type entry")]
    MissingOutput(u8),
    #[error("no time reference rule matches '{0}'")]
    MissingTimeReferenceRule(&'static str),
    #[error("timezone count is {declared}, but {available} timezone(s) are available")]
    TimezoneCountMismatch { declared: usize, available: usize },
    #[error("save control category '{0}' has neither a generic entry nor a fallback")]
    MissingFallbackControl(String),
    #[error("save control category '{category}' falls back to unknown entry '{fallback}'")]
    UnknownFallbackControl { category: String, fallback: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Series;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const FIXTURE: &str = include_str!("../../tests/resources/profiles/KRONOS-TEST-3X.json");

    fn fixture_with(pointer: &str, value: Value) -> String {
        let mut profile: Value = serde_json::from_str(FIXTURE).unwrap();
        *profile.pointer_mut(pointer).unwrap() = value;
        profile.to_string()
    }

    #[test]
    fn parses_a_valid_profile() -> Result<(), ProfileFactoryError> {
        let profile = from_json(FIXTURE)?;

        assert_eq!(profile.model(), "KRONOS-TEST-3X");
        assert_eq!(profile.device_info().series(), Series::Three);
        assert_eq!(profile.capabilities().ptp_interfaces(), &["eth1"]);
        assert_eq!(profile.signal_types_for(2), &["OFF", "IRIG-B000", "PPS"]);
        assert_eq!(profile.time_reference_rules().len(), 3);

        Ok(())
    }

    #[test]
    fn returns_an_error_for_invalid_json() {
        let result = from_json(r#"{ "device_info": "#);
        assert!(matches!(result, Err(ProfileFactoryError::Deserialization(_))));
    }

    #[test]
    fn returns_an_error_for_an_unsupported_series() {
        let result = from_json(include_str!("../../tests/resources/profiles/invalid/seriesFourProfile.json"));
        assert!(matches!(result, Err(ProfileFactoryError::Deserialization(_))));
    }

    #[test]
    fn returns_an_error_for_a_missing_hardware_model() {
        let result = from_json(&fixture_with("/device_info/hardware_model", json!("")));
        assert!(matches!(result, Err(ProfileFactoryError::MissingHardwareModel)));
    }

    #[test]
    fn returns_an_error_if_the_interface_count_does_not_match() {
        let result = from_json(&fixture_with("/capabilities/network_interfaces", json!(3)));
        assert!(matches!(result, Err(ProfileFactoryError::InterfaceCountMismatch { declared: 3, named: 2 })));
    }

    #[test]
    fn returns_an_error_for_an_unknown_ptp_interface() {
        let result = from_json(include_str!("../../tests/resources/profiles/invalid/unknownPtpInterfaceProfile.json"));
        assert!(matches!(result, Err(ProfileFactoryError::UnknownPtpInterface(interface)) if interface == "eth7"));
    }

    #[test]
    fn returns_an_error_for_network_config_of_an_unknown_interface() {
        let result = from_json(&fixture_with("/network_config/interface_configs", json!({ "eth5": ["ip"] })));
        assert!(matches!(result, Err(ProfileFactoryError::UnknownConfiguredInterface(interface)) if interface == "eth5"));
    }

    #[test]
    fn returns_an_error_for_an_output_beyond_max_outputs() {
        let result = from_json(&fixture_with("/capabilities/max_outputs", json!(1)));
        assert!(matches!(result, Err(ProfileFactoryError::OutputOutOfRange { output: 2, max_outputs: 1 })));
    }

    #[test]
    fn returns_an_error_for_output_zero() {
        let result = from_json(&fixture_with("/output_signal_types", json!({ "0": ["OFF"] })));
        assert!(matches!(result, Err(ProfileFactoryError::OutputOutOfRange { output: 0, max_outputs: 2 })));
    }

    #[test]
    fn returns_an_error_for_an_output_without_signal_types() {
        let result = from_json(&fixture_with("/output_signal_types/1", json!([])));
        assert!(matches!(result, Err(ProfileFactoryError::EmptySignalTypes(1))));
    }

    #[test]
    fn returns_an_error_for_an_output_without_an_entry() {
        let result = from_json(&fixture_with("/output_signal_types", json!({ "1": ["OFF"] })));
        assert!(matches!(result, Err(ProfileFactoryError::MissingOutput(2))));
    }

    #[test]
    fn returns_an_error_if_no_rule_matches_off() {
        let rules = json!([{ "pattern": "IRIG-B*", "references": ["UTC", "LOCAL"] }]);
        let result = from_json(&fixture_with("/time_reference_rules", rules));
        assert!(matches!(result, Err(ProfileFactoryError::MissingTimeReferenceRule("OFF"))));
    }

    #[test]
    fn returns_an_error_if_no_rule_covers_the_irig_b_family() {
        let rules = json!([
            { "pattern": "OFF", "references": ["UTC", "LOCAL"] },
            { "pattern": "IRIG-B120", "references": ["UTC", "LOCAL"] }
        ]);
        let result = from_json(&fixture_with("/time_reference_rules", rules));
        assert!(matches!(result, Err(ProfileFactoryError::MissingTimeReferenceRule("IRIG-B*"))));
    }

    #[test]
    fn a_profile_without_outputs_needs_no_rules() -> Result<(), ProfileFactoryError> {
        let mut profile: Value = serde_json::from_str(FIXTURE).unwrap();
        profile["capabilities"]["max_outputs"] = json!(0);
        profile["output_signal_types"] = json!({});
        profile["time_reference_rules"] = json!([]);

        let profile = from_json(&profile.to_string())?;
        assert!(profile.output_signal_types().is_empty());

        Ok(())
    }

    #[test]
    fn returns_an_error_if_the_timezone_count_does_not_match() {
        let result = from_json(&fixture_with("/timezone_data/timezone_count", json!(17)));
        assert!(matches!(result, Err(ProfileFactoryError::TimezoneCountMismatch { declared: 17, available: 2 })));
    }

    #[test]
    fn parses_the_save_control_catalog() -> Result<(), ProfileFactoryError> {
        let catalog = save_controls_from_json(include_str!("../../controls/save_controls.json"))?;

        assert_eq!(catalog.series_2().generic().selector(), "button#button_save");
        assert_eq!(
            catalog.series_3_categories().collect::<Vec<_>>(),
            vec!["general_configuration", "network_configuration", "outputs_configuration", "ptp_configuration", "time_configuration"]
        );
        assert_eq!(catalog.series_3_category("network_configuration").map(|c| c.default_entry_key()), Some("eth0"));
        assert_eq!(catalog.series_3_category("ptp_configuration").map(|c| c.default_entry_key()), Some("eth1"));
        assert_eq!(catalog.series_3_category("time_configuration").map(|c| c.default_entry_key()), Some("generic"));

        Ok(())
    }

    fn save_controls(category: Value) -> String {
        json!({
            "series_2": {
                "generic": {
                    "selector": "button#button_save",
                    "description": "Generic",
                    "section_fields": ["all_fields"],
                    "panel_expansion_required": false
                }
            },
            "series_3": { "ptp_configuration": category }
        })
        .to_string()
    }

    fn control(selector: &str) -> Value {
        json!({ "selector": selector, "description": selector, "section_fields": [], "panel_expansion_required": true })
    }

    #[test]
    fn returns_an_error_for_a_category_without_a_fallback() {
        let category = json!({ "entries": { "eth1": control("button#eth1") } });
        let result = save_controls_from_json(&save_controls(category));
        assert!(matches!(result, Err(ProfileFactoryError::MissingFallbackControl(category)) if category == "ptp_configuration"));
    }

    #[test]
    fn returns_an_error_for_a_fallback_to_an_unknown_entry() {
        let category = json!({ "entries": { "eth1": control("button#eth1") }, "fallback": "eth2" });
        let result = save_controls_from_json(&save_controls(category));
        assert!(matches!(
            result,
            Err(ProfileFactoryError::UnknownFallbackControl { category, fallback }) if category == "ptp_configuration" && fallback == "eth2"
        ));
    }

    #[test]
    fn an_explicit_fallback_is_kept_next_to_a_generic_entry() -> Result<(), ProfileFactoryError> {
        let category = json!({ "entries": { "generic": control("button#generic"), "eth1": control("button#eth1") }, "fallback": "eth1" });
        let catalog = save_controls_from_json(&save_controls(category))?;

        assert_eq!(catalog.series_3_category("ptp_configuration").map(|c| c.default_entry_key()), Some("eth1"));

        Ok(())
    }
}

use crate::capability_engine::defaults::UNKNOWN_SERIES_SAVE_DESCRIPTION;
use crate::domain::save_controls::GENERIC_ENTRY;
use crate::domain::{ControlDescriptor, SaveControlCatalog, Series};
use std::borrow::Cow;
use tracing::debug;

/// Resolves the save control for a configuration category, degrading to a generic control instead of failing.
///
/// Series 2 uses the category's control or the shared generic one. Series 3 tries the requested interface,
/// then the category's `generic` entry, then the entry the category names as its default. Unknown categories
/// and unknown series get a constructed generic descriptor.
pub fn resolve_save_control<'a>(
    catalog: &'a SaveControlCatalog,
    series: Series,
    category: &str,
    interface: Option<&str>,
) -> Cow<'a, ControlDescriptor> {
    match series {
        Series::Two => Cow::Borrowed(catalog.series_2().category(category).unwrap_or_else(|| catalog.series_2().generic())),
        Series::Three => {
            let Some(controls) = catalog.series_3_category(category) else {
                debug!(category, "🔎 No series 3 save controls for category, using a generic save button");
                return Cow::Owned(ControlDescriptor::generic(format!("Generic save button for {}", category)));
            };

            let interface_control = interface.filter(|interface| !interface.is_empty()).and_then(|interface| controls.entry(interface));
            if let Some(control) = interface_control {
                return Cow::Borrowed(control);
            }

            match controls.entry(GENERIC_ENTRY).or_else(|| controls.default_entry()) {
                Some(control) => {
                    debug!(category, interface, "🔎 Using default save control '{}'", control.selector());
                    Cow::Borrowed(control)
                }
                None => Cow::Owned(ControlDescriptor::generic(format!("Generic save button for {}", category))),
            }
        }
        Series::Unknown => Cow::Owned(ControlDescriptor::generic(UNKNOWN_SERIES_SAVE_DESCRIPTION.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile_loader::save_controls_from_json;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> SaveControlCatalog {
        save_controls_from_json(include_str!("../../controls/save_controls.json")).unwrap()
    }

    #[rstest]
    #[case::network_eth1("network_configuration", Some("eth1"), "button#button_save_port_eth1", false)]
    #[case::network_eth4("network_configuration", Some("eth4"), "button#button_save_port_eth4", false)]
    #[case::ptp_eth2("ptp_configuration", Some("eth2"), "button#button_save_port_eth2", true)]
    #[case::network_unknown_interface("network_configuration", Some("eth9"), "button#button_save_port_eth0", false)]
    #[case::network_without_interface("network_configuration", None, "button#button_save_port_eth0", false)]
    #[case::network_empty_interface("network_configuration", Some(""), "button#button_save_port_eth0", false)]
    #[case::ptp_without_interface("ptp_configuration", None, "button#button_save_port_eth1", true)]
    #[case::ptp_management_interface("ptp_configuration", Some("eth0"), "button#button_save_port_eth1", true)]
    #[case::time_with_interface("time_configuration", Some("eth1"), "button#button_save", false)]
    #[case::outputs("outputs_configuration", None, "button#button_save", false)]
    fn series_3(catalog: SaveControlCatalog, #[case] category: &str, #[case] interface: Option<&str>, #[case] selector: &str, #[case] expansion: bool) {
        let control = resolve_save_control(&catalog, Series::Three, category, interface);

        assert_eq!(control.selector(), selector);
        assert_eq!(control.panel_expansion_required(), expansion);
    }

    #[rstest]
    fn series_3_interface_entry_carries_its_fields(catalog: SaveControlCatalog) {
        let control = resolve_save_control(&catalog, Series::Three, "ptp_configuration", Some("eth3"));

        assert_eq!(control.description(), "Save button for eth3 PTP settings");
        assert_eq!(control.section_fields(), &["ptp_profile", "domain", "priority", "transport", "multicast"]);
        assert!(matches!(control, Cow::Borrowed(_)));
    }

    #[rstest]
    fn series_3_unknown_category_is_synthesized(catalog: SaveControlCatalog) {
        let control = resolve_save_control(&catalog, Series::Three, "snmp_configuration", Some("eth1"));

        assert_eq!(
            control.into_owned(),
            ControlDescriptor::new(
                "button#button_save".to_string(),
                "Generic save button for snmp_configuration".to_string(),
                vec!["all_fields".to_string()],
                false,
            )
        );
    }

    #[rstest]
    #[case::network("network_configuration", Some("eth1"))]
    #[case::ptp("ptp_configuration", None)]
    #[case::unknown("anything", None)]
    fn series_2_always_uses_the_generic_control(catalog: SaveControlCatalog, #[case] category: &str, #[case] interface: Option<&str>) {
        let control = resolve_save_control(&catalog, Series::Two, category, interface);

        assert_eq!(control.selector(), "button#button_save");
        assert_eq!(control.description(), "Generic save button for all Series 2 configurations");
        assert_eq!(control.section_fields(), &["all_fields"]);
    }

    #[rstest]
    fn unknown_series_gets_the_fallback_control(catalog: SaveControlCatalog) {
        let control = resolve_save_control(&catalog, Series::Unknown, "network_configuration", Some("eth1"));

        assert_eq!(control.selector(), "button#button_save");
        assert_eq!(control.description(), "Generic fallback save button");
        assert!(!control.panel_expansion_required());
        assert!(matches!(control, Cow::Owned(_)));
    }
}

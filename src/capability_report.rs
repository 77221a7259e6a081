use kronos_capabilities::CapabilityRegistry;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// What the report binary prints per model.
#[derive(Debug, PartialEq, Serialize)]
pub struct CapabilityReport<'a> {
    model: &'a str,
    known: bool,
    series: u8,
    max_outputs: u8,
    ptp_interfaces: &'a [String],
    sections: &'static [&'static str],
    timeout_multiplier: f64,
    #[serde(with = "humantime_serde")]
    scaled_timeout: Duration,
}

impl<'a> CapabilityReport<'a> {
    pub fn new(registry: &'a CapabilityRegistry, model: &'a str, base_timeout: Duration) -> Self {
        CapabilityReport {
            model,
            known: registry.is_known_model(model),
            series: registry.series(model).as_number(),
            max_outputs: registry.max_outputs(model),
            ptp_interfaces: registry.ptp_interfaces(model),
            sections: registry.available_sections(model),
            timeout_multiplier: registry.timeout_multiplier(model),
            scaled_timeout: registry.scaled_timeout(model, base_timeout),
        }
    }

    pub fn log(&self) {
        if !self.known {
            warn!("⚠️ '{}' is not a known model, reporting defaults", self.model);
        }

        info!(
            "📟 {}: series {}, {} outputs, ptp on [{}], sections [{}], timeout ×{} ({:?})",
            self.model,
            self.series,
            self.max_outputs,
            self.ptp_interfaces.join(", "),
            self.sections.join(", "),
            self.timeout_multiplier,
            self.scaled_timeout
        );
    }
}

/// Reports for the requested models, or for every known model when none are requested.
pub fn build_reports<'a>(registry: &'a CapabilityRegistry, models: &'a [String], base_timeout: Duration) -> Vec<CapabilityReport<'a>> {
    if models.is_empty() {
        registry
            .all_models()
            .into_iter()
            .map(|model| CapabilityReport::new(registry, model, base_timeout))
            .collect()
    } else {
        models.iter().map(|model| CapabilityReport::new(registry, model, base_timeout)).collect()
    }
}

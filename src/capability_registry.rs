use crate::capability_engine::defaults::{DEFAULT_TIMEOUT_MULTIPLIER, is_placeholder_model};
use crate::capability_engine::{available_sections, default_gnss_patterns, derive_gnss_patterns, expected_time_refs, issue_tags, resolve_save_control, timeout_multiplier};
use crate::domain::{
    BehaviorData, Capabilities, ControlDescriptor, DeviceInfo, DeviceProfile, GnssPatterns, IssueTag, NetworkConfig, PerformanceBaseline,
    SaveControlCatalog, Series, TimeReference, TimeReferenceRule, TimezoneData,
};
use crate::profile_loader::{LoaderError, ProfileSource, builtin_profiles, builtin_save_controls, load_save_controls_from};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Read-only knowledge base of per-model facts. Every query is infallible: an unknown model answers with the
/// empty profile, so lists are empty, counts are zero and resolvers degrade to their generic answers.
#[derive(Debug)]
pub struct CapabilityRegistry {
    profiles: Vec<DeviceProfile>,
    by_model: HashMap<String, usize>,
    save_controls: SaveControlCatalog,
    empty: DeviceProfile,
}

impl CapabilityRegistry {
    pub fn new(profiles: Vec<DeviceProfile>, save_controls: SaveControlCatalog) -> Result<Self, RegistryError> {
        let mut by_model = HashMap::with_capacity(profiles.len());
        for (index, profile) in profiles.iter().enumerate() {
            if by_model.insert(profile.model().to_string(), index).is_some() {
                return Err(RegistryError::DuplicateModel(profile.model().to_string()));
            }
        }

        Ok(CapabilityRegistry {
            profiles,
            by_model,
            save_controls,
            empty: DeviceProfile::default(),
        })
    }

    /// Builds a registry from the catalog compiled into the crate.
    pub fn builtin() -> Result<Self, RegistryError> {
        info!("📚 Building builtin capability registry...");
        let registry = CapabilityRegistry::new(builtin_profiles()?, builtin_save_controls()?)?;
        info!("📚 Building builtin capability registry... OK, {} models", registry.len());
        Ok(registry)
    }

    /// Builds a registry from `source`, with the save control table at `save_controls` or the builtin one.
    pub async fn from_source(source: &dyn ProfileSource, save_controls: Option<&Path>) -> Result<Self, RegistryError> {
        info!("📚 Building capability registry from {}...", source.describe());
        let profiles = source.load().await?;
        let save_controls = match save_controls {
            Some(path) => load_save_controls_from(path).await?,
            None => builtin_save_controls()?,
        };

        let registry = CapabilityRegistry::new(profiles, save_controls)?;
        info!("📚 Building capability registry from {}... OK, {} models", source.describe(), registry.len());
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Known models in the order their profiles were supplied.
    pub fn all_models(&self) -> Vec<&str> {
        self.profiles.iter().map(DeviceProfile::model).collect()
    }

    pub fn is_known_model(&self, model: &str) -> bool {
        self.by_model.contains_key(model)
    }

    /// The profile of `model`, or the empty profile when the model is unknown.
    pub fn profile(&self, model: &str) -> &DeviceProfile {
        match self.by_model.get(model) {
            Some(&index) => &self.profiles[index],
            None => {
                debug!(model, "🔎 Unknown model, answering with the empty profile");
                &self.empty
            }
        }
    }

    pub fn save_controls(&self) -> &SaveControlCatalog {
        &self.save_controls
    }

    // Device info and capabilities

    pub fn device_info(&self, model: &str) -> &DeviceInfo {
        self.profile(model).device_info()
    }

    pub fn series(&self, model: &str) -> Series {
        self.device_info(model).series()
    }

    pub fn capabilities(&self, model: &str) -> &Capabilities {
        self.profile(model).capabilities()
    }

    pub fn has_capability(&self, model: &str, capability: &str) -> bool {
        self.capabilities(model).is_present(capability)
    }

    pub fn is_ptp_supported(&self, model: &str) -> bool {
        self.capabilities(model).ptp_supported()
    }

    pub fn max_outputs(&self, model: &str) -> u8 {
        self.capabilities(model).max_outputs()
    }

    pub fn network_interfaces(&self, model: &str) -> &[String] {
        self.capabilities(model).interface_names()
    }

    pub fn ptp_interfaces(&self, model: &str) -> &[String] {
        self.capabilities(model).ptp_interfaces()
    }

    pub fn gnss_constellations(&self, model: &str) -> &[String] {
        self.capabilities(model).gnss_constellations()
    }

    // Network and performance

    pub fn network_config(&self, model: &str) -> &NetworkConfig {
        self.profile(model).network_config()
    }

    pub fn interface_fields(&self, model: &str, interface: &str) -> &[String] {
        self.network_config(model).fields_for(interface)
    }

    pub fn performance_baseline(&self, model: &str) -> &PerformanceBaseline {
        self.profile(model).performance_baseline()
    }

    pub fn session_timeout(&self, model: &str) -> Duration {
        self.performance_baseline(model).session_timeout()
    }

    // Known issues

    pub fn known_issues(&self, model: &str) -> &[String] {
        self.profile(model).known_issues()
    }

    pub fn issue_tags(&self, model: &str) -> Vec<IssueTag> {
        issue_tags(self.known_issues(model))
    }

    /// Scale factor for base timeouts. Absent and placeholder models get the neutral multiplier.
    pub fn timeout_multiplier<'a>(&self, model: impl Into<Option<&'a str>>) -> f64 {
        let model = model.into();
        match model {
            Some(model) if !is_placeholder_model(Some(model)) => timeout_multiplier(self.known_issues(model)),
            _ => DEFAULT_TIMEOUT_MULTIPLIER,
        }
    }

    /// `base` scaled by the timeout multiplier, saturating at `Duration::MAX`.
    pub fn scaled_timeout<'a>(&self, model: impl Into<Option<&'a str>>, base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() * self.timeout_multiplier(model)).unwrap_or(Duration::MAX)
    }

    // Outputs and time references

    pub fn output_signal_types(&self, model: &str, output: u8) -> &[String] {
        self.profile(model).signal_types_for(output)
    }

    /// Whether `signal_type` can be selected on `output`.
    pub fn validate_device_config(&self, model: &str, output: u8, signal_type: &str) -> bool {
        self.output_signal_types(model, output).iter().any(|available| available == signal_type)
    }

    pub fn time_reference_rules(&self, model: &str) -> &[TimeReferenceRule] {
        self.profile(model).time_reference_rules()
    }

    pub fn expected_time_refs(&self, model: &str, signal_type: &str) -> &[TimeReference] {
        expected_time_refs(self.time_reference_rules(model), signal_type)
    }

    // Timezones

    pub fn timezone_data(&self, model: &str) -> &TimezoneData {
        self.profile(model).timezone_data()
    }

    pub fn available_timezones(&self, model: &str) -> &[String] {
        self.timezone_data(model).available_timezones()
    }

    pub fn timezone_mapping(&self, model: &str) -> &BTreeMap<String, String> {
        self.timezone_data(model).timezone_mapping()
    }

    pub fn timezone_count(&self, model: &str) -> usize {
        self.timezone_data(model).timezone_count()
    }

    pub fn is_utc_included(&self, model: &str) -> bool {
        self.timezone_data(model).includes_utc()
    }

    pub fn validate_timezone_selection(&self, model: &str, timezone: &str) -> bool {
        self.timezone_data(model).is_available(timezone)
    }

    /// Canonical identifier for a display name shown in the timezone dropdown.
    pub fn resolve_timezone_alias(&self, model: &str, display_name: &str) -> Option<&str> {
        self.timezone_data(model).canonical_name(display_name)
    }

    // Behavior data

    pub fn behavior_data(&self, model: &str) -> &BehaviorData {
        self.profile(model).behavior_data()
    }

    pub fn authentication_workflow(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).authentication_workflow()
    }

    pub fn navigation_patterns(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).navigation_patterns()
    }

    pub fn state_transition_timing(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).state_transition_timing()
    }

    pub fn dynamic_ui_behaviors(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).dynamic_ui_behaviors()
    }

    pub fn satellite_loading_behavior(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).satellite_loading_behavior()
    }

    pub fn performance_expectations(&self, model: &str) -> &Map<String, Value> {
        self.behavior_data(model).performance_expectations()
    }

    /// A nested behavior value, e.g. `["state_transition_timing", "login_to_dashboard", "duration"]`.
    pub fn behavior_value(&self, model: &str, path: &[&str]) -> Option<&Value> {
        self.behavior_data(model).lookup(path)
    }

    // Derived answers

    /// The save control for a configuration category, optionally for one network interface.
    pub fn save_control(&self, model: &str, category: &str, interface: Option<&str>) -> Cow<'_, ControlDescriptor> {
        resolve_save_control(&self.save_controls, self.series(model), category, interface)
    }

    /// GNSS page conventions, recomputed on every call. Models without a profile get the default patterns.
    pub fn gnss_patterns<'a>(&self, model: impl Into<Option<&'a str>>) -> GnssPatterns {
        match model.into().and_then(|model| self.by_model.get(model)) {
            Some(&index) => {
                let profile = &self.profiles[index];
                derive_gnss_patterns(profile.capabilities().gnss_constellations(), profile.device_info().series())
            }
            None => default_gnss_patterns(),
        }
    }

    pub fn available_sections<'a>(&self, model: impl Into<Option<&'a str>>) -> &'static [&'static str] {
        let series = match model.into() {
            Some(model) if !is_placeholder_model(Some(model)) => self.series(model),
            _ => Series::Unknown,
        };
        available_sections(series)
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Model '{0}' is defined more than once")]
    DuplicateModel(String),
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

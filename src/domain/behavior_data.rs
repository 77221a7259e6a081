use crate::capability_engine::resolve_path;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Observed UI timings and workflows. Opaque lookup data, never interpreted by the engine.
#[derive(Clone, Default, Debug, PartialEq, Deserialize)]
pub struct BehaviorData {
    #[serde(default)]
    authentication_workflow: Map<String, Value>,
    #[serde(default)]
    navigation_patterns: Map<String, Value>,
    #[serde(default)]
    state_transition_timing: Map<String, Value>,
    #[serde(default)]
    dynamic_ui_behaviors: Map<String, Value>,
    #[serde(default)]
    satellite_loading_behavior: Map<String, Value>,
    #[serde(default)]
    performance_expectations: Map<String, Value>,
}

impl BehaviorData {
    pub fn authentication_workflow(&self) -> &Map<String, Value> {
        &self.authentication_workflow
    }

    pub fn navigation_patterns(&self) -> &Map<String, Value> {
        &self.navigation_patterns
    }

    pub fn state_transition_timing(&self) -> &Map<String, Value> {
        &self.state_transition_timing
    }

    pub fn dynamic_ui_behaviors(&self) -> &Map<String, Value> {
        &self.dynamic_ui_behaviors
    }

    pub fn satellite_loading_behavior(&self) -> &Map<String, Value> {
        &self.satellite_loading_behavior
    }

    pub fn performance_expectations(&self) -> &Map<String, Value> {
        &self.performance_expectations
    }

    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        match name {
            "authentication_workflow" => Some(&self.authentication_workflow),
            "navigation_patterns" => Some(&self.navigation_patterns),
            "state_transition_timing" => Some(&self.state_transition_timing),
            "dynamic_ui_behaviors" => Some(&self.dynamic_ui_behaviors),
            "satellite_loading_behavior" => Some(&self.satellite_loading_behavior),
            "performance_expectations" => Some(&self.performance_expectations),
            _ => None,
        }
    }

    /// Looks up a nested value, the first path segment naming the section.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (section, rest) = path.split_first()?;
        resolve_path(self.section(section)?, rest)
    }
}

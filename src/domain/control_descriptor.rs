use crate::capability_engine::defaults::{ALL_FIELDS, GENERIC_SAVE_SELECTOR};
use serde::{Deserialize, Serialize};

/// A resolved save control: what to click and which fields the click commits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControlDescriptor {
    selector: String,
    description: String,
    section_fields: Vec<String>,
    panel_expansion_required: bool,
}

impl ControlDescriptor {
    pub fn new(selector: String, description: String, section_fields: Vec<String>, panel_expansion_required: bool) -> Self {
        ControlDescriptor {
            selector,
            description,
            section_fields,
            panel_expansion_required,
        }
    }

    /// The generic save button covering every field of a page.
    pub fn generic(description: String) -> Self {
        ControlDescriptor::new(GENERIC_SAVE_SELECTOR.to_string(), description, vec![ALL_FIELDS.to_string()], false)
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn section_fields(&self) -> &[String] {
        &self.section_fields
    }

    pub fn panel_expansion_required(&self) -> bool {
        self.panel_expansion_required
    }
}

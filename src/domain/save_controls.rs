use crate::domain::ControlDescriptor;
use std::collections::BTreeMap;

pub const GENERIC_ENTRY: &str = "generic";

/// Save controls of every series, keyed by configuration category.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveControlCatalog {
    series_2: SeriesTwoControls,
    series_3: BTreeMap<String, ControlCategory>,
}

impl SaveControlCatalog {
    pub fn new(series_2: SeriesTwoControls, series_3: BTreeMap<String, ControlCategory>) -> Self {
        SaveControlCatalog { series_2, series_3 }
    }

    pub fn series_2(&self) -> &SeriesTwoControls {
        &self.series_2
    }

    pub fn series_3_category(&self, category: &str) -> Option<&ControlCategory> {
        self.series_3.get(category)
    }

    pub fn series_3_categories(&self) -> impl Iterator<Item = &str> {
        self.series_3.keys().map(String::as_str)
    }
}

/// Series 2 devices have a single interface and mostly share one save button.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesTwoControls {
    generic: ControlDescriptor,
    categories: BTreeMap<String, ControlDescriptor>,
}

impl SeriesTwoControls {
    pub fn new(generic: ControlDescriptor, categories: BTreeMap<String, ControlDescriptor>) -> Self {
        SeriesTwoControls { generic, categories }
    }

    pub fn generic(&self) -> &ControlDescriptor {
        &self.generic
    }

    pub fn category(&self, category: &str) -> Option<&ControlDescriptor> {
        self.categories.get(category)
    }
}

/// Per-interface save controls of one series 3 category. `default_entry` names the control used when
/// neither the requested interface nor a `generic` entry exists.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlCategory {
    entries: BTreeMap<String, ControlDescriptor>,
    default_entry: String,
}

impl ControlCategory {
    /// `default_entry` must name one of `entries`; the factory guarantees it.
    pub fn new(entries: BTreeMap<String, ControlDescriptor>, default_entry: String) -> Self {
        ControlCategory { entries, default_entry }
    }

    pub fn entry(&self, key: &str) -> Option<&ControlDescriptor> {
        self.entries.get(key)
    }

    pub fn default_entry_key(&self) -> &str {
        &self.default_entry
    }

    pub fn default_entry(&self) -> Option<&ControlDescriptor> {
        self.entries.get(&self.default_entry)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

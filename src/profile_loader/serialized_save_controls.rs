use crate::domain::ControlDescriptor;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct SerializedSaveControls {
    pub(crate) series_2: SerializedSeriesTwoControls,
    #[serde(default)]
    pub(crate) series_3: BTreeMap<String, SerializedControlCategory>,
}

#[derive(Debug, Deserialize)]
pub struct SerializedSeriesTwoControls {
    pub(crate) generic: ControlDescriptor,
    #[serde(default)]
    pub(crate) categories: BTreeMap<String, ControlDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct SerializedControlCategory {
    pub(crate) entries: BTreeMap<String, ControlDescriptor>,
    pub(crate) fallback: Option<String>,
}

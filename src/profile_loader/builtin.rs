use crate::domain::{DeviceProfile, SaveControlCatalog};
use crate::profile_loader::LoaderError;
use crate::profile_loader::factory::{from_json, save_controls_from_json};
use std::path::PathBuf;

/// The shipped catalog, in the order models were first characterised.
const BUILTIN_PROFILES: [(&str, &str); 5] = [
    ("KRONOS-2R-HVXX-A2F.json", include_str!("../../profiles/KRONOS-2R-HVXX-A2F.json")),
    ("KRONOS-2P-HV-2.json", include_str!("../../profiles/KRONOS-2P-HV-2.json")),
    ("KRONOS-3R-HVLV-TCXO-A2F.json", include_str!("../../profiles/KRONOS-3R-HVLV-TCXO-A2F.json")),
    ("KRONOS-3R-HVXX-TCXO-44A.json", include_str!("../../profiles/KRONOS-3R-HVXX-TCXO-44A.json")),
    ("KRONOS-3R-HVXX-TCXO-A2X.json", include_str!("../../profiles/KRONOS-3R-HVXX-TCXO-A2X.json")),
];

const BUILTIN_SAVE_CONTROLS: (&str, &str) = ("save_controls.json", include_str!("../../controls/save_controls.json"));

pub fn builtin_profiles() -> Result<Vec<DeviceProfile>, LoaderError> {
    BUILTIN_PROFILES
        .iter()
        .map(|(file_name, json)| {
            from_json(json).map_err(|source| LoaderError::ProfileFactory {
                source,
                path: PathBuf::from(file_name),
            })
        })
        .collect()
}

pub fn builtin_save_controls() -> Result<SaveControlCatalog, LoaderError> {
    let (file_name, json) = BUILTIN_SAVE_CONTROLS;
    save_controls_from_json(json).map_err(|source| LoaderError::ProfileFactory {
        source,
        path: PathBuf::from(file_name),
    })
}

use crate::domain::DeviceProfile;
use crate::profile_loader::builtin::builtin_profiles;
use crate::profile_loader::{LoaderError, load_profiles_from};
use async_trait::async_trait;
use std::fmt::Debug;

/// Where a registry gets its device profiles from.
#[async_trait]
pub trait ProfileSource: Debug + Send + Sync {
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<DeviceProfile>, LoaderError>;
}

/// The catalog compiled into the crate.
#[derive(Debug, Default)]
pub struct BuiltinProfiles;

#[async_trait]
impl ProfileSource for BuiltinProfiles {
    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }

    async fn load(&self) -> Result<Vec<DeviceProfile>, LoaderError> {
        builtin_profiles()
    }
}

/// Profile files in a directory, e.g. alternate fixtures for a lab device.
#[derive(Debug)]
pub struct DirectoryProfiles {
    directory: String,
    extension: String,
}

impl DirectoryProfiles {
    pub fn new(directory: impl Into<String>, extension: impl Into<String>) -> Self {
        DirectoryProfiles {
            directory: directory.into(),
            extension: extension.into(),
        }
    }
}

#[async_trait]
impl ProfileSource for DirectoryProfiles {
    fn describe(&self) -> String {
        format!("'*.{}' files in '{}'", self.extension, self.directory)
    }

    async fn load(&self) -> Result<Vec<DeviceProfile>, LoaderError> {
        load_profiles_from(&self.directory, &self.extension).await
    }
}

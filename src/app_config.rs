use config::{Config, ConfigError};
use kronos_capabilities::profile_loader::{BuiltinProfiles, DirectoryProfiles, ProfileSource};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    registry: RegistryConfig,
    report: ReportConfig,
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("KRONOS").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn registry(&self) -> &RegistryConfig {
        &self.registry
    }

    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Builtin,
    Directory,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    source: SourceKind,
    #[serde(default = "default_profiles_directory")]
    profiles_directory: String,
    #[serde(default = "default_extension")]
    extension: String,
    save_controls: Option<String>,
}

fn default_profiles_directory() -> String {
    "profiles".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

impl RegistryConfig {
    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn profile_source(&self) -> Box<dyn ProfileSource> {
        match self.source {
            SourceKind::Builtin => Box::new(BuiltinProfiles),
            SourceKind::Directory => Box::new(DirectoryProfiles::new(&self.profiles_directory, &self.extension)),
        }
    }

    /// Save control table to load instead of the builtin one.
    pub fn save_controls(&self) -> Option<&Path> {
        self.save_controls.as_deref().map(Path::new)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    models: Vec<String>,
    #[serde(with = "humantime_serde")]
    base_timeout: Duration,
    #[serde(default)]
    json: bool,
}

impl ReportConfig {
    /// Models to report on. Empty means every known model.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn base_timeout(&self) -> Duration {
        self.base_timeout
    }

    pub fn json(&self) -> bool {
        self.json
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    level: String,
}

impl LoggingConfig {
    /// Falls back to INFO for unrecognised levels.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                registry: RegistryConfig {
                    source: SourceKind::Builtin,
                    profiles_directory: default_profiles_directory(),
                    extension: default_extension(),
                    save_controls: None,
                },
                report: ReportConfig {
                    models: Vec::new(),
                    base_timeout: Duration::from_secs(10),
                    json: false,
                },
                logging: LoggingConfig { level: "info".to_string() },
            },
        }
    }

    pub fn profiles_directory(mut self, directory: String) -> Self {
        self.config.registry.source = SourceKind::Directory;
        self.config.registry.profiles_directory = directory;
        self
    }

    pub fn save_controls(mut self, path: String) -> Self {
        self.config.registry.save_controls = Some(path);
        self
    }

    pub fn models(mut self, models: Vec<String>) -> Self {
        self.config.report.models = models;
        self
    }

    pub fn base_timeout(mut self, base_timeout: Duration) -> Self {
        self.config.report.base_timeout = base_timeout;
        self
    }

    pub fn logging_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

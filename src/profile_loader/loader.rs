use crate::domain::{DeviceProfile, SaveControlCatalog};
use crate::profile_loader::factory::{ProfileFactoryError, from_json, save_controls_from_json};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads every profile file in `directory`, sorted by model. Files that fail to load are logged and skipped.
#[instrument]
pub async fn load_profiles_from(directory: &str, extension: &str) -> Result<Vec<DeviceProfile>, LoaderError> {
    info!("📁 Loading device profiles...");
    let files = list_files(directory, extension)
        .await
        .map_err(|source| LoaderError::Io { source, path: None })?;
    let file_count = files.len();

    let mut profiles = files
        .into_iter()
        .map(load_profile)
        .collect::<FuturesUnordered<_>>()
        .filter_map(|result| result.inspect_err(LoaderError::log).ok())
        .collect::<Vec<_>>()
        .await;
    profiles.sort_by(|a, b| a.model().cmp(b.model()));

    info!(
        "📁 Loading device profiles... OK, {} loaded, {} failed",
        profiles.len(),
        file_count - profiles.len()
    );
    Ok(profiles)
}

#[instrument]
pub async fn load_save_controls_from(path: &Path) -> Result<SaveControlCatalog, LoaderError> {
    info!("📁 Loading save controls...");
    let catalog = parse_file(path.to_path_buf(), save_controls_from_json).await?;
    info!("📁 Loading save controls... OK");
    Ok(catalog)
}

async fn load_profile(path: PathBuf) -> Result<DeviceProfile, LoaderError> {
    parse_file(path, from_json).await
}

/// Reads `path` and hands its content to `parse` on a blocking thread.
async fn parse_file<T: Send + 'static>(path: PathBuf, parse: fn(&str) -> Result<T, ProfileFactoryError>) -> Result<T, LoaderError> {
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(source) => return Err(LoaderError::Io { source, path: Some(path) }),
    };

    task::spawn_blocking(move || parse(&content).map_err(|source| LoaderError::ProfileFactory { source, path })).await?
}

/// Regular files in `directory` with the given extension, in path order.
#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = ReadDirStream::new(fs::read_dir(directory).await?)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                warn!("⚠️ Unable to read directory entry: {}", err);
                None
            }
        })
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect::<Vec<_>>()
        .await;

    files.sort();
    Ok(files)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    ProfileFactory { source: ProfileFactoryError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

impl LoaderError {
    /// The file that failed to load, if the error concerns a single file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoaderError::ProfileFactory { path, .. } => Some(path),
            LoaderError::Io { path, .. } => path.as_deref(),
            LoaderError::JoinError(_) => None,
        }
    }

    fn log(&self) {
        match self.path().and_then(Path::file_name) {
            Some(file_name) => warn!("⚠️ Failed to load '{}': {}", file_name.to_string_lossy(), self),
            None => warn!("⚠️ {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use test_log::test;

    fn resource(path: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), path))
    }

    #[tokio::test]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let directory = temp_dir().join("kronos-capabilities-list-files");
        let _ = fs::remove_dir_all(&directory).await;
        fs::create_dir_all(directory.join("nested.json")).await?;

        let file1 = directory.join("profile.json");
        let file2 = directory.join("no_profile.txt");
        let file3 = directory.join("profile2.json");

        fs::write(&file1, "{}").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "{}").await?;

        let files = list_files(directory.to_string_lossy().as_ref(), "json").await?;
        let string_file_names = files.iter().map(|e| e.to_string_lossy()).collect::<Vec<_>>();

        assert_eq!(
            string_file_names,
            vec![file1.to_string_lossy().into_owned(), file3.to_string_lossy().into_owned()]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_profile_returns_a_profile_for_a_valid_profile_file() {
        let path = resource("profiles/KRONOS-TEST-3X.json");
        assert!(path.is_file(), "expected path to be a file");

        match load_profile(path).await {
            Ok(profile) => assert_eq!(profile.model(), "KRONOS-TEST-3X"),
            Err(err) => panic!("Expected a profile, found {:?}", err),
        }
    }

    #[test(tokio::test)]
    async fn load_profile_returns_an_error_for_an_invalid_profile_file() {
        let path = resource("profiles/invalid/unknownPtpInterfaceProfile.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = load_profile(path.clone()).await;
        assert_eq!(result.as_ref().err().and_then(LoaderError::path), Some(path.as_path()));
        assert!(matches!(
            &result,
            Err(LoaderError::ProfileFactory {
                source: ProfileFactoryError::UnknownPtpInterface(_),
                path: _
            })
        ));
    }

    #[test(tokio::test)]
    async fn load_profile_returns_an_error_for_a_missing_file() {
        let result = load_profile(resource("profiles/missing.json")).await;
        assert!(matches!(&result, Err(LoaderError::Io { source: _, path: Some(_) })));
    }

    #[test(tokio::test)]
    async fn load_profiles_from_skips_invalid_files_and_other_extensions() -> Result<(), LoaderError> {
        let directory = resource("profiles/invalid");
        let profiles = load_profiles_from(directory.to_string_lossy().as_ref(), "json").await?;
        assert!(profiles.is_empty());

        let directory = resource("profiles");
        let profiles = load_profiles_from(directory.to_string_lossy().as_ref(), "json").await?;
        assert_eq!(profiles.iter().map(DeviceProfile::model).collect::<Vec<_>>(), vec!["KRONOS-TEST-3X"]);

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_profiles_from_loads_the_shipped_catalog_in_model_order() -> Result<(), LoaderError> {
        let directory = format!("{}/profiles", env!("CARGO_MANIFEST_DIR"));
        let profiles = load_profiles_from(&directory, "json").await?;

        assert_eq!(
            profiles.iter().map(DeviceProfile::model).collect::<Vec<_>>(),
            vec![
                "KRONOS-2P-HV-2",
                "KRONOS-2R-HVXX-A2F",
                "KRONOS-3R-HVLV-TCXO-A2F",
                "KRONOS-3R-HVXX-TCXO-44A",
                "KRONOS-3R-HVXX-TCXO-A2X"
            ]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_profiles_from_fails_for_a_missing_directory() {
        let result = load_profiles_from("/definitely/not/a/profile/directory", "json").await;
        assert!(matches!(result, Err(LoaderError::Io { source: _, path: None })));
    }

    #[test(tokio::test)]
    async fn load_save_controls_from_parses_the_shipped_table() -> Result<(), LoaderError> {
        let path = PathBuf::from(format!("{}/controls/save_controls.json", env!("CARGO_MANIFEST_DIR")));
        let catalog = load_save_controls_from(&path).await?;

        assert_eq!(catalog.series_2().generic().selector(), "button#button_save");

        Ok(())
    }
}

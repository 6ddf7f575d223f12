//! Storage for the settings document.

use std::{
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{Error, settings::Settings};

/// Loads and saves the single settings document.
///
/// Implementations hand out an owned copy on every [SettingsStore::load], so
/// callers edit their own copy and write the whole document back with
/// [SettingsStore::save].
pub trait SettingsStore: Debug + Send + Sync {
    /// Get the saved settings, or [Settings::default] if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns [Error::SettingsReadError] if the stored document cannot be read.
    fn load(&self) -> Result<Settings, Error>;

    /// Replace the saved settings with `settings`.
    ///
    /// # Errors
    ///
    /// Returns [Error::SettingsWriteError] if the document cannot be written.
    /// A failed save leaves the previous document in place.
    fn save(&self, settings: &Settings) -> Result<(), Error>;
}

/// Keeps the settings as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store backed by the JSON document at `path`.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The location of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(error) => {
                tracing::error!("could not read {}: {error}", self.path.display());
                return Err(Error::SettingsReadError(error.to_string()));
            }
        };

        serde_json::from_str(&text)
            .inspect_err(|error| {
                tracing::error!("could not parse {}: {error}", self.path.display())
            })
            .map_err(|error| Error::SettingsReadError(error.to_string()))
    }

    fn save(&self, settings: &Settings) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(settings)
            .map_err(|error| Error::SettingsWriteError(error.to_string()))?;

        // The old document must stay intact if the write fails.
        let staging_path = self.staging_path();

        fs::write(&staging_path, text)
            .and_then(|_| fs::rename(&staging_path, &self.path))
            .map_err(|error| {
                tracing::error!("could not write {}: {error}", self.path.display());
                let _ = fs::remove_file(&staging_path);
                Error::SettingsWriteError(error.to_string())
            })
    }
}

/// Keeps the settings in memory, e.g. for tests or throwaway instances.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Option<Settings>>,
}

impl InMemorySettingsStore {
    /// Create an empty store that loads the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(Some(settings)),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<Settings, Error> {
        let settings = self.settings.lock().map_err(|error| {
            tracing::error!("could not acquire settings lock: {error}");
            Error::SettingsReadError(error.to_string())
        })?;

        Ok(settings.clone().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), Error> {
        let mut stored = self.settings.lock().map_err(|error| {
            tracing::error!("could not acquire settings lock: {error}");
            Error::SettingsWriteError(error.to_string())
        })?;

        *stored = Some(settings.clone());

        Ok(())
    }
}

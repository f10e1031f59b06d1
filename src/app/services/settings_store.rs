use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::app::domain::settings::{SettingKey, SettingsDocument};
use crate::app::infrastructure::error::{AppError, Result};

/// In-memory settings backed by a JSON file.
///
/// Changes stay in memory until [`SettingsStore::save`] is called.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    document: SettingsDocument,
}

impl SettingsStore {
    /// Load settings from disk, or create the file with defaults if it does not exist.
    ///
    /// A file that exists but cannot be understood is an error; it is never
    /// silently replaced.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let store = Self {
                    path,
                    document: SettingsDocument::default(),
                };
                store.save()?;
                log::info!("Created default settings at {}", store.path.display());
                return Ok(store);
            }
            Err(e) => return Err(e.into()),
        };

        let malformed = |reason: String| AppError::MalformedSettings {
            path: path.clone(),
            reason,
        };

        let map = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(other) => return Err(malformed(format!("expected a JSON object, found {}", other))),
            Err(e) => return Err(malformed(e.to_string())),
        };
        let (document, notes) = SettingsDocument::from_json_map(map).map_err(malformed)?;

        for (key, stored, clamped) in &notes.clamped {
            log::warn!("Setting {} = {} is out of range, using {}", key, stored, clamped);
        }
        if !notes.filled.is_empty() {
            log::debug!("Settings file lacks {} keys, using defaults", notes.filled.len());
        }
        log::info!("Loaded settings from {}", path.display());

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    pub fn get(&self, key: SettingKey) -> i32 {
        self.document.get(key)
    }

    /// Validate and store a value in memory. Out-of-range values are rejected
    /// and leave the current value untouched.
    pub fn set(&mut self, key: SettingKey, value: i32) -> Result<()> {
        self.document.set(key, value)
    }

    /// Replace the in-memory document with the defaults. Disk is untouched.
    pub fn reset(&mut self) {
        self.document = SettingsDocument::default();
    }

    /// Save settings to disk, overwriting the previous contents.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, json)?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

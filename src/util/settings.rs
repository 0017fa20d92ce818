use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "NetValueCalculator";
const APP_NAME: &str = "NetValueCalculator";
const SETTINGS_FILE: &str = "settings.json";

/// User preferences. Values typed into the form are never stored here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: LogLevel,
    pub show_breakdown: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            show_breakdown: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Loads settings from the platform config directory. A missing file or
/// missing config directory yields defaults; an unreadable file is an error.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_file() {
        Some(path) => load_settings_or_default(&path),
        None => Ok(Settings::default()),
    }
}

fn load_settings_or_default(path: &Path) -> Result<Settings, SettingsError> {
    match load_settings_from(path) {
        Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            Ok(Settings::default())
        }
        other => other,
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_file().ok_or(SettingsError::StorageUnavailable)?;
    save_settings_to(&path, settings)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.show_breakdown);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_object_keeps_given_keys() {
        let settings: Settings = serde_json::from_str(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert!(settings.show_breakdown);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"log_level":"loud"}"#).is_err());
    }

    #[test]
    fn missing_file_is_io_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings_from(&dir.path().join(SETTINGS_FILE)).unwrap_err();
        assert!(matches!(err, SettingsError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_or_default(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn unreadable_file_is_reported_not_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"log_level":"loud"}"#).unwrap();
        assert!(matches!(
            load_settings_or_default(&path),
            Err(SettingsError::Serde(_))
        ));
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            log_level: LogLevel::Warn,
            show_breakdown: false,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::Serde(_))
        ));
    }
}

//! Settings file management.
//!
//! Reads form timing settings from `~/.config/profile-form/settings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use profile_core::config::FormSettings;
use profile_core::error::{ProfileError, Result};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads [`FormSettings`] from a TOML file.
///
/// A missing file yields the defaults; a malformed file is an error.
#[derive(Debug, Clone)]
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Uses the default settings location.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<FormSettings> {
        if !self.path.exists() {
            tracing::debug!(
                "[Settings] No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(FormSettings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let settings: FormSettings = toml::from_str(&content)?;
        tracing::info!("[Settings] Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Returns `~/.config/profile-form/settings.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfileError::config("Could not determine home directory"))?;
        Ok(home
            .join(".config")
            .join("profile-form")
            .join(SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = SettingsService::with_path(temp_dir.path().join("settings.toml"));

        let settings = service.load().expect("Should fall back to defaults");
        assert_eq!(settings, FormSettings::default());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "notification_timeout_ms = 500\ncommit_latency_ms = 20\n").unwrap();

        let settings = SettingsService::with_path(&path).load().unwrap();
        assert_eq!(settings.notification_timeout_ms, 500);
        assert_eq!(settings.commit_latency_ms, 20);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "notification_timeout_ms = \"soon\"").unwrap();

        let err = SettingsService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ProfileError::Serialization { .. }));
    }

    #[test]
    fn test_default_path_ends_with_settings_file() {
        if let Ok(path) = SettingsService::default_path() {
            assert!(path.ends_with("profile-form/settings.toml"));
        }
    }
}

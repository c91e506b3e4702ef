use std::path::{Path, PathBuf};

use devtools_generate::faker_rs::DEFAULT_EMAIL_DOMAIN;
use devtools_generate::model::{DEFAULT_COLUMN_DIVIDER, DEFAULT_SCHEMA_PATH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "DEVTOOLS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "devtools.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Copy single generated values to the clipboard.
    pub clipboard: bool,
    pub email_domain: String,
    pub csv: CsvSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clipboard: true,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            csv: CsvSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    pub schema: PathBuf,
    pub column_divider: char,
    pub seed: Option<u64>,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            schema: PathBuf::from(DEFAULT_SCHEMA_PATH),
            column_divider: DEFAULT_COLUMN_DIVIDER,
            seed: None,
        }
    }
}

/// Where settings come from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Given by `--config` or `$DEVTOOLS_CONFIG`; must exist.
    Required(PathBuf),
    /// `./devtools.toml`; defaults apply when it is absent.
    Optional(PathBuf),
}

pub fn resolve_settings_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> SettingsSource {
    if let Some(path) = explicit {
        return SettingsSource::Required(path.to_path_buf());
    }
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => SettingsSource::Required(PathBuf::from(value)),
        _ => SettingsSource::Optional(cwd.join(DEFAULT_CONFIG_FILE)),
    }
}

pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let env_value = std::env::var(CONFIG_ENV).ok();
    let cwd = std::env::current_dir()?;
    load_from_source(resolve_settings_path(explicit, env_value.as_deref(), &cwd))
}

fn load_from_source(source: SettingsSource) -> Result<Settings, SettingsError> {
    let (path, required) = match source {
        SettingsSource::Required(path) => (path, true),
        SettingsSource::Optional(path) => (path, false),
    };
    if !path.exists() {
        if required {
            return Err(SettingsError::NotFound(path));
        }
        tracing::debug!(event = "settings_default", path = %path.display());
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    tracing::debug!(event = "settings_loaded", path = %path.display());
    Ok(settings)
}

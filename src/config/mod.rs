//! Form configuration and its JSON persistence.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

const CONFIG_FILE_NAME: &str = "forms.json";
const APP_DIR_NAME: &str = "ranko";
const TMP_SUFFIX: &str = "tmp";

/// Longest tier list name accepted by the edit form, in characters.
pub const DEFAULT_NAME_LIMIT: usize = 50;
/// Longest tier list description accepted by the edit form, in characters.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 100;

/// Per-field character limits applied by truncation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldLimits {
    #[serde(default = "FieldLimits::default_name")]
    pub name: usize,
    #[serde(default = "FieldLimits::default_description")]
    pub description: usize,
}

impl FieldLimits {
    pub fn default_name() -> usize {
        DEFAULT_NAME_LIMIT
    }

    pub fn default_description() -> usize {
        DEFAULT_DESCRIPTION_LIMIT
    }

    /// Rejects limits that would make a field impossible to fill.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name == 0 {
            return Err(FormError::InvalidLimit(
                "name limit must be at least 1".into(),
            ));
        }
        if self.description == 0 {
            return Err(FormError::InvalidLimit(
                "description limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_LIMIT,
            description: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

/// Stores tunables for the edit-details form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub limits: FieldLimits,
}

/// Handles persistence for [`FormConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager rooted at the platform config directory, e.g. `~/.config/ranko/forms.json`.
    pub fn from_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FormError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<FormConfig, FormError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no form config on disk, using defaults");
            return Ok(FormConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: FormConfig = serde_json::from_str(&data)?;
        config.limits.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &FormConfig) -> Result<(), FormError> {
        config.limits.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "form config saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!("{ext}.{TMP_SUFFIX}"))
        .unwrap_or_else(|| TMP_SUFFIX.to_string());
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), FormError> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

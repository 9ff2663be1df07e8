use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{ConfigError, EngineSettings};

const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`EngineSettings`].
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Places the settings file under `base/config/settings.json`,
    /// creating the directories as needed.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join("settings.json")))
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("remit").join("settings.json")
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads settings, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<EngineSettings, ConfigError> {
        if self.settings_path.exists() {
            let data = fs::read_to_string(&self.settings_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(EngineSettings::default())
        }
    }

    pub fn save(&self, settings: &EngineSettings) -> Result<(), ConfigError> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.settings_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.settings_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

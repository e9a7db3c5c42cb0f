// Passgen Settings Engine
// Manages user settings: loading, saving, updating individual values, and resetting to defaults.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::generation::GenerationRequest;
use crate::types::settings::AppSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<AppSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &AppSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: AppSettings::default(),
        }
    }

    /// The configured database file, or the platform default.
    pub fn database_path(&self) -> PathBuf {
        match &self.settings.database.path {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => platform::default_database_path(),
        }
    }

    /// Reads a value typed on the command line. JSON literals (`true`,
    /// `16`, `null`, `"x"`) keep their type; anything else is a string.
    pub fn parse_value(raw: &str) -> serde_json::Value {
        serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
    }

    /// Pre-filled generator form values.
    pub fn generation_defaults(&self) -> GenerationRequest {
        let g = &self.settings.generator;
        GenerationRequest::new(
            g.default_length,
            g.include_uppercase,
            g.include_numbers,
            g.include_symbols,
        )
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<AppSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", self.config_path);
            self.settings = AppSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: AppSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        log::debug!("Saved settings to {}", self.config_path);
        Ok(())
    }

    fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Replaces one leaf value, addressed as `section.field`, then saves.
    ///
    /// The key must name an existing field and the value must have that
    /// field's type; otherwise nothing changes.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.split('.').any(str::is_empty) || key.contains(|c| c == '/' || c == '~') {
            return Err(SettingsError::InvalidKey(format!("'{}' is not a section.field path", key)));
        }

        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        let pointer = format!("/{}", key.replace('.', "/"));
        let Some(slot) = tree.pointer_mut(&pointer) else {
            return Err(SettingsError::InvalidKey(format!("'{}' is not a known setting", key)));
        };
        if slot.is_object() {
            return Err(SettingsError::InvalidKey(format!("'{}' is a section, not a value", key)));
        }
        *slot = value;

        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        log::info!("Setting {} updated", key);
        self.save()
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = AppSettings::default();
        log::info!("Settings reset to defaults");
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dropdown::Choice;
use crate::theme::Theme;

/// Demo app configuration: the option sets fed to the dropdowns plus the
/// theme, stored as YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub theme: Theme,
    pub fruits: Vec<Choice>,
    pub animals: Vec<Choice>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            fruits: vec![
                Choice::new("Apple", "Apple"),
                Choice::new("Banana", "Banana"),
                Choice::new("Kiwi", "Kiwi"),
            ],
            animals: vec![
                Choice::new("Dog", "Dog"),
                Choice::new("Cat", "Cat"),
                Choice::new("Parrot", "Parrot"),
            ],
        }
    }
}

impl DemoConfig {
    /// Get the config file path (~/.config/quick-pick/config.yaml)
    pub fn config_path() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path.push("quick-pick");
            path.push("config.yaml");
            Some(path)
        } else {
            None
        }
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => {
                        info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        warn!("Ignoring config file: {}", e);
                    }
                }
            } else {
                info!("Config file not found at {:?}, using defaults", path);
            }
        }

        Self::default()
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;

        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {:?}: {}", path, e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {}", e))?;
            }

            let yaml = serde_yaml::to_string(self)
                .map_err(|e| format!("Failed to serialize config: {}", e))?;

            fs::write(&path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;

            info!("Saved config to {:?}", path);
            Ok(())
        } else {
            Err("Could not determine config path".to_string())
        }
    }
}

//! Loading and merging shortcode tables from TOML.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A shortcode table as declared in TOML.
///
/// ```toml
/// [shortcodes]
/// ":smile:" = "😄"
/// ":rocket:" = "🚀"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// Mapping from `:name:` shortcode to its unicode value
    #[serde(default)]
    pub shortcodes: HashMap<String, String>,
}

impl TableConfig {
    /// Parses a table from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parses the table embedded in the crate.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../emoji.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load a table from a custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load the embedded table with user overrides from standard locations
    /// 1. Start with the built-in shortcodes
    /// 2. Override with ~/.config/emojify/emoji.toml if it exists
    /// 3. Override with ./emoji.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("emojify").join("emoji.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user table from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = Path::new("emoji.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local table from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another table into this one, overriding existing shortcodes
    pub fn merge(&mut self, other: TableConfig) {
        for (name, value) in other.shortcodes {
            self.shortcodes.insert(name, value);
        }
    }

    /// Looks up a declared shortcode value.
    pub fn get_shortcode(&self, name: &str) -> Option<&String> {
        self.shortcodes.get(name)
    }
}

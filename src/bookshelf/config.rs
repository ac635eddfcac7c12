use crate::error::{LibraryError, Result};
use crate::ids::{DEFAULT_ID_LENGTH, MAX_ID_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the library inside the data directory
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// Number of digits in newly generated book ids
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            id_length: default_id_length(),
        }
    }
}

/// Keys accepted by `shelf config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    LibraryFile,
    IdLength,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::LibraryFile, ConfigKey::IdLength];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "library-file" => Some(ConfigKey::LibraryFile),
            "id-length" => Some(ConfigKey::IdLength),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::LibraryFile => "library-file",
            ConfigKey::IdLength => "id-length",
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibraryError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibraryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibraryError::Serialization)?;
        fs::write(config_path, content).map_err(LibraryError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::LibraryFile => self.library_file.clone(),
            ConfigKey::IdLength => self.id_length.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::LibraryFile => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(LibraryError::Validation(format!(
                        "library-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.library_file = value.to_string();
            }
            ConfigKey::IdLength => {
                let n: usize = value.parse().map_err(|_| {
                    LibraryError::Validation(format!("id-length must be a number, got '{}'", value))
                })?;
                self.id_length = n.clamp(1, MAX_ID_LENGTH);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.library_file, "library.json");
        assert_eq!(config.id_length, 3);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ShelfConfig::default();
        config.set(ConfigKey::IdLength, "5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.id_length, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"id_length": 4}"#).unwrap();
        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.id_length, 4);
        assert_eq!(loaded.library_file, "library.json");
    }

    #[test]
    fn test_id_length_is_clamped() {
        let mut config = ShelfConfig::default();
        config.set(ConfigKey::IdLength, "40").unwrap();
        assert_eq!(config.id_length, MAX_ID_LENGTH);
        config.set(ConfigKey::IdLength, "0").unwrap();
        assert_eq!(config.id_length, 1);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ShelfConfig::default();
        assert!(config.set(ConfigKey::IdLength, "abc").is_err());
        assert!(config.set(ConfigKey::LibraryFile, "a/b.json").is_err());
        assert!(config.set(ConfigKey::LibraryFile, "  ").is_err());
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::parse(key.name()), Some(key));
        }
        assert_eq!(ConfigKey::parse("file-ext"), None);
    }
}

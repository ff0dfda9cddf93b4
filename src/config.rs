use crate::error::{RelayError, Result};
use crate::global_id::{IdCodec, IdFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".relay-node.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub ids: IdSettings,

    #[serde(default)]
    pub directory: DirectorySettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdSettings {
    /// Format used for every newly issued ID.
    #[serde(default)]
    pub format: IdFormat,

    /// Older formats that are still decoded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accept: Vec<IdFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_directory_path")]
    pub path: String,
}

fn default_directory_path() -> String {
    "directory.yml".to_string()
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            path: default_directory_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl IdSettings {
    pub fn codec(&self) -> IdCodec {
        self.accept
            .iter()
            .fold(IdCodec::new(self.format), |codec, format| {
                codec.accepting(*format)
            })
    }
}

impl RelayConfig {
    /// Loads the nearest config file at or above `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(RelayError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: RelayConfig = serde_yaml::from_str(&content)?;
        let project_root = match config_path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => {
                return Err(RelayError::Config(
                    "Config file has no parent directory".to_string(),
                ));
            }
        };
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(RelayError::NotInitialized);
            }
        }
    }

    pub fn directory_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.directory.path)
    }

    pub fn codec(&self) -> IdCodec {
        self.ids.codec()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.ids.format, IdFormat::UrlSafe);
        assert!(config.ids.accept.is_empty());
        assert_eq!(config.directory.path, "directory.yml");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: RelayConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.directory.path, "directory.yml");
        assert_eq!(config.ids.format, IdFormat::UrlSafe);
    }

    #[test]
    fn test_codec_from_settings() {
        let config: RelayConfig =
            serde_yaml::from_str("ids:\n  format: url-safe\n  accept: [standard]\n").unwrap();
        let codec = config.codec();
        assert_eq!(codec.primary(), IdFormat::UrlSafe);
        assert_eq!(codec.accepted(), &[IdFormat::Standard]);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result: std::result::Result<RelayConfig, _> =
            serde_yaml::from_str("ids:\n  format: hex\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        RelayConfig::default()
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = RelayConfig::load(&nested).unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            RelayConfig::find_config_file(temp_dir.path()),
            Err(RelayError::NotInitialized)
        ));
    }
}

mod codec;
mod init;
mod node;
mod query;
mod serve;
mod utils;

pub use codec::{handle_decode, handle_encode};
pub use init::handle_init;
pub use node::handle_node;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::storage::Directory;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to command handlers that need a project
pub struct CommandContext {
    pub config: RelayConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: RelayConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Loads the project from `--config`, or searches upward from the cwd.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => RelayConfig::load_file(path),
            None => RelayConfig::load(&std::env::current_dir()?),
        }
        .context("Failed to load config")?;
        Ok(Self::new(config, root))
    }

    /// Like [`CommandContext::load`], but falls back to defaults outside a project.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        if config_path.is_some() {
            return Self::load(config_path);
        }
        match RelayConfig::load(&std::env::current_dir()?) {
            Ok((config, root)) => Ok(Self::new(config, root)),
            Err(RelayError::NotInitialized) => {
                Ok(Self::new(RelayConfig::default(), std::env::current_dir()?))
            }
            Err(e) => Err(e).context("Failed to load config"),
        }
    }

    pub fn open_directory(&self) -> Result<Directory> {
        let path = self.config.directory_path(&self.root);
        Directory::load(&path)
            .with_context(|| format!("Failed to open directory {}", path.display()))
    }
}

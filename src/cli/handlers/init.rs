use crate::config::{CONFIG_FILE_NAME, IdSettings, RelayConfig};
use crate::error::RelayError;
use crate::global_id::IdFormat;
use crate::storage::{DirectoryData, atomic_write};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(format: IdFormat) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(RelayError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = RelayConfig {
        ids: IdSettings {
            format,
            accept: Vec::new(),
        },
        ..Default::default()
    };

    let directory_path = config.directory_path(&cwd);
    if !directory_path.exists() {
        let content = serde_yaml::to_string(&DirectoryData::sample())?;
        atomic_write(&directory_path, &content)?;
    }

    config.save(&config_path)?;

    println!(
        "{} relay-node project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:    {}", config_path.display());
    println!("  Directory: {}", directory_path.display());

    Ok(())
}

use anyhow::{Context, Result};

use rpawogen::configtool::{self, ConfigFile};

pub fn show_config(config: &ConfigFile, init: bool) -> Result<()> {
    let path = configtool::get_config_path()?;
    if init {
        if path.exists() {
            println!("Configuration already exists at {}", path.display());
        } else {
            ConfigFile::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Default configuration written to {}", path.display());
        }
        return Ok(());
    }

    println!("Configuration file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

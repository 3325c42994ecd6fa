//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-07
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use dirs::config_dir;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

/// Defaults used by the command line when a flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub length: usize,
    pub exclude_ambiguous: bool,
    pub word_count: usize,
    pub separator: String,
    pub complex_word_count: usize,
    pub complex_min_length: usize,
    pub complexity: u32,
    /// Word list used instead of the built-in one.
    pub dictionary: Option<PathBuf>,
    pub output_file: PathBuf,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            length: 12,
            exclude_ambiguous: false,
            word_count: 4,
            separator: "-".to_string(),
            complex_word_count: 3,
            complex_min_length: 16,
            complexity: 5,
            dictionary: None,
            output_file: PathBuf::from("passwords.txt"),
        }
    }
}

impl ConfigFile {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&config_data)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, &self)?;
        Ok(())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// 加载配置文件
pub fn load_config() -> Result<ConfigFile, ConfigError> {
    ConfigFile::load_from(&get_config_path()?)
}

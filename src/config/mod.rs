use self::error::ConfigError;
use self::models::AppConfig;
use std::path::{Path, PathBuf};

pub mod error;
pub mod loader;
pub mod models;

pub const APP_DIR: &str = "pickbox";
pub const CONFIG_FILE: &str = "config.toml";

pub struct ConfigManager {
    pub app_config: AppConfig,
    pub path: PathBuf,
}

impl ConfigManager {
    /// Load from `path`, or from the per-user config directory when `None`.
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        let app_config = loader::read_config(&path)?;

        Ok(Self { app_config, path })
    }

    pub fn write_default(&self, force: bool) -> Result<(), ConfigError> {
        loader::write_config(&self.path, &AppConfig::default(), force)
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

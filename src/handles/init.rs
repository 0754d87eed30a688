use crate::config::{ConfigManager, default_config_path};
use crate::config::models::AppConfig;
use crate::utils::display;
use std::path::Path;

pub fn handle(path: Option<&Path>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    // Skip parsing whatever is there: a broken file is exactly what --force repairs.
    let config_manager = ConfigManager {
        app_config: AppConfig::default(),
        path,
    };
    config_manager.write_default(force)?;

    display::show_success(&format!(
        "Wrote default configuration to {}",
        config_manager.path.display()
    ));
    Ok(())
}

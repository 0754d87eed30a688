use crate::config::ConfigManager;
use crate::utils::display;

pub fn handle(config_manager: ConfigManager, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = &config_manager.app_config;
    config.display_options();
    if all {
        config.display_settings();
        display::show_info(&format!("Config file: {}", config_manager.path.display()));
    }
    Ok(())
}

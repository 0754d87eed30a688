use crate::config::ConfigManager;

pub fn handle(config_manager: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    crate::tui::run(config_manager.app_config)
}

use crate::config::ConfigManager;
use crate::utils::display;

pub fn handle(config_manager: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    let issues = config_manager.app_config.validate();

    if issues.is_empty() {
        display::show_success(&format!(
            "{} is valid ({} options).",
            config_manager.path.display(),
            config_manager.app_config.options.len()
        ));
        return Ok(());
    }

    for issue in &issues {
        log::warn!("{issue}");
        display::show_warning(&issue.to_string());
    }
    Err(format!("Found {} issue(s) in the configuration.", issues.len()).into())
}

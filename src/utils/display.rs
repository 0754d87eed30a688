use crate::config::models::AppConfig;
use crate::select::{OptionValue, SelectOption};
use colored::*;

impl AppConfig {
    pub fn display_options(&self) {
        eprintln!("{}", "Options:".yellow());
        if self.options.is_empty() {
            eprintln!("└── {}", "(none)".truecolor(180, 180, 180));
            return;
        }

        let mut options_iter = self.options.iter().peekable();
        while let Some(option) = options_iter.next() {
            let branch = if options_iter.peek().is_none() {
                "└──"
            } else {
                "├──"
            };
            eprintln!("{branch} {}", option_line(option));
        }
    }

    pub fn display_settings(&self) {
        eprintln!("{}", "Settings:".yellow());
        eprintln!("├── {} = {:?}", "match_by".green(), self.match_by);
        eprintln!("├── {} = {:?}", "close_policy".green(), self.close_policy);
        eprintln!("├── {} = {}", "panel_height".green(), self.panel_height);
        eprintln!("└── {} = {:?}", "log_level".green(), self.log_level);
    }
}

fn option_line(option: &SelectOption) -> String {
    let value = match &option.value {
        OptionValue::Number(n) => n.to_string().cyan(),
        OptionValue::Text(s) => format!("\"{s}\"").truecolor(180, 180, 180),
    };
    format!("{} = {}", option.label.blue(), value)
}

pub fn show_success(message: &str) {
    eprintln!("{}", format!("✔ {message}").green());
}

pub fn show_warning(message: &str) {
    eprintln!("{}", format!("⚠ {message}").yellow());
}

pub fn show_info(message: &str) {
    eprintln!("{}", format!("ℹ {message}").blue());
}

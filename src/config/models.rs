use crate::select::{ClosePolicy, MatchBy, SelectOption};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_PANEL_HEIGHT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// Everything the host needs to build its controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub match_by: MatchBy,
    pub close_policy: ClosePolicy,
    pub panel_height: usize,
    pub log_level: LogLevel,
    pub options: Vec<SelectOption>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            match_by: MatchBy::default(),
            close_policy: ClosePolicy::default(),
            panel_height: DEFAULT_PANEL_HEIGHT,
            log_level: LogLevel::default(),
            options: default_catalog(),
        }
    }
}

pub fn default_catalog() -> Vec<SelectOption> {
    vec![
        SelectOption::new("one", 10),
        SelectOption::new("two", 20),
        SelectOption::new("three", 30),
        SelectOption::new("fourth", 2),
        SelectOption::new("fifth", 3),
        SelectOption::new("sixth", 4),
        SelectOption::new("seventh", 5),
    ]
}

/// A problem in the configuration that does not stop it from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    EmptyCatalog,
    EmptyLabel { index: usize },
    DuplicateValue { value: String, label: String },
    DuplicateRecord { label: String },
    ZeroPanelHeight,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::EmptyCatalog => write!(f, "The options catalog is empty"),
            ConfigIssue::EmptyLabel { index } => {
                write!(f, "Option #{index} has an empty label")
            }
            ConfigIssue::DuplicateValue { value, label } => write!(
                f,
                "Option '{label}' reuses value {value}; options sharing a value select together"
            ),
            ConfigIssue::DuplicateRecord { label } => {
                write!(f, "Option '{label}' appears more than once")
            }
            ConfigIssue::ZeroPanelHeight => write!(f, "panel_height must be at least 1"),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.options.is_empty() {
            issues.push(ConfigIssue::EmptyCatalog);
        }
        if self.panel_height == 0 {
            issues.push(ConfigIssue::ZeroPanelHeight);
        }

        let mut seen_values = HashSet::new();
        let mut seen_records = Vec::new();
        for (index, option) in self.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                issues.push(ConfigIssue::EmptyLabel { index });
            }
            if seen_records.contains(&option) {
                issues.push(ConfigIssue::DuplicateRecord {
                    label: option.label.clone(),
                });
                continue;
            }
            seen_records.push(option);
            if !seen_values.insert(&option.value) {
                issues.push(ConfigIssue::DuplicateValue {
                    value: option.value.to_string(),
                    label: option.label.clone(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_clean() {
        assert!(AppConfig::default().validate().is_empty());
    }

    #[test]
    fn duplicates_are_reported_once_each() {
        let config = AppConfig {
            options: vec![
                SelectOption::new("one", 10),
                SelectOption::new("one", 10),
                SelectOption::new("uno", 10),
                SelectOption::new(" ", "blank"),
            ],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            vec![
                ConfigIssue::DuplicateRecord { label: "one".into() },
                ConfigIssue::DuplicateValue {
                    value: "10".into(),
                    label: "uno".into()
                },
                ConfigIssue::EmptyLabel { index: 3 },
            ]
        );
    }
}

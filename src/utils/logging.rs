use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::APP_DIR;

pub const LOG_FILE: &str = "pickbox.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Route `log` output to the cache directory. The terminal belongs to the
/// UI, so nothing is written to stderr. Failures only disable logging.
pub fn init(level: LevelFilter) {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    // The writer accepts everything; the global max level does the filtering
    // so it can be lowered or raised once the config is known.
    if WriteLogger::init(LevelFilter::Trace, config, file).is_ok() {
        set_level(level);
        log::info!("Logging to {}", path.display());
    }
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

pub mod cli;
pub mod config;
pub mod handles;
pub mod select;
pub mod tui;
pub mod utils;

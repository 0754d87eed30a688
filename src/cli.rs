use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    bin_name = "pickbox",
    name = "pickbox",
    version = env!("CARGO_PKG_VERSION"),
    about = "A keyboard and mouse driven dropdown select for the terminal",
    long_about = None,
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    /// Path to the configuration file (defaults to the user config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal UI with a multiple and a single select
    Ui,

    /// List the configured options
    #[command(visible_alias = "ls")]
    Options {
        /// Also show the behaviour settings
        #[arg(short, long)]
        all: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Check the configuration for problems (duplicate values, empty labels)
    Check,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

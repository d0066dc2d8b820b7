use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::filter::FilterCategory;

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - a small to-do list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of ./ticklist.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Start with this filter selected (all, active, completed)
    #[arg(long)]
    pub filter: Option<FilterCategory>,

    /// Append diagnostic logs to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as TOML
    Config,
}

use crate::cli::commands::{Cli, Commands};
use crate::io::config_io;
use crate::model::config::Config;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Config is read before the subscriber exists, so report it here
    tracing::debug!(
        default_filter = %config.list.default_filter,
        key_hints = config.ui.show_key_hints,
        "effective config"
    );
    match cli.command {
        None => crate::tui::run(config, cli.filter),
        Some(Commands::Config) => cmd_config(config),
    }
}

/// Load the configuration the way the command line asks for it
pub fn load_cli_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = config_io::config_to_toml(config)?;
    print!("{}", text);
    Ok(())
}

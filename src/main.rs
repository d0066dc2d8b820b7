use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::{handlers, logging};

fn main() {
    let cli = Cli::parse();

    let config = match handlers::load_cli_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_tracing(cli.log_file.as_deref(), cli.verbose, &config.log) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

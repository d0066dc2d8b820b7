use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Level used for a given -v count, or `None` to defer to the config.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the tracing subscriber.
///
/// The terminal belongs to the TUI, so events only go to a log file: the
/// `--log-file` path if given, else `[log] file` from the config. With
/// neither, no subscriber is installed and events are dropped.
/// `RUST_LOG` wins over `-v`, which wins over `[log] level`.
pub fn init_tracing(
    log_file: Option<&Path>,
    verbose: u8,
    config: &LogConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = log_file.or(config.file.as_deref()) else {
        return Ok(());
    };

    let default_level = verbosity_level(verbose).unwrap_or(config.level.as_str());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| format!("invalid log filter '{}': {}", default_level, e))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    tracing::debug!(path = %path.display(), level = default_level, "logging to file");
    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "ticklist.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Load the effective config.
///
/// An explicit path must exist. Without one, `ticklist.toml` in `dir` is
/// used if present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.is_file() {
                read_config(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(config)
}

/// Render a config as TOML
pub fn config_to_toml(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::FilterCategory;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.list.default_filter, FilterCategory::All);
        assert!(config.ui.show_key_hints);
        assert!(config.log.file.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn reads_file_from_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r##"[list]
default_filter = "active"

[ui]
show_key_hints = false

[ui.colors]
red = "#FF0000"
"##,
        )
        .unwrap();

        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.list.default_filter, FilterCategory::Active);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("red").map(String::as_str), Some("#FF0000"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_config(Some(&missing), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn invalid_filter_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[list]\ndefault_filter = \"someday\"\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = config_to_toml(&Config::default()).unwrap();
        assert!(text.contains("default_filter = \"all\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.list.default_filter, FilterCategory::All);
        assert_eq!(parsed.log.level, "info");
    }
}

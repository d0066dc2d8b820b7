//! Integration tests for the `tl` CLI.
//!
//! The TUI needs a terminal, so these cover the non-interactive surface:
//! config discovery, `tl config`, and error exits.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tl");
    path
}

/// Run `tl` with the given args in `cwd`.
fn tl(cwd: &Path, args: &[&str]) -> Output {
    Command::new(tl_bin())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn config_prints_defaults_without_a_file() {
    let tmp = TempDir::new().unwrap();
    let output = tl(tmp.path(), &["config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("default_filter = \"all\""), "got: {}", out);
    assert!(out.contains("show_key_hints = true"), "got: {}", out);
    assert!(out.contains("level = \"info\""), "got: {}", out);
}

#[test]
fn config_file_in_working_directory_is_picked_up() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ticklist.toml"),
        "[list]\ndefault_filter = \"active\"\n\n[ui]\nshow_key_hints = false\n",
    )
    .unwrap();

    let output = tl(tmp.path(), &["config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("default_filter = \"active\""), "got: {}", out);
    assert!(out.contains("show_key_hints = false"), "got: {}", out);
}

#[test]
fn explicit_config_path_wins() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ticklist.toml"),
        "[list]\ndefault_filter = \"active\"\n",
    )
    .unwrap();
    let other = tmp.path().join("other.toml");
    fs::write(&other, "[list]\ndefault_filter = \"completed\"\n").unwrap();

    let output = tl(tmp.path(), &["config", "-c", other.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("default_filter = \"completed\""));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let output = tl(tmp.path(), &["config", "--config", "nope.toml"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error:"), "got: {}", err);
    assert!(err.contains("nope.toml"), "got: {}", err);
}

#[test]
fn malformed_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ticklist.toml"),
        "[list]\ndefault_filter = \"someday\"\n",
    )
    .unwrap();

    let output = tl(tmp.path(), &["config"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not parse"));
}

#[test]
fn log_file_receives_events() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("tl.log");
    fs::write(tmp.path().join("ticklist.toml"), "[list]\n").unwrap();

    let output = tl(
        tmp.path(),
        &["config", "-vv", "--log-file", log.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("logging to file"), "got: {}", text);
    assert!(text.contains("effective config"), "got: {}", text);
}

#[test]
fn help_mentions_filter_flag() {
    let tmp = TempDir::new().unwrap();
    let output = tl(tmp.path(), &["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--filter"));
    assert!(out.contains("config"));
}

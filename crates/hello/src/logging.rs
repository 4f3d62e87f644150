//! File logging. The terminal belongs to the UI, so logs go to a file in
//! the platform data directory.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "hello.log";

/// Install the global subscriber. Returns the log file path, or `None`
/// when logging stays off.
///
/// Must run before the terminal enters raw mode: failures are reported on
/// stderr and the app carries on without a log file.
pub fn init() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "hello")?;
    init_or_warn(dirs.data_local_dir())
}

fn init_or_warn(dir: &Path) -> Option<PathBuf> {
    match init_in(dir) {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("Warning: file logging disabled: {err:#}");
            None
        }
    }
}

fn init_in(dir: &Path) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(path)
}

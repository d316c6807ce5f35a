//! File logging.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a log file.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter from the configured directive (config file,
/// `PIXORA_LOG` or `--log`). An unparsable directive falls back to `info`.
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_new(configured).unwrap_or_else(|e| {
        eprintln!("pixora: invalid log filter {:?} ({}), using info", configured, e);
        EnvFilter::new("info")
    })
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}

/// Install the global subscriber writing to `path`.
pub fn init(path: &Path, filter: &str) -> Result<()> {
    let file = open_log_file(path)?;

    fmt()
        .with_env_filter(build_filter(filter))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install log subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pixora starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_invalid_directive_falls_back() {
        assert_eq!(build_filter("[[[").to_string(), "info");
    }

    #[test]
    #[serial]
    fn test_rust_log_does_not_override_configured() {
        std::env::set_var("RUST_LOG", "trace");
        let filter = build_filter("pixora=debug");
        std::env::remove_var("RUST_LOG");

        assert_eq!(filter.to_string(), "pixora=debug");
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pixora.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}

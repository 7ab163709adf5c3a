//! Logging and tracing setup.
//!
//! Events always go to stderr so stdout stays clean for command output.
//! A log file is added when `TEXTCLEAN_LOG_PATH`, `TEXTCLEAN_LOG_DIR`, or the
//! `log_dir` config key names one.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "TEXTCLEAN_LOG_PATH";
const ENV_LOG_DIR: &str = "TEXTCLEAN_LOG_DIR";
const LOG_FILE_NAME: &str = "textclean.log";

/// Where log output goes besides stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `textclean.log`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the log environment variables, falling back to the config's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var_os(key), config_log_dir)
    }

    fn from_lookup<F>(lookup: F, config_log_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            log_path: non_empty(ENV_LOG_PATH),
            log_dir: non_empty(ENV_LOG_DIR).or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, if file logging is on.
    fn log_file(&self) -> Option<(PathBuf, OsString)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_os_string();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), OsString::from(LOG_FILE_NAME)))
    }
}

/// Build the event filter.
///
/// `--quiet` and `-v`/`-vv` win; otherwise `RUST_LOG` if set, otherwise the
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit; dropping it flushes the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

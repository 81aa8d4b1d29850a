//! Tracing setup.
//!
//! The TUI owns the terminal, so events go to a file. Call [`init_logging`]
//! once near process start and keep the returned guard alive until exit, or
//! buffered events are lost.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Used for the default directory and the file name.
    pub app_name: &'static str,
    /// Explicit log directory. Falls back to the platform data dir.
    pub log_dir: Option<PathBuf>,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl LogConfig {
    pub fn new(log_dir: Option<PathBuf>, verbose: bool) -> Self {
        let level = if verbose { "debug" } else { "info" };
        Self {
            app_name: "glimpse",
            log_dir,
            default_filter: format!("glimpse={level},glimpse_core={level}"),
        }
    }
}

/// Installs the global subscriber and returns the log file path.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<(PathBuf, WorkerGuard)> {
    let dir = resolve_log_dir(config.app_name, config.log_dir.as_deref());
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let file_name = format!("{}.log", config.app_name);
    let full_path = dir.join(&file_name);

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    Ok((full_path, guard))
}

fn resolve_log_dir(app_name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    match dirs::data_local_dir() {
        Some(data) => data.join(app_name),
        None => PathBuf::from(".").join(app_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_log_dir("glimpse", Some(Path::new("/tmp/glimpse-logs")));
        assert_eq!(dir, PathBuf::from("/tmp/glimpse-logs"));
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        let dir = resolve_log_dir("glimpse", None);
        assert!(dir.ends_with("glimpse"));
    }

    #[test]
    fn test_verbose_filter() {
        assert_eq!(LogConfig::new(None, true).default_filter, "glimpse=debug,glimpse_core=debug");
        assert_eq!(LogConfig::new(None, false).default_filter, "glimpse=info,glimpse_core=info");
    }
}

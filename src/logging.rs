//! Tracing subscriber setup for the `pathlib` binary.
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever embeds it.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `-v` count wins over the configured default.
pub fn filter_for(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "pathlib=debug".to_string(),
        _ => "pathlib=trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, overrides `filter`.
///
/// With `log_file` the output goes through a non-blocking file writer and
/// the returned guard must be kept alive until exit so buffered lines are
/// flushed. Without it, logs go to stderr.
pub fn init(filter: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .with_context(|| format!("bad log filter `{filter}`"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(d) if !d.as_os_str().is_empty() => d,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_filter() {
        assert_eq!(filter_for(0, "warn"), "warn");
        assert_eq!(filter_for(1, "warn"), "pathlib=debug");
        assert_eq!(filter_for(4, "warn"), "pathlib=trace");
    }
}

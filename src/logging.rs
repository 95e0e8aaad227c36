use std::{fs::OpenOptions, io, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Where tracing output goes for a given invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(std::path::PathBuf),
    Stderr,
    Disabled,
}

#[must_use]
pub fn log_target(cli: &Cli) -> LogTarget {
    match (&cli.log_file, cli.one_shot) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        // stdout and stderr belong to the terminal UI.
        (None, false) => LogTarget::Disabled,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(cli: &Cli) -> Result<()> {
    match log_target(cli) {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .try_init()
                .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
        }
        LogTarget::Disabled => return Ok(()),
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn log_file_wins_over_one_shot_stderr() {
        let cli = Cli::parse_from([
            "weather-panel",
            "Paris",
            "--one-shot",
            "--log-file",
            "/tmp/weather-panel.log",
        ]);
        assert_eq!(
            log_target(&cli),
            LogTarget::File("/tmp/weather-panel.log".into())
        );
    }

    #[test]
    fn one_shot_logs_to_stderr() {
        let cli = Cli::parse_from(["weather-panel", "Paris", "--one-shot"]);
        assert_eq!(log_target(&cli), LogTarget::Stderr);
    }

    #[test]
    fn interactive_mode_without_file_stays_silent() {
        let cli = Cli::parse_from(["weather-panel"]);
        assert_eq!(log_target(&cli), LogTarget::Disabled);
    }
}

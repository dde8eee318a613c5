//! Tracing subscriber setup.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Default level: `WARN`, or `INFO` with `--verbose`. `RUST_LOG` adds directives.
fn filter(config: &AppConfig) -> EnvFilter {
    let level = if config.verbose { Level::INFO } else { Level::WARN };
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Install the global subscriber.
///
/// Logs go to `--log-file` when set, otherwise to stderr. The TUI owns the
/// terminal, so without a log file it runs with no subscriber at all.
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter(config))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else if !config.tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter(config))
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

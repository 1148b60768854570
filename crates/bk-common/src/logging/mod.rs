//! Structured logging setup.
//!
//! Library crates only emit `tracing` events; binaries embedding benchkit
//! call [`init_logging`] once at startup.
//!
//! - stdout is reserved for command payloads
//! - stderr receives all log output (human or JSONL)
//! - Sanitizer events carry lengths and counts, never raw untrusted input

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel};

use crate::{Error, Result};
use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the env filter for a config.
///
/// The resolved `config.level` applies to every benchkit crate. `RUST_LOG`
/// is not re-read here: [`LogConfig::from_vars`] already folded it in below
/// `BK_LOG` and explicit overrides.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level;
    EnvFilter::new(format!(
        "bk_common={level},bk_math={level},bk_strings={level},bk_validation={level}"
    ))
}

/// Install the global tracing subscriber.
///
/// Returns [`Error::LoggingInit`] if a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config);

    let result = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    result.map_err(|e| Error::LoggingInit(e.to_string()))
}

/// Initialize logging from the environment with no overrides.
pub fn init_default_logging() -> Result<()> {
    init_logging(&LogConfig::from_env(None, None))
}

//! Structured logging foundation for rempx.
//!
//! Dual-mode output on stderr: human-readable console format for
//! interactive use, machine-parseable JSONL when requested. stdout
//! stays untouched — the terminal UI owns it.
//!
//! Filtering follows `REMPX_LOG`, then `RUST_LOG`, then the level
//! derived from the CLI verbosity flags.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable console output.
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

/// Logging configuration assembled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum level when no env filter overrides it.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Include timestamps in human output.
    pub timestamps: bool,
}

impl LogConfig {
    /// Derive a config from `-v`/`-q` counts and the format flag.
    ///
    /// Base level is `warn`; each `-v` steps toward `trace`, `-q` drops
    /// to errors only.
    pub fn from_flags(verbose: u8, quiet: bool, format: LogFormat) -> Self {
        let level = if quiet {
            LogLevel::Error
        } else {
            match verbose {
                0 => LogLevel::Warn,
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            }
        };
        Self {
            level,
            format,
            timestamps: format == LogFormat::Jsonl,
        }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs. All output
/// goes to stderr; ANSI colors only when stderr is a terminal.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("REMPX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("rempx_core={}", config.level)));

    match config.format {
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
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .init();
            }
        }
        LogFormat::Jsonl => {
            let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags_map_to_levels() {
        assert_eq!(
            LogConfig::from_flags(0, false, LogFormat::Human).level,
            LogLevel::Warn
        );
        assert_eq!(
            LogConfig::from_flags(1, false, LogFormat::Human).level,
            LogLevel::Info
        );
        assert_eq!(
            LogConfig::from_flags(2, false, LogFormat::Human).level,
            LogLevel::Debug
        );
        assert_eq!(
            LogConfig::from_flags(5, false, LogFormat::Human).level,
            LogLevel::Trace
        );
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(
            LogConfig::from_flags(3, true, LogFormat::Human).level,
            LogLevel::Error
        );
    }

    #[test]
    fn jsonl_enables_timestamps() {
        assert!(LogConfig::from_flags(0, false, LogFormat::Jsonl).timestamps);
        assert!(!LogConfig::from_flags(0, false, LogFormat::Human).timestamps);
    }

    #[test]
    fn levels_render_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}

//! rempx - px ↔ rem converter for the terminal
//!
//! Entry point wiring:
//! - CLI flags (root size, theme, verbosity)
//! - logging to stderr (stdout belongs to the TUI)
//! - the ftui program runtime

use clap::Parser;

use rempx_core::clipboard::system_copy_op;
use rempx_core::logging::{init_logging, LogConfig, LogFormat};
use rempx_core::tui::{run_ftui, App, Theme, ThemeMode};

use ftui::ProgramConfig;

/// Convert px to rem and back, with live reference tables
#[derive(Parser, Debug)]
#[command(name = "rempx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root font size in px used for conversions
    #[arg(long, default_value_t = rempx_units::DEFAULT_ROOT_SIZE, env = "REMPX_ROOT_SIZE")]
    root_size: f64,

    /// Theme: dark, light, high-contrast, or none
    #[arg(long)]
    theme: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Log output format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

impl Cli {
    /// Resolve the theme from flags and environment.
    fn resolve_theme(&self) -> Theme {
        if self.no_color {
            return Theme::no_color();
        }
        match self.theme.as_deref() {
            Some(name) => match ThemeMode::from_name(name) {
                Some(mode) => Theme::for_mode(mode),
                None => {
                    tracing::warn!(theme = name, "Unknown theme, falling back to default");
                    Theme::from_env()
                }
            },
            None => Theme::from_env(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_flags(cli.verbose, cli.quiet, cli.log_format));

    let theme = cli.resolve_theme();

    let mut app = App::new().with_root(cli.root_size).with_theme(theme);
    app.set_copy_op(system_copy_op());

    match run_ftui(app, ProgramConfig::fullscreen()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "TUI exited with error");
            eprintln!("rempx: {error}");
            std::process::ExitCode::FAILURE
        }
    }
}

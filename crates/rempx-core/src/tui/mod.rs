//! Terminal UI for the px ↔ rem converter, built on ftui (Elm-style).
//!
//! # Module Structure
//!
//! - `app`: converter model (`ftui::Model`) and the program entry point
//! - `msg`: the single message enum driving `update()`
//! - `events`: key binding configuration and matching
//! - `layout`: responsive area computation and breakpoints
//! - `theme`: color schemes and styling
//! - `widgets`: the converter's widgets (fields, tables, overlays)

pub mod app;
pub mod events;
pub mod layout;
pub mod msg;
pub mod theme;
pub mod widgets;

pub use app::{run_ftui, App, AppState, FocusTarget};
pub use events::KeyBindings;
pub use layout::{Breakpoint, ConverterAreas, LayoutState, ResponsiveLayout};
pub use msg::Msg;
pub use theme::{Theme, ThemeMode};

use thiserror::Error;

/// Errors that can occur in the TUI module.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Failed to initialize terminal.
    #[error("terminal initialization failed: {0}")]
    TerminalInit(String),

    /// Failed to restore terminal state.
    #[error("terminal restoration failed: {0}")]
    TerminalRestore(String),

    /// IO error during TUI operation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

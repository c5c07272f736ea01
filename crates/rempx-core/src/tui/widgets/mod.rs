//! TUI widgets for the converter.
//!
//! Each widget is a lightweight builder that reads app state and renders
//! through ftui's widget set. All rendering goes through `render_view`
//! style methods taking immutable state, matching the Elm view() path.

pub mod conversion_table;
pub mod copy_notice;
pub mod help_overlay;
pub mod status_bar;
pub mod unit_input;

pub use conversion_table::ConversionTable;
pub use copy_notice::CopyNotice;
pub use help_overlay::HelpOverlay;
pub use status_bar::{StatusBar, StatusMode};
pub use unit_input::UnitInput;

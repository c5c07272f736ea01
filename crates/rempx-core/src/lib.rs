//! rempx core — the terminal px ↔ rem converter.
//!
//! A single-screen TUI widget: a live bidirectional converter form
//! (pixels, rem, root font size), a swap action, clipboard copy with a
//! confirmation notice, and two static reference tables. The pure
//! conversion rules live in the `rempx-units` crate; this crate owns the
//! CLI, logging, clipboard, and the ftui Elm-style interface.

pub mod clipboard;
pub mod logging;
pub mod tui;

//! rempx conversion kernel.
//!
//! Pure domain logic for the px ↔ rem converter: loose numeric parsing,
//! fixed-point formatting, the converter form state machine, and the
//! static reference table scales. No I/O lives here; the TUI in
//! rempx-core drives this crate through its public API.

pub mod convert;
pub mod table;

pub use convert::{
    format_fixed, parse_loose, parse_root, ConverterForm, UnitField, DEFAULT_ROOT_SIZE,
    ROOT_SIZE_FALLBACK,
};
pub use table::{px_to_rem_rows, rem_to_px_rows, TableRow, PX_SCALE, REM_SCALE};

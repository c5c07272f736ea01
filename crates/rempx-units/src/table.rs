//! Static reference table scales and row builders.
//!
//! Both tables are pure functions of the root size: the scales are
//! fixed, and every row is reformatted whenever the root changes.

use crate::convert::format_fixed;

/// Canonical pixel magnitudes for the px → rem table, ascending.
pub const PX_SCALE: [f64; 30] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 14.0, 15.0, 16.0, 18.0, 20.0, 24.0, 25.0,
    28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 50.0, 56.0, 64.0, 72.0, 75.0, 80.0, 90.0, 100.0,
];

/// Canonical rem magnitudes for the rem → px table, ascending.
pub const REM_SCALE: [f64; 24] = [
    0.01, 0.03, 0.05, 0.08, 0.1, 0.15, 0.2, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 15.0,
    20.0, 30.0, 40.0, 50.0, 60.0, 80.0, 100.0,
];

/// Pixel values below this threshold get the finer 3-decimal rem display.
const FINE_PRECISION_BELOW_PX: f64 = 10.0;

/// One rendered table row: the scale value and its conversion.
///
/// Both sides carry their unit suffix so widgets can print them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Scale value with unit, e.g. `"8px"` or `"0.5rem"`.
    pub source: String,
    /// Converted value with unit, e.g. `"0.500rem"` or `"32px"`.
    pub converted: String,
}

/// Shortest display form of a scale magnitude (no trailing zeros).
fn scale_label(value: f64) -> String {
    format!("{value}")
}

/// Build the px → rem rows for the given root size.
///
/// Small pixel values (below 10) show 3 decimals, larger ones 2.
pub fn px_to_rem_rows(root: f64) -> Vec<TableRow> {
    PX_SCALE
        .iter()
        .map(|&px| {
            let decimals = if px < FINE_PRECISION_BELOW_PX { 3 } else { 2 };
            TableRow {
                source: format!("{}px", scale_label(px)),
                converted: format!("{}rem", format_fixed(px / root, decimals)),
            }
        })
        .collect()
}

/// Build the rem → px rows for the given root size.
///
/// Pixel results are rounded to whole pixels.
pub fn rem_to_px_rows(root: f64) -> Vec<TableRow> {
    REM_SCALE
        .iter()
        .map(|&rem| TableRow {
            source: format!("{}rem", scale_label(rem)),
            converted: format!("{}px", format_fixed(rem * root, 0)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

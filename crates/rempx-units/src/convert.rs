//! Converter form state and numeric rules.
//!
//! The form holds four pieces of state: the px field text, the rem field
//! text, the root size (pixels per rem), and a marker recording which of
//! the two value fields the user edited last. Every edit recomputes the
//! opposite field; a root-size change recomputes only the derived field,
//! using the marker to decide which one that is.
//!
//! Numeric validation is deliberately loose: trim, then parse as f64.
//! Empty text is valid-but-cleared, never an error.

/// Default root font size in pixels per rem.
pub const DEFAULT_ROOT_SIZE: f64 = 16.0;

/// Fallback root size when the user supplies an unusable value.
///
/// Guards the px → rem division against zero, negative, and
/// unparseable roots.
pub const ROOT_SIZE_FALLBACK: f64 = 1.0;

/// Decimal places shown in the rem field (derived from px).
const REM_PRECISION: usize = 3;

/// Decimal places shown in the px field (derived from rem).
const PX_PRECISION: usize = 2;

/// Which value field the user edited last.
///
/// The marked field is authoritative; the other one is always a derived
/// display value. Swap flips the marker along with the field contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitField {
    /// The pixel field is authoritative.
    #[default]
    Px,
    /// The rem field is authoritative.
    Rem,
}

impl UnitField {
    /// The opposite field.
    pub fn other(self) -> Self {
        match self {
            UnitField::Px => UnitField::Rem,
            UnitField::Rem => UnitField::Px,
        }
    }

    /// Display label for status lines and logs.
    pub fn label(self) -> &'static str {
        match self {
            UnitField::Px => "px",
            UnitField::Rem => "rem",
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing and formatting
// ---------------------------------------------------------------------------

/// Loosely parse field text as a number.
///
/// Trims, then parses as f64. Returns `None` for empty, unparseable, or
/// non-finite input. This is the single parse-and-branch rule used by
/// every operation on the form.
pub fn parse_loose(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse root-size text, falling back to [`ROOT_SIZE_FALLBACK`].
///
/// Zero, negative, non-finite, and unparseable values all fall back, so
/// the conversion divisor is always positive.
pub fn parse_root(text: &str) -> f64 {
    match parse_loose(text) {
        Some(v) if v > 0.0 => v,
        _ => ROOT_SIZE_FALLBACK,
    }
}

/// Fixed-point formatting with a fixed number of decimal places.
///
/// `format_fixed(0.625, 3)` yields `"0.625"`, `format_fixed(32.0, 0)`
/// yields `"32"` — the display convention both the form and the
/// reference tables use. Ties round away from zero, so 1px at a 16px
/// root shows `0.063`, not `0.062`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.decimals$}")
}

// ---------------------------------------------------------------------------
// ConverterForm
// ---------------------------------------------------------------------------

/// The converter form state machine.
///
/// Field texts are stored verbatim; derived values are recomputed on
/// every edit of the authoritative field. The only stateful transition
/// beyond the texts themselves is the two-state last-edited marker.
#[derive(Debug, Clone)]
pub struct ConverterForm {
    /// Pixel field text, verbatim as entered (or derived, 2 dp).
    px: String,
    /// Rem field text, verbatim as entered (or derived, 3 dp).
    rem: String,
    /// Effective root size in pixels per rem. Always positive.
    root: f64,
    /// Which value field is authoritative.
    last_edited: UnitField,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterForm {
    /// Create an empty form with the default 16px root.
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT_SIZE)
    }

    /// Create an empty form with a caller-supplied root size.
    ///
    /// The root passes through the same fallback rule as interactive
    /// edits, so a zero or negative CLI value cannot poison the form.
    pub fn with_root(root: f64) -> Self {
        let root = if root.is_finite() && root > 0.0 {
            root
        } else {
            ROOT_SIZE_FALLBACK
        };
        Self {
            px: String::new(),
            rem: String::new(),
            root,
            last_edited: UnitField::Px,
        }
    }

    /// Current pixel field text.
    pub fn px(&self) -> &str {
        &self.px
    }

    /// Current rem field text.
    pub fn rem(&self) -> &str {
        &self.rem
    }

    /// Effective root size (pixels per rem).
    pub fn root(&self) -> f64 {
        self.root
    }

    /// The last-edited marker.
    pub fn last_edited(&self) -> UnitField {
        self.last_edited
    }

    /// Text of the named field.
    pub fn field(&self, field: UnitField) -> &str {
        match field {
            UnitField::Px => &self.px,
            UnitField::Rem => &self.rem,
        }
    }

    /// Edit the pixel field.
    ///
    /// Stores the text verbatim and marks px authoritative. The rem
    /// field becomes `px / root` at 3 decimal places, or empty when the
    /// text does not parse.
    pub fn edit_px(&mut self, text: impl Into<String>) {
        self.px = text.into();
        self.rem = match parse_loose(&self.px) {
            Some(px) => format_fixed(px / self.root, REM_PRECISION),
            None => String::new(),
        };
        self.last_edited = UnitField::Px;
    }

    /// Edit the rem field.
    ///
    /// Symmetric to [`edit_px`](Self::edit_px): px becomes `rem * root`
    /// at 2 decimal places, or empty when the text does not parse.
    pub fn edit_rem(&mut self, text: impl Into<String>) {
        self.rem = text.into();
        self.px = match parse_loose(&self.rem) {
            Some(rem) => format_fixed(rem * self.root, PX_PRECISION),
            None => String::new(),
        };
        self.last_edited = UnitField::Rem;
    }

    /// Edit the root size from field text.
    ///
    /// Unusable input falls back to [`ROOT_SIZE_FALLBACK`]. When the
    /// authoritative field is non-empty its derived counterpart is
    /// recomputed against the new root; otherwise both fields are left
    /// untouched. The marker does not move.
    pub fn edit_root(&mut self, text: &str) {
        self.set_root(parse_root(text));
    }

    /// Set the root size directly (already sanitized by the caller or
    /// by [`parse_root`]).
    pub fn set_root(&mut self, root: f64) {
        self.root = if root.is_finite() && root > 0.0 {
            root
        } else {
            ROOT_SIZE_FALLBACK
        };
        match self.last_edited {
            UnitField::Px if !self.px.is_empty() => {
                self.rem = match parse_loose(&self.px) {
                    Some(px) => format_fixed(px / self.root, REM_PRECISION),
                    None => String::new(),
                };
            }
            UnitField::Rem if !self.rem.is_empty() => {
                self.px = match parse_loose(&self.rem) {
                    Some(rem) => format_fixed(rem * self.root, PX_PRECISION),
                    None => String::new(),
                };
            }
            _ => {}
        }
    }

    /// Swap the two field texts verbatim and flip the marker.
    ///
    /// No recomputation and no validation: swapped values may be stale
    /// relative to the current root until the next edit.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.px, &mut self.rem);
        self.last_edited = self.last_edited.other();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_form_defaults() {
        let form = ConverterForm::new();
        assert_eq!(form.px(), "");
        assert_eq!(form.rem(), "");
        assert_eq!(form.root(), 16.0);
        assert_eq!(form.last_edited(), UnitField::Px);
    }

    #[test]
    fn with_root_sanitizes_unusable_values() {
        assert_eq!(ConverterForm::with_root(0.0).root(), 1.0);
        assert_eq!(ConverterForm::with_root(-4.0).root(), 1.0);
        assert_eq!(ConverterForm::with_root(f64::NAN).root(), 1.0);
        assert_eq!(ConverterForm::with_root(20.0).root(), 20.0);
    }

    #[test]
    fn edit_px_derives_rem_at_three_decimals() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        assert_eq!(form.px(), "10");
        assert_eq!(form.rem(), "0.625");
        assert_eq!(form.last_edited(), UnitField::Px);
    }

    #[test]
    fn edit_rem_derives_px_at_two_decimals() {
        let mut form = ConverterForm::new();
        form.edit_rem("1.5");
        assert_eq!(form.rem(), "1.5");
        assert_eq!(form.px(), "24.00");
        assert_eq!(form.last_edited(), UnitField::Rem);
    }

    #[test]
    fn empty_edit_clears_the_derived_field() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        form.edit_px("");
        assert_eq!(form.rem(), "");

        form.edit_rem("2");
        form.edit_rem("");
        assert_eq!(form.px(), "");
    }

    #[test]
    fn unparseable_edit_clears_the_derived_field() {
        let mut form = ConverterForm::new();
        form.edit_px("abc");
        assert_eq!(form.px(), "abc");
        assert_eq!(form.rem(), "");
    }

    #[test]
    fn whitespace_behaves_like_empty() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        form.edit_px("   ");
        assert_eq!(form.rem(), "");
    }

    #[test]
    fn padded_numeric_text_still_parses() {
        let mut form = ConverterForm::new();
        form.edit_px("  8  ");
        assert_eq!(form.rem(), "0.500");
    }

    #[test]
    fn root_change_recomputes_from_authoritative_px() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        assert_eq!(form.rem(), "0.625");

        form.edit_root("20");
        assert_eq!(form.px(), "10");
        assert_eq!(form.rem(), "0.500");
        assert_eq!(form.last_edited(), UnitField::Px);
    }

    #[test]
    fn root_change_recomputes_from_authoritative_rem() {
        let mut form = ConverterForm::new();
        form.edit_rem("2");
        assert_eq!(form.px(), "32.00");

        form.edit_root("10");
        assert_eq!(form.rem(), "2");
        assert_eq!(form.px(), "20.00");
    }

    #[test]
    fn root_change_with_empty_fields_is_inert() {
        let mut form = ConverterForm::new();
        form.edit_root("20");
        assert_eq!(form.px(), "");
        assert_eq!(form.rem(), "");
        assert_eq!(form.root(), 20.0);
    }

    #[test]
    fn root_change_with_unparseable_authoritative_text_clears_derived() {
        let mut form = ConverterForm::new();
        form.edit_px("abc");
        form.edit_root("20");
        assert_eq!(form.px(), "abc");
        assert_eq!(form.rem(), "");
    }

    #[test]
    fn root_fallback_on_bad_input() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        for bad in ["", "0", "-3", "nonsense"] {
            form.edit_root(bad);
            assert_eq!(form.root(), 1.0, "root text {bad:?}");
            assert_eq!(form.rem(), "10.000");
        }
    }

    #[test]
    fn swap_exchanges_texts_verbatim_and_flips_marker() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        form.swap();
        assert_eq!(form.px(), "0.625");
        assert_eq!(form.rem(), "10");
        assert_eq!(form.last_edited(), UnitField::Rem);

        form.swap();
        assert_eq!(form.px(), "10");
        assert_eq!(form.rem(), "0.625");
        assert_eq!(form.last_edited(), UnitField::Px);
    }

    #[test]
    fn swap_preserves_stale_values_without_recomputation() {
        let mut form = ConverterForm::new();
        form.edit_px("abc");
        form.swap();
        // "abc" moved to rem untouched, no validation applied.
        assert_eq!(form.px(), "");
        assert_eq!(form.rem(), "abc");
    }

    /// The concrete walkthrough scenario: enter px, change root, swap.
    #[test]
    fn end_to_end_scenario() {
        let mut form = ConverterForm::new();
        form.edit_px("10");
        assert_eq!(form.rem(), "0.625");

        form.edit_root("20");
        assert_eq!(form.px(), "10");
        assert_eq!(form.rem(), "0.500");

        form.swap();
        assert_eq!(form.px(), "0.500");
        assert_eq!(form.rem(), "10");
    }

    #[test]
    fn parse_loose_rejects_non_finite() {
        assert_eq!(parse_loose("inf"), None);
        assert_eq!(parse_loose("-inf"), None);
        assert_eq!(parse_loose("NaN"), None);
    }

    #[test]
    fn format_fixed_examples() {
        assert_eq!(format_fixed(0.625, 3), "0.625");
        assert_eq!(format_fixed(32.0, 0), "32");
        assert_eq!(format_fixed(24.0, 2), "24.00");
        assert_eq!(format_fixed(31.6, 0), "32");
    }

    #[test]
    fn format_fixed_rounds_ties_away_from_zero() {
        assert_eq!(format_fixed(1.0 / 16.0, 3), "0.063");
        assert_eq!(format_fixed(0.625, 2), "0.63");
    }

    proptest! {
        /// Editing px always yields rem = px / root at 3 decimals.
        #[test]
        fn prop_px_edit_derives_rem(px in -1e6f64..1e6f64, root in 1.0f64..128.0) {
            let mut form = ConverterForm::with_root(root);
            form.edit_px(px.to_string());
            prop_assert_eq!(form.rem(), format_fixed(px / root, 3));
        }

        /// Editing rem always yields px = rem * root at 2 decimals.
        #[test]
        fn prop_rem_edit_derives_px(rem in -1e6f64..1e6f64, root in 1.0f64..128.0) {
            let mut form = ConverterForm::with_root(root);
            form.edit_rem(rem.to_string());
            prop_assert_eq!(form.px(), format_fixed(rem * root, 2));
        }

        /// Swap is an exact exchange, regardless of field contents.
        #[test]
        fn prop_swap_is_verbatim_exchange(text in ".{0,12}") {
            let mut form = ConverterForm::new();
            form.edit_px(text);
            let (px_before, rem_before) = (form.px().to_string(), form.rem().to_string());
            form.swap();
            prop_assert_eq!(form.px(), rem_before);
            prop_assert_eq!(form.rem(), px_before);
        }

        /// Double swap restores the original field contents and marker.
        #[test]
        fn prop_double_swap_is_identity(text in ".{0,12}") {
            let mut form = ConverterForm::new();
            form.edit_px(text);
            let snapshot = (
                form.px().to_string(),
                form.rem().to_string(),
                form.last_edited(),
            );
            form.swap();
            form.swap();
            prop_assert_eq!(
                (form.px().to_string(), form.rem().to_string(), form.last_edited()),
                snapshot
            );
        }

        /// The effective root is always positive, whatever the input text.
        #[test]
        fn prop_root_is_always_positive(text in ".{0,12}") {
            let mut form = ConverterForm::new();
            form.edit_root(&text);
            prop_assert!(form.root() > 0.0);
        }
    }
}

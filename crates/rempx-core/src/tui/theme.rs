//! Theme and styling for the converter TUI.
//!
//! Provides consistent colors and styles across all widgets using ftui's
//! Theme/StyleSheet system with WCAG accessibility validation. Each unit
//! family (px, rem, root size) carries its own accent color so the two
//! value fields read apart at a glance.

use ftui::style::{
    contrast_ratio, meets_wcag_aa, meets_wcag_aaa, ColorProfile, Rgb, StyleSheet,
    Theme as FtuiTheme, ThemeBuilder,
};
use ftui::PackedRgba;
use ftui::Style as FtuiStyle;

/// Theme mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme for high ambient light.
    Light,
    /// Dark theme (default).
    #[default]
    Dark,
    /// High contrast for accessibility (WCAG AAA).
    HighContrast,
    /// No color — respects `NO_COLOR` environment variable.
    NoColor,
}

impl ThemeMode {
    /// Parse a theme name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "high-contrast" | "high_contrast" => Some(ThemeMode::HighContrast),
            "no-color" | "no_color" | "none" => Some(ThemeMode::NoColor),
            _ => None,
        }
    }
}

/// Unit accent colors kept as RGB for WCAG validation.
#[derive(Debug, Clone)]
struct UnitColors {
    px: Rgb,
    rem: Rgb,
    root: Rgb,
    bg: Rgb,
    fg: Rgb,
}

/// Theme configuration for the TUI.
///
/// Wraps ftui's `Theme` and `StyleSheet` and keeps the raw unit accent
/// colors around for contrast validation.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme mode.
    pub mode: ThemeMode,

    ftui_theme: FtuiTheme,
    stylesheet: StyleSheet,
    units: UnitColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_env()
    }
}

// ---------------------------------------------------------------------------
// RGB constants for unit accent colors
// ---------------------------------------------------------------------------

// Dark theme
const DARK_BG: Rgb = Rgb::new(30, 30, 30);
const DARK_FG: Rgb = Rgb::new(220, 220, 220);
const DARK_PX: Rgb = Rgb::new(80, 200, 255);
const DARK_REM: Rgb = Rgb::new(255, 180, 80);
const DARK_ROOT: Rgb = Rgb::new(180, 160, 255);
const DARK_HIGHLIGHT: Rgb = Rgb::new(0, 200, 200);
const DARK_MUTED: Rgb = Rgb::new(128, 128, 128);
const DARK_BORDER: Rgb = Rgb::new(80, 80, 80);
const DARK_BORDER_FOCUSED: Rgb = Rgb::new(0, 200, 200);
const DARK_ERROR: Rgb = Rgb::new(255, 80, 80);
const DARK_SUCCESS: Rgb = Rgb::new(80, 220, 80);

// Light theme
const LIGHT_BG: Rgb = Rgb::new(255, 255, 255);
const LIGHT_FG: Rgb = Rgb::new(30, 30, 30);
const LIGHT_PX: Rgb = Rgb::new(0, 90, 160);
const LIGHT_REM: Rgb = Rgb::new(150, 75, 0);
const LIGHT_ROOT: Rgb = Rgb::new(90, 50, 170);
const LIGHT_HIGHLIGHT: Rgb = Rgb::new(0, 80, 200);
const LIGHT_MUTED: Rgb = Rgb::new(128, 128, 128);
const LIGHT_BORDER: Rgb = Rgb::new(180, 180, 180);
const LIGHT_BORDER_FOCUSED: Rgb = Rgb::new(0, 80, 200);
const LIGHT_ERROR: Rgb = Rgb::new(200, 0, 0);
const LIGHT_SUCCESS: Rgb = Rgb::new(0, 128, 0);

// High contrast (WCAG AAA: 7:1 minimum)
const HC_BG: Rgb = Rgb::new(0, 0, 0);
const HC_FG: Rgb = Rgb::new(255, 255, 255);
const HC_PX: Rgb = Rgb::new(120, 220, 255);
const HC_REM: Rgb = Rgb::new(255, 220, 120);
const HC_ROOT: Rgb = Rgb::new(220, 200, 255);
const HC_HIGHLIGHT: Rgb = Rgb::new(255, 255, 0);
const HC_MUTED: Rgb = Rgb::new(200, 200, 200);
const HC_BORDER: Rgb = Rgb::new(255, 255, 255);
const HC_BORDER_FOCUSED: Rgb = Rgb::new(255, 255, 0);
const HC_ERROR: Rgb = Rgb::new(255, 100, 100);
const HC_SUCCESS: Rgb = Rgb::new(100, 255, 100);

impl Theme {
    /// Auto-detect theme from environment variables.
    ///
    /// Priority:
    /// 1. `NO_COLOR` set → NoColor theme
    /// 2. `REMPX_HIGH_CONTRAST` set → HighContrast theme
    /// 3. Default → Dark theme
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            return Self::no_color();
        }
        if std::env::var("REMPX_HIGH_CONTRAST").is_ok() {
            return Self::high_contrast();
        }
        Self::dark()
    }

    /// Construct a theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::HighContrast => Self::high_contrast(),
            ThemeMode::NoColor => Self::no_color(),
        }
    }

    /// Create a dark theme (default).
    pub fn dark() -> Self {
        let ftui_theme = ThemeBuilder::new()
            .background(ftui::Color::rgb(DARK_BG.r, DARK_BG.g, DARK_BG.b))
            .text(ftui::Color::rgb(DARK_FG.r, DARK_FG.g, DARK_FG.b))
            .error(ftui::Color::rgb(DARK_ERROR.r, DARK_ERROR.g, DARK_ERROR.b))
            .success(ftui::Color::rgb(
                DARK_SUCCESS.r,
                DARK_SUCCESS.g,
                DARK_SUCCESS.b,
            ))
            .primary(ftui::Color::rgb(
                DARK_HIGHLIGHT.r,
                DARK_HIGHLIGHT.g,
                DARK_HIGHLIGHT.b,
            ))
            .text_muted(ftui::Color::rgb(DARK_MUTED.r, DARK_MUTED.g, DARK_MUTED.b))
            .border(ftui::Color::rgb(
                DARK_BORDER.r,
                DARK_BORDER.g,
                DARK_BORDER.b,
            ))
            .border_focused(ftui::Color::rgb(
                DARK_BORDER_FOCUSED.r,
                DARK_BORDER_FOCUSED.g,
                DARK_BORDER_FOCUSED.b,
            ))
            .build();

        let units = UnitColors {
            px: DARK_PX,
            rem: DARK_REM,
            root: DARK_ROOT,
            bg: DARK_BG,
            fg: DARK_FG,
        };

        let stylesheet = build_stylesheet(&units, DARK_MUTED, DARK_SUCCESS);

        Self {
            mode: ThemeMode::Dark,
            ftui_theme,
            stylesheet,
            units,
        }
    }

    /// Create a light theme.
    pub fn light() -> Self {
        let ftui_theme = ThemeBuilder::new()
            .background(ftui::Color::rgb(LIGHT_BG.r, LIGHT_BG.g, LIGHT_BG.b))
            .text(ftui::Color::rgb(LIGHT_FG.r, LIGHT_FG.g, LIGHT_FG.b))
            .error(ftui::Color::rgb(
                LIGHT_ERROR.r,
                LIGHT_ERROR.g,
                LIGHT_ERROR.b,
            ))
            .success(ftui::Color::rgb(
                LIGHT_SUCCESS.r,
                LIGHT_SUCCESS.g,
                LIGHT_SUCCESS.b,
            ))
            .primary(ftui::Color::rgb(
                LIGHT_HIGHLIGHT.r,
                LIGHT_HIGHLIGHT.g,
                LIGHT_HIGHLIGHT.b,
            ))
            .text_muted(ftui::Color::rgb(
                LIGHT_MUTED.r,
                LIGHT_MUTED.g,
                LIGHT_MUTED.b,
            ))
            .border(ftui::Color::rgb(
                LIGHT_BORDER.r,
                LIGHT_BORDER.g,
                LIGHT_BORDER.b,
            ))
            .border_focused(ftui::Color::rgb(
                LIGHT_BORDER_FOCUSED.r,
                LIGHT_BORDER_FOCUSED.g,
                LIGHT_BORDER_FOCUSED.b,
            ))
            .build();

        let units = UnitColors {
            px: LIGHT_PX,
            rem: LIGHT_REM,
            root: LIGHT_ROOT,
            bg: LIGHT_BG,
            fg: LIGHT_FG,
        };

        let stylesheet = build_stylesheet(&units, LIGHT_MUTED, LIGHT_SUCCESS);

        Self {
            mode: ThemeMode::Light,
            ftui_theme,
            stylesheet,
            units,
        }
    }

    /// Create a high contrast theme (WCAG AAA: 7:1 minimum ratio).
    pub fn high_contrast() -> Self {
        let ftui_theme = ThemeBuilder::new()
            .background(ftui::Color::rgb(HC_BG.r, HC_BG.g, HC_BG.b))
            .text(ftui::Color::rgb(HC_FG.r, HC_FG.g, HC_FG.b))
            .error(ftui::Color::rgb(HC_ERROR.r, HC_ERROR.g, HC_ERROR.b))
            .success(ftui::Color::rgb(HC_SUCCESS.r, HC_SUCCESS.g, HC_SUCCESS.b))
            .primary(ftui::Color::rgb(
                HC_HIGHLIGHT.r,
                HC_HIGHLIGHT.g,
                HC_HIGHLIGHT.b,
            ))
            .text_muted(ftui::Color::rgb(HC_MUTED.r, HC_MUTED.g, HC_MUTED.b))
            .border(ftui::Color::rgb(HC_BORDER.r, HC_BORDER.g, HC_BORDER.b))
            .border_focused(ftui::Color::rgb(
                HC_BORDER_FOCUSED.r,
                HC_BORDER_FOCUSED.g,
                HC_BORDER_FOCUSED.b,
            ))
            .build();

        let units = UnitColors {
            px: HC_PX,
            rem: HC_REM,
            root: HC_ROOT,
            bg: HC_BG,
            fg: HC_FG,
        };

        let stylesheet = build_stylesheet(&units, HC_MUTED, HC_SUCCESS);

        Self {
            mode: ThemeMode::HighContrast,
            ftui_theme,
            stylesheet,
            units,
        }
    }

    /// Create a no-color theme for terminals without color support.
    /// Respects the `NO_COLOR` environment variable (<https://no-color.org/>).
    pub fn no_color() -> Self {
        let ftui_theme = ThemeBuilder::new().build();

        let units = UnitColors {
            px: Rgb::new(255, 255, 255),
            rem: Rgb::new(255, 255, 255),
            root: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            fg: Rgb::new(255, 255, 255),
        };

        let stylesheet = build_no_color_stylesheet();

        Self {
            mode: ThemeMode::NoColor,
            ftui_theme,
            stylesheet,
            units,
        }
    }

    // --- ftui integration accessors ---

    /// Access the underlying ftui theme.
    pub fn ftui_theme(&self) -> &FtuiTheme {
        &self.ftui_theme
    }

    /// Access the stylesheet with named style classes.
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    /// Get an ftui style by class name from the stylesheet.
    pub fn class(&self, name: &str) -> FtuiStyle {
        self.stylesheet.get_or_default(name)
    }

    /// Get the current color profile based on terminal capabilities.
    pub fn color_profile() -> ColorProfile {
        ColorProfile::detect()
    }

    // --- WCAG validation ---

    /// Validate that all unit accent colors meet WCAG AA (4.5:1 ratio)
    /// against the theme's background color.
    pub fn validate_wcag_aa(&self) -> Vec<String> {
        let mut failures = Vec::new();
        let bg = self.units.bg;

        for (name, fg) in [
            ("px", self.units.px),
            ("rem", self.units.rem),
            ("root", self.units.root),
            ("text", self.units.fg),
        ] {
            if !meets_wcag_aa(fg, bg) {
                let ratio = contrast_ratio(fg, bg);
                failures.push(format!(
                    "{name} ({fg:?}) on bg ({bg:?}) fails WCAG AA: {ratio:.2}:1 < 4.5:1"
                ));
            }
        }

        failures
    }

    /// Validate that all unit accent colors meet WCAG AAA (7:1 ratio)
    /// against the theme's background color.
    pub fn validate_wcag_aaa(&self) -> Vec<String> {
        let mut failures = Vec::new();
        let bg = self.units.bg;

        for (name, fg) in [
            ("px", self.units.px),
            ("rem", self.units.rem),
            ("root", self.units.root),
            ("text", self.units.fg),
        ] {
            if !meets_wcag_aaa(fg, bg) {
                let ratio = contrast_ratio(fg, bg);
                failures.push(format!(
                    "{name} ({fg:?}) on bg ({bg:?}) fails WCAG AAA: {ratio:.2}:1 < 7.0:1"
                ));
            }
        }

        failures
    }
}

// ---------------------------------------------------------------------------
// StyleSheet builders
// ---------------------------------------------------------------------------

fn rgba(c: Rgb) -> PackedRgba {
    PackedRgba::rgb(c.r, c.g, c.b)
}

/// Build the standard stylesheet with unit-aware styles.
fn build_stylesheet(units: &UnitColors, muted: Rgb, success: Rgb) -> StyleSheet {
    let sheet = StyleSheet::new();

    // Unit accents
    sheet.define("unit.px", FtuiStyle::new().fg(rgba(units.px)).bold());
    sheet.define("unit.rem", FtuiStyle::new().fg(rgba(units.rem)).bold());
    sheet.define("unit.root", FtuiStyle::new().fg(rgba(units.root)));

    // Field text and placeholders
    sheet.define("field.value", FtuiStyle::new().fg(rgba(units.fg)));
    sheet.define("field.placeholder", FtuiStyle::new().fg(rgba(muted)));
    sheet.define("field.cursor", FtuiStyle::new().reverse());

    // Tables
    sheet.define("table.header", FtuiStyle::new().fg(rgba(units.fg)).bold());
    sheet.define(
        "table.selected",
        FtuiStyle::new().bg(PackedRgba::rgb(60, 60, 60)),
    );

    // Status bar
    sheet.define("status.hint", FtuiStyle::new().fg(rgba(muted)));
    sheet.define("status.root", FtuiStyle::new().fg(rgba(units.root)).bold());
    sheet.define("status.notice", FtuiStyle::new().fg(rgba(success)).bold());

    // Borders
    sheet.define("border.normal", FtuiStyle::new());
    sheet.define("border.focused", FtuiStyle::new().bold());

    sheet
}

/// Build a stylesheet for NO_COLOR mode using only text attributes.
fn build_no_color_stylesheet() -> StyleSheet {
    let sheet = StyleSheet::new();

    // Use bold, underline, and reverse instead of colors
    sheet.define("unit.px", FtuiStyle::new().bold());
    sheet.define("unit.rem", FtuiStyle::new().bold());
    sheet.define("unit.root", FtuiStyle::new());

    sheet.define("field.value", FtuiStyle::new());
    sheet.define("field.placeholder", FtuiStyle::new().dim());
    sheet.define("field.cursor", FtuiStyle::new().reverse());

    sheet.define("table.header", FtuiStyle::new().bold());
    sheet.define("table.selected", FtuiStyle::new().reverse());

    sheet.define("status.hint", FtuiStyle::new());
    sheet.define("status.root", FtuiStyle::new().bold());
    sheet.define("status.notice", FtuiStyle::new().bold().underline());

    sheet.define("border.normal", FtuiStyle::new());
    sheet.define("border.focused", FtuiStyle::new().bold());

    sheet
}

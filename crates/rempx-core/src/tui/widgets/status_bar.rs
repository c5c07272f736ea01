//! Status bar widget.
//!
//! Bottom-of-screen status bar showing the effective root size, the
//! conversion direction, and context-sensitive key hints.

use ftui::widgets::Widget as FtuiWidget;

use rempx_units::UnitField;

use crate::tui::theme::Theme;

// ---------------------------------------------------------------------------
// Mode enum (mirrors AppState for status display)
// ---------------------------------------------------------------------------

/// Display mode for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    /// Normal editing.
    #[default]
    Normal,
    /// Help overlay visible.
    Help,
    /// Copy notice visible.
    Notice,
}

impl StatusMode {
    /// Display label for the mode.
    pub fn label(self) -> &'static str {
        match self {
            StatusMode::Normal => "Edit",
            StatusMode::Help => "Help",
            StatusMode::Notice => "Notice",
        }
    }

    /// Context-sensitive key hints for this mode.
    pub fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            StatusMode::Normal => &[
                ("s", "swap"),
                ("c", "copy"),
                ("Tab", "focus"),
                ("?", "help"),
                ("q", "quit"),
            ],
            StatusMode::Help => &[("?", "close"), ("Esc", "close")],
            StatusMode::Notice => &[("Enter", "dismiss"), ("Esc", "dismiss")],
        }
    }
}

// ---------------------------------------------------------------------------
// StatusBar widget
// ---------------------------------------------------------------------------

/// Status bar widget for the bottom of the TUI.
#[derive(Debug)]
pub struct StatusBar<'a> {
    /// Theme for styling.
    theme: Option<&'a Theme>,
    /// Current mode.
    mode: StatusMode,
    /// Effective root font size in px.
    root: f64,
    /// Which side drives the conversion.
    source: UnitField,
    /// Custom status message (overrides auto-generated content).
    message: Option<&'a str>,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new() -> Self {
        Self {
            theme: None,
            mode: StatusMode::Normal,
            root: rempx_units::DEFAULT_ROOT_SIZE,
            source: UnitField::Px,
            message: None,
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the current mode.
    pub fn mode(mut self, mode: StatusMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the effective root font size.
    pub fn root(mut self, root: f64) -> Self {
        self.root = root;
        self
    }

    /// Set the conversion source side.
    pub fn source(mut self, source: UnitField) -> Self {
        self.source = source;
        self
    }

    /// Set a custom status message (overrides auto-generated content).
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    // ── Content builders ──────────────────────────────────────────────

    /// Build the left-side status text.
    pub fn build_left_text(&self) -> String {
        if let Some(msg) = self.message {
            return msg.to_string();
        }

        let direction = match self.source {
            UnitField::Px => "px \u{2192} rem",
            UnitField::Rem => "rem \u{2192} px",
        };

        format!("root: {}px \u{2502} {}", self.root, direction)
    }

    /// Build the mode indicator text.
    pub fn build_mode_text(&self) -> String {
        format!("[{}]", self.mode.label())
    }

    /// Build the hints text.
    pub fn build_hints_text(&self) -> String {
        self.mode
            .hints()
            .iter()
            .map(|(key, action)| format!("{}: {}", key, action))
            .collect::<Vec<_>>()
            .join("  ")
    }

    // ── ftui rendering ────────────────────────────────────────────────

    /// Render the status bar as a single-line Paragraph.
    pub fn render_view(&self, area: ftui::layout::Rect, frame: &mut ftui::render::frame::Frame) {
        let style = self
            .theme
            .map(|t| {
                let class = if self.message.is_some() {
                    "status.notice"
                } else {
                    "status.hint"
                };
                t.stylesheet().get_or_default(class)
            })
            .unwrap_or_default();

        let text = format!(
            "{} \u{2502} {} \u{2502} {}",
            self.build_left_text(),
            self.build_mode_text(),
            self.build_hints_text()
        );

        let paragraph = ftui::widgets::paragraph::Paragraph::new(text).style(style);
        FtuiWidget::render(&paragraph, area, frame);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_bar() {
        let bar = StatusBar::new();
        assert_eq!(bar.mode, StatusMode::Normal);
        assert_eq!(bar.root, 16.0);
        assert!(bar.message.is_none());
    }

    #[test]
    fn test_left_text_shows_root_and_direction() {
        let bar = StatusBar::new().root(16.0);
        assert_eq!(bar.build_left_text(), "root: 16px \u{2502} px \u{2192} rem");
    }

    #[test]
    fn test_left_text_tracks_source_side() {
        let bar = StatusBar::new().root(20.0).source(UnitField::Rem);
        assert_eq!(bar.build_left_text(), "root: 20px \u{2502} rem \u{2192} px");
    }

    #[test]
    fn test_fractional_root_renders_without_padding() {
        let bar = StatusBar::new().root(16.5);
        assert!(bar.build_left_text().starts_with("root: 16.5px"));
    }

    #[test]
    fn test_message_overrides_left_text() {
        let bar = StatusBar::new().message("Copied 0.625 to clipboard!");
        assert_eq!(bar.build_left_text(), "Copied 0.625 to clipboard!");
    }

    #[test]
    fn test_mode_text() {
        assert_eq!(StatusBar::new().build_mode_text(), "[Edit]");
        assert_eq!(
            StatusBar::new().mode(StatusMode::Help).build_mode_text(),
            "[Help]"
        );
    }

    #[test]
    fn test_hints_for_normal_mode() {
        let hints = StatusBar::new().build_hints_text();
        assert!(hints.contains("s: swap"));
        assert!(hints.contains("c: copy"));
        assert!(hints.contains("q: quit"));
    }

    #[test]
    fn test_hints_for_notice_mode() {
        let hints = StatusBar::new().mode(StatusMode::Notice).build_hints_text();
        assert!(hints.contains("dismiss"));
    }
}

//! Help overlay widget.
//!
//! Modal overlay showing keyboard shortcuts. Uses ftui's Modal + Block
//! + Paragraph for rendering, with a compact variant for small
//! terminals.

use ftui::text::{Line as FtuiLine, Span as FtuiSpan, Text as FtuiText};
use ftui::widgets::block::Block as FtuiBlock;
use ftui::widgets::modal::{Modal, ModalPosition, ModalSizeConstraints};
use ftui::widgets::paragraph::Paragraph as FtuiParagraph;
use ftui::widgets::Widget as FtuiWidget;
use ftui::PackedRgba;
use ftui::Style as FtuiStyle;

use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;

// ---------------------------------------------------------------------------
// Help content
// ---------------------------------------------------------------------------

/// A single keybinding entry.
#[derive(Debug, Clone)]
struct Binding {
    key: &'static str,
    desc: &'static str,
}

/// A section of related keybindings.
#[derive(Debug, Clone)]
struct Section {
    title: &'static str,
    bindings: &'static [Binding],
}

const EDITING: &[Binding] = &[
    Binding {
        key: "0-9 . - e",
        desc: "Type into focused field",
    },
    Binding {
        key: "Backspace",
        desc: "Delete last character",
    },
    Binding {
        key: "Delete",
        desc: "Clear focused field",
    },
    Binding {
        key: "Tab / Down",
        desc: "Next field",
    },
    Binding {
        key: "S-Tab / Up",
        desc: "Previous field",
    },
];

const ACTIONS: &[Binding] = &[
    Binding {
        key: "s",
        desc: "Swap px and rem values",
    },
    Binding {
        key: "c",
        desc: "Copy focused value",
    },
];

const GENERAL: &[Binding] = &[
    Binding {
        key: "? / F1",
        desc: "Toggle help",
    },
    Binding {
        key: "q / Ctrl+c",
        desc: "Quit",
    },
];

const SECTIONS: &[Section] = &[
    Section {
        title: "Editing",
        bindings: EDITING,
    },
    Section {
        title: "Actions",
        bindings: ACTIONS,
    },
    Section {
        title: "General",
        bindings: GENERAL,
    },
];

/// Key column width for full layout.
const KEY_COL_WIDTH: usize = 12;

// ---------------------------------------------------------------------------
// HelpOverlay widget
// ---------------------------------------------------------------------------

/// Help overlay widget showing keyboard shortcuts.
#[derive(Debug)]
pub struct HelpOverlay<'a> {
    /// Theme for styling.
    theme: Option<&'a Theme>,
    /// Current breakpoint for adaptive layout.
    breakpoint: Breakpoint,
}

impl<'a> Default for HelpOverlay<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new() -> Self {
        Self {
            theme: None,
            breakpoint: Breakpoint::Standard,
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the breakpoint for adaptive layout.
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    // ── Content builders ──────────────────────────────────────────────

    /// Build compact help text lines for small terminals.
    pub fn build_compact_lines() -> Vec<FtuiLine> {
        vec![
            FtuiLine::raw("Type: 0-9 . - e"),
            FtuiLine::raw("Fields: Tab / Shift+Tab"),
            FtuiLine::raw("Clear: Delete"),
            FtuiLine::raw("Swap: s  Copy: c"),
            FtuiLine::raw("Help: ?  Quit: q"),
        ]
    }

    /// Build full help text lines with formatted sections.
    pub fn build_full_lines(theme: Option<&Theme>) -> Vec<FtuiLine> {
        let title_style = theme
            .map(|t| t.stylesheet().get_or_default("table.header"))
            .unwrap_or_else(|| FtuiStyle::new().bold());

        let key_style = theme
            .map(|t| t.stylesheet().get_or_default("unit.px"))
            .unwrap_or_else(|| FtuiStyle::new().fg(PackedRgba::rgb(0, 255, 255)).bold());

        let desc_style = theme
            .map(|t| t.class("border.normal"))
            .unwrap_or_default();

        let mut lines = Vec::new();

        // Title
        lines.push(FtuiLine::from_spans([FtuiSpan::styled(
            "  rempx \u{2014} px \u{2194} rem converter",
            title_style,
        )]));
        lines.push(FtuiLine::raw(""));

        for section in SECTIONS {
            // Section header
            lines.push(FtuiLine::from_spans([FtuiSpan::styled(
                format!("  {}:", section.title),
                title_style,
            )]));

            for binding in section.bindings {
                let padded_key = format!("    {:width$}", binding.key, width = KEY_COL_WIDTH);
                lines.push(FtuiLine::from_spans([
                    FtuiSpan::styled(padded_key, key_style),
                    FtuiSpan::styled(binding.desc, desc_style),
                ]));
            }

            lines.push(FtuiLine::raw(""));
        }

        lines
    }

    // ── ftui rendering ────────────────────────────────────────────────

    /// Render the help overlay using ftui Modal + Paragraph.
    pub fn render_view(&self, area: ftui::layout::Rect, frame: &mut ftui::render::frame::Frame) {
        let lines = match self.breakpoint {
            Breakpoint::Minimal => Self::build_compact_lines(),
            _ => Self::build_full_lines(self.theme),
        };

        let border_style = self
            .theme
            .map(|t| t.stylesheet().get_or_default("border.focused"))
            .unwrap_or_else(|| FtuiStyle::new().fg(PackedRgba::rgb(0, 255, 255)));

        let text_style = self
            .theme
            .map(|t| t.class("border.normal"))
            .unwrap_or_default();

        let block = FtuiBlock::bordered()
            .title(" Help ")
            .border_style(border_style);

        let text: FtuiText = lines.into_iter().collect();
        let paragraph = FtuiParagraph::new(text).style(text_style).block(block);

        let size = ModalSizeConstraints::new()
            .min_width(30)
            .max_width((area.width as f32 * 0.6) as u16)
            .min_height(8)
            .max_height((area.height as f32 * 0.8) as u16);

        let modal = Modal::new(paragraph)
            .position(ModalPosition::Center)
            .size(size);

        FtuiWidget::render(&modal, area, frame);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

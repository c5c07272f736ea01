//! Copy confirmation notice.
//!
//! Small modal dialog shown after a value is copied to the clipboard.
//! Uses ftui's Dialog with a single OK button.

use ftui::widgets::modal::{
    Dialog as FtuiDialog, DialogButton as FtuiDialogButton, DialogState as FtuiDialogState,
};
use ftui::widgets::StatefulWidget as FtuiStatefulWidget;
use ftui::PackedRgba;
use ftui::Style as FtuiStyle;

use crate::tui::theme::Theme;

/// Copy notice dialog widget.
#[derive(Debug)]
pub struct CopyNotice<'a> {
    /// The value that was copied, verbatim.
    value: &'a str,
    /// Theme for styling.
    theme: Option<&'a Theme>,
}

impl<'a> CopyNotice<'a> {
    /// Create a notice for the given copied value.
    pub fn new(value: &'a str) -> Self {
        Self { value, theme: None }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the notice message.
    pub fn message(&self) -> String {
        format!("Copied {} to clipboard!", self.value)
    }

    /// Render the notice dialog.
    pub fn render_view(&self, area: ftui::layout::Rect, frame: &mut ftui::render::frame::Frame) {
        let (button_style, focused_style) = if let Some(theme) = self.theme {
            let sheet = theme.stylesheet();
            (
                sheet.get_or_default("border.normal"),
                sheet.get_or_default("table.selected"),
            )
        } else {
            (
                FtuiStyle::default(),
                FtuiStyle::new()
                    .fg(PackedRgba::rgb(0, 0, 0))
                    .bg(PackedRgba::rgb(0, 255, 255))
                    .bold(),
            )
        };

        let dialog = FtuiDialog::custom(" Copied ", self.message())
            .button(FtuiDialogButton::new("OK", "ok"))
            .build()
            .button_style(button_style)
            .focused_button_style(focused_style);

        let mut ftui_state = FtuiDialogState::new();
        ftui_state.open = true;
        ftui_state.focused_button = Some(0);

        FtuiStatefulWidget::render(&dialog, area, frame, &mut ftui_state);
    }
}

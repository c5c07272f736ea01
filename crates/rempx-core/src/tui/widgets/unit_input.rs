//! Numeric input field for a single unit value.
//!
//! Uses ftui's built-in TextInput inside a bordered block. The field
//! itself is stateless: the authoritative value lives in the converter
//! form, and the widget is rebuilt from it on every frame.

use ftui::widgets::block::Block as FtuiBlock;
use ftui::widgets::input::TextInput as FtuiTextInput;
use ftui::widgets::Widget as FtuiWidget;
use ftui::Style as FtuiStyle;

use crate::tui::theme::Theme;

/// Bordered input field for one unit value (px, rem, or root size).
#[derive(Debug)]
pub struct UnitInput<'a> {
    /// Field label shown in the border title.
    label: &'a str,
    /// Unit suffix shown after the label.
    unit: &'a str,
    /// Current field text.
    value: &'a str,
    /// Placeholder text when empty.
    placeholder: &'a str,
    /// Stylesheet class for the unit accent.
    accent_class: &'a str,
    /// Whether this field currently has focus.
    focused: bool,
    /// Whether this field is the conversion source.
    is_source: bool,
    /// Theme for styling.
    theme: Option<&'a Theme>,
}

impl<'a> UnitInput<'a> {
    /// Create a new input field for the given label and unit suffix.
    pub fn new(label: &'a str, unit: &'a str) -> Self {
        Self {
            label,
            unit,
            value: "",
            placeholder: "",
            accent_class: "field.value",
            focused: false,
            is_source: false,
            theme: None,
        }
    }

    /// Set the current field text.
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the stylesheet class used for the unit accent.
    pub fn accent_class(mut self, class: &'a str) -> Self {
        self.accent_class = class;
        self
    }

    /// Set whether the field has focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark this field as the conversion source (the side last edited).
    pub fn source(mut self, is_source: bool) -> Self {
        self.is_source = is_source;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the border title, marking the conversion source.
    pub fn title_string(&self) -> String {
        if self.is_source {
            format!(" {} ({}) [source] ", self.label, self.unit)
        } else {
            format!(" {} ({}) ", self.label, self.unit)
        }
    }

    /// Render the field.
    pub fn render_view(&self, area: ftui::layout::Rect, frame: &mut ftui::render::frame::Frame) {
        let title = self.title_string();

        let border_style = self
            .theme
            .map(|t| {
                let class = if self.focused {
                    "border.focused"
                } else {
                    "border.normal"
                };
                t.stylesheet().get_or_default(class)
            })
            .unwrap_or_default();

        let block = FtuiBlock::bordered()
            .title(&title)
            .border_style(border_style);

        let inner = block.inner(area);
        FtuiWidget::render(&block, area, frame);

        let input_style = self
            .theme
            .map(|t| t.stylesheet().get_or_default(self.accent_class))
            .unwrap_or_default();

        let placeholder_style = self
            .theme
            .map(|t| t.class("field.placeholder"))
            .unwrap_or_default();

        let cursor_style = self
            .theme
            .map(|t| t.stylesheet().get_or_default("field.cursor"))
            .unwrap_or_else(|| FtuiStyle::new().reverse());

        let text_input = FtuiTextInput::new()
            .with_value(self.value.to_string())
            .with_placeholder(self.placeholder)
            .with_style(input_style)
            .with_placeholder_style(placeholder_style)
            .with_cursor_style(cursor_style)
            .with_focused(self.focused);

        FtuiWidget::render(&text_input, inner, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let field = UnitInput::new("Pixels", "px");
        assert_eq!(field.value, "");
        assert!(!field.focused);
        assert!(!field.is_source);
        assert!(field.theme.is_none());
    }

    #[test]
    fn test_title_without_source_marker() {
        let field = UnitInput::new("Pixels", "px");
        assert_eq!(field.title_string(), " Pixels (px) ");
    }

    #[test]
    fn test_title_with_source_marker() {
        let field = UnitInput::new("Rem", "rem").source(true);
        assert_eq!(field.title_string(), " Rem (rem) [source] ");
    }

    #[test]
    fn test_builder_chaining() {
        let field = UnitInput::new("Root size", "px")
            .value("16")
            .placeholder("16")
            .accent_class("unit.root")
            .focused(true);

        assert_eq!(field.value, "16");
        assert_eq!(field.placeholder, "16");
        assert_eq!(field.accent_class, "unit.root");
        assert!(field.focused);
    }
}

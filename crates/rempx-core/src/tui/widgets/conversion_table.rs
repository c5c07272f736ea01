//! Reference table widget.
//!
//! Renders one of the two static conversion tables (px → rem or
//! rem → px) through ftui's built-in Table widget. The rows are
//! precomputed from the effective root size; the widget itself only
//! formats and draws.

use ftui::layout::Constraint as FtuiConstraint;
use ftui::widgets::block::Block as FtuiBlock;
use ftui::widgets::table::{Row as FtuiRow, Table as FtuiTable, TableState as FtuiTableState};
use ftui::widgets::StatefulWidget as FtuiStatefulWidget;
use ftui::Style as FtuiStyle;

use rempx_units::TableRow;

use crate::tui::theme::Theme;

/// Width of the source column. Longest entry is "100px" plus headroom.
const COL_SOURCE: u16 = 9;

/// Two-column reference table for a fixed conversion scale.
#[derive(Debug)]
pub struct ConversionTable<'a> {
    /// Border title, e.g. " px → rem ".
    title: &'a str,
    /// Column headers (source, converted).
    headers: (&'a str, &'a str),
    /// Precomputed rows.
    rows: &'a [TableRow],
    /// Stylesheet class for the source column accent.
    accent_class: &'a str,
    /// Theme for styling.
    theme: Option<&'a Theme>,
}

impl<'a> ConversionTable<'a> {
    /// Create a new reference table over precomputed rows.
    pub fn new(title: &'a str, rows: &'a [TableRow]) -> Self {
        Self {
            title,
            headers: ("from", "to"),
            rows,
            accent_class: "field.value",
            theme: None,
        }
    }

    /// Set the column headers.
    pub fn headers(mut self, source: &'a str, converted: &'a str) -> Self {
        self.headers = (source, converted);
        self
    }

    /// Set the stylesheet class for the source column accent.
    pub fn accent_class(mut self, class: &'a str) -> Self {
        self.accent_class = class;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table.
    pub fn render_view(&self, area: ftui::layout::Rect, frame: &mut ftui::render::frame::Frame) {
        let border_style = self
            .theme
            .map(|t| t.class("border.normal"))
            .unwrap_or_default();

        let header_style = self
            .theme
            .map(|t| t.stylesheet().get_or_default("table.header"))
            .unwrap_or_else(|| FtuiStyle::new().bold());

        let accent_style = self
            .theme
            .map(|t| t.stylesheet().get_or_default(self.accent_class))
            .unwrap_or_default();

        let block = FtuiBlock::bordered()
            .title(self.title)
            .border_style(border_style);

        let header =
            FtuiRow::new([self.headers.0.to_string(), self.headers.1.to_string()])
                .style(header_style);

        let rows: Vec<FtuiRow> = self
            .rows
            .iter()
            .map(|row| {
                FtuiRow::new([row.source.clone(), row.converted.clone()]).style(accent_style)
            })
            .collect();

        let constraints = vec![FtuiConstraint::Fixed(COL_SOURCE), FtuiConstraint::Fill];

        let table = FtuiTable::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(1);

        let mut ftui_state = FtuiTableState::default();
        FtuiStatefulWidget::render(&table, area, frame, &mut ftui_state);
    }
}

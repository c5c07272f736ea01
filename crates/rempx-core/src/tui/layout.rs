//! Responsive layout for the converter TUI.
//!
//! Computes widget areas from the terminal size using ftui's [`Flex`]
//! solver. Small terminals drop the reference tables; wider ones move
//! them beside the form.

use tracing::{debug, trace};

use ftui::layout::{Constraint, Flex, Rect};

// ---------------------------------------------------------------------------
// Breakpoints
// ---------------------------------------------------------------------------

/// Terminal size breakpoints for responsive layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Minimal terminal (< 60 columns): form only, no tables.
    Minimal,
    /// Compact terminal (60-99 columns): tables below the form.
    Compact,
    /// Standard terminal (100-159 columns): tables beside the form.
    Standard,
    /// Wide terminal (>= 160 columns).
    Wide,
}

impl Breakpoint {
    /// Determine breakpoint from terminal dimensions.
    pub fn from_size(width: u16, _height: u16) -> Self {
        match width {
            w if w >= 160 => Breakpoint::Wide,
            w if w >= 100 => Breakpoint::Standard,
            w if w >= 60 => Breakpoint::Compact,
            _ => Breakpoint::Minimal,
        }
    }

    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Minimal => "minimal",
            Breakpoint::Compact => "compact",
            Breakpoint::Standard => "standard",
            Breakpoint::Wide => "wide",
        }
    }
}

// ---------------------------------------------------------------------------
// Area structs
// ---------------------------------------------------------------------------

/// Layout areas for the converter view.
#[derive(Debug, Clone, Copy)]
pub struct ConverterAreas {
    /// Title line at the top.
    pub title: Rect,
    /// Pixel input field.
    pub px: Rect,
    /// Swap hint line between the two value fields.
    pub swap: Rect,
    /// Rem input field.
    pub rem: Rect,
    /// Root font-size input field.
    pub root: Rect,
    /// Reference table areas (px → rem, rem → px), when they fit.
    pub tables: Option<(Rect, Rect)>,
    /// Status bar at the bottom.
    pub status: Rect,
}

/// Rows consumed by the form column: title, two value fields, swap
/// hint, and the root field.
const FORM_HEIGHT: u16 = 1 + 3 + 1 + 3 + 3;

/// Width of the form column when the tables sit beside it.
const FORM_COLUMN_WIDTH: u16 = 48;

/// Minimum rows for the tables area below the form.
const MIN_TABLE_HEIGHT: u16 = 8;

// ---------------------------------------------------------------------------
// Responsive layout calculator
// ---------------------------------------------------------------------------

/// Responsive layout calculator.
///
/// Computes areas based on terminal size and current breakpoint,
/// degrading gracefully for small terminals.
#[derive(Debug, Clone, Copy)]
pub struct ResponsiveLayout {
    /// Terminal area.
    area: Rect,
    /// Current breakpoint.
    breakpoint: Breakpoint,
}

impl ResponsiveLayout {
    /// Create a new responsive layout for the given terminal area.
    pub fn new(area: Rect) -> Self {
        let breakpoint = Breakpoint::from_size(area.width, area.height);

        trace!(
            width = area.width,
            height = area.height,
            breakpoint = breakpoint.name(),
            "layout.calculate"
        );

        Self { area, breakpoint }
    }

    /// Get the current breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Get the terminal area.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Check if terminal is too small for usable display.
    pub fn is_too_small(&self) -> bool {
        self.area.width < 40 || self.area.height < FORM_HEIGHT + 2
    }

    /// Compute the converter view layout areas.
    pub fn converter_areas(&self) -> ConverterAreas {
        match self.breakpoint {
            Breakpoint::Standard | Breakpoint::Wide => self.areas_side_by_side(),
            Breakpoint::Compact => self.areas_stacked(),
            Breakpoint::Minimal => self.areas_form_only(),
        }
    }

    /// Standard/Wide: form column on the left, tables filling the right.
    fn areas_side_by_side(&self) -> ConverterAreas {
        let v_chunks = Flex::vertical()
            .constraints([Constraint::Min(FORM_HEIGHT), Constraint::Fixed(1)])
            .split(self.area);
        let (content, status) = (v_chunks[0], v_chunks[1]);

        let h_chunks = Flex::horizontal()
            .constraints([Constraint::Fixed(FORM_COLUMN_WIDTH), Constraint::Fill])
            .split(content);
        let (form_col, tables_area) = (h_chunks[0], h_chunks[1]);

        let form = self.split_form(form_col);

        let table_chunks = Flex::horizontal()
            .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
            .split(tables_area);

        ConverterAreas {
            tables: Some((table_chunks[0], table_chunks[1])),
            status,
            ..form
        }
    }

    /// Compact: tables side by side below the form.
    fn areas_stacked(&self) -> ConverterAreas {
        let remaining = self.area.height.saturating_sub(FORM_HEIGHT + 1);
        if remaining < MIN_TABLE_HEIGHT {
            return self.areas_form_only();
        }

        let v_chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(FORM_HEIGHT),
                Constraint::Min(MIN_TABLE_HEIGHT),
                Constraint::Fixed(1),
            ])
            .split(self.area);
        let (form_area, tables_area, status) = (v_chunks[0], v_chunks[1], v_chunks[2]);

        let form = self.split_form(form_area);

        let table_chunks = Flex::horizontal()
            .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
            .split(tables_area);

        ConverterAreas {
            tables: Some((table_chunks[0], table_chunks[1])),
            status,
            ..form
        }
    }

    /// Minimal: just the form and the status bar.
    fn areas_form_only(&self) -> ConverterAreas {
        let v_chunks = Flex::vertical()
            .constraints([Constraint::Min(FORM_HEIGHT), Constraint::Fixed(1)])
            .split(self.area);
        let form = self.split_form(v_chunks[0]);

        ConverterAreas {
            tables: None,
            status: v_chunks[1],
            ..form
        }
    }

    /// Split a column into the form rows. `tables`/`status` are filled
    /// in by the caller.
    fn split_form(&self, column: Rect) -> ConverterAreas {
        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1), // Title
                Constraint::Fixed(3), // Pixel field
                Constraint::Fixed(1), // Swap hint
                Constraint::Fixed(3), // Rem field
                Constraint::Fixed(3), // Root size field
            ])
            .split(column);

        ConverterAreas {
            title: chunks[0],
            px: chunks[1],
            swap: chunks[2],
            rem: chunks[3],
            root: chunks[4],
            tables: None,
            status: Rect::new(0, 0, 0, 0),
        }
    }

    /// Centered popup area sized as a percentage of the terminal.
    pub fn popup_area(&self, width_pct: u16, height_pct: u16) -> Rect {
        let width = (self.area.width as u32 * width_pct as u32 / 100) as u16;
        let height = (self.area.height as u32 * height_pct as u32 / 100) as u16;

        // Apply min/max constraints
        let width = width.max(30).min(self.area.width.saturating_sub(4));
        let height = height.max(7).min(self.area.height.saturating_sub(4));

        let x = (self.area.width.saturating_sub(width)) / 2;
        let y = (self.area.height.saturating_sub(height)) / 2;

        Rect::new(self.area.x + x, self.area.y + y, width, height)
    }
}

// ---------------------------------------------------------------------------
// Layout state tracking
// ---------------------------------------------------------------------------

/// Tracks layout state changes for logging.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Current breakpoint.
    current_breakpoint: Breakpoint,
    /// Current terminal size.
    current_size: (u16, u16),
}

impl LayoutState {
    /// Create new layout state.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current_breakpoint: Breakpoint::from_size(width, height),
            current_size: (width, height),
        }
    }

    /// Update state for new terminal size.
    ///
    /// Returns true if breakpoint changed.
    pub fn update(&mut self, width: u16, height: u16) -> bool {
        let new_breakpoint = Breakpoint::from_size(width, height);
        let changed = new_breakpoint != self.current_breakpoint;

        if changed {
            debug!(
                from = self.current_breakpoint.name(),
                to = new_breakpoint.name(),
                "layout.breakpoint_change"
            );
        }

        self.current_breakpoint = new_breakpoint;
        self.current_size = (width, height);

        changed
    }

    /// Current breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.current_breakpoint
    }

    /// Current terminal size.
    pub fn size(&self) -> (u16, u16) {
        self.current_size
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_detection() {
        assert_eq!(Breakpoint::from_size(40, 24), Breakpoint::Minimal);
        assert_eq!(Breakpoint::from_size(60, 24), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_size(99, 40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_size(100, 40), Breakpoint::Standard);
        assert_eq!(Breakpoint::from_size(160, 60), Breakpoint::Wide);
    }

    #[test]
    fn test_too_small_detection() {
        assert!(ResponsiveLayout::new(Rect::new(0, 0, 30, 24)).is_too_small());
        assert!(ResponsiveLayout::new(Rect::new(0, 0, 80, 8)).is_too_small());
        assert!(!ResponsiveLayout::new(Rect::new(0, 0, 80, 24)).is_too_small());
    }

    #[test]
    fn minimal_layout_has_no_tables() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 50, 24));
        let areas = layout.converter_areas();
        assert!(areas.tables.is_none());
        assert_eq!(areas.status.height, 1);
    }

    #[test]
    fn compact_layout_stacks_tables_below_form() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 80, 30));
        let areas = layout.converter_areas();
        let (left, right) = areas.tables.expect("tables should fit");
        assert!(left.y >= areas.root.y + areas.root.height);
        assert_eq!(left.y, right.y);
        assert!(right.x > left.x);
    }

    #[test]
    fn compact_layout_drops_tables_when_short() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 80, 14));
        let areas = layout.converter_areas();
        assert!(areas.tables.is_none());
    }

    #[test]
    fn standard_layout_puts_tables_beside_form() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 120, 40));
        let areas = layout.converter_areas();
        let (left, _right) = areas.tables.expect("tables should fit");
        assert!(left.x >= FORM_COLUMN_WIDTH);
        assert_eq!(areas.px.width, FORM_COLUMN_WIDTH);
    }

    #[test]
    fn form_rows_are_ordered_top_to_bottom() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 80, 30));
        let areas = layout.converter_areas();
        assert!(areas.title.y < areas.px.y);
        assert!(areas.px.y < areas.swap.y);
        assert!(areas.swap.y < areas.rem.y);
        assert!(areas.rem.y < areas.root.y);
    }

    #[test]
    fn test_popup_area_is_centered_and_bounded() {
        let layout = ResponsiveLayout::new(Rect::new(0, 0, 100, 40));
        let popup = layout.popup_area(50, 30);
        assert!(popup.width >= 30);
        assert!(popup.height >= 7);
        assert!(popup.x > 0 && popup.x + popup.width < 100);
    }

    #[test]
    fn test_layout_state_tracks_breakpoint_changes() {
        let mut state = LayoutState::new(80, 24);
        assert_eq!(state.breakpoint(), Breakpoint::Compact);

        assert!(state.update(120, 24));
        assert_eq!(state.breakpoint(), Breakpoint::Standard);

        assert!(!state.update(130, 30));
        assert_eq!(state.size(), (130, 30));
    }
}

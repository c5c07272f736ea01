//! Main TUI application state and event loop.
//!
//! Manages the converter state, terminal lifecycle, and the Elm-style
//! render/update loop.
//!
//! ## ftui Model Contract
//!
//! `App` implements `ftui::Model`:
//! - `init()` initializes model state (and may return a startup `Cmd`)
//! - `update(msg)` applies a single `Msg` and may return a `Cmd`
//! - `view(frame)` renders state into a frame (pure w.r.t. input state)
//!
//! The clipboard write is injected as a closure and executed via
//! `Cmd::task_named`, returning a completion message back into
//! `update()`. Tests substitute a recording closure.

use ftui::layout::Rect;
use ftui::runtime::Subscription;
use ftui::widgets::Widget as FtuiWidget;
use ftui::{
    Cell as FtuiCell, Cmd as FtuiCmd, Frame as FtuiFrame, KeyCode as FtuiKeyCode,
    KeyEvent as FtuiKeyEvent, KeyEventKind as FtuiKeyEventKind, Model as FtuiModel,
    Modifiers as FtuiModifiers, Program, ProgramConfig,
};

use rempx_units::{px_to_rem_rows, rem_to_px_rows, ConverterForm, TableRow, UnitField};

use crate::clipboard::CopyOp;

use super::events::{is_field_char, KeyBindings};
use super::layout::{LayoutState, ResponsiveLayout};
use super::msg::Msg;
use super::theme::Theme;
use super::widgets::{
    ConversionTable, CopyNotice, HelpOverlay, StatusBar, StatusMode, UnitInput,
};
use super::{TuiError, TuiResult};

/// Focus targets in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Pixel value field.
    Px,
    /// Rem value field.
    Rem,
    /// Root font-size field.
    Root,
}

impl FocusTarget {
    /// Next field in the Tab cycle.
    fn next(self) -> Self {
        match self {
            FocusTarget::Px => FocusTarget::Rem,
            FocusTarget::Rem => FocusTarget::Root,
            FocusTarget::Root => FocusTarget::Px,
        }
    }

    /// Previous field in the Tab cycle.
    fn prev(self) -> Self {
        match self {
            FocusTarget::Px => FocusTarget::Root,
            FocusTarget::Rem => FocusTarget::Px,
            FocusTarget::Root => FocusTarget::Rem,
        }
    }
}

/// Current application state/mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal editing mode.
    #[default]
    Normal,
    /// Help overlay visible.
    Help,
    /// Copy notice visible.
    Notice,
    /// Application is quitting.
    Quitting,
}

/// Main TUI application.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Theme configuration.
    pub theme: Theme,
    /// Key bindings.
    pub key_bindings: KeyBindings,
    /// Currently focused field.
    pub focus: FocusTarget,
    /// Converter form (authoritative px/rem/root values).
    pub form: ConverterForm,
    /// Verbatim text of the root field, which may not parse.
    pub root_text: String,
    /// The value shown in the copy notice, when one is open.
    pub notice_value: Option<String>,
    /// Status bar message override.
    pub status_message: Option<String>,
    /// Layout state for resize tracking.
    pub layout_state: LayoutState,
    /// Precomputed px → rem reference rows.
    px_rows: Vec<TableRow>,
    /// Precomputed rem → px reference rows.
    rem_rows: Vec<TableRow>,
    /// Injected clipboard write for ftui Cmd::task (Send + 'static).
    copy_op: Option<CopyOp>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with the default root size.
    pub fn new() -> Self {
        let form = ConverterForm::new();
        let root = form.root();

        Self {
            state: AppState::Normal,
            theme: Theme::default(),
            key_bindings: KeyBindings::default(),
            focus: FocusTarget::Px,
            root_text: format!("{root}"),
            px_rows: px_to_rem_rows(root),
            rem_rows: rem_to_px_rows(root),
            form,
            notice_value: None,
            status_message: None,
            layout_state: LayoutState::new(80, 24),
            copy_op: None,
        }
    }

    /// Set the initial root font size (CLI `--root-size`).
    pub fn with_root(mut self, root: f64) -> Self {
        self.form = ConverterForm::with_root(root);
        let effective = self.form.root();
        self.root_text = format!("{effective}");
        self.refresh_tables();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the async clipboard write operation for ftui Cmd::task.
    pub fn set_copy_op(&mut self, op: CopyOp) {
        self.copy_op = Some(op);
    }

    /// Whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quitting
    }

    /// Current text of the focused field.
    pub fn focused_value(&self) -> &str {
        match self.focus {
            FocusTarget::Px => self.form.px(),
            FocusTarget::Rem => self.form.rem(),
            FocusTarget::Root => &self.root_text,
        }
    }

    /// Set the status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the reference tables from the effective root size.
    fn refresh_tables(&mut self) {
        let root = self.form.root();
        self.px_rows = px_to_rem_rows(root);
        self.rem_rows = rem_to_px_rows(root);
    }

    /// Apply one typed character to the focused field.
    fn apply_char(&mut self, c: char) {
        match self.focus {
            FocusTarget::Px => {
                let mut text = self.form.px().to_string();
                text.push(c);
                self.form.edit_px(text);
            }
            FocusTarget::Rem => {
                let mut text = self.form.rem().to_string();
                text.push(c);
                self.form.edit_rem(text);
            }
            FocusTarget::Root => {
                self.root_text.push(c);
                let text = self.root_text.clone();
                self.form.edit_root(&text);
                self.refresh_tables();
            }
        }
    }

    /// Remove the last character from the focused field.
    fn apply_backspace(&mut self) {
        match self.focus {
            FocusTarget::Px => {
                let mut text = self.form.px().to_string();
                text.pop();
                self.form.edit_px(text);
            }
            FocusTarget::Rem => {
                let mut text = self.form.rem().to_string();
                text.pop();
                self.form.edit_rem(text);
            }
            FocusTarget::Root => {
                self.root_text.pop();
                let text = self.root_text.clone();
                self.form.edit_root(&text);
                self.refresh_tables();
            }
        }
    }

    /// Clear the focused field entirely.
    fn apply_clear(&mut self) {
        match self.focus {
            FocusTarget::Px => self.form.edit_px(""),
            FocusTarget::Rem => self.form.edit_rem(""),
            FocusTarget::Root => {
                self.root_text.clear();
                self.form.edit_root("");
                self.refresh_tables();
            }
        }
    }

    /// Set focus to a new target, logging the transition.
    fn set_focus(&mut self, target: FocusTarget) {
        if target != self.focus {
            tracing::trace!(
                target: "tui.state_transition",
                from = ?self.focus,
                to = ?target,
                "Focus change"
            );
        }
        self.focus = target;
    }

    // ── Message handling ──────────────────────────────────────────────

    fn handle_msg(&mut self, msg: Msg) -> FtuiCmd<Msg> {
        match msg {
            Msg::KeyPressed(key) => self.handle_key_event(key),

            Msg::Resized { width, height } => {
                self.layout_state.update(width, height);
                FtuiCmd::none()
            }
            Msg::FocusChanged(_) => FtuiCmd::none(),
            Msg::PasteReceived { text } => {
                if self.state == AppState::Normal {
                    for c in text.chars().filter(|c| is_field_char(*c)) {
                        self.apply_char(c);
                    }
                }
                FtuiCmd::none()
            }
            Msg::Noop => FtuiCmd::none(),

            Msg::InputChar(c) => {
                self.apply_char(c);
                FtuiCmd::none()
            }
            Msg::Backspace => {
                self.apply_backspace();
                FtuiCmd::none()
            }
            Msg::ClearField => {
                self.apply_clear();
                FtuiCmd::none()
            }

            Msg::FocusNext => {
                self.set_focus(self.focus.next());
                FtuiCmd::none()
            }
            Msg::FocusPrev => {
                self.set_focus(self.focus.prev());
                FtuiCmd::none()
            }
            Msg::FocusField(target) => {
                self.set_focus(target);
                FtuiCmd::none()
            }

            Msg::Swap => {
                self.form.swap();
                tracing::debug!(
                    target: "tui.state_transition",
                    source = ?self.form.last_edited(),
                    "Swapped px and rem values"
                );
                FtuiCmd::none()
            }

            Msg::CopyRequested => {
                let value = self.focused_value().to_string();
                if value.is_empty() {
                    // Nothing to copy; stay silent.
                    return FtuiCmd::none();
                }

                self.state = AppState::Notice;
                self.notice_value = Some(value.clone());
                self.set_status(format!("Copied {value} to clipboard!"));

                match self.copy_op.clone() {
                    Some(op) => FtuiCmd::sequence(vec![
                        FtuiCmd::log(format!("copy: {value}")),
                        FtuiCmd::task_named("copy-to-clipboard", move || {
                            Msg::CopyFinished(op(value))
                        }),
                    ]),
                    None => FtuiCmd::none(),
                }
            }
            Msg::CopyFinished(Ok(())) => FtuiCmd::none(),
            Msg::CopyFinished(Err(error)) => {
                // The notice already promised success; a clipboard failure
                // is only visible in the logs.
                tracing::debug!(target: "tui.async_complete", %error, "Clipboard write failed");
                FtuiCmd::none()
            }

            Msg::ToggleHelp => {
                self.state = if self.state == AppState::Help {
                    AppState::Normal
                } else {
                    AppState::Help
                };
                FtuiCmd::none()
            }
            Msg::DismissNotice => {
                self.state = AppState::Normal;
                self.notice_value = None;
                self.clear_status();
                FtuiCmd::none()
            }

            Msg::SwitchTheme(name) => {
                self.theme = match name.to_lowercase().as_str() {
                    "light" => Theme::light(),
                    "high_contrast" | "high-contrast" | "hc" => Theme::high_contrast(),
                    "no_color" | "no-color" => Theme::no_color(),
                    _ => Theme::dark(),
                };
                FtuiCmd::none()
            }

            Msg::Quit => {
                self.state = AppState::Quitting;
                FtuiCmd::quit()
            }
        }
    }

    // ── Key handling (per state) ──────────────────────────────────────

    fn handle_key_event(&mut self, key: FtuiKeyEvent) -> FtuiCmd<Msg> {
        if !matches!(key.kind, FtuiKeyEventKind::Press | FtuiKeyEventKind::Repeat) {
            return FtuiCmd::none();
        }

        tracing::debug!(
            target: "tui.user_input",
            key_code = ?key.code,
            modifiers = ?key.modifiers,
            app_state = ?self.state,
            focus = ?self.focus,
            "Key event received"
        );

        match self.state {
            AppState::Normal => self.handle_normal_key(key),
            AppState::Help => self.handle_help_key(key),
            AppState::Notice => self.handle_notice_key(key),
            AppState::Quitting => FtuiCmd::quit(),
        }
    }

    fn handle_normal_key(&mut self, key: FtuiKeyEvent) -> FtuiCmd<Msg> {
        if matches!(key.code, FtuiKeyCode::Escape) || self.key_bindings.is_quit(&key) {
            tracing::info!(target: "tui.user_input", action = "quit", "Quit requested");
            return FtuiCmd::msg(Msg::Quit);
        }
        if self.key_bindings.is_help(&key) {
            return FtuiCmd::msg(Msg::ToggleHelp);
        }
        if self.key_bindings.is_focus_next(&key) {
            return FtuiCmd::msg(Msg::FocusNext);
        }
        if self.key_bindings.is_focus_prev(&key) {
            return FtuiCmd::msg(Msg::FocusPrev);
        }
        if self.key_bindings.is_clear(&key) {
            return FtuiCmd::msg(Msg::ClearField);
        }

        // Field characters take precedence over single-letter shortcuts
        // so typing "1e2" never triggers an action.
        if let FtuiKeyCode::Char(c) = key.code {
            let plain = !key
                .modifiers
                .intersects(FtuiModifiers::CTRL | FtuiModifiers::ALT);
            if plain && is_field_char(c) {
                return FtuiCmd::msg(Msg::InputChar(c));
            }
        }

        if self.key_bindings.is_swap(&key) {
            return FtuiCmd::msg(Msg::Swap);
        }
        if self.key_bindings.is_copy(&key) {
            return FtuiCmd::msg(Msg::CopyRequested);
        }

        if matches!(key.code, FtuiKeyCode::Backspace) {
            return FtuiCmd::msg(Msg::Backspace);
        }

        FtuiCmd::none()
    }

    fn handle_help_key(&mut self, key: FtuiKeyEvent) -> FtuiCmd<Msg> {
        if matches!(
            key.code,
            FtuiKeyCode::Escape | FtuiKeyCode::Char('q') | FtuiKeyCode::Char('?')
        ) || self.key_bindings.is_help(&key)
        {
            self.state = AppState::Normal;
            tracing::debug!(
                target: "tui.state_transition",
                to_state = ?self.state,
                "Leaving help mode"
            );
        }
        FtuiCmd::none()
    }

    fn handle_notice_key(&mut self, key: FtuiKeyEvent) -> FtuiCmd<Msg> {
        if matches!(
            key.code,
            FtuiKeyCode::Enter | FtuiKeyCode::Escape | FtuiKeyCode::Char(' ')
        ) {
            return FtuiCmd::msg(Msg::DismissNotice);
        }
        FtuiCmd::none()
    }
}

// ---------------------------------------------------------------------------
// ftui Model implementation
// ---------------------------------------------------------------------------

impl FtuiModel for App {
    type Message = Msg;

    fn init(&mut self) -> FtuiCmd<Self::Message> {
        tracing::info!(
            target: "tui.startup",
            terminal_size = ?self.layout_state.size(),
            theme = ?self.theme.mode,
            root = self.form.root(),
            "TUI model initialized"
        );
        FtuiCmd::none()
    }

    fn update(&mut self, msg: Self::Message) -> FtuiCmd<Self::Message> {
        self.handle_msg(msg)
    }

    fn view(&self, frame: &mut FtuiFrame) {
        let full_area = Rect::new(0, 0, frame.width(), frame.height());
        let layout = ResponsiveLayout::new(full_area);

        // Degrade gracefully for tiny terminals
        if layout.is_too_small() {
            draw_ftui_text(frame, 0, 0, "Terminal too small (min 40x13)");
            return;
        }

        let areas = layout.converter_areas();

        // ── Title ──────────────────────────────────────────────────────
        let title = ftui::widgets::paragraph::Paragraph::new(" px \u{2194} rem")
            .style(self.theme.class("table.header"));
        FtuiWidget::render(&title, areas.title, frame);

        // ── Value fields ───────────────────────────────────────────────
        UnitInput::new("Pixels", "px")
            .value(self.form.px())
            .placeholder("e.g. 16")
            .accent_class("unit.px")
            .focused(self.focus == FocusTarget::Px)
            .source(self.form.last_edited() == UnitField::Px)
            .theme(&self.theme)
            .render_view(areas.px, frame);

        let swap_hint = ftui::widgets::paragraph::Paragraph::new(" s: swap \u{21C5}")
            .style(self.theme.class("status.hint"));
        FtuiWidget::render(&swap_hint, areas.swap, frame);

        UnitInput::new("Rem", "rem")
            .value(self.form.rem())
            .placeholder("e.g. 1")
            .accent_class("unit.rem")
            .focused(self.focus == FocusTarget::Rem)
            .source(self.form.last_edited() == UnitField::Rem)
            .theme(&self.theme)
            .render_view(areas.rem, frame);

        UnitInput::new("Root size", "px")
            .value(&self.root_text)
            .placeholder("16")
            .accent_class("unit.root")
            .focused(self.focus == FocusTarget::Root)
            .theme(&self.theme)
            .render_view(areas.root, frame);

        // ── Reference tables ───────────────────────────────────────────
        if let Some((px_area, rem_area)) = areas.tables {
            ConversionTable::new(" px \u{2192} rem ", &self.px_rows)
                .headers("px", "rem")
                .accent_class("unit.px")
                .theme(&self.theme)
                .render_view(px_area, frame);

            ConversionTable::new(" rem \u{2192} px ", &self.rem_rows)
                .headers("rem", "px")
                .accent_class("unit.rem")
                .theme(&self.theme)
                .render_view(rem_area, frame);
        }

        // ── Status bar ─────────────────────────────────────────────────
        let status_mode = match self.state {
            AppState::Normal | AppState::Quitting => StatusMode::Normal,
            AppState::Help => StatusMode::Help,
            AppState::Notice => StatusMode::Notice,
        };
        let mut status_bar = StatusBar::new()
            .theme(&self.theme)
            .mode(status_mode)
            .root(self.form.root())
            .source(self.form.last_edited());
        if let Some(ref msg) = self.status_message {
            status_bar = status_bar.message(msg);
        }
        status_bar.render_view(areas.status, frame);

        // ── Overlays (rendered on top of everything) ───────────────────

        if self.state == AppState::Help {
            HelpOverlay::new()
                .theme(&self.theme)
                .breakpoint(layout.breakpoint())
                .render_view(full_area, frame);
        }

        if self.state == AppState::Notice {
            if let Some(ref value) = self.notice_value {
                let popup_area = layout.popup_area(40, 20);
                CopyNotice::new(value)
                    .theme(&self.theme)
                    .render_view(popup_area, frame);
            }
        }
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        // No periodic work: the converter is fully input-driven.
        Vec::new()
    }
}

fn draw_ftui_text(frame: &mut FtuiFrame, x: u16, y: u16, text: &str) {
    if y >= frame.height() || x >= frame.width() {
        return;
    }

    let mut col = x;
    let max_col = frame.width();
    for ch in text.chars() {
        if col >= max_col {
            break;
        }
        frame.buffer.set(col, y, FtuiCell::from_char(ch));
        col = col.saturating_add(1);
    }
}

/// Run the TUI using the ftui runtime.
///
/// Delegates terminal setup, event polling, and teardown entirely to
/// ftui's `Program` runtime. `App` drives the init → update → view loop.
pub fn run_ftui(app: App, config: ProgramConfig) -> TuiResult<()> {
    let mut program =
        Program::with_config(app, config).map_err(|e| TuiError::TerminalInit(e.to_string()))?;
    program
        .run()
        .map_err(|e| TuiError::TerminalInit(e.to_string()))
}

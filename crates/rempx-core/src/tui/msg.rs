//! Central message type for the ftui Elm-style architecture.
//!
//! A single `Msg` enum captures user input, state transitions, and the
//! clipboard completion. The `From<ftui::Event>` mapping stays shallow
//! (Event -> KeyPressed/Resized/Paste); everything else is produced by
//! the per-state key handlers in `app.rs` so all transitions run
//! through explicit `match` arms in `App::update`.

use ftui::{Event, KeyEvent};

use super::app::FocusTarget;

/// Single message type used by the ftui model update loop.
#[derive(Debug, Clone)]
pub enum Msg {
    // Input messages
    KeyPressed(KeyEvent),
    Resized { width: u16, height: u16 },
    FocusChanged(bool),
    PasteReceived { text: String },
    Noop,

    // Field editing messages
    InputChar(char),
    Backspace,
    ClearField,

    // Focus messages
    FocusNext,
    FocusPrev,
    FocusField(FocusTarget),

    // Converter actions
    Swap,
    CopyRequested,
    CopyFinished(Result<(), String>),

    // View messages
    ToggleHelp,
    DismissNotice,

    // Theme messages
    SwitchTheme(String),

    // System messages
    Quit,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::KeyPressed(key),
            Event::Resize { width, height } => Msg::Resized { width, height },
            Event::Focus(gained) => Msg::FocusChanged(gained),
            Event::Paste(paste) => Msg::PasteReceived { text: paste.text },
            // No periodic work, no clipboard reads, no mouse support.
            Event::Tick | Event::Clipboard(_) | Event::Mouse(_) => Msg::Noop,
        }
    }
}

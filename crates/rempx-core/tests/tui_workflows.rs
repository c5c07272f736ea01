//! E2E TUI workflow tests using ftui message-based testing.
//!
//! All interactions use `Msg` values sent through `Model::update()`,
//! with the clipboard replaced by a recording closure. Cmd::msg chains
//! emitted by the key handlers are followed so a test keypress behaves
//! exactly like a live one.

use std::sync::{Arc, Mutex};

use ftui::{
    Cmd as FtuiCmd, KeyCode as FtuiKeyCode, KeyEvent as FtuiKeyEvent, Model as FtuiModel,
    Modifiers as FtuiModifiers,
};

use rempx_core::tui::{App, AppState, FocusTarget, Msg};
use rempx_units::UnitField;

// ===========================================================================
// Helpers
// ===========================================================================

/// Send a Msg through the ftui Model::update loop, following Cmd::msg
/// chains, running tasks synchronously like the live runtime would,
/// and discarding everything else.
fn send_msg(app: &mut App, msg: Msg) {
    let mut pending = vec![<App as FtuiModel>::update(app, msg)];
    while let Some(cmd) = pending.pop() {
        match cmd {
            FtuiCmd::Msg(next) => pending.push(<App as FtuiModel>::update(app, next)),
            FtuiCmd::Task(_, task) => {
                let next = task();
                pending.push(<App as FtuiModel>::update(app, next));
            }
            FtuiCmd::Sequence(cmds) | FtuiCmd::Batch(cmds) => {
                pending.extend(cmds.into_iter().rev());
            }
            _ => {}
        }
    }
}

/// Create a KeyPressed Msg from a key code.
fn ftui_key(code: FtuiKeyCode) -> Msg {
    Msg::KeyPressed(FtuiKeyEvent::new(code))
}

/// Create a KeyPressed Msg for a character key.
fn ftui_char(c: char) -> Msg {
    ftui_key(FtuiKeyCode::Char(c))
}

/// Create a KeyPressed Msg with Ctrl modifier.
fn ftui_key_ctrl(c: char) -> Msg {
    Msg::KeyPressed(FtuiKeyEvent::new(FtuiKeyCode::Char(c)).with_modifiers(FtuiModifiers::CTRL))
}

/// Type a string character by character.
fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        send_msg(app, ftui_char(c));
    }
}

/// App with a recording clipboard stub. Returns the app and the sink
/// collecting copied values.
fn app_with_clipboard() -> (App, Arc<Mutex<Vec<String>>>) {
    let mut app = App::new();
    let copied: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&copied);
    app.set_copy_op(Arc::new(move |value| {
        sink.lock().unwrap().push(value);
        Ok(())
    }));
    (app, copied)
}

// ===========================================================================
// Conversion workflows
// ===========================================================================

#[test]
fn px_to_rem_to_root_change_workflow() {
    let mut app = App::new();

    // Type 10 into the px field at root 16
    type_str(&mut app, "10");
    assert_eq!(app.form.px(), "10");
    assert_eq!(app.form.rem(), "0.625");

    // Change the root size to 20: rem is rederived from px
    send_msg(&mut app, ftui_key(FtuiKeyCode::BackTab));
    assert_eq!(app.focus, FocusTarget::Root);
    send_msg(&mut app, ftui_key(FtuiKeyCode::Delete));
    type_str(&mut app, "20");

    assert_eq!(app.form.root(), 20.0);
    assert_eq!(app.form.px(), "10");
    assert_eq!(app.form.rem(), "0.500");

    // Swap: values exchange verbatim, rem becomes the source
    send_msg(&mut app, ftui_char('s'));
    assert_eq!(app.form.px(), "0.500");
    assert_eq!(app.form.rem(), "10");
    assert_eq!(app.form.last_edited(), UnitField::Rem);
}

#[test]
fn rem_edit_derives_px() {
    let mut app = App::new();

    send_msg(&mut app, ftui_key(FtuiKeyCode::Tab));
    assert_eq!(app.focus, FocusTarget::Rem);

    type_str(&mut app, "1.5");
    assert_eq!(app.form.rem(), "1.5");
    assert_eq!(app.form.px(), "24.00");
}

#[test]
fn invalid_input_clears_derived_field() {
    let mut app = App::new();

    type_str(&mut app, "10");
    assert_eq!(app.form.rem(), "0.625");

    // "10-" does not parse; the derived field goes blank
    send_msg(&mut app, ftui_char('-'));
    assert_eq!(app.form.px(), "10-");
    assert_eq!(app.form.rem(), "");

    // Removing the bad character restores the derivation
    send_msg(&mut app, ftui_key(FtuiKeyCode::Backspace));
    assert_eq!(app.form.rem(), "0.625");
}

#[test]
fn empty_root_falls_back_to_one() {
    let mut app = App::new();

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_key(FtuiKeyCode::BackTab));
    send_msg(&mut app, ftui_key(FtuiKeyCode::Delete));

    assert_eq!(app.root_text, "");
    assert_eq!(app.form.root(), 1.0);
    assert_eq!(app.form.rem(), "10.000");
}

#[test]
fn scientific_notation_is_accepted() {
    let mut app = App::new();

    type_str(&mut app, "1e2");
    assert_eq!(app.form.px(), "1e2");
    assert_eq!(app.form.rem(), "6.250");
}

// ===========================================================================
// Copy workflows
// ===========================================================================

#[test]
fn copy_sends_focused_value_to_clipboard() {
    let (mut app, copied) = app_with_clipboard();

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_char('c'));

    assert_eq!(app.state, AppState::Notice);
    assert_eq!(app.notice_value.as_deref(), Some("10"));
    assert_eq!(
        app.status_message.as_deref(),
        Some("Copied 10 to clipboard!")
    );
    assert_eq!(copied.lock().unwrap().as_slice(), ["10".to_string()]);
}

#[test]
fn copy_derived_value_from_rem_field() {
    let (mut app, copied) = app_with_clipboard();

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_key(FtuiKeyCode::Tab));
    send_msg(&mut app, ftui_char('c'));

    assert_eq!(copied.lock().unwrap().as_slice(), ["0.625".to_string()]);
}

#[test]
fn copy_empty_field_does_nothing() {
    let (mut app, copied) = app_with_clipboard();

    send_msg(&mut app, ftui_char('c'));

    assert_eq!(app.state, AppState::Normal);
    assert!(app.notice_value.is_none());
    assert!(app.status_message.is_none());
    assert!(copied.lock().unwrap().is_empty());
}

#[test]
fn notice_blocks_editing_until_dismissed() {
    let (mut app, _copied) = app_with_clipboard();

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_char('c'));
    assert_eq!(app.state, AppState::Notice);

    // Keystrokes in notice mode do not reach the form
    send_msg(&mut app, ftui_char('5'));
    assert_eq!(app.form.px(), "10");

    send_msg(&mut app, ftui_key(FtuiKeyCode::Enter));
    assert_eq!(app.state, AppState::Normal);

    send_msg(&mut app, ftui_char('5'));
    assert_eq!(app.form.px(), "105");
}

#[test]
fn clipboard_error_keeps_notice_open() {
    let mut app = App::new();
    app.set_copy_op(Arc::new(|_| Err("no display".to_string())));

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_char('c'));
    send_msg(&mut app, Msg::CopyFinished(Err("no display".to_string())));

    assert_eq!(app.state, AppState::Notice);
    assert_eq!(app.notice_value.as_deref(), Some("10"));
}

// ===========================================================================
// Mode and focus workflows
// ===========================================================================

#[test]
fn help_overlay_roundtrip() {
    let mut app = App::new();

    send_msg(&mut app, ftui_char('?'));
    assert_eq!(app.state, AppState::Help);

    // q closes help rather than quitting
    send_msg(&mut app, ftui_char('q'));
    assert_eq!(app.state, AppState::Normal);
    assert!(!app.should_quit());
}

#[test]
fn quit_via_ctrl_c() {
    let mut app = App::new();
    send_msg(&mut app, ftui_key_ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn quit_via_escape() {
    let mut app = App::new();
    send_msg(&mut app, ftui_key(FtuiKeyCode::Escape));
    assert!(app.should_quit());
}

#[test]
fn arrow_keys_cycle_focus() {
    let mut app = App::new();

    send_msg(&mut app, ftui_key(FtuiKeyCode::Down));
    assert_eq!(app.focus, FocusTarget::Rem);

    send_msg(&mut app, ftui_key(FtuiKeyCode::Up));
    assert_eq!(app.focus, FocusTarget::Px);
}

#[test]
fn focus_survives_swap() {
    let mut app = App::new();

    type_str(&mut app, "10");
    send_msg(&mut app, ftui_char('s'));

    assert_eq!(app.focus, FocusTarget::Px);
    // The px field still edits after a swap, now as the source side
    send_msg(&mut app, ftui_key(FtuiKeyCode::Delete));
    type_str(&mut app, "8");
    assert_eq!(app.form.px(), "8");
    assert_eq!(app.form.rem(), "0.500");
}

#[test]
fn paste_into_px_field() {
    let mut app = App::new();

    send_msg(
        &mut app,
        Msg::PasteReceived {
            text: "12.5".to_string(),
        },
    );

    assert_eq!(app.form.px(), "12.5");
    assert_eq!(app.form.rem(), "0.781");
}

#[test]
fn resize_tracks_breakpoint() {
    let mut app = App::new();

    send_msg(
        &mut app,
        Msg::Resized {
            width: 150,
            height: 45,
        },
    );
    assert_eq!(app.layout_state.size(), (150, 45));
}

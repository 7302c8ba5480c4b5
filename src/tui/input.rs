//! Key handling
//!
//! Input goes to the topmost layer only: the success dialog, then the delete
//! confirmation, then the open panel, and finally the keybindings of the
//! main view.

use crate::app::App;
use crate::directory::Msg;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle one key press
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.feedback().alert().is_some() {
        app.dismiss_alert();
    } else if app.state().confirm.is_some() {
        handle_confirm(app, code);
    } else if app.state().panel.is_some() {
        handle_panel(app, code, modifiers);
    } else if let Some(action) = app.config.keys.get_action(code, modifiers) {
        app.handle_action(action);
    }
}

fn handle_confirm(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y' | 'Y') => app.dispatch(Msg::AnswerDelete(true)),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => app.dispatch(Msg::AnswerDelete(false)),
        _ => {}
    }
}

fn handle_panel(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let msg = match code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Msg::FocusNextField,
        KeyCode::Enter => Msg::Submit,
        KeyCode::Esc => Msg::ClosePanel,
        KeyCode::Backspace => Msg::DeleteChar,
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Msg::InsertChar(c)
        }
        _ => return,
    };
    app.dispatch(msg);
}

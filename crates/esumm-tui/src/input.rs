use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    Submit,       // Run summarization on the current input
    ClearAll,     // Clear input, summary, and statistics
    EnterEditing, // Start editing the input text
    ExitEditing,
    InputChar(char),
    InputNewline,
    Backspace,
    ToggleHelp,
    DismissError,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // An error popup swallows the next key press
    if app.error_message.is_some() {
        return Action::DismissError;
    }

    match app.mode {
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Editing => return handle_editing_mode(key),
        Mode::Normal => {}
    }

    // Normal mode keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation between panels
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::FocusPrev,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::FocusPrev,

        // Navigation within panel
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Actions
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Submit,
        (KeyCode::Enter, KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ClearAll,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EnterEditing,
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::EnterEditing,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::EnterEditing,

        // Help
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::ToggleHelp,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::ToggleHelp,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Handle key events while editing the input text
fn handle_editing_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Ctrl+Enter submits directly from the editor
        (KeyCode::Enter, KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Esc, _) => Action::ExitEditing,
        (KeyCode::Enter, _) => Action::InputNewline,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esumm_core::AppConfig;
    use std::sync::Arc;

    fn normal_app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()));
        app.mode = Mode::Normal;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = normal_app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('s')), &app), Action::Submit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c')), &app),
            Action::ClearAll
        );
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::FocusNext);
    }

    #[test]
    fn test_ctrl_enter_submits_in_both_modes() {
        let mut app = normal_app();
        assert_eq!(handle_key_event(ctrl(KeyCode::Enter), &app), Action::Submit);

        app.mode = Mode::Editing;
        assert_eq!(handle_key_event(ctrl(KeyCode::Enter), &app), Action::Submit);
    }

    #[test]
    fn test_editing_mode_captures_text() {
        let mut app = normal_app();
        app.mode = Mode::Editing;

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &app),
            Action::InputNewline
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &app),
            Action::Backspace
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app),
            Action::ExitEditing
        );
    }

    #[test]
    fn test_error_popup_swallows_next_key() {
        let mut app = normal_app();
        app.error_message = Some("failure".to_string());
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::DismissError
        );
    }

    #[test]
    fn test_any_key_exits_help() {
        let mut app = normal_app();
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x')), &app),
            Action::ExitMode
        );
    }
}

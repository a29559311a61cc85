//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Raw text for the focused cell, sanitised downstream
    Type(String),
    Erase,
    FocusLeft,
    FocusRight,
    FocusFirst,
    FocusLast,
    CycleColor,
    Submit,
    Restart,
    Confirm,
    Cancel,
    Quit,
}

fn global_action(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(Action::Restart),
        _ => None,
    }
}

pub fn edit_mode_action(key: KeyEvent) -> Action {
    if let Some(action) = global_action(key) {
        return action;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char(' '), _) => Action::CycleColor,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) | (KeyCode::Delete, _) => Action::Erase,
        (KeyCode::Left, _) | (KeyCode::BackTab, _) => Action::FocusLeft,
        (KeyCode::Right, _) | (KeyCode::Tab, _) => Action::FocusRight,
        (KeyCode::Home, _) => Action::FocusFirst,
        (KeyCode::End, _) => Action::FocusLast,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Type(c.to_string()),
        _ => Action::None,
    }
}

pub fn done_mode_action(key: KeyEvent) -> Action {
    global_action(key).unwrap_or(Action::None)
}

pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_letters_become_raw_text() {
        assert_eq!(edit_mode_action(key(KeyCode::Char('a'))), Action::Type("a".into()));
        assert_eq!(
            edit_mode_action(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Action::Type("Q".into())
        );
        // digits still reach the sanitiser
        assert_eq!(edit_mode_action(key(KeyCode::Char('3'))), Action::Type("3".into()));
    }

    #[test]
    fn test_edit_bindings() {
        assert_eq!(edit_mode_action(key(KeyCode::Char(' '))), Action::CycleColor);
        assert_eq!(edit_mode_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(edit_mode_action(key(KeyCode::Backspace)), Action::Erase);
        assert_eq!(edit_mode_action(key(KeyCode::Tab)), Action::FocusRight);
        assert_eq!(edit_mode_action(key(KeyCode::Left)), Action::FocusLeft);
        assert_eq!(edit_mode_action(key(KeyCode::Home)), Action::FocusFirst);
    }

    #[test]
    fn test_control_keys_not_typed() {
        assert_eq!(edit_mode_action(ctrl('r')), Action::Restart);
        assert_eq!(edit_mode_action(ctrl('c')), Action::Quit);
        assert_eq!(edit_mode_action(ctrl('x')), Action::None);
    }

    #[test]
    fn test_done_mode_ignores_letters() {
        assert_eq!(done_mode_action(key(KeyCode::Char('a'))), Action::None);
        assert_eq!(done_mode_action(ctrl('r')), Action::Restart);
        assert_eq!(done_mode_action(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_confirm() {
        assert_eq!(confirm_action(key(KeyCode::Char('y'))), Action::Confirm);
        assert_eq!(confirm_action(key(KeyCode::Char('n'))), Action::Cancel);
        assert_eq!(confirm_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(confirm_action(key(KeyCode::Char('x'))), Action::None);
    }
}

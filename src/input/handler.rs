use crate::app::AppState;
use crate::domain::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

/// Handle keys while the task list has focus
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,

        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('u') => app.undo_delete(),
        KeyCode::Char('t') => app.toggle_dark_mode(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_editing(),

        _ => {}
    }
    false
}

/// Handle keys while the draft input has focus
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            // The add action is disabled while an error is showing
            if app.error.is_none() {
                if let Err(e) = app.submit_draft() {
                    debug!(error = %e, "submit rejected");
                }
            }
        }
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Backspace => app.pop_draft_char(),
        KeyCode::Char(c) => app.push_draft_char(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimersConfig;
    use crate::domain::ValidationError;
    use crate::persistence::MemoryStore;
    use crate::theme::FixedAmbient;
    use crate::timer::ManualClock;
    use chrono::Utc;

    fn create_test_app() -> AppState {
        AppState::load(
            Box::new(MemoryStore::new()),
            Box::new(ManualClock::new(Utc::now())),
            &FixedAmbient(false),
            TimersConfig::default(),
        )
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut app = create_test_app();
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "Write specs");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.draft, "Write spec");
        assert!(app.is_typing);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Write spec");
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_letters_in_editing_mode_are_not_commands() {
        let mut app = create_test_app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        type_text(&mut app, "tud");
        assert_eq!(app.draft, "qtud");
        assert!(!app.dark_mode);
    }

    #[test]
    fn test_rejected_submit_keeps_draft() {
        let mut app = create_test_app();
        type_text(&mut app, "First task");
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "first TASK");
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.error, Some(ValidationError::DuplicateTask));
        assert_eq!(app.draft, "first TASK");
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_enter_ignored_while_error_shown() {
        let mut app = create_test_app();
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.error, Some(ValidationError::TooShort));

        // Still an error, second Enter does nothing
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.error, Some(ValidationError::TooShort));

        // Typing clears the error and re-enables submit
        type_text(&mut app, "c");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "abc");
    }

    #[test]
    fn test_normal_mode_commands() {
        let mut app = create_test_app();
        type_text(&mut app, "First task");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Second task");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks[1].completed);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.tasks.len(), 1);
        assert!(app.last_deleted.is_some());

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.tasks.len(), 2);
        assert!(app.tasks[1].completed);

        press(&mut app, KeyCode::Char('t'));
        assert!(app.dark_mode);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));

        app.stop_editing();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
    }
}

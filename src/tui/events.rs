use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::input::{apply_paste, clear_field, pop_char, push_char};
use super::state::DashboardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Load,
    Quit,
}

pub fn handle_event(event: Event, state: &mut DashboardState) -> Action {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        Event::Paste(text) => {
            apply_paste(state, &text);
            Action::None
        }
        _ => Action::None,
    }
}

/// Mutates the dashboard state for one key press and reports what the loop should do next.
pub fn handle_key_event(key: KeyEvent, state: &mut DashboardState) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('u') => {
                clear_field(state);
                Action::None
            }
            _ => Action::None,
        };
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
            state.show_help = false;
        }
        return Action::None;
    }

    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::F(1) => state.show_help = true,
        KeyCode::Enter => return Action::Load,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.focus = state.focus.next();
        }
        KeyCode::Backspace => pop_char(state),
        KeyCode::Char(c) => push_char(state, c),
        _ => {}
    }
    Action::None
}

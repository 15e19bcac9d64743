//! Key bindings shared by the local and remote terminal front ends.

use crossterm::event::KeyCode;

use crate::models::CHOICE_COUNT;
use crate::session::{Intent, Phase, SessionView};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Intent),
    CursorUp,
    CursorDown,
    Quit,
    Ignore,
}

pub fn action_for_key(view: &SessionView, cursor: usize, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => return Action::Dispatch(Intent::Reset),
        KeyCode::Tab | KeyCode::Char('m') | KeyCode::Char('M') => {
            return Action::Dispatch(Intent::SelectMode {
                mode: view.mode.toggled(),
            });
        }
        _ => {}
    }

    match view.phase {
        Phase::Idle => match key {
            KeyCode::Left | KeyCode::Right => Action::Dispatch(Intent::SelectMode {
                mode: view.mode.toggled(),
            }),
            KeyCode::Enter | KeyCode::Char('n') => Action::Dispatch(Intent::NewQuestion),
            _ => Action::Ignore,
        },
        Phase::ShowingQuestion => match key {
            KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => {
                Action::Dispatch(Intent::Answer { choice: cursor })
            }
            KeyCode::Char('n') => Action::Dispatch(Intent::NewQuestion),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) if (1..=CHOICE_COUNT as u32).contains(&digit) => {
                    Action::Dispatch(Intent::Answer {
                        choice: digit as usize - 1,
                    })
                }
                _ => Action::Ignore,
            },
            _ => Action::Ignore,
        },
        Phase::ShowingResult => match key {
            KeyCode::Enter | KeyCode::Char('n') => Action::Dispatch(Intent::Next),
            KeyCode::Backspace | KeyCode::Char('b') => Action::Dispatch(Intent::Dismiss),
            _ => Action::Ignore,
        },
    }
}

pub fn next_cursor(cursor: usize) -> usize {
    (cursor + 1) % CHOICE_COUNT
}

pub fn previous_cursor(cursor: usize) -> usize {
    (cursor + CHOICE_COUNT - 1) % CHOICE_COUNT
}

//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FlowError;
use crate::features::tasks::TaskFilter;
use crate::tui::app::Screen;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// Switch between the task list and the focus timer.
    SwitchScreen,
    Up,
    Down,
    NextTab,
    PreviousTab,
    Tab(TaskFilter),
    /// Toggle the selected task, or start/pause the timer.
    Toggle,
    Delete,
    Refresh,
    /// Reset the timer.
    Reset,
    /// Toggle notification blocking.
    Notifications,
}

/// Map a key press to an action on `screen`.
#[must_use]
pub fn action_for(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match (screen, key.code) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Char('?')) => Action::Help,
        (_, KeyCode::Tab) => Action::SwitchScreen,
        (_, KeyCode::Char(' ')) => Action::Toggle,

        // Navigation - vim style
        (Screen::Tasks, KeyCode::Char('j') | KeyCode::Down) => Action::Down,
        (Screen::Tasks, KeyCode::Char('k') | KeyCode::Up) => Action::Up,
        (Screen::Tasks, KeyCode::Char('l') | KeyCode::Right) => Action::NextTab,
        (Screen::Tasks, KeyCode::Char('h') | KeyCode::Left) => Action::PreviousTab,
        (Screen::Tasks, KeyCode::Char(c @ '1'..='4')) => {
            let index = c as usize - '1' as usize;
            Action::Tab(TaskFilter::ALL[index])
        }
        (Screen::Tasks, KeyCode::Char('x') | KeyCode::Enter) => Action::Toggle,
        (Screen::Tasks, KeyCode::Char('d') | KeyCode::Delete) => Action::Delete,
        (Screen::Tasks, KeyCode::Char('r')) => Action::Refresh,

        (Screen::Focus, KeyCode::Char('r')) => Action::Reset,
        (Screen::Focus, KeyCode::Char('n')) => Action::Notifications,

        _ => return None,
    };
    Some(action)
}

/// Wait up to `timeout` for a key press and map it to an action.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(screen: Screen, timeout: Duration) -> Result<Option<Action>, FlowError> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for(screen, key)),
        _ => Ok(None),
    }
}

use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Blocks until the next input event and translates it. `None` for events
/// that map to nothing.
pub fn handle_events(app: &AppState) -> Result<Option<Action>> {
    Ok(translate_event(app, event::read()?))
}

pub fn translate_event(app: &AppState, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::Navigate => handle_navigate_mode(key),
        AppMode::SearchEntry { .. } => handle_search_mode(key),
    }
}

fn handle_navigate_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (Char('q'), _) => Some(Action::Quit),

        // Tabs
        (Left, _) | (Char('h'), _) | (BackTab, _) => Some(Action::PreviousTab),
        (Right, _) | (Char('l'), _) | (Tab, _) => Some(Action::NextTab),
        (Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|d| Action::SelectTab(d as usize - 1)),

        // Scrolling
        (Up, _) | (Char('k'), _) => Some(Action::ScrollUp),
        (Down, _) | (Char('j'), _) => Some(Action::ScrollDown),
        (PageUp, _) => Some(Action::PageUp),
        (PageDown, _) => Some(Action::PageDown),
        (Home, _) | (Char('g'), _) => Some(Action::ScrollTop),
        (End, _) | (Char('G'), _) => Some(Action::ScrollBottom),

        // Search
        (Char('/'), _) => Some(Action::StartSearch),
        (Char('n'), _) => Some(Action::NextMatch),
        (Char('N'), _) | (Char('p'), _) => Some(Action::PreviousMatch),

        // Sections
        (Char(' '), _) | (Enter, _) => Some(Action::ToggleSection),
        (Char('c'), _) => Some(Action::CollapseAll),
        (Char('e'), _) => Some(Action::ExpandAll),

        _ => None,
    }
}

fn handle_search_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::CancelSearch),
        (Esc, _) => Some(Action::CancelSearch),
        (Enter, _) => Some(Action::ConfirmSearch),
        (Backspace, _) => Some(Action::BackspaceSearch),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeSearchChar(c)),
        _ => None,
    }
}

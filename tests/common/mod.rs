use resume_tui::actions::{execute_action, Action};
use resume_tui::config::AppConfig;
use resume_tui::model::Resume;
use resume_tui::{parser, AppState};
use std::path::Path;

pub const FIXTURE: &str = "tests/fixtures/resume.yaml";

pub fn fixture_resume() -> Resume {
    parser::load_file(Path::new(FIXTURE)).expect("fixture should load")
}

#[allow(dead_code)]
pub fn fixture_app() -> AppState {
    AppState::new(fixture_resume(), AppConfig::default())
}

/// Runs actions in order, the way the event loop would.
#[allow(dead_code)]
pub fn press(app: &mut AppState, actions: &[Action]) {
    for action in actions {
        execute_action(*action, app).expect("actions never fail");
    }
}

/// Types a search term and submits it.
#[allow(dead_code)]
pub fn search(app: &mut AppState, term: &str) {
    press(app, &[Action::StartSearch]);
    for c in term.chars() {
        press(app, &[Action::TypeSearchChar(c)]);
    }
    press(app, &[Action::ConfirmSearch]);
}

/// Prefixes each line with its number so snapshots keep blank lines and
/// leading spaces intact.
#[allow(dead_code)]
pub fn numbered(text: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{i:02}|{}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

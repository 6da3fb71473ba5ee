use resume_tui::actions::Action;
use resume_tui::app::{AppMode, SearchPhase, Tab};
use resume_tui::layout::{format_tab, ScrollState};
use resume_tui::state::SectionState;
use tempfile::TempDir;

mod common;
use common::*;

#[test]
fn test_open_ended_role_reads_present() {
    let content = format_tab(Tab::Experience, &fixture_resume(), 80, &SectionState::default());
    let text = content.plain_text();
    assert!(text.contains("    1967 - Present | Washington\n"));
    assert!(text.contains("    1949 - 1967 | Philadelphia\n"));
}

#[test]
fn test_skills_tie_sorted_by_name() {
    for width in [60, 120] {
        let text = format_tab(Tab::Skills, &fixture_resume(), width, &SectionState::default())
            .plain_text();
        let cobol = text.find("COBOL").unwrap();
        let c = text.find("    C ").or_else(|| text.find("  C ")).unwrap();
        let swift = text.find("Swift").unwrap();
        assert!(cobol < c && c < swift, "order wrong at width {width}");
    }
}

#[test]
fn test_search_two_segments_and_wrap_around() {
    let mut app = fixture_app();
    press(&mut app, &[Action::SelectTab(1)]);
    search(&mut app, "1967");

    assert_eq!(app.mode, AppMode::Navigate);
    assert_eq!(app.search.phase, SearchPhase::Active);
    assert_eq!(app.search.matches.len(), 2);

    let start = app.search.current;
    press(&mut app, &[Action::NextMatch, Action::NextMatch]);
    assert_eq!(app.search.current, start);

    press(&mut app, &[Action::PreviousMatch]);
    assert_eq!(app.search.current, Some(1));
}

#[test]
fn test_scroll_stays_clamped() {
    let mut app = fixture_app();
    press(&mut app, &[Action::Resize(50, 10)]);
    let max = ScrollState::max_offset(app.line_count());

    let sequence = [
        Action::ScrollUp,
        Action::PageDown,
        Action::PageDown,
        Action::ScrollDown,
        Action::PageDown,
        Action::PageDown,
        Action::PageDown,
        Action::PageDown,
        Action::PageUp,
        Action::ScrollBottom,
        Action::ScrollDown,
        Action::PageUp,
        Action::ScrollTop,
        Action::ScrollUp,
    ];
    for action in sequence {
        press(&mut app, &[action]);
        assert!(app.scroll.offset <= max, "{action:?} left offset {}", app.scroll.offset);
    }
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_tab_change_resets_scroll_and_search() {
    let mut app = fixture_app();
    press(&mut app, &[Action::SelectTab(1)]);
    search(&mut app, "cobol");
    press(&mut app, &[Action::ScrollDown, Action::ScrollDown]);
    assert!(app.search.is_active());

    for action in [Action::NextTab, Action::PreviousTab, Action::SelectTab(4)] {
        press(&mut app, &[Action::ScrollDown]);
        press(&mut app, &[action]);
        assert_eq!(app.scroll.offset, 0);
        assert_eq!(app.search.phase, SearchPhase::Inactive);
        assert!(app.search.matches.is_empty());
    }
    assert_eq!(app.active_tab, Tab::Contributions);
}

#[test]
fn test_escape_discards_search() {
    let mut app = fixture_app();
    search(&mut app, "grace");
    assert!(app.search.is_active());

    press(&mut app, &[Action::StartSearch, Action::TypeSearchChar('x'), Action::CancelSearch]);
    assert_eq!(app.mode, AppMode::Navigate);
    assert_eq!(app.search.phase, SearchPhase::Inactive);
    assert!(app.search.term.is_empty());
}

#[test]
fn test_collapsed_sections_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut app = fixture_app();
    press(&mut app, &[Action::SelectTab(3), Action::ToggleSection]);
    assert!(app.sections.is_collapsed("project:Nanosecond Wire"));
    app.sections.save(&path).unwrap();

    let mut restarted = fixture_app();
    restarted.sections = SectionState::load_or_default(&path);
    press(&mut restarted, &[Action::SelectTab(3)]);
    let text = restarted.content().plain_text();
    assert!(text.contains("  Nanosecond Wire [+]\n"));
    assert!(!text.contains("Technologies"));
}

#[test]
fn test_resize_relayouts_and_reindexes() {
    let mut app = fixture_app();
    press(&mut app, &[Action::Resize(100, 30), Action::SelectTab(2)]);
    search(&mut app, "cobol");
    // two-column layout: COBOL and UNIVAC share a row
    assert_eq!(app.search.matches.len(), 1);

    press(&mut app, &[Action::Resize(60, 30)]);
    assert_eq!(app.search.matches.len(), 1);
    assert_eq!(app.search.current, Some(0));
    assert!(app.scroll.offset <= ScrollState::max_offset(app.line_count()));
}

#[test]
fn test_quit() {
    let mut app = fixture_app();
    press(&mut app, &[Action::Quit]);
    assert!(!app.running);
}

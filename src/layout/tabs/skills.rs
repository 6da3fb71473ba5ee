use crate::layout::bar::{fit, render_bar};
use crate::layout::builder::{ContentBuilder, LEFT_PAD};
use crate::layout::segment::TabContent;
use crate::layout::style::{SegmentStyle, POSITIVE, TEXT};
use crate::model::{ranked, Resume, Skill, MAX_RATING};
use unicode_width::UnicodeWidthStr;

/// Content width from which the two categories sit side by side.
pub const TWO_COLUMN_MIN_WIDTH: usize = 80;

const BAR_WIDTH: usize = 15;
const RATING_WIDTH: usize = 5;
const GUTTER: &str = "  │  ";
const MIN_NAME_WIDTH: usize = 4;
const SINGLE_INDENT: &str = "    ";

const LANGUAGES: &str = "PROGRAMMING LANGUAGES";
const SDKS: &str = "SDKS & APIS";

/// Columns a row spends on everything but the name: the space after the
/// name, the bar and its trailing space, then the `(r/5)` field.
const ROW_OVERHEAD: usize = 1 + BAR_WIDTH + 1 + RATING_WIDTH;

pub fn format_skills(resume: &Resume, width: usize) -> TabContent {
    let mut b = ContentBuilder::new(width);
    b.section_title("TECHNICAL SKILLS");

    let languages = ranked(&resume.skills.programming_languages);
    let sdks = ranked(&resume.skills.sdks_apis);

    if width >= TWO_COLUMN_MIN_WIDTH {
        two_columns(&mut b, &languages, &sdks);
    } else {
        single_column(&mut b, LANGUAGES, &languages);
        b.blank();
        single_column(&mut b, SDKS, &sdks);
    }

    b.finish()
}

fn rating_label(skill: &Skill) -> String {
    format!("({}/{})", skill.clamped_rating(), MAX_RATING)
}

fn two_columns(b: &mut ContentBuilder, left: &[&Skill], right: &[&Skill]) {
    let col = b
        .width()
        .saturating_sub(LEFT_PAD.len() + GUTTER.width())
        / 2;
    let name_width = col.saturating_sub(ROW_OVERHEAD).max(MIN_NAME_WIDTH);

    b.push(
        format!("{LEFT_PAD}{}{GUTTER}{SDKS}\n", fit(LANGUAGES, col)),
        TEXT | SegmentStyle::BOLD,
    );
    let rule = "─".repeat(col);
    b.push(format!("{LEFT_PAD}{rule}{GUTTER}{rule}\n\n"), TEXT);

    for row in 0..left.len().max(right.len()) {
        b.push(LEFT_PAD, TEXT);
        cell(b, left.get(row).copied(), name_width, col);
        b.push(GUTTER, TEXT);
        cell(b, right.get(row).copied(), name_width, col);
        b.push("\n", TEXT);
    }
}

fn cell(b: &mut ContentBuilder, skill: Option<&Skill>, name_width: usize, col: usize) {
    match skill {
        Some(skill) => {
            b.push(format!("{} ", fit(&skill.name, name_width)), TEXT);
            b.push(
                format!("{} ", render_bar(skill.clamped_rating(), MAX_RATING, BAR_WIDTH)),
                POSITIVE,
            );
            b.push(fit(&rating_label(skill), RATING_WIDTH), TEXT);
        }
        None => b.push(" ".repeat(col), TEXT),
    }
}

fn single_column(b: &mut ContentBuilder, heading: &str, skills: &[&Skill]) {
    let name_width = b
        .width()
        .saturating_sub(SINGLE_INDENT.len() + ROW_OVERHEAD)
        .max(MIN_NAME_WIDTH);

    b.push(format!("{LEFT_PAD}{heading}\n"), TEXT | SegmentStyle::BOLD);
    b.push(
        format!("{LEFT_PAD}{}\n\n", "─".repeat(heading.width())),
        TEXT,
    );
    for skill in skills {
        b.push(format!("{SINGLE_INDENT}{} ", fit(&skill.name, name_width)), TEXT);
        b.push(
            format!("{} ", render_bar(skill.clamped_rating(), MAX_RATING, BAR_WIDTH)),
            POSITIVE,
        );
        b.push(format!("{}\n", rating_label(skill)), TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::test_support::sample_resume;

    fn lines(width: usize) -> Vec<String> {
        format_skills(&sample_resume(), width)
            .plain_text()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_rating_ties_sort_by_name() {
        for width in [60, 100] {
            let text = format_skills(&sample_resume(), width).plain_text();
            let c = text.find("C ").unwrap();
            let swift = text.find("Swift").unwrap();
            assert!(c < swift, "width {width}");
            assert!(text.find("Rust").unwrap() < c);
        }
    }

    #[test]
    fn test_single_column_below_threshold() {
        let lines = lines(79);
        assert!(lines.iter().any(|l| l == "  PROGRAMMING LANGUAGES"));
        assert!(lines.iter().any(|l| l == "  SDKS & APIS"));
        assert!(!lines.iter().any(|l| l.contains('│')));
    }

    #[test]
    fn test_two_columns_at_threshold() {
        let lines = lines(80);
        assert!(lines
            .iter()
            .any(|l| l.starts_with("  PROGRAMMING LANGUAGES") && l.ends_with("SDKS & APIS")));
        let rows: Vec<&String> = lines.iter().filter(|l| l.contains('[')).collect();
        // four languages against two SDKs
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Rust"));
        assert!(rows[0].contains("UIKit"));
        assert!(rows[3].contains("Basic"));
    }

    #[test]
    fn test_rows_fit_width() {
        for width in [80, 100, 140] {
            for line in lines(width) {
                assert!(line.width() <= width, "{line:?} wider than {width}");
            }
        }
        for line in lines(60) {
            assert!(line.width() <= 60, "{line:?}");
        }
    }

    #[test]
    fn test_rating_is_clamped_in_label_and_bar() {
        let text = format_skills(&sample_resume(), 60).plain_text();
        assert!(text.contains("(5/5)"));
        assert!(text.contains("(0/5)"));
        assert!(!text.contains("(9/5)"));
        assert!(text.contains(&format!("[{}] (5/5)", "█".repeat(13))));
    }

    #[test]
    fn test_long_name_truncated_before_bar() {
        let mut resume = sample_resume();
        resume.skills.programming_languages = vec![Skill::new("X".repeat(60), 3)];
        let text = format_skills(&resume, 60).plain_text();
        let row = text.lines().find(|l| l.contains('[')).unwrap();
        assert!(row.contains("…"));
        assert_eq!(row.width(), 60);
    }

    #[test]
    fn test_bars_use_positive_style() {
        let content = format_skills(&sample_resume(), 100);
        let bar = content
            .segments
            .iter()
            .find(|s| s.text.starts_with('['))
            .unwrap();
        assert_eq!(bar.style, POSITIVE);
    }
}

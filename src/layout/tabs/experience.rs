use crate::layout::builder::ContentBuilder;
use crate::layout::segment::TabContent;
use crate::layout::style::{SegmentStyle, ACCENT, INFO, TEXT};
use crate::model::{Experience, Resume};
use crate::state::SectionState;

pub fn section_key(entry: &Experience) -> String {
    format!("experience:{}", header_text(entry))
}

fn header_text(entry: &Experience) -> String {
    format!("{} at {}", entry.title, entry.company)
}

pub fn format_experience(resume: &Resume, width: usize, sections: &SectionState) -> TabContent {
    let mut b = ContentBuilder::new(width);
    b.section_title("WORK EXPERIENCE");

    for (i, entry) in resume.experience.iter().enumerate() {
        if i > 0 {
            b.entry_divider();
        }
        let key = section_key(entry);
        let collapsed = sections.is_collapsed(&key);
        b.entry_header(key, &header_text(entry), collapsed);
        if collapsed {
            continue;
        }

        if entry.location.is_empty() {
            b.line(4, &entry.period(), TEXT);
        } else {
            b.line(4, &format!("{} | {}", entry.period(), entry.location), TEXT);
        }

        if let Some(url) = &entry.app_store_url {
            b.labeled(4, "App Store", url, ACCENT | SegmentStyle::UNDERLINE);
        }
        if let Some(media) = entry.media_urls.as_ref().filter(|m| !m.is_empty()) {
            b.line(4, "Media:", TEXT);
            for url in media {
                b.line(6, &format!("• {url}"), INFO);
            }
        }

        if !entry.responsibilities.is_empty() {
            b.blank();
            b.line(4, "Key Responsibilities:", TEXT | SegmentStyle::BOLD);
            for item in &entry.responsibilities {
                b.bullet("-", item, 6, TEXT);
            }
        }
    }

    b.finish()
}

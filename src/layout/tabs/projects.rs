use crate::layout::builder::ContentBuilder;
use crate::layout::segment::TabContent;
use crate::layout::style::{SegmentStyle, ACCENT, TEXT};
use crate::model::{Project, Resume};
use crate::state::SectionState;

/// What differs between the personal-project and contribution listings.
struct Listing {
    title: &'static str,
    key_prefix: &'static str,
    show_app_store: bool,
}

const PROJECTS: Listing = Listing {
    title: "PERSONAL PROJECTS",
    key_prefix: "project",
    show_app_store: true,
};

const CONTRIBUTIONS: Listing = Listing {
    title: "OPEN SOURCE CONTRIBUTIONS",
    key_prefix: "contribution",
    show_app_store: false,
};

pub fn format_projects(resume: &Resume, width: usize, sections: &SectionState) -> TabContent {
    format_listing(&PROJECTS, &resume.personal_projects, width, sections)
}

pub fn format_contributions(resume: &Resume, width: usize, sections: &SectionState) -> TabContent {
    format_listing(&CONTRIBUTIONS, &resume.open_source_contributions, width, sections)
}

fn format_listing(
    listing: &Listing,
    entries: &[Project],
    width: usize,
    sections: &SectionState,
) -> TabContent {
    let mut b = ContentBuilder::new(width);
    b.section_title(listing.title);

    for (i, project) in entries.iter().enumerate() {
        if i > 0 {
            b.entry_divider();
        }
        let key = format!("{}:{}", listing.key_prefix, project.name);
        let collapsed = sections.is_collapsed(&key);
        b.entry_header(key, &project.name, collapsed);
        if collapsed {
            continue;
        }

        if let Some(tech) = project.technologies.as_ref().filter(|t| !t.is_empty()) {
            b.line(4, &format!("Technologies: {}", tech.join(", ")), TEXT);
        }
        if let Some(description) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
            b.paragraph(description.trim(), 4, TEXT);
        }
        if let Some(link) = project.first_link() {
            b.labeled(4, "URL", &link.url, ACCENT | SegmentStyle::UNDERLINE);
        }
        if listing.show_app_store {
            if let Some(url) = &project.app_store_link {
                b.labeled(4, "App Store", url, ACCENT | SegmentStyle::UNDERLINE);
            }
        }
    }

    b.finish()
}

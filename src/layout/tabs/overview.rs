use crate::layout::bar::{fit, render_stars};
use crate::layout::builder::ContentBuilder;
use crate::layout::segment::TabContent;
use crate::layout::style::{SegmentStyle, ACCENT, POSITIVE, TEXT};
use crate::model::{ranked, Resume, Skill, MAX_RATING};

/// Entries per category in the skills summary.
pub const TOP_SKILLS: usize = 5;
const SUMMARY_NAME_WIDTH: usize = 25;

pub fn format_overview(resume: &Resume, width: usize) -> TabContent {
    let mut b = ContentBuilder::new(width);

    b.push(format!("\n  {}\n", resume.name), ACCENT | SegmentStyle::BOLD);

    b.section_title("CONTACT INFORMATION");
    let contact = &resume.contact;
    if let Some(email) = &contact.email {
        b.labeled(2, "Email", email, ACCENT);
    }
    if let Some(phone) = &contact.phone {
        b.labeled(2, "Phone", phone, TEXT);
    }
    if let Some(website) = &contact.website {
        b.labeled(2, "Website", website, ACCENT);
    }
    if let Some(linkedin) = &contact.linkedin {
        b.labeled(2, "LinkedIn", &profile_url("https://linkedin.com/in/", linkedin), ACCENT);
    }
    if let Some(github) = &contact.github {
        b.labeled(2, "GitHub", &profile_url("https://github.com/", github), ACCENT);
    }

    b.section_title("PROFESSIONAL SUMMARY");
    if !resume.profile.trim().is_empty() {
        b.paragraph(resume.profile.trim(), 2, TEXT);
    }

    b.section_title("EDUCATION");
    for (i, edu) in resume.education.iter().enumerate() {
        if i > 0 {
            b.blank();
        }
        b.line(2, &edu.degree, TEXT | SegmentStyle::BOLD);
        match &edu.graduation_year {
            Some(year) => b.line(4, &format!("{} ({})", edu.institution, year), TEXT),
            None => b.line(4, &edu.institution, TEXT),
        }
        if let Some(details) = edu.details.as_deref().filter(|d| !d.trim().is_empty()) {
            b.paragraph(details, 4, TEXT);
        }
    }

    b.section_title("KEY SKILLS SUMMARY");
    b.line(4, "Top Programming Languages:", ACCENT | SegmentStyle::BOLD);
    push_top_skills(&mut b, &resume.skills.programming_languages);
    b.blank();
    b.line(4, "Top SDKs/APIs:", ACCENT | SegmentStyle::BOLD);
    push_top_skills(&mut b, &resume.skills.sdks_apis);

    b.finish()
}

fn push_top_skills(b: &mut ContentBuilder, skills: &[Skill]) {
    for skill in ranked(skills).into_iter().take(TOP_SKILLS) {
        b.push(format!("    {} ", fit(&skill.name, SUMMARY_NAME_WIDTH)), TEXT);
        b.push(
            format!("{}\n", render_stars(skill.clamped_rating(), MAX_RATING)),
            POSITIVE,
        );
    }
}

/// Handles given without a scheme are expanded onto the service's profile URL.
fn profile_url(base: &str, handle: &str) -> String {
    if handle.starts_with("http://") || handle.starts_with("https://") {
        handle.to_string()
    } else {
        format!("{base}{}", handle.trim_start_matches('@'))
    }
}

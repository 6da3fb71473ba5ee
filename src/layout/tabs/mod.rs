mod experience;
mod overview;
mod projects;
mod skills;

pub use experience::format_experience;
pub use overview::format_overview;
pub use projects::{format_contributions, format_projects};
pub use skills::{format_skills, TWO_COLUMN_MIN_WIDTH};

use super::segment::TabContent;
use crate::model::Resume;
use crate::state::SectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Experience,
    Skills,
    Projects,
    Contributions,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Experience,
        Tab::Skills,
        Tab::Projects,
        Tab::Contributions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Experience => "Experience",
            Tab::Skills => "Skills",
            Tab::Projects => "Projects",
            Tab::Contributions => "Open Source",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        let n = Tab::ALL.len();
        Tab::ALL[(self.index() + n - 1) % n]
    }
}

/// Lays out one tab. Pure: the same inputs always give the same segments.
pub fn format_tab(tab: Tab, resume: &Resume, width: usize, sections: &SectionState) -> TabContent {
    match tab {
        Tab::Overview => format_overview(resume, width),
        Tab::Experience => format_experience(resume, width, sections),
        Tab::Skills => format_skills(resume, width),
        Tab::Projects => format_projects(resume, width, sections),
        Tab::Contributions => format_contributions(resume, width, sections),
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::*;

    pub fn sample_resume() -> Resume {
        Resume {
            name: "Ada Lovelace".to_string(),
            contact: Contact {
                email: Some("ada@example.org".to_string()),
                phone: None,
                website: Some("https://ada.dev".to_string()),
                linkedin: Some("ada".to_string()),
                github: Some("https://github.com/ada".to_string()),
            },
            profile: "Mathematician writing programs for engines that do not exist yet.".to_string(),
            experience: vec![
                Experience {
                    company: "Analytical Engines".to_string(),
                    location: "London".to_string(),
                    title: "Programmer".to_string(),
                    start_date: "1842".to_string(),
                    end_date: None,
                    responsibilities: vec![
                        "Wrote notes on the engine".to_string(),
                        "Computed Bernoulli numbers".to_string(),
                    ],
                    app_store_url: None,
                    media_urls: None,
                },
                Experience {
                    company: "Royal Society".to_string(),
                    location: "London".to_string(),
                    title: "Translator".to_string(),
                    start_date: "1840".to_string(),
                    end_date: Some("1842".to_string()),
                    responsibilities: vec!["Translated Menabrea's paper".to_string()],
                    app_store_url: Some("https://apps.example/translate".to_string()),
                    media_urls: Some(vec!["https://media.example/1".to_string()]),
                },
            ],
            personal_projects: vec![Project {
                name: "Difference Tables".to_string(),
                description: Some("Tabulates polynomials.".to_string()),
                app_store_link: Some("https://apps.example/tables".to_string()),
                links: Some(vec![
                    Link {
                        title: "Source".to_string(),
                        url: "https://git.example/tables".to_string(),
                    },
                    Link {
                        title: "Mirror".to_string(),
                        url: "https://mirror.example/tables".to_string(),
                    },
                ]),
                technologies: Some(vec!["Brass".to_string(), "Punch cards".to_string()]),
            }],
            open_source_contributions: vec![Project {
                name: "Loom".to_string(),
                description: None,
                app_store_link: None,
                links: None,
                technologies: None,
            }],
            skills: Skills {
                programming_languages: vec![
                    Skill::new("Swift", 4),
                    Skill::new("C", 4),
                    Skill::new("Rust", 5),
                    Skill::new("Basic", -2),
                ],
                sdks_apis: vec![Skill::new("Metal", 3), Skill::new("UIKit", 9)],
            },
            education: vec![Education {
                institution: "Home schooling".to_string(),
                degree: "Mathematics".to_string(),
                graduation_year: Some("1835".to_string()),
                details: None,
            }],
        }
    }
}

use serde::Deserialize;
use std::cmp::Ordering;

/// Highest rating a skill can carry. Stars and bars are always drawn out of this.
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Resume {
    pub name: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub personal_projects: Vec<Project>,
    #[serde(default)]
    pub open_source_contributions: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Experience {
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    pub app_store_url: Option<String>,
    pub media_urls: Option<Vec<String>>,
}

impl Experience {
    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            self.start_date,
            self.end_date.as_deref().unwrap_or("Present")
        )
    }
}

/// A personal project or an open-source contribution; both share one shape.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub app_store_link: Option<String>,
    pub links: Option<Vec<Link>>,
    pub technologies: Option<Vec<String>>,
}

impl Project {
    /// Only the first link is ever shown.
    pub fn first_link(&self) -> Option<&Link> {
        self.links.as_ref().and_then(|links| links.first())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Link {
    #[serde(default)]
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub programming_languages: Vec<Skill>,
    #[serde(default)]
    pub sdks_apis: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub rating: i64,
}

impl Skill {
    pub fn new(name: impl Into<String>, rating: i64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }

    /// Rating clamped into `0..=MAX_RATING`; malformed input degrades instead of failing.
    pub fn clamped_rating(&self) -> i64 {
        self.rating.clamp(0, MAX_RATING)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(rename = "date")]
    pub graduation_year: Option<String>,
    pub details: Option<String>,
}

/// Orders skills by clamped rating descending, then name ascending.
pub fn compare_skills(a: &Skill, b: &Skill) -> Ordering {
    b.clamped_rating()
        .cmp(&a.clamped_rating())
        .then_with(|| a.name.cmp(&b.name))
}

/// Returns the skills in display order without touching the source list.
pub fn ranked(skills: &[Skill]) -> Vec<&Skill> {
    let mut sorted: Vec<&Skill> = skills.iter().collect();
    sorted.sort_by(|a, b| compare_skills(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_clamp() {
        assert_eq!(Skill::new("Rust", -3).clamped_rating(), 0);
        assert_eq!(Skill::new("Rust", 3).clamped_rating(), 3);
        assert_eq!(Skill::new("Rust", 9).clamped_rating(), 5);
    }

    #[test]
    fn test_ranked_breaks_ties_by_name() {
        let skills = vec![
            Skill::new("Swift", 4),
            Skill::new("C", 4),
            Skill::new("Python", 5),
        ];
        let names: Vec<&str> = ranked(&skills).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "C", "Swift"]);

        // Source order is untouched
        assert_eq!(skills[0].name, "Swift");
    }

    #[test]
    fn test_ranked_uses_clamped_rating() {
        let skills = vec![Skill::new("B", 9), Skill::new("A", 5)];
        let names: Vec<&str> = ranked(&skills).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_experience_period_defaults_to_present() {
        let job = Experience {
            start_date: "2020".to_string(),
            end_date: None,
            ..Default::default()
        };
        assert_eq!(job.period(), "2020 - Present");
    }

    #[test]
    fn test_first_link_only() {
        let project = Project {
            name: "Tool".to_string(),
            links: Some(vec![
                Link {
                    title: "Repo".to_string(),
                    url: "https://a.example".to_string(),
                },
                Link {
                    title: "Docs".to_string(),
                    url: "https://b.example".to_string(),
                },
            ]),
            ..Default::default()
        };
        assert_eq!(project.first_link().unwrap().url, "https://a.example");
        assert!(Project::default().first_link().is_none());
    }
}

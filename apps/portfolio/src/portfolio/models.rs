use serde::{Deserialize, Serialize};

/// Returns the value only when it is present and non-blank.
/// The data file uses `""` and a missing key interchangeably.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

impl Socials {
    /// Non-empty social links in display order, paired with their label.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", present(&self.github)),
            ("Website", present(&self.website)),
            ("LinkedIn", present(&self.linkedin)),
            ("Instagram", present(&self.instagram)),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub year: i32,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Tech tags lowercased, in their original order.
    pub fn lowercase_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tech.iter().map(|t| t.to_lowercase())
    }

    /// Lowercased text searched by the project filter: title, summary and tags
    /// joined with single spaces.
    pub fn search_text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(std::iter::once(self.summary.as_str()))
            .chain(self.tech.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub org: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub program: String,
    pub when: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub org: String,
    pub when: String,
    pub location: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Everything the site renders. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&Some("docs/a.pdf".to_string())), Some("docs/a.pdf"));
    }

    #[test]
    fn test_socials_skip_empty_links() {
        let socials = Socials {
            github: Some(String::new()),
            website: None,
            linkedin: Some("https://linkedin.example/me".to_string()),
            instagram: Some("https://instagram.example/me".to_string()),
        };
        let labels: Vec<_> = socials.links().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["LinkedIn", "Instagram"]);
    }

    #[test]
    fn test_search_text_joins_and_lowercases() {
        let project = Project {
            title: "RoverEx".to_string(),
            year: 2022,
            summary: "Air Quality".to_string(),
            tech: vec!["Raspberry Pi".to_string(), "C".to_string()],
            links: ProjectLinks::default(),
            image: None,
        };
        assert_eq!(project.search_text(), "roverex air quality raspberry pi c");
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let project: Project =
            serde_json::from_str(r#"{"title":"T","year":2020,"summary":"S"}"#).unwrap();
        assert!(project.tech.is_empty());
        assert!(project.image.is_none());
        assert!(present(&project.links.repo).is_none());
    }
}

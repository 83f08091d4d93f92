//! Project filtering: case-insensitive substring search AND exact tag match.

use serde::Serialize;

use crate::portfolio::models::Project;

/// Normalized search inputs. An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectFilter {
    pub query: String,
    pub tag: String,
}

impl ProjectFilter {
    /// Trims and lowercases both inputs.
    pub fn new(query: &str, tag: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            tag: tag.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tag.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_text(project) && self.matches_tag(project)
    }

    fn matches_text(&self, project: &Project) -> bool {
        self.query.is_empty() || project.search_text().contains(&self.query)
    }

    fn matches_tag(&self, project: &Project) -> bool {
        self.tag.is_empty() || project.lowercase_tags().any(|t| t == self.tag)
    }
}

/// Projects satisfying `filter`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::store::load_embedded;

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let portfolio = load_embedded().unwrap();
        let filter = ProjectFilter::new("", "");
        assert!(filter.is_empty());
        let result = filter_projects(&portfolio.projects, &filter);
        assert_eq!(result.len(), portfolio.projects.len());
    }

    #[test]
    fn test_query_rover_finds_roverex_only() {
        let portfolio = load_embedded().unwrap();
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("rover", ""));
        assert_eq!(
            titles(&result),
            vec!["RoverEx — Pollution & Methane Study (IRPrO Bronze)"]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let portfolio = load_embedded().unwrap();
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("  ROVER ", ""));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_tag_cad_finds_nss_and_moon_camp() {
        let portfolio = load_embedded().unwrap();
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("", "cad"));
        assert_eq!(
            titles(&result),
            vec![
                "NSS Space Settlement — Grand Prize",
                "ESA Moon Camp — Pioneers (3rd Place)"
            ]
        );
    }

    #[test]
    fn test_tag_must_match_whole_tag() {
        let portfolio = load_embedded().unwrap();
        // "c" is a tag of RoverEx only, even though many tags contain the letter.
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("", "C"));
        assert_eq!(result.len(), 1);
        assert!(result[0].title.starts_with("RoverEx"));
    }

    #[test]
    fn test_query_and_tag_are_conjunctive() {
        let portfolio = load_embedded().unwrap();
        let both = filter_projects(&portfolio.projects, &ProjectFilter::new("lunar", "cad"));
        assert_eq!(both.len(), 1);
        let none = filter_projects(&portfolio.projects, &ProjectFilter::new("rover", "cad"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_query_matches_tags_text() {
        let portfolio = load_embedded().unwrap();
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("fusion 360", ""));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let portfolio = load_embedded().unwrap();
        let result = filter_projects(&portfolio.projects, &ProjectFilter::new("zzz-no-match", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset_and_idempotent() {
        let portfolio = load_embedded().unwrap();
        for (q, tag) in [("", ""), ("a", ""), ("", "blender"), ("space", "cad"), ("e", "")] {
            let filter = ProjectFilter::new(q, tag);
            let first = filter_projects(&portfolio.projects, &filter);
            let second = filter_projects(&portfolio.projects, &filter);
            assert_eq!(titles(&first), titles(&second));

            let expected: Vec<_> = portfolio
                .projects
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.title.clone())
                .collect();
            assert_eq!(titles(&first), expected, "q={q:?} tag={tag:?}");
        }
    }
}

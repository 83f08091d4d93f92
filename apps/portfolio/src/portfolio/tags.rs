use std::collections::BTreeSet;

use crate::portfolio::models::Project;

/// Distinct lowercased tech tags across all projects, sorted lexicographically.
pub fn tag_set(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(Project::lowercase_tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::ProjectLinks;
    use crate::portfolio::store::load_embedded;

    fn project(tech: &[&str]) -> Project {
        Project {
            title: "P".to_string(),
            year: 2024,
            summary: String::new(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            links: ProjectLinks::default(),
            image: None,
        }
    }

    #[test]
    fn test_dedupes_across_case() {
        let projects = vec![project(&["CAD", "Blender"]), project(&["cad", "C"])];
        assert_eq!(tag_set(&projects), vec!["blender", "c", "cad"]);
    }

    #[test]
    fn test_empty_projects() {
        assert!(tag_set(&[]).is_empty());
    }

    #[test]
    fn test_embedded_tag_set() {
        let portfolio = load_embedded().unwrap();
        let tags = tag_set(&portfolio.projects);
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"cad".to_string()));
        assert!(tags.contains(&"raspberry pi".to_string()));
        assert!(tags.iter().all(|t| *t == t.to_lowercase()));
        assert_eq!(tags.len(), 14);
    }
}

// src/modules/sections/project_filter.rs
use std::collections::BTreeSet;

use crate::content::domain::entities::Project;

pub const ALL_CATEGORIES: &str = "all";

/// Sorted, de-duplicated union of every project's languages.
pub fn all_languages(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| project.languages.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_category(project: &Project, category: &str) -> bool {
    category == ALL_CATEGORIES || project.category == category
}

fn matches_search(project: &Project, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project
            .languages
            .iter()
            .any(|language| language.to_lowercase().contains(&needle))
}

fn matches_languages(project: &Project, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|l| project.languages.contains(l))
}

/// Category, search and language filters are conjunctive; selected languages are OR-ed.
pub fn filter_projects(
    projects: &[Project],
    category: &str,
    search: &str,
    selected_languages: &[String],
) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| matches_category(p, category))
        .filter(|p| matches_search(p, search))
        .filter(|p| matches_languages(p, selected_languages))
        .cloned()
        .collect()
}

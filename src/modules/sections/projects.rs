// src/modules/sections/projects.rs
use crate::content::domain::entities::Project;
use crate::content::domain::templates::{demo_projects, PROJECT_CATEGORIES};
use crate::sections::project_filter::{all_languages, filter_projects, ALL_CATEGORIES};
use crate::shared::markup::{capitalize, escape};

/// Filterable project gallery over the bundled demo data. Nothing here is fetched.
#[derive(Debug, Clone)]
pub struct ProjectsView {
    projects: Vec<Project>,
    languages: Vec<String>,
    category: String,
    search: String,
    selected_languages: Vec<String>,
}

impl Default for ProjectsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsView {
    pub fn new() -> Self {
        let projects = demo_projects();
        let languages = all_languages(&projects);
        Self {
            projects,
            languages,
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            selected_languages: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_languages(&self) -> &[String] {
        &self.selected_languages
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Adds the language to the selection, or removes it when already selected.
    pub fn toggle_language(&mut self, language: &str) {
        match self.selected_languages.iter().position(|l| l == language) {
            Some(index) => {
                self.selected_languages.remove(index);
            }
            None => self.selected_languages.push(language.to_string()),
        }
    }

    pub fn clear_filters(&mut self) {
        self.category = ALL_CATEGORIES.to_string();
        self.search.clear();
        self.selected_languages.clear();
    }

    pub fn visible(&self) -> Vec<Project> {
        filter_projects(
            &self.projects,
            &self.category,
            &self.search,
            &self.selected_languages,
        )
    }

    pub fn render(&self) -> String {
        let mut html = String::from(r#"<section class="projects"><div class="filters">"#);
        html.push_str(&format!(
            r#"<input type="search" name="search" placeholder="Search projects..." value="{}">"#,
            escape(&self.search)
        ));

        html.push_str(r#"<div class="categories">"#);
        for category in PROJECT_CATEGORIES {
            let class = if category == self.category { "active" } else { "" };
            html.push_str(&format!(
                r#"<button class="{}" data-category="{}">{}</button>"#,
                class,
                escape(category),
                escape(&capitalize(category))
            ));
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="languages">"#);
        for language in &self.languages {
            let class = if self.selected_languages.contains(language) {
                "selected"
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<button class="{}" data-language="{lang}">{lang}</button>"#,
                class,
                lang = escape(language)
            ));
        }
        html.push_str("</div></div>");

        let visible = self.visible();
        if visible.is_empty() {
            html.push_str(
                r#"<div class="empty"><p>No projects found matching your criteria.</p><button data-action="clear-filters">Clear filters</button></div>"#,
            );
        } else {
            html.push_str(r#"<div class="grid">"#);
            for project in &visible {
                html.push_str(&render_card(project));
            }
            html.push_str("</div>");
        }

        html.push_str("</section>");
        html
    }
}

fn render_card(project: &Project) -> String {
    let chips: String = project
        .languages
        .iter()
        .map(|l| format!("<span>{}</span>", escape(l)))
        .collect();

    let mut links = String::new();
    if let Some(link) = &project.link {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View Project</a>"#,
            escape(link)
        ));
    }
    if let Some(read_more) = &project.read_more {
        links.push_str(&format!(r#"<a href="{}">Read More</a>"#, escape(read_more)));
    }

    format!(
        r#"<article class="project" data-id="{}"><img src="{}" alt="{}"><span class="category">{}</span><h3>{}</h3><p>{}</p><div class="languages">{}</div>{}</article>"#,
        project.id,
        escape(&project.image),
        escape(&project.title),
        escape(&capitalize(&project.category)),
        escape(&project.title),
        escape(&project.description),
        chips,
        links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfiltered() {
        let view = ProjectsView::new();
        assert_eq!(view.category(), "all");
        assert_eq!(view.visible().len(), 8);
    }

    #[test]
    fn toggle_language_adds_then_removes() {
        let mut view = ProjectsView::new();

        view.toggle_language("Python");
        assert_eq!(view.selected_languages(), ["Python".to_string()]);
        assert_eq!(view.visible().len(), 2);

        view.toggle_language("Python");
        assert!(view.selected_languages().is_empty());
    }

    #[test]
    fn empty_result_offers_clear_filters() {
        let mut view = ProjectsView::new();
        view.set_search("cobol");

        let html = view.render();
        assert!(html.contains("No projects found matching your criteria."));
        assert!(html.contains("Clear filters"));

        view.clear_filters();
        assert_eq!(view.search(), "");
        assert_eq!(view.visible().len(), 8);
    }

    #[test]
    fn category_buttons_are_capitalized() {
        let mut view = ProjectsView::new();
        view.set_category("other");

        let html = view.render();
        assert!(html.contains(r#"<button class="active" data-category="other">Other</button>"#));
        assert!(html.contains("AI-Driven Chatbot"));
        assert!(!html.contains("Point of Sale System"));
    }
}

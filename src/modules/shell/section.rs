// src/modules/shell/section.rs
use tracing::warn;

use crate::sections::{
    AboutTab, AboutView, BlogPostView, BlogView, ContactField, ContactView, CopyField, InfoView,
    PortfolioView, ProjectsView, SectionEffect, SectionTask, SectionUpdate,
};
use crate::shell::router::Route;

/// User interaction aimed at whatever view is mounted in the routed pane.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionAction {
    Copy(CopyField),
    SelectAboutTab(AboutTab),
    SetProjectSearch(String),
    SetProjectCategory(String),
    ToggleLanguage(String),
    ClearProjectFilters,
    SetBlogSearch(String),
    RetryPosts,
    OpenPost(String),
    BackToBlog,
    RetryPost,
    SetContactField(ContactField, String),
    SubmitContact,
}

#[derive(Debug, Clone)]
pub enum MountedSection {
    Info(InfoView),
    About(AboutView),
    Portfolio(PortfolioView),
    Projects(ProjectsView),
    Blog(BlogView),
    BlogPost(BlogPostView),
    Contact(ContactView),
}

impl MountedSection {
    pub fn mount(route: &Route, media_base_url: &str) -> Self {
        match route {
            Route::Info => MountedSection::Info(InfoView::new()),
            Route::About => MountedSection::About(AboutView::new()),
            Route::Portfolio => MountedSection::Portfolio(PortfolioView::new()),
            Route::Projects => MountedSection::Projects(ProjectsView::new()),
            Route::Blog => MountedSection::Blog(BlogView::new(media_base_url)),
            Route::BlogPost { slug } => {
                MountedSection::BlogPost(BlogPostView::new(slug.clone(), media_base_url))
            }
            Route::Contact => MountedSection::Contact(ContactView::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MountedSection::Info(_) => "info",
            MountedSection::About(_) => "about",
            MountedSection::Portfolio(_) => "portfolio",
            MountedSection::Projects(_) => "projects",
            MountedSection::Blog(_) => "blog",
            MountedSection::BlogPost(_) => "blog_post",
            MountedSection::Contact(_) => "contact",
        }
    }

    /// Fetch issued on mount. Projects runs on bundled data only.
    pub fn initial_task(&self) -> Option<SectionTask> {
        match self {
            MountedSection::Info(v) => Some(v.initial_task()),
            MountedSection::About(v) => Some(v.initial_task()),
            MountedSection::Portfolio(v) => Some(v.initial_task()),
            MountedSection::Projects(_) => None,
            MountedSection::Blog(v) => Some(v.initial_task()),
            MountedSection::BlogPost(v) => Some(v.initial_task()),
            MountedSection::Contact(v) => Some(v.initial_task()),
        }
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        match self {
            MountedSection::Info(v) => v.apply(update),
            MountedSection::About(v) => v.apply(update),
            MountedSection::Portfolio(v) => v.apply(update),
            MountedSection::Projects(_) => {}
            MountedSection::Blog(v) => v.apply(update),
            MountedSection::BlogPost(v) => v.apply(update),
            MountedSection::Contact(v) => v.apply(update),
        }
    }

    pub fn info_mut(&mut self) -> Option<&mut InfoView> {
        match self {
            MountedSection::Info(v) => Some(v),
            _ => None,
        }
    }

    pub fn handle(&mut self, action: SectionAction) -> SectionEffect {
        match (self, action) {
            (MountedSection::Info(v), SectionAction::Copy(field)) => v.copy(field),
            (MountedSection::About(v), SectionAction::SelectAboutTab(tab)) => {
                v.select_tab(tab);
                SectionEffect::None
            }
            (MountedSection::Projects(v), SectionAction::SetProjectSearch(term)) => {
                v.set_search(term);
                SectionEffect::None
            }
            (MountedSection::Projects(v), SectionAction::SetProjectCategory(category)) => {
                v.set_category(category);
                SectionEffect::None
            }
            (MountedSection::Projects(v), SectionAction::ToggleLanguage(language)) => {
                v.toggle_language(&language);
                SectionEffect::None
            }
            (MountedSection::Projects(v), SectionAction::ClearProjectFilters) => {
                v.clear_filters();
                SectionEffect::None
            }
            (MountedSection::Blog(v), SectionAction::SetBlogSearch(term)) => {
                v.set_search(term);
                SectionEffect::None
            }
            (MountedSection::Blog(v), SectionAction::RetryPosts) => v.retry(),
            (MountedSection::Blog(v), SectionAction::OpenPost(slug)) => v.open_post(&slug),
            (MountedSection::BlogPost(v), SectionAction::BackToBlog) => v.back(),
            (MountedSection::BlogPost(v), SectionAction::RetryPost) => v.retry(),
            (MountedSection::Contact(v), SectionAction::SetContactField(field, value)) => {
                v.set_field(field, value);
                SectionEffect::None
            }
            (MountedSection::Contact(v), SectionAction::SubmitContact) => v.submit(),
            (section, action) => {
                warn!(section = section.name(), action = ?action, "Action does not apply to mounted section");
                SectionEffect::None
            }
        }
    }

    pub fn render(&self) -> String {
        match self {
            MountedSection::Info(v) => v.render(),
            MountedSection::About(v) => v.render(),
            MountedSection::Portfolio(v) => v.render(),
            MountedSection::Projects(v) => v.render(),
            MountedSection::Blog(v) => v.render(),
            MountedSection::BlogPost(v) => v.render(),
            MountedSection::Contact(v) => v.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_builds_view_for_route() {
        let post = MountedSection::mount(
            &Route::BlogPost {
                slug: "hello".to_string(),
            },
            "http://api.test",
        );
        assert_eq!(post.name(), "blog_post");
        assert_eq!(
            post.initial_task(),
            Some(SectionTask::LoadPost {
                slug: "hello".to_string()
            })
        );

        let projects = MountedSection::mount(&Route::Projects, "http://api.test");
        assert_eq!(projects.initial_task(), None);
    }

    #[test]
    fn mismatched_action_is_ignored() {
        let mut section = MountedSection::mount(&Route::About, "http://api.test");
        let effect = section.handle(SectionAction::SubmitContact);
        assert_eq!(effect, SectionEffect::None);
    }

    #[test]
    fn actions_reach_the_view() {
        let mut section = MountedSection::mount(&Route::Projects, "http://api.test");
        section.handle(SectionAction::SetProjectSearch("cobol".to_string()));
        assert!(section
            .render()
            .contains("No projects found matching your criteria."));
    }
}

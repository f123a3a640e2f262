pub mod about;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod info;
pub mod portfolio;
pub mod project_filter;
pub mod projects;
pub mod task;

pub use about::{AboutTab, AboutView};
pub use blog::BlogView;
pub use blog_post::BlogPostView;
pub use contact::{ContactField, ContactFormError, ContactView};
pub use info::{CopyField, InfoView};
pub use portfolio::PortfolioView;
pub use projects::ProjectsView;
pub use task::{SectionEffect, SectionTask, SectionUpdate};

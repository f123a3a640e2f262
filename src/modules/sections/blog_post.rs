// src/modules/sections/blog_post.rs
use tracing::error;

use crate::content::domain::entities::BlogPostDetail;
use crate::html::render_post_content;
use crate::sections::task::{SectionEffect, SectionTask, SectionUpdate};
use crate::shared::dates::format_long_date;
use crate::shared::markup::{absolutize, escape};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load blog post. Please try again later.";
const AVATAR_PLACEHOLDER: &str = "/api/placeholder/40/40";

#[derive(Debug, Clone, PartialEq)]
pub enum PostState {
    Loading,
    Loaded(Box<BlogPostDetail>),
    Failed(String),
}

/// Single post addressed by slug. Relative media in the body resolves against `media_base_url`.
#[derive(Debug, Clone)]
pub struct BlogPostView {
    slug: String,
    media_base_url: String,
    state: PostState,
}

impl BlogPostView {
    pub fn new(slug: impl Into<String>, media_base_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            media_base_url: media_base_url.into(),
            state: PostState::Loading,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> &PostState {
        &self.state
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadPost {
            slug: self.slug.clone(),
        }
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        if let SectionUpdate::Post(result) = update {
            self.state = match result {
                Ok(post) => PostState::Loaded(Box::new(post)),
                Err(e) => {
                    error!(slug = %self.slug, error = %e, "Failed to fetch blog post");
                    PostState::Failed(LOAD_FAILED_MESSAGE.to_string())
                }
            };
        }
    }

    pub fn back(&self) -> SectionEffect {
        SectionEffect::Navigate("/blog".to_string())
    }

    pub fn retry(&mut self) -> SectionEffect {
        self.state = PostState::Loading;
        SectionEffect::Run(self.initial_task())
    }

    pub fn render(&self) -> String {
        let body = match &self.state {
            PostState::Loading => {
                r#"<div class="loading"><p>Loading post...</p></div>"#.to_string()
            }
            PostState::Failed(message) => format!(
                r#"<div class="not-found"><h3>Post Not Found</h3><p>{}</p><button data-action="back">Back to Blog</button><button data-action="retry">Try Again</button></div>"#,
                escape(message)
            ),
            PostState::Loaded(post) => self.render_post(post),
        };
        format!(r#"<section class="blog-post">{}</section>"#, body)
    }

    fn render_post(&self, post: &BlogPostDetail) -> String {
        let summary = &post.summary;
        let date = format_long_date(summary.display_date());
        let mut html = String::from(r#"<button data-action="back">Back to Blog</button><article>"#);

        if let Some(image) = summary.image.as_deref().filter(|i| !i.is_empty()) {
            html.push_str(&format!(
                r#"<img class="cover" src="{}" alt="{}">"#,
                escape(&absolutize(&self.media_base_url, image)),
                escape(&summary.title)
            ));
        }

        html.push_str(r#"<div class="meta">"#);
        if let Some(category) = &summary.category {
            html.push_str(&format!(r#"<span class="category">{}</span>"#, escape(category)));
        }
        html.push_str(&format!(r#"<span class="date">{}</span>"#, escape(&date)));
        if let Some(status) = &summary.status {
            html.push_str(&format!(r#"<span class="status">{}</span>"#, escape(status)));
        }
        html.push_str("</div>");

        html.push_str(&format!("<h1>{}</h1>", escape(&summary.title)));

        if let Some(author) = &summary.author {
            html.push_str(&format!(
                r#"<div class="author"><img src="{}" alt="{name}"><p>{name}</p><p>{}</p></div>"#,
                escape(author.avatar.as_deref().unwrap_or(AVATAR_PLACEHOLDER)),
                escape(&date),
                name = escape(&author.name)
            ));
        }

        if let Some(excerpt) = summary.excerpt.as_deref().filter(|e| !e.is_empty()) {
            html.push_str(&format!(r#"<blockquote class="excerpt">{}</blockquote>"#, escape(excerpt)));
        }

        if !summary.tags.is_empty() {
            html.push_str(r#"<div class="tags">"#);
            for tag in &summary.tags {
                html.push_str(&format!("<span>#{}</span>", escape(tag)));
            }
            html.push_str("</div>");
        }

        html.push_str(&format!(
            r#"<div class="content">{}</div></article>"#,
            render_post_content(&post.content, &self.media_base_url)
        ));
        html
    }
}

// src/modules/sections/blog.rs
use tracing::error;

use crate::content::domain::entities::BlogPostSummary;
use crate::sections::task::{SectionEffect, SectionTask, SectionUpdate};
use crate::shared::dates::format_long_date;
use crate::shared::markup::{absolutize, escape};

#[derive(Debug, Clone, PartialEq)]
pub enum PostsState {
    Loading,
    Loaded(Vec<BlogPostSummary>),
    Failed(String),
}

/// Published-post listing with client-side search. Relative cover images resolve against
/// `media_base_url`, the same way the post page does.
#[derive(Debug, Clone)]
pub struct BlogView {
    state: PostsState,
    search: String,
    media_base_url: String,
}

impl BlogView {
    pub fn new(media_base_url: impl Into<String>) -> Self {
        Self {
            state: PostsState::Loading,
            search: String::new(),
            media_base_url: media_base_url.into(),
        }
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadPublishedPosts
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        if let SectionUpdate::Posts(result) = update {
            self.state = match result {
                Ok(posts) => PostsState::Loaded(posts),
                Err(e) => {
                    error!(error = %e, "Failed to fetch blog posts");
                    PostsState::Failed(e.to_string())
                }
            };
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// "Try Again": back to loading and re-issue the fetch.
    pub fn retry(&mut self) -> SectionEffect {
        self.state = PostsState::Loading;
        SectionEffect::Run(SectionTask::LoadPublishedPosts)
    }

    pub fn open_post(&self, slug: &str) -> SectionEffect {
        SectionEffect::Navigate(format!("/blog/{}", slug))
    }

    pub fn visible(&self) -> Vec<&BlogPostSummary> {
        let PostsState::Loaded(posts) = &self.state else {
            return Vec::new();
        };

        let needle = self.search.to_lowercase();
        posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || post
                        .category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
                    || post
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            r#"<section class="blog"><h2>Blog</h2><p>Insights, tutorials and thoughts on development</p><input type="search" name="search" placeholder="Search posts..." value="{}">"#,
            escape(&self.search)
        );

        match &self.state {
            PostsState::Loading => {
                html.push_str(r#"<div class="loading"><p>Loading posts...</p></div>"#);
            }
            PostsState::Failed(message) => {
                html.push_str(&format!(
                    r#"<div class="error"><h3>Error Loading Posts</h3><p>{}</p><button data-action="retry">Try Again</button></div>"#,
                    escape(message)
                ));
            }
            PostsState::Loaded(_) => {
                let visible = self.visible();
                if visible.is_empty() {
                    html.push_str(
                        r#"<div class="empty"><h3>No blog posts found</h3><p>Try adjusting your search query</p></div>"#,
                    );
                } else {
                    html.push_str(r#"<div class="posts">"#);
                    for post in visible {
                        html.push_str(&render_summary(post, &self.media_base_url));
                    }
                    html.push_str("</div>");
                }
            }
        }

        html.push_str("</section>");
        html
    }
}

fn render_summary(post: &BlogPostSummary, media_base_url: &str) -> String {
    let tags: String = post
        .tags
        .iter()
        .map(|tag| format!("<span>{}</span>", escape(tag)))
        .collect();

    let image = post
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                escape(&absolutize(media_base_url, src)),
                escape(&post.title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="post">{}<span class="category">{}</span><span class="date">{}</span><h3>{}</h3><p>{}</p><div class="tags">{}</div><a href="/blog/{}">Read More</a></article>"#,
        image,
        escape(post.category.as_deref().unwrap_or_default()),
        escape(&format_long_date(post.display_date())),
        escape(&post.title),
        escape(post.excerpt.as_deref().unwrap_or_default()),
        tags,
        escape(&post.slug)
    )
}

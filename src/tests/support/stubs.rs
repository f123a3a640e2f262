use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::application::ports::outgoing::{ApiError, ContactMessage, PortfolioApi};
use crate::content::domain::entities::{
    AboutData, BlogPostDetail, BlogPostSummary, ContactInfo, Icon, PersonalInfo, PortfolioData,
    Project,
};
use crate::content::domain::templates::{
    about_template, contact_template, demo_projects, info_template, portfolio_template,
};
use crate::tests::support::fixtures::{post_detail, post_summary};

/// In-memory `PortfolioApi` with configurable payloads, failures and latency.
#[derive(Clone)]
pub struct StubPortfolioApi {
    info: PersonalInfo,
    posts: Vec<BlogPostSummary>,
    posts_by_slug: Vec<BlogPostDetail>,
    fail_all: bool,
    delay: Option<Duration>,
    info_calls: Arc<AtomicUsize>,
    sent: Arc<Mutex<Vec<ContactMessage>>>,
}

impl Default for StubPortfolioApi {
    fn default() -> Self {
        Self {
            info: info_template(),
            posts: vec![post_summary("first-post", "First Post")],
            posts_by_slug: vec![post_detail("first-post", "First Post", "<p>Hello</p>")],
            fail_all: false,
            delay: None,
            info_calls: Arc::new(AtomicUsize::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl StubPortfolioApi {
    pub fn with_info_name(mut self, name: &str) -> Self {
        self.info.name = name.to_string();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn info_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.info_calls)
    }

    pub fn sent_messages(&self) -> Arc<Mutex<Vec<ContactMessage>>> {
        Arc::clone(&self.sent)
    }

    async fn respond<T>(&self, value: T) -> Result<T, ApiError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_all {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl PortfolioApi for StubPortfolioApi {
    async fn get_info(&self) -> Result<PersonalInfo, ApiError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(self.info.clone()).await
    }

    async fn get_about(&self) -> Result<AboutData, ApiError> {
        self.respond(about_template()).await
    }

    async fn get_portfolio(&self) -> Result<PortfolioData, ApiError> {
        self.respond(portfolio_template()).await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.respond(demo_projects()).await
    }

    async fn get_contact(&self) -> Result<ContactInfo, ApiError> {
        self.respond(contact_template()).await
    }

    async fn get_icons(&self) -> Result<Vec<Icon>, ApiError> {
        self.respond(Vec::new()).await
    }

    async fn blog_get_all(&self) -> Result<Vec<BlogPostSummary>, ApiError> {
        self.respond(self.posts.clone()).await
    }

    async fn blog_get_by_slug(&self, slug: &str) -> Result<BlogPostDetail, ApiError> {
        let found = self
            .posts_by_slug
            .iter()
            .find(|p| p.summary.slug == slug)
            .cloned();
        match self.respond(found).await? {
            Some(post) => Ok(post),
            None => Err(ApiError::Http {
                status: 404,
                message: "Post not found".to_string(),
            }),
        }
    }

    async fn blog_get_published(&self) -> Result<Vec<BlogPostSummary>, ApiError> {
        self.respond(self.posts.clone()).await
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<serde_json::Value, ApiError> {
        let result = self.respond(serde_json::json!({ "success": true })).await;
        if result.is_ok() {
            if let Ok(mut sent) = self.sent.lock() {
                sent.push(message.clone());
            }
        }
        result
    }
}

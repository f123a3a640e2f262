// src/modules/api/application/ports/outgoing/portfolio_api.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::domain::entities::{
    AboutData, BlogPostDetail, BlogPostSummary, ContactInfo, Icon, PersonalInfo, PortfolioData,
    Project,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Body of `POST /msg/send`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the server's `error` field or the generic message.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn get_info(&self) -> Result<PersonalInfo, ApiError>;

    async fn get_about(&self) -> Result<AboutData, ApiError>;

    async fn get_portfolio(&self) -> Result<PortfolioData, ApiError>;

    async fn get_projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn get_contact(&self) -> Result<ContactInfo, ApiError>;

    /// A `null` icon set comes back as an empty list.
    async fn get_icons(&self) -> Result<Vec<Icon>, ApiError>;

    async fn blog_get_all(&self) -> Result<Vec<BlogPostSummary>, ApiError>;

    async fn blog_get_by_slug(&self, slug: &str) -> Result<BlogPostDetail, ApiError>;

    /// Public endpoint; the only blog listing visitors see.
    async fn blog_get_published(&self) -> Result<Vec<BlogPostSummary>, ApiError>;

    async fn send_message(&self, message: &ContactMessage) -> Result<serde_json::Value, ApiError>;
}

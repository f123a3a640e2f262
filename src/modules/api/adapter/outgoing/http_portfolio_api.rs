// src/modules/api/adapter/outgoing/http_portfolio_api.rs
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::application::ports::outgoing::portfolio_api::GENERIC_FAILURE_MESSAGE;
use crate::api::application::ports::outgoing::{ApiError, ContactMessage, PortfolioApi};
use crate::content::domain::entities::{
    AboutData, BlogPostDetail, BlogPostSummary, ContactInfo, Icon, PersonalInfo, PortfolioData,
    Project,
};

#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub token: Option<String>,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn error_message_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[derive(Clone)]
pub struct HttpPortfolioApi {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl HttpPortfolioApi {
    pub fn new(config: ApiClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn request<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let result = self.send(method, endpoint, body).await;
        if let Err(e) = &result {
            error!(endpoint = %endpoint, error = %e, "API Error");
        }
        result
    }

    async fn send<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = join_url(&self.config.base_url, endpoint);
        debug!(method = %method, url = %url, "Sending API request");

        let mut builder = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.config.token.as_deref().filter(|t| !t.is_empty()) {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message_from_body(&bytes),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, endpoint, None).await
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn get_info(&self) -> Result<PersonalInfo, ApiError> {
        self.get("/info").await
    }

    async fn get_about(&self) -> Result<AboutData, ApiError> {
        self.get("/about").await
    }

    async fn get_portfolio(&self) -> Result<PortfolioData, ApiError> {
        self.get("/portfolio").await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects").await
    }

    async fn get_contact(&self) -> Result<ContactInfo, ApiError> {
        self.get("/contact").await
    }

    async fn get_icons(&self) -> Result<Vec<Icon>, ApiError> {
        let icons: Option<Vec<Icon>> = self.get("/icon").await?;
        Ok(icons.unwrap_or_default())
    }

    async fn blog_get_all(&self) -> Result<Vec<BlogPostSummary>, ApiError> {
        self.get("/blog").await
    }

    async fn blog_get_by_slug(&self, slug: &str) -> Result<BlogPostDetail, ApiError> {
        self.get(&format!("/blog/{}", slug)).await
    }

    async fn blog_get_published(&self) -> Result<Vec<BlogPostSummary>, ApiError> {
        self.get("/blog/published").await
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<serde_json::Value, ApiError> {
        self.request(Method::POST, "/msg/send", Some(message)).await
    }
}

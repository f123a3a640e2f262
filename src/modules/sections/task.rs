// src/modules/sections/task.rs
use crate::api::application::ports::outgoing::{ApiError, ContactMessage, PortfolioApi};
use crate::content::domain::entities::{
    AboutData, BlogPostDetail, BlogPostSummary, ContactInfo, Icon, PersonalInfo, PortfolioData,
};
use crate::sections::info::CopyField;

/// A single remote call a Section View asks its host to run.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionTask {
    LoadInfo,
    LoadAbout,
    LoadPortfolio,
    LoadContact,
    LoadPublishedPosts,
    LoadPost { slug: String },
    SendMessage(ContactMessage),
}

/// Result of a [`SectionTask`], handed back to the view that issued it.
#[derive(Debug, Clone)]
pub enum SectionUpdate {
    Info {
        info: Result<PersonalInfo, ApiError>,
        icons: Result<Vec<Icon>, ApiError>,
    },
    About(Result<AboutData, ApiError>),
    Portfolio(Result<PortfolioData, ApiError>),
    Contact {
        contact: Result<ContactInfo, ApiError>,
        icons: Result<Vec<Icon>, ApiError>,
    },
    Posts(Result<Vec<BlogPostSummary>, ApiError>),
    Post(Result<BlogPostDetail, ApiError>),
    MessageSent(Result<serde_json::Value, ApiError>),
}

/// What a view action asks of the host besides its own state change.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEffect {
    None,
    Run(SectionTask),
    Navigate(String),
    WriteClipboard { text: String, field: CopyField, seq: u64 },
}

impl SectionTask {
    pub async fn run(self, api: &dyn PortfolioApi) -> SectionUpdate {
        match self {
            SectionTask::LoadInfo => {
                let (info, icons) = futures::join!(api.get_info(), api.get_icons());
                SectionUpdate::Info { info, icons }
            }
            SectionTask::LoadAbout => SectionUpdate::About(api.get_about().await),
            SectionTask::LoadPortfolio => SectionUpdate::Portfolio(api.get_portfolio().await),
            SectionTask::LoadContact => {
                let (contact, icons) = futures::join!(api.get_contact(), api.get_icons());
                SectionUpdate::Contact { contact, icons }
            }
            SectionTask::LoadPublishedPosts => {
                SectionUpdate::Posts(api.blog_get_published().await)
            }
            SectionTask::LoadPost { slug } => SectionUpdate::Post(api.blog_get_by_slug(&slug).await),
            SectionTask::SendMessage(message) => {
                SectionUpdate::MessageSent(api.send_message(&message).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::entities::{Project, PostId};
    use crate::content::domain::templates::info_template;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Api {}
        #[async_trait]
        impl PortfolioApi for Api {
            async fn get_info(&self) -> Result<PersonalInfo, ApiError>;
            async fn get_about(&self) -> Result<AboutData, ApiError>;
            async fn get_portfolio(&self) -> Result<PortfolioData, ApiError>;
            async fn get_projects(&self) -> Result<Vec<Project>, ApiError>;
            async fn get_contact(&self) -> Result<ContactInfo, ApiError>;
            async fn get_icons(&self) -> Result<Vec<Icon>, ApiError>;
            async fn blog_get_all(&self) -> Result<Vec<BlogPostSummary>, ApiError>;
            async fn blog_get_by_slug(&self, slug: &str) -> Result<BlogPostDetail, ApiError>;
            async fn blog_get_published(&self) -> Result<Vec<BlogPostSummary>, ApiError>;
            async fn send_message(&self, message: &ContactMessage) -> Result<serde_json::Value, ApiError>;
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn load_info_fetches_info_and_icons() {
        let mut api = MockApi::new();
        api.expect_get_info().times(1).returning(|| Ok(info_template()));
        api.expect_get_icons()
            .times(1)
            .returning(|| Err(ApiError::Transport("refused".to_string())));

        let update = SectionTask::LoadInfo.run(&api).await;

        match update {
            SectionUpdate::Info { info, icons } => {
                assert_eq!(info.unwrap().name, "Abdullah Ahmad");
                assert!(icons.is_err());
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_post_passes_slug() {
        let mut api = MockApi::new();
        api.expect_blog_get_by_slug()
            .withf(|slug| slug == "my-post")
            .times(1)
            .returning(|slug| {
                Ok(BlogPostDetail {
                    summary: BlogPostSummary {
                        id: PostId::Number(1),
                        slug: slug.to_string(),
                        title: "T".to_string(),
                        excerpt: None,
                        category: None,
                        tags: vec![],
                        image: None,
                        status: None,
                        published_at: None,
                        created_at: None,
                        author: None,
                    },
                    content: String::new(),
                })
            });

        let update = SectionTask::LoadPost {
            slug: "my-post".to_string(),
        }
        .run(&api)
        .await;

        assert!(matches!(update, SectionUpdate::Post(Ok(ref p)) if p.summary.slug == "my-post"));
    }

    #[tokio::test]
    async fn send_message_forwards_form_body() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        let expected = message.clone();

        let mut api = MockApi::new();
        api.expect_send_message()
            .withf(move |m| *m == expected)
            .times(1)
            .returning(|_| Ok(serde_json::json!({ "ok": true })));

        let update = SectionTask::SendMessage(message).run(&api).await;

        assert!(matches!(update, SectionUpdate::MessageSent(Ok(_))));
    }
}

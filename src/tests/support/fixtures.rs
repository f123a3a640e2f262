use crate::content::domain::entities::{Author, BlogPostDetail, BlogPostSummary, PostId};

pub fn post_summary(slug: &str, title: &str) -> BlogPostSummary {
    BlogPostSummary {
        id: PostId::Number(1),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: Some(format!("{} in a nutshell", title)),
        category: Some("Web Development".to_string()),
        tags: vec!["rust".to_string()],
        image: Some("/uploads/cover.png".to_string()),
        status: Some("published".to_string()),
        published_at: Some("2025-05-10T09:30:00Z".to_string()),
        created_at: None,
        author: Some(Author {
            name: "Abdullah Ahmad".to_string(),
            avatar: None,
        }),
    }
}

pub fn post_detail(slug: &str, title: &str, content: &str) -> BlogPostDetail {
    BlogPostDetail {
        summary: post_summary(slug, title),
        content: content.to_string(),
    }
}

use crate::api::adapter::outgoing::{ApiClientConfig, HttpPortfolioApi};
use crate::api::application::ports::outgoing::{ApiError, ContactMessage, PortfolioApi};
use crate::tests::support::fake_backend::{spawn_fake_backend, KNOWN_SLUG};

/* --------------------------------------------------
 * Headers
 * -------------------------------------------------- */

#[actix_web::test]
async fn sends_json_content_type_without_token() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    let info = api.get_info().await.unwrap();
    assert_eq!(info.name, "Backend Person");

    let recorded = backend.requests_to("/info");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(recorded[0].authorization, None);

    backend.stop().await;
}

#[actix_web::test]
async fn attaches_bearer_token_when_configured() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(
        ApiClientConfig::new(format!("{}/", backend.base_url)).with_token("t0k3n"),
    );

    api.get_contact().await.unwrap();

    let recorded = backend.requests_to("/contact");
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer t0k3n"));

    backend.stop().await;
}

#[actix_web::test]
async fn empty_token_is_not_sent() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()).with_token(""));

    api.get_about().await.unwrap();

    assert_eq!(backend.requests_to("/about")[0].authorization, None);
    backend.stop().await;
}

/* --------------------------------------------------
 * Payload shapes
 * -------------------------------------------------- */

#[actix_web::test]
async fn null_icon_set_becomes_empty_list() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    assert!(api.get_icons().await.unwrap().is_empty());
    backend.stop().await;
}

#[actix_web::test]
async fn blog_endpoints_decode() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    assert_eq!(api.blog_get_all().await.unwrap().len(), 2);
    assert_eq!(api.blog_get_published().await.unwrap().len(), 1);

    let post = api.blog_get_by_slug(KNOWN_SLUG).await.unwrap();
    assert_eq!(post.summary.slug, KNOWN_SLUG);
    assert!(post.content.contains("diagram.png"));

    assert_eq!(api.get_projects().await.unwrap().len(), 8);
    backend.stop().await;
}

#[actix_web::test]
async fn send_message_posts_json_body() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));
    let message = ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice site".to_string(),
    };

    let reply = api.send_message(&message).await.unwrap();
    assert_eq!(reply["from"], "ada@example.com");

    let recorded = backend.requests_to("/msg/send");
    assert_eq!(recorded[0].method, "POST");
    let body: ContactMessage = serde_json::from_str(&recorded[0].body).unwrap();
    assert_eq!(body, message);

    backend.stop().await;
}

/* --------------------------------------------------
 * Errors
 * -------------------------------------------------- */

#[actix_web::test]
async fn server_error_message_is_surfaced() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    let err = api.blog_get_by_slug("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Post not found");
    backend.stop().await;
}

#[actix_web::test]
async fn non_json_error_body_gets_generic_message() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    let err = api.get_portfolio().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "Request failed".to_string()
        }
    );
    backend.stop().await;
}

#[actix_web::test]
async fn validation_error_from_send_keeps_status() {
    let backend = spawn_fake_backend().await;
    let api = HttpPortfolioApi::new(ApiClientConfig::new(backend.base_url.clone()));

    let err = api
        .send_message(&ContactMessage {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: "Email is invalid".to_string()
        }
    );
    backend.stop().await;
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let backend = spawn_fake_backend().await;
    let base_url = backend.base_url.clone();
    backend.stop().await;

    let api = HttpPortfolioApi::new(ApiClientConfig::new(base_url));
    let err = api.get_info().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

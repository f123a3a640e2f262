use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

use crate::api::application::ports::outgoing::ContactMessage;
use crate::content::domain::templates::{about_template, contact_template, demo_projects};
use crate::tests::support::fixtures::{post_detail, post_summary};

pub const KNOWN_SLUG: &str = "hello-world";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct Recorder {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Recorder {
    fn record(&self, req: &HttpRequest, body: &str) {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method: req.method().to_string(),
                path: req.path().to_string(),
                content_type: header("content-type"),
                authorization: header("authorization"),
                body: body.to_string(),
            });
        }
    }
}

/// In-process backend serving the portfolio API on an ephemeral port.
pub struct FakeBackend {
    pub base_url: String,
    recorder: web::Data<Recorder>,
    handle: ServerHandle,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorder
            .requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn info(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(json!({
        "name": "Backend Person",
        "designation": "Systems Engineer",
        "email": "backend@example.com",
        "phone": "+62 111",
        "whatsapp": "+62 222",
        "discord": "backend#0001",
        "socialLinks": [
            { "name": "GitHub", "icon": "github", "url": "https://github.com/backend" },
            { "name": "Mastodon", "icon": "mastodon", "url": "https://mastodon.social/@backend" }
        ]
    }))
}

async fn about(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(about_template())
}

async fn portfolio(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::InternalServerError()
        .content_type("text/html")
        .body("<html>upstream exploded</html>")
}

async fn projects(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(demo_projects())
}

async fn contact(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(contact_template())
}

async fn icons(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(serde_json::Value::Null)
}

async fn blog_all(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(vec![
        post_summary(KNOWN_SLUG, "Hello World"),
        post_summary("draft-post", "Draft Post"),
    ])
}

async fn blog_published(req: HttpRequest, rec: web::Data<Recorder>) -> HttpResponse {
    rec.record(&req, "");
    HttpResponse::Ok().json(vec![post_summary(KNOWN_SLUG, "Hello World")])
}

async fn blog_by_slug(
    req: HttpRequest,
    rec: web::Data<Recorder>,
    slug: web::Path<String>,
) -> HttpResponse {
    rec.record(&req, "");
    if slug.as_str() == KNOWN_SLUG {
        HttpResponse::Ok().json(post_detail(
            KNOWN_SLUG,
            "Hello World",
            r#"<p>Intro</p><img src="/uploads/diagram.png" onerror="steal()"><script>alert(1)</script>"#,
        ))
    } else {
        HttpResponse::NotFound().json(json!({ "error": "Post not found" }))
    }
}

async fn send_message(req: HttpRequest, rec: web::Data<Recorder>, body: String) -> HttpResponse {
    rec.record(&req, &body);
    match serde_json::from_str::<ContactMessage>(&body) {
        Ok(message) if message.email.contains('@') => {
            HttpResponse::Ok().json(json!({ "success": true, "from": message.email }))
        }
        Ok(_) => HttpResponse::UnprocessableEntity().json(json!({ "error": "Email is invalid" })),
        Err(_) => HttpResponse::BadRequest().json(json!({ "message": "bad body" })),
    }
}

pub async fn spawn_fake_backend() -> FakeBackend {
    let recorder = web::Data::new(Recorder::default());
    let data = recorder.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/info", web::get().to(info))
            .route("/about", web::get().to(about))
            .route("/portfolio", web::get().to(portfolio))
            .route("/projects", web::get().to(projects))
            .route("/contact", web::get().to(contact))
            .route("/icon", web::get().to(icons))
            .route("/blog", web::get().to(blog_all))
            .route("/blog/published", web::get().to(blog_published))
            .route("/blog/{slug}", web::get().to(blog_by_slug))
            .route("/msg/send", web::post().to(send_message))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    FakeBackend {
        base_url: format!("http://{}", addr),
        recorder,
        handle,
    }
}

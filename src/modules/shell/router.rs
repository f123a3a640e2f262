// src/modules/shell/router.rs
use tracing::warn;

use crate::shell::viewport::Viewport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Info,
    About,
    Portfolio,
    Projects,
    Blog,
    BlogPost { slug: String },
    Contact,
}

/// Drops query and fragment, collapses trailing slashes. Empty input is `/`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn default_route(viewport: Viewport) -> Route {
    match viewport {
        Viewport::Mobile => Route::Info,
        Viewport::Desktop => Route::About,
    }
}

fn blog_slug(path: &str) -> Option<&str> {
    path.strip_prefix("/blog/")
        .filter(|slug| !slug.is_empty() && !slug.contains('/'))
}

/// Maps a path to the view mounted in the routed pane.
///
/// `/` and unknown paths land on the viewport's default view: About on desktop,
/// Info on mobile. Post detail pages are only routed on desktop.
pub fn resolve(viewport: Viewport, path: &str) -> Route {
    let path = normalize_path(path);

    match path.as_str() {
        "/" => default_route(viewport),
        "/about" => Route::About,
        "/portfolio" => Route::Portfolio,
        "/projects" => Route::Projects,
        "/blog" => Route::Blog,
        "/contact" => Route::Contact,
        other => match blog_slug(other) {
            Some(slug) if viewport == Viewport::Desktop => Route::BlogPost {
                slug: slug.to_string(),
            },
            Some(slug) => {
                warn!(slug = %slug, "Post detail route is not wired on mobile, using default view");
                default_route(viewport)
            }
            None => default_route(viewport),
        },
    }
}

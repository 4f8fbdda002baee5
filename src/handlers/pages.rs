//! Static admin pages.
//!
//! The built front-end lives in the dist directory; each page route serves
//! one file behind the page-level auth guard, which redirects anonymous
//! visitors to the login page at `/`.

use std::path::Path;

use axum::http::StatusCode;
use axum::response::Html;

use crate::config;
use crate::middleware::RequirePage;

async fn page(name: &str) -> Result<Html<String>, StatusCode> {
    let path = Path::new(&config::config().http.dist_dir).join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("page asset missing: {}", path.display());
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("failed to read page {}: {}", path.display(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET / - the login page, the only public page.
pub async fn index() -> Result<Html<String>, StatusCode> {
    page("index.html").await
}

pub async fn dashboard(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("dashboard.html").await
}

pub async fn add_news(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("add-news.html").await
}

pub async fn delete_news(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("delete-news.html").await
}

pub async fn edit_links(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("edit-links.html").await
}

pub async fn users(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("users.html").await
}

pub async fn pending_payment(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("pending-payments.html").await
}

pub async fn resolved_payment(_user: RequirePage) -> Result<Html<String>, StatusCode> {
    page("resolved-payments.html").await
}

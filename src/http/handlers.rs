//! Request handlers.
//!
//! # Responsibilities
//! - Resolve the request path and render the vanity page
//! - Render the index of all import paths at `/` when nothing matched
//! - Health probe and favicon

use std::time::Instant;

use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::http::render::{IndexPage, VanityPage};
use crate::http::server::AppState;
use crate::observability::metrics::{self, Outcome};

static FAVICON: &[u8] = include_bytes!("../../static/favicon.ico");

/// Serve `go-import` metadata for the best matching route.
pub async fn vanity_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let start = Instant::now();
    let path = uri.path();

    // One snapshot for the whole response, even if a reload lands meanwhile.
    let resolver = state.resolver.load();
    let policy = resolver.policy();
    let host = policy.host_or(request_host(&headers, &uri));

    let Some(resolution) = resolver.resolve(path) else {
        if path == "/" {
            let page = IndexPage::new(host, resolver.table());
            tracing::debug!(routes = page.handlers.len(), "Serving index");
            return render(page, Outcome::Index, start);
        }
        tracing::debug!(path = %path, "No route matched");
        metrics::record_request(Outcome::NotFound, start);
        return StatusCode::NOT_FOUND.into_response();
    };

    tracing::debug!(
        path = %path,
        route = %resolution.entry.path,
        subpath = %resolution.subpath,
        "Route matched"
    );

    let page = VanityPage::new(host, &resolution);
    let mut response = render(page, Outcome::Matched, start);
    if response.status().is_success() {
        if let Ok(value) = policy.cache_control.parse() {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
    }
    response
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], FAVICON)
}

fn render<T: Template>(page: T, outcome: Outcome, start: Instant) -> Response {
    match page.render() {
        Ok(body) => {
            metrics::record_request(outcome, start);
            Html(body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            metrics::record_request(Outcome::RenderError, start);
            (StatusCode::INTERNAL_SERVER_ERROR, "cannot render the page").into_response()
        }
    }
}

/// Host the client addressed, from the Host header or the URI authority.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_host_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "go.example.com".parse().unwrap());
        let uri: Uri = "http://other.example.com/x".parse().unwrap();
        assert_eq!(request_host(&headers, &uri), "go.example.com");
    }

    #[test]
    fn test_request_host_falls_back_to_authority() {
        let uri: Uri = "http://other.example.com/x".parse().unwrap();
        assert_eq!(request_host(&HeaderMap::new(), &uri), "other.example.com");

        let uri: Uri = "/x".parse().unwrap();
        assert_eq!(request_host(&HeaderMap::new(), &uri), "");
    }
}

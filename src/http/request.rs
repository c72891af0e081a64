//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Echo the ID back in the response
//!
//! # Design Decisions
//! - Request ID added as the outermost layer so every log line carries it
//! - A client-supplied `x-request-id` is kept, not replaced

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Produces a fresh UUID v4 per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID header, for log fields.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_make_request_id_is_uuid() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let mut maker = MakeRequestUuid;

        let first = maker.make_request_id(&req).unwrap();
        let second = maker.make_request_id(&req).unwrap();

        let first = first.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second.header_value().to_str().unwrap());
    }

    #[test]
    fn test_request_id_header() {
        let req = Request::builder()
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc-123");

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(request_id(&req), "unknown");
    }
}

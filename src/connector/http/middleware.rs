use axum::extract::{Request, State};
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Paths reachable without a bearer token.
const PUBLIC_PATHS: &[&str] = &["/health"];

/// Any origin, any method, and the headers browser clients send with invocations.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Answers every OPTIONS request with an empty 200 before auth or body handling.
///
/// Real preflights are already answered by [`cors_layer`]; this also covers
/// bare OPTIONS probes that carry no `Access-Control-Request-Method`.
pub async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

/// Requires `Authorization: Bearer <token>` when a token is configured.
pub async fn require_bearer(
    State(token): State<Option<String>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = token else {
        return next.run(req).await;
    };
    if PUBLIC_PATHS.contains(&req.uri().path()) {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| tokens_match(v.as_bytes(), expected.as_bytes()))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response();
    }
    next.run(req).await
}

/// Compares two tokens without short-circuiting on the first differing byte.
///
/// Only the length is observable through timing.
fn tokens_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_only_on_identical_bytes() {
        assert!(tokens_match(b"inbound-secret", b"inbound-secret"));
        assert!(!tokens_match(b"inbound-secreT", b"inbound-secret"));
        assert!(!tokens_match(b"Inbound-secret", b"inbound-secret"));
        assert!(!tokens_match(b"inbound-secret-", b"inbound-secret"));
        assert!(!tokens_match(b"", b"inbound-secret"));
    }
}

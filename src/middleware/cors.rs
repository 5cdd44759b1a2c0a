//! CORS middleware
//!
//! Wraps the whole router: OPTIONS preflight requests are answered before any
//! routing or business logic runs, and every other response (success and error
//! alike) gets the CORS headers inserted on the way out. Handlers never deal
//! with CORS themselves.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// CORS wrapper applied to every route.
///
/// ```ignore
/// Router::new()
///     .layer(axum::middleware::from_fn(apply_cors))
/// ```
pub async fn apply_cors(request: Request, next: Next) -> Response {
    // Preflight short-circuit: 200, no body, headers only. Any OPTIONS
    // request qualifies, whether or not the browser preflight headers are
    // present.
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        insert_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    insert_cors_headers(response.headers_mut());
    response
}

fn insert_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_cors_headers() {
        let mut headers = HeaderMap::new();
        insert_cors_headers(&mut headers);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, GET, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut headers = HeaderMap::new();
        insert_cors_headers(&mut headers);
        insert_cors_headers(&mut headers);
        assert_eq!(
            headers
                .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .iter()
                .count(),
            1
        );
    }
}

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, Response},
    middleware::Next,
};

/// Middleware to set cache control headers
///
/// Embedded assets only change with a release, so they cache hard;
/// everything else is served fresh.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let value = if is_static {
        HeaderValue::from_static("public, max-age=31536000, immutable")
    } else {
        HeaderValue::from_static("no-cache, no-store, must-revalidate")
    };

    response.headers_mut().insert(header::CACHE_CONTROL, value);

    response
}

//! Method gate and permissive CORS headers.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, PUT, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Runs before routing.
///
/// `OPTIONS` on any path is a pre-flight acknowledgment: 200, empty body, no
/// state access. Methods other than GET and PUT never reach a route (this
/// keeps axum's implicit HEAD-for-GET out of the contract).
pub async fn method_gate(req: Request, next: Next) -> Response {
    match *req.method() {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::GET | Method::PUT => next.run(req).await,
        _ => handlers::not_found().await.into_response(),
    }
}

/// Header layers applied to every response, overriding whatever the handler
/// set.
///
/// `Allow` is set here too: these layers run inside axum's method routers,
/// which only add their own `Allow` (listing HEAD) when none is present.
pub fn response_headers() -> [SetResponseHeaderLayer<HeaderValue>; 5] {
    [
        SetResponseHeaderLayer::overriding(header::ALLOW, HeaderValue::from_static(ALLOW_METHODS)),
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
        SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON),
        ),
    ]
}

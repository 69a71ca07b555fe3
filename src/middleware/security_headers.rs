//! Response headers for a JSON / plain-text API.
//!
//! Nothing served here is meant to be rendered, framed or cached by a browser:
//! - no active content and no framing (CSP)
//! - no MIME sniffing of the plain-text error bodies
//! - no caching, since every answer reflects the in-memory store at that moment
//! - no Referer leakage to links followed from a response

use axum::Router;
use axum::http::header::{self, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const API_RESPONSE_HEADERS: [(HeaderName, &str); 4] = [
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'none'; frame-ancestors 'none'",
    ),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::CACHE_CONTROL, "no-store"),
    (header::REFERRER_POLICY, "no-referrer"),
];

/// Sets each header unless the handler already did.
pub fn apply(router: Router) -> Router {
    API_RESPONSE_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
}

//! CORS policy for browser clients.
//!
//! - Development: any origin.
//! - Production: only origins listed in CORS_ALLOWED_ORIGINS (exact match); an
//!   empty list allows none.
//!
//! Credentials are never allowed, so a wildcard origin stays valid. The
//! request id is exposed so browser clients can quote it in bug reports.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

use super::http::REQUEST_ID_HEADER;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return AllowOrigin::any();
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(allowed)
}

fn layer(config: &Config) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    CorsLayer::new()
        .allow_origin(allow_origin(config))
        // the routes in api::routes, plus preflight
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
        .max_age(PREFLIGHT_MAX_AGE)
}

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

/*
 * Responsibility
 * - URL structure of the API
 * - /health and /posts, /posts/{id}
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    health::health,
    posts::{create_post, delete_post, get_post, list_posts, patch_post, replace_post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post)
                .put(replace_post)
                .patch(patch_post)
                .delete(delete_post),
        )
}

/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 *   - posts: the post store, one per running service
 * - Clone is expected (internals are Arc / cheap to clone)
 */
use crate::repos::post_repo::PostStore;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub posts: PostStore,
}

impl AppState {
    pub fn new(posts: PostStore) -> Self {
        Self { posts }
    }
}

/**
 * Responsibility
 *  - request extractors shared by the posts handlers
 *  - every rejection is an AppError (plain-text 400/404)
 */
mod json;
mod post_index;

pub use json::JsonBody;
pub use post_index::PostIndex;

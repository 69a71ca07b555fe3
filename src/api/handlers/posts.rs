/*
 * Responsibility
 * - /posts CRUD handlers
 * - `{id}` is the post's current position in the store (PostIndex extractor)
 * - bad id → 400, id past the end → 404, undecodable body → 400 (all plain text)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::posts::{PostRequest, PostResponse},
        extractors::{JsonBody, PostIndex},
    },
    error::AppError,
    repos::post_repo::PostRow,
    state::AppState,
};

fn rows_to_response(rows: Vec<PostRow>) -> Vec<PostResponse> {
    rows.into_iter().map(PostResponse::from).collect()
}

/// 404 before the body is decoded. The write that follows checks again.
async fn ensure_exists(state: &AppState, index: usize) -> Result<(), AppError> {
    if state.posts.contains(index).await {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostResponse>> {
    let rows = state.posts.list().await;
    Json(rows_to_response(rows))
}

/// Appends the post and answers with the whole collection.
pub async fn create_post(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Vec<PostResponse>>), AppError> {
    let req: PostRequest = body.decode()?;
    let rows = state.posts.create(req.into_row()).await;
    tracing::debug!(index = rows.len() - 1, "post created");

    Ok((StatusCode::OK, Json(rows_to_response(rows))))
}

pub async fn get_post(
    State(state): State<AppState>,
    PostIndex(index): PostIndex,
) -> Result<Json<PostResponse>, AppError> {
    let row = state.posts.get(index).await.ok_or(AppError::NotFound)?;

    Ok(Json(row.into()))
}

/// PUT: every field comes from the body; fields left out become empty.
pub async fn replace_post(
    State(state): State<AppState>,
    PostIndex(index): PostIndex,
    body: JsonBody,
) -> Result<Json<PostResponse>, AppError> {
    ensure_exists(&state, index).await?;
    let req: PostRequest = body.decode()?;

    let row = state
        .posts
        .replace(index, req.into_row())
        .await
        .ok_or(AppError::NotFound)?;
    tracing::debug!(index, "post replaced");

    Ok(Json(row.into()))
}

/// PATCH: only fields present in the body are written.
pub async fn patch_post(
    State(state): State<AppState>,
    PostIndex(index): PostIndex,
    body: JsonBody,
) -> Result<Json<PostResponse>, AppError> {
    ensure_exists(&state, index).await?;
    let req: PostRequest = body.decode()?;

    let row = state
        .posts
        .update(index, &req.changes())
        .await
        .ok_or(AppError::NotFound)?;
    tracing::debug!(index, "post patched");

    Ok(Json(row.into()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    PostIndex(index): PostIndex,
) -> Result<StatusCode, AppError> {
    if !state.posts.delete(index).await {
        return Err(AppError::NotFound);
    }
    tracing::debug!(index, "post deleted");

    Ok(StatusCode::OK)
}

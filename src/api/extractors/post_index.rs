/*
 * Responsibility
 * - take the `{id}` path segment and turn it into a store position
 * - not an integer → AppError::InvalidIdentifier (400)
 * - negative integer → AppError::NotFound (404); it can never name a position
 * - the upper bound is checked by the repo, under the store lock
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostIndex(pub usize);

fn parse_index(raw: &str) -> Result<usize, AppError> {
    let id: i64 = raw.parse().map_err(|_| AppError::InvalidIdentifier)?;
    usize::try_from(id).map_err(|_| AppError::NotFound)
}

impl<S> FromRequestParts<S> for PostIndex
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(parse_index(&raw)?))
    }
}

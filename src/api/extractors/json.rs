/*
 * Responsibility
 * - buffer the request body without decoding it
 * - handlers decode with `decode()` only after the `{id}` bounds check, so a post
 *   that does not exist answers 404 even when the body is garbage
 * - the content-type header is not inspected; any body that parses as JSON is accepted
 */
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct JsonBody(Bytes);

impl JsonBody {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_slice(&self.0).map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedBody(e.body_text()))?;
        Ok(Self(bytes))
    }
}

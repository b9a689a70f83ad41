//! Axum extractor for JSON bodies that may be absent
//!
//! This module provides the `OptionalJson<T>` extractor. An empty body or a
//! literal `null` decodes to `None` so handlers can answer with their own
//! message instead of a generic rejection.

use crate::core::error::{ApiError, ValidationError};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Axum extractor yielding `Some(T)` for a decoded body, `None` for no body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     OptionalJson(request): OptionalJson<CreateOrderRequest>,
/// ) -> ApiResult<Json<Order>> {
///     let request = request.ok_or(ValidationError::NullRequest)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T> OptionalJson<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ValidationError::InvalidBody {
                message: e.body_text(),
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let payload: Option<T> =
            serde_json::from_slice(&bytes).map_err(|e| ValidationError::InvalidBody {
                message: e.to_string(),
            })?;

        Ok(Self(payload))
    }
}

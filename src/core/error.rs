//! Typed error handling for the orders API
//!
//! # Error Categories
//!
//! - [`ValidationError`]: Request input rejected before any store call (400)
//! - [`StorageError`]: Failures raised by a store backend
//! - [`ApiError`]: What a handler returns; maps each category to a status code
//!
//! Store failures never leak to clients. They are logged with the operation
//! that failed and answered with a fixed `Internal server error` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Body sent with every 500 response
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Maximum length of order names and descriptions, in characters
pub const MAX_FIELD_LENGTH: u64 = 100;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No request payload was sent (empty body or JSON `null`)
    #[error("Order request is null.")]
    NullRequest,

    #[error("Invalid order name. Must be non-empty and up to {max} characters.")]
    InvalidName { max: u64 },

    #[error("Invalid order description. Must be non-empty and up to {max} characters.")]
    InvalidDescription { max: u64 },

    /// The body could not be decoded
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("order with id '{id}' not found")]
    NotFound { id: Uuid },

    #[error("order with id '{id}' already exists")]
    AlreadyExists { id: Uuid },

    /// A writer panicked while holding the lock
    #[error("failed to acquire {operation} lock: {message}")]
    LockPoisoned {
        operation: &'static str,
        message: String,
    },
}

// =============================================================================
// API Errors
// =============================================================================

/// The error type returned by HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    /// Anything that went wrong while talking to the store
    #[error("an error occurred while {context}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Wrap a store failure with the operation that was running
    pub fn internal(context: &'static str, source: anyhow::Error) -> Self {
        ApiError::Internal { context, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => (status, err.to_string()).into_response(),
            ApiError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, %id, "entity not found");
                status.into_response()
            }
            ApiError::Internal { context, source } => {
                tracing::error!(error = ?source, "An error occurred while {}.", context);
                (status, INTERNAL_SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

/// A specialized Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

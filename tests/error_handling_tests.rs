//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Store failures on every endpoint become a 500 with a fixed body
//! - Internal error details never reach the client
//! - Errors map to the right HTTP status codes

mod support;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use orders_api::core::error::INTERNAL_SERVER_ERROR_MESSAGE;
use orders_api::prelude::*;
use serde_json::json;
use std::sync::Arc;
use support::*;

// =============================================================================
// Store failures
// =============================================================================

mod store_failure_tests {
    use super::*;

    fn failing_server() -> axum_test::TestServer {
        server_with(Arc::new(FailingOrderService))
    }

    #[tokio::test]
    async fn test_list_orders_store_failure_returns_500() {
        let response = failing_server().get("/orders").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_create_order_store_failure_returns_500() {
        let response = failing_server()
            .post("/orders/create")
            .json(&json!({"name": "New Order", "description": "New Description"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_create_order_validation_runs_before_store() {
        // The store would fail, but validation answers first
        let response = failing_server()
            .post("/orders/create")
            .json(&json!({"name": "", "description": "New Description"}))
            .await;

        response.assert_status_bad_request();
        assert!(response.text().contains("Invalid order name"));
    }

    #[tokio::test]
    async fn test_recent_orders_store_failure_returns_500() {
        let response = failing_server().get("/orders/recent").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_business_days_store_failure_returns_500() {
        let response = failing_server()
            .get("/orders/recent-business-days")
            .add_query_param("numberOfDays", 5)
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_delete_lookup_failure_returns_500() {
        let response = failing_server()
            .delete(&format!("/orders/{}", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_delete_update_failure_returns_500() {
        let inner = InMemoryOrderService::new();
        let order = order_at("Stuck", Utc::now());
        inner.import(order.clone()).unwrap();
        let server = server_with(Arc::new(FailingUpdateService {
            inner: inner.clone(),
        }));

        let response = server.delete(&format!("/orders/{}", order.id)).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
        let stored = inner.get_by_id(&order.id).await.unwrap().unwrap();
        assert!(!stored.is_deleted);
    }

    #[tokio::test]
    async fn test_internal_details_are_not_leaked() {
        let response = failing_server().get("/orders").await;

        assert!(!response.text().contains("database unavailable"));
    }
}

// =============================================================================
// Status code mapping
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err: ApiError = ValidationError::InvalidName { max: 100 }.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_returns_404() {
        let err = ApiError::NotFound {
            entity_type: "order",
            id: Uuid::new_v4(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_returns_500() {
        let err = ApiError::internal("fetching orders", anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_wrapped_as_internal_returns_500() {
        let source = StorageError::NotFound { id: Uuid::new_v4() };
        let err = ApiError::internal("deleting the order", source.into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Response conversion
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_into_response_uses_status_code() {
        let response = ApiError::NotFound {
            entity_type: "order",
            id: Uuid::nil(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(ValidationError::NullRequest).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_message_constant() {
        assert_eq!(INTERNAL_SERVER_ERROR_MESSAGE, "Internal server error");
    }
}

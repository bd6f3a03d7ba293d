//! Order request types and validation
//!
//! - `CreateOrderRequest`, `UpdateStatusRequest`: JSON bodies
//! - `ValidatedJson<T>`: extractor that deserializes and validates a body,
//!   rejecting with 400 instead of axum's default 415/422
//! - `order_filter_from_query`: permissive query parsing for listings

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Item;
use crate::store::{DEFAULT_LIST_LIMIT, OrderFilter};

use super::response::ApiError;

// ============================================================================
// Request bodies
// ============================================================================

/// Create order request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    #[schema(example = "user-1")]
    pub user_id: String,
    /// Line items, copied into the order as given
    #[validate(nested)]
    pub items: Vec<Item>,
}

/// Update status request. Any non-empty status is accepted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, message = "status is required"))]
    #[schema(example = "shipped")]
    pub status: String,
}

// ============================================================================
// ValidatedJson: Axum Framework Integration
// ============================================================================

/// JSON body extractor that also runs [`Validate`].
///
/// Any rejection (missing content type, syntax error, missing field, type
/// mismatch, failed validation) becomes a 400 carrying the error text.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

// ============================================================================
// Query parsing
// ============================================================================

/// Build a listing filter from raw query pairs.
///
/// When a key repeats, its first value wins. Empty `user_id` / `status`
/// disable that filter. A missing or non-integer `limit` falls back to the
/// default instead of failing the request; a negative one is clamped to 0.
pub fn order_filter_from_query(params: &[(String, String)]) -> OrderFilter {
    let first = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let non_empty = |key: &str| first(key).filter(|v| !v.is_empty()).map(str::to_string);

    let limit = first("limit")
        .and_then(|s| s.parse::<i64>().ok())
        .map(|n| usize::try_from(n.max(0)).unwrap_or(usize::MAX))
        .unwrap_or(DEFAULT_LIST_LIMIT); // SAFE_DEFAULT: documented default limit

    OrderFilter {
        user_id: non_empty("user_id"),
        status: non_empty("status"),
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn extract<T: DeserializeOwned + Validate + Send>(body: &str) -> Result<T, ApiError> {
        let req = Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        ValidatedJson::<T>::from_request(req, &()).await.map(|v| v.0)
    }

    #[test]
    fn test_filter_defaults() {
        let filter = order_filter_from_query(&[]);
        assert_eq!(filter, OrderFilter::default());
    }

    #[test]
    fn test_filter_reads_all_params() {
        let filter = order_filter_from_query(&query(&[
            ("user_id", "user-1"),
            ("status", "pending"),
            ("limit", "3"),
        ]));
        assert_eq!(filter.user_id.as_deref(), Some("user-1"));
        assert_eq!(filter.status.as_deref(), Some("pending"));
        assert_eq!(filter.limit, 3);
    }

    #[test]
    fn test_filter_bad_limit_falls_back() {
        for bad in ["abc", "", "1.5", "99999999999999999999"] {
            let filter = order_filter_from_query(&query(&[("limit", bad)]));
            assert_eq!(filter.limit, DEFAULT_LIST_LIMIT, "limit={bad:?}");
        }
    }

    #[test]
    fn test_filter_negative_limit_is_zero() {
        for negative in ["-1", "-5"] {
            let filter = order_filter_from_query(&query(&[("limit", negative)]));
            assert_eq!(filter.limit, 0, "limit={negative:?}");
        }
    }

    #[test]
    fn test_filter_repeated_key_takes_first_value() {
        let filter = order_filter_from_query(&query(&[
            ("status", "pending"),
            ("status", "shipped"),
            ("limit", "2"),
            ("limit", "7"),
        ]));
        assert_eq!(filter.status.as_deref(), Some("pending"));
        assert_eq!(filter.limit, 2);
    }

    #[test]
    fn test_filter_empty_values_disable_predicates() {
        let filter = order_filter_from_query(&query(&[("user_id", ""), ("status", "")]));
        assert_eq!(filter.user_id, None);
        assert_eq!(filter.status, None);
    }

    #[tokio::test]
    async fn test_create_request_valid() {
        let req: CreateOrderRequest = extract(
            r#"{"user_id":"user-1","items":[{"id":"a","name":"A","price":10.0,"quantity":2}]}"#,
        )
        .await
        .unwrap();
        assert_eq!(req.user_id, "user-1");
        assert_eq!(req.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_request_empty_items_allowed() {
        let req: CreateOrderRequest = extract(r#"{"user_id":"user-1","items":[]}"#)
            .await
            .unwrap();
        assert!(req.items.is_empty());
    }

    #[tokio::test]
    async fn test_create_request_rejections_are_400() {
        let cases = [
            r#"{"items":[]}"#,
            r#"{"user_id":"","items":[]}"#,
            r#"{"user_id":"user-1"}"#,
            r#"{"user_id":"user-1","items":"nope"}"#,
            r#"{"user_id":"user-1","items":[{"id":"a","name":"A","price":-1.0,"quantity":1}]}"#,
            r#"{"user_id":"user-1","items":[{"id":"a","name":"A","price":1.0,"quantity":0}]}"#,
            r#"{"user_id":"user-1","items":[{"id":"a","name":"A","price":1.0,"quantity":-2}]}"#,
            r#"{not json"#,
        ];
        for body in cases {
            let err = extract::<CreateOrderRequest>(body).await.unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "body={body}");
            assert!(!err.message.is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let req = Request::builder()
            .method("PUT")
            .uri("/orders/x/status")
            .body(Body::from(r#"{"status":"shipped"}"#))
            .unwrap();
        let err = ValidatedJson::<UpdateStatusRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_status_request() {
        let req: UpdateStatusRequest = extract(r#"{"status":"shipped"}"#).await.unwrap();
        assert_eq!(req.status, "shipped");

        let err = extract::<UpdateStatusRequest>(r#"{"status":""}"#)
            .await
            .unwrap_err();
        assert!(err.message.contains("status is required"));

        let err = extract::<UpdateStatusRequest>("{}").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}

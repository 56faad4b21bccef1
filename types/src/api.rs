//! API envelope types
//!
//! Request/response wrappers shared between application layers. The
//! result envelope is a proper sum type; its wire form is discriminated
//! by a boolean `success` field, which serde derives cannot express, so
//! the impls are written by hand.

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default page number when the caller does not specify one
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when the caller does not specify one
pub const DEFAULT_LIMIT: u32 = 20;

/// Result envelope for API endpoints
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T },
    Error { error: String },
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success variant
    pub fn success(data: T) -> Self {
        ApiResponse::Success { data }
    }

    /// Wrap an error message in the failure variant
    pub fn error(error: impl Into<String>) -> Self {
        ApiResponse::Error {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Payload of the success variant, if this is one
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data } => Some(data),
            ApiResponse::Error { .. } => None,
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResponse::Error { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            success: bool,
            data: Option<T>,
            error: Option<String>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        match (raw.success, raw.data, raw.error) {
            (true, Some(data), _) => Ok(ApiResponse::Success { data }),
            (true, None, _) => Err(de::Error::missing_field("data")),
            (false, _, Some(error)) => Ok(ApiResponse::Error { error }),
            (false, _, None) => Err(de::Error::missing_field("error")),
        }
    }
}

/// Pagination query parameters
///
/// Both fields are optional on the wire; `page()` and `limit()` resolve
/// the effective values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Requested page, defaulting to the first
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size, defaulting to [`DEFAULT_LIMIT`]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Page envelope for list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Build a page envelope, deriving `total_pages` from `total` and
    /// `limit`. A zero limit yields zero pages.
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_success_wire_shape() {
        let resp: ApiResponse<Vec<u32>> = ApiResponse::success(vec![1, 2, 3]);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_error_wire_shape() {
        let resp: ApiResponse<u32> = ApiResponse::error("record not found");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({"success": false, "error": "record not found"}));
    }

    #[test]
    fn test_envelope_roundtrip() {
        let resp: ApiResponse<String> = ApiResponse::success("hello".to_string());
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
        assert!(back.is_success());
        assert_eq!(back.data(), Some(&"hello".to_string()));

        let resp: ApiResponse<String> = ApiResponse::error("boom");
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
        assert!(!back.is_success());
        assert_eq!(back.data(), None);
    }

    #[test]
    fn test_success_without_data_is_rejected() {
        let result = serde_json::from_value::<ApiResponse<u32>>(json!({"success": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_without_error_is_rejected() {
        let result = serde_json::from_value::<ApiResponse<u32>>(json!({"success": false}));
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);

        let params = PaginationParams {
            page: Some(3),
            limit: Some(50),
        };
        assert_eq!(params.page(), 3);
        assert_eq!(params.limit(), 50);
    }

    #[test]
    fn test_pagination_params_from_query_json() {
        let params: PaginationParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params, PaginationParams::default());

        let params: PaginationParams = serde_json::from_value(json!({"page": 2})).unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_total_pages_derivation() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 45, 2, 20);
        assert_eq!(page.total_pages, 3);

        // Exact multiple does not add a trailing page
        let page = PaginatedResponse::<u32>::new(vec![], 40, 1, 20);
        assert_eq!(page.total_pages, 2);

        let page = PaginatedResponse::<u32>::new(vec![], 0, 1, 20);
        assert_eq!(page.total_pages, 0);

        let page = PaginatedResponse::<u32>::new(vec![], 10, 1, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_paginated_response_field_names() {
        let page = PaginatedResponse::new(vec!["a"], 1, 1, 20);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            json!({
                "items": ["a"],
                "total": 1,
                "page": 1,
                "limit": 20,
                "total_pages": 1,
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: pages always cover the total, with no excess page
        #[test]
        fn prop_total_pages_covers_total(total in 0u64..100_000, limit in 1u32..1000) {
            let page = PaginatedResponse::<u32>::new(vec![], total, 1, limit);
            prop_assert!(u64::from(page.total_pages) * u64::from(limit) >= total);
            if total > 0 {
                prop_assert!((u64::from(page.total_pages) - 1) * u64::from(limit) < total);
            }
        }

        /// Property: the envelope round-trips through its wire form
        #[test]
        fn prop_envelope_roundtrip(n in any::<i64>(), msg in "[a-zA-Z0-9 ]{0,40}") {
            let ok: ApiResponse<i64> = ApiResponse::success(n);
            let json = serde_json::to_string(&ok).unwrap();
            prop_assert_eq!(serde_json::from_str::<ApiResponse<i64>>(&json).unwrap(), ok);

            let err: ApiResponse<i64> = ApiResponse::error(msg);
            let json = serde_json::to_string(&err).unwrap();
            prop_assert_eq!(serde_json::from_str::<ApiResponse<i64>>(&json).unwrap(), err);
        }
    }
}

//! Unified error types for all layers of the catalog.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the catalog.
///
/// Only a few of these ever reach an HTTP caller: the cache-aside read path
/// degrades cache outages to misses, and the write paths swallow or convert
/// store failures (see [`CatalogError::is_cache_miss_equivalent`]).
#[derive(Error, Debug)]
pub enum CatalogError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// The cache transport could not be reached or rejected a command.
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// The document store declined a write.
    #[error("Document store rejected the request: {0}")]
    StoreRejected(String),

    /// The document store could not be reached or answered with garbage.
    #[error("Document store error: {0}")]
    DocumentStore(String),

    /// A value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::CacheUnavailable(_) => 503,
            Self::StoreRejected(_) | Self::DocumentStore(_) => 502,
            Self::Serialization(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CacheUnavailable(_) => "CACHE_UNAVAILABLE",
            Self::StoreRejected(_) => "STORE_REJECTED",
            Self::DocumentStore(_) => "DOCUMENT_STORE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a cache unavailable error.
    #[must_use]
    pub fn cache_unavailable<T: Into<String>>(message: T) -> Self {
        Self::CacheUnavailable(message.into())
    }

    /// Creates a document store error.
    #[must_use]
    pub fn document_store<T: Into<String>>(message: T) -> Self {
        Self::DocumentStore(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the cache-aside read path treats this error as a plain miss.
    ///
    /// Only transport failures qualify. A value that is present but cannot be
    /// decoded is a hard failure.
    #[must_use]
    pub const fn is_cache_miss_equivalent(&self) -> bool {
        matches!(self, Self::CacheUnavailable(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CatalogError`.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).status_code(), 404);
        assert_eq!(CatalogError::validation("bad id").status_code(), 400);
        assert_eq!(CatalogError::cache_unavailable("refused").status_code(), 503);
        assert_eq!(CatalogError::StoreRejected("400".to_string()).status_code(), 502);
        assert_eq!(CatalogError::document_store("timeout").status_code(), 502);
        assert_eq!(CatalogError::Serialization("eof".to_string()).status_code(), 500);
        assert_eq!(CatalogError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::not_found("Product", 1).error_code(), "NOT_FOUND");
        assert_eq!(CatalogError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(
            CatalogError::cache_unavailable("x").error_code(),
            "CACHE_UNAVAILABLE"
        );
        assert_eq!(
            CatalogError::StoreRejected("x".to_string()).error_code(),
            "STORE_REJECTED"
        );
        assert_eq!(
            CatalogError::Serialization("x".to_string()).error_code(),
            "SERIALIZATION_ERROR"
        );
        assert_eq!(CatalogError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_only_cache_transport_failures_degrade_to_miss() {
        assert!(CatalogError::cache_unavailable("down").is_cache_miss_equivalent());
        assert!(!CatalogError::Serialization("bad json".to_string()).is_cache_miss_equivalent());
        assert!(!CatalogError::document_store("down").is_cache_miss_equivalent());
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let catalog_err = CatalogError::from(err);
        assert!(matches!(catalog_err, CatalogError::Serialization(_)));
    }

    #[test]
    fn test_error_constructors() {
        let not_found = CatalogError::not_found("Product", 42);
        assert!(not_found.to_string().contains("Product"));
        assert!(not_found.to_string().contains("42"));

        let validation = CatalogError::validation("invalid id");
        assert!(validation.to_string().contains("invalid id"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = CatalogError::not_found("Product", 7);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
    }

    #[test]
    fn test_error_response_serializes_code_and_message_only() {
        let response = ErrorResponse::from(&CatalogError::internal("x"));
        let json = serde_json::to_value(&response).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["code".to_string(), "message".to_string()]);
    }
}

// ABOUTME: Unified error type and error codes shared by every operator binary
// ABOUTME: Provides AppError with code, message, and chained source plus conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry
//! an [`ErrorCode`] so callers can branch on the category (a missing document is
//! reported differently from a malformed one) and a human-readable message that
//! binaries print verbatim.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the tooling
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Required configuration value is absent
    pub fn config_missing(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::ConfigMissing,
            format!("Missing environment variable {name}"),
        )
    }

    /// Configuration value is present but unusable
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External service returned an error response
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// External service could not be reached
    pub fn external_unavailable(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{service}: {}", message.into()),
        )
    }

    /// External service rejected the credentials
    pub fn external_auth_failed(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalAuthFailed,
            format!("{service}: {}", message.into()),
        )
    }

    /// Write to a data store failed
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_connect() || error.is_timeout() {
            ErrorCode::ExternalServiceUnavailable
        } else if error.is_decode() {
            ErrorCode::SerializationError
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::config_missing("SUPABASE_SERVICE_ROLE_KEY");
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert_eq!(
            error.to_string(),
            "Required configuration is missing: Missing environment variable SUPABASE_SERVICE_ROLE_KEY"
        );
    }

    #[test]
    fn test_io_not_found_maps_to_resource_not_found() {
        let error: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(error.source.is_some());

        let error: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "no").into();
        assert_eq!(error.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: AppError = parse.into();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_error_codes_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ConfigMissing).unwrap(),
            "\"CONFIG_MISSING\""
        );
        assert_eq!(
            serde_json::from_str::<ErrorCode>("\"RESOURCE_NOT_FOUND\"").unwrap(),
            ErrorCode::ResourceNotFound
        );
        assert!(serde_json::from_str::<ErrorCode>("\"INVALID_FORMAT\"").is_err());
    }
}

//! Error types for the checkout-sdk library.
//!
//! Validation failures are raised on the client before any request is sent and are
//! always reported as [`ValidationError`]. Everything the gateway rejects comes back
//! as one of the API variants of [`CheckoutError`].

use thiserror::Error;

/// Classification code attached to every client-side validation failure.
pub const VALIDATION_ERROR_CODE: &str = "validation";

/// Classification code for failures that happened on the wire or on the server.
pub const API_ERROR_CODE: &str = "api_error";

/// A pre-flight validation failure.
///
/// Carries a human-readable message and the fixed [`VALIDATION_ERROR_CODE`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Always [`VALIDATION_ERROR_CODE`].
    pub fn code(&self) -> &'static str {
        VALIDATION_ERROR_CODE
    }
}

/// Main error type for checkout-sdk operations.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Input rejected before the request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The secret key was rejected (HTTP 401)
    #[error("Authentication failed")]
    Authentication {
        /// Value of the `Cko-Request-Id` response header
        request_id: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404)
    #[error("Resource not found")]
    ResourceNotFound {
        /// Value of the `Cko-Request-Id` response header
        request_id: Option<String>,
    },

    /// The gateway rejected the request body (HTTP 422)
    #[error("Invalid request: {error_type} {error_codes:?}")]
    InvalidRequest {
        /// Value of the `Cko-Request-Id` response header
        request_id: Option<String>,
        /// Error type reported by the gateway
        error_type: String,
        /// Individual error codes reported by the gateway
        error_codes: Vec<String>,
    },

    /// Rate limited (HTTP 429)
    #[error("Too many requests")]
    TooManyRequests {
        /// Value of the `Cko-Request-Id` response header
        request_id: Option<String>,
    },

    /// Any other non-success HTTP status
    #[error("API error: status {status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Value of the `Cko-Request-Id` response header
        request_id: Option<String>,
        /// Raw response body, if any
        body: Option<String>,
    },

    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing URL
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CheckoutError {
    /// Classification code of this error.
    ///
    /// Validation failures report [`VALIDATION_ERROR_CODE`]; gateway-side failures report
    /// their own codes so callers can tell the two apart without matching on variants.
    pub fn code(&self) -> &str {
        match self {
            CheckoutError::Validation(err) => err.code(),
            CheckoutError::Authentication { .. } => "authentication_error",
            CheckoutError::ResourceNotFound { .. } => "not_found",
            CheckoutError::InvalidRequest { error_type, .. } => error_type.as_str(),
            CheckoutError::TooManyRequests { .. } => "too_many_requests",
            CheckoutError::ConfigError(_) => "configuration_error",
            CheckoutError::Api { .. }
            | CheckoutError::HttpError(_)
            | CheckoutError::JsonError(_)
            | CheckoutError::UrlParseError(_) => API_ERROR_CODE,
        }
    }

    /// The gateway request id, for errors that came back from the API.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            CheckoutError::Authentication { request_id }
            | CheckoutError::ResourceNotFound { request_id }
            | CheckoutError::InvalidRequest { request_id, .. }
            | CheckoutError::TooManyRequests { request_id }
            | CheckoutError::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the error was raised before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, CheckoutError::Validation(_))
    }
}

/// Result type alias for checkout-sdk operations.
pub type Result<T> = std::result::Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_code() {
        let err = ValidationError::new("Invalid currency.");
        assert_eq!(err.code(), "validation");
        assert_eq!(err.message(), "Invalid currency.");
        assert_eq!(err.to_string(), "Invalid currency.");
    }

    #[test]
    fn test_error_display() {
        let err: CheckoutError = ValidationError::new("Invalid token source.").into();
        assert_eq!(err.to_string(), "Validation error: Invalid token source.");
        assert_eq!(err.code(), VALIDATION_ERROR_CODE);
        assert!(err.is_validation());
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: CheckoutError = json_err.into();
        assert!(matches!(err, CheckoutError::JsonError(_)));
        assert_eq!(err.code(), API_ERROR_CODE);
    }

    #[test]
    fn test_request_id() {
        let err = CheckoutError::InvalidRequest {
            request_id: Some("0HL80RJLS76I7".to_string()),
            error_type: "request_invalid".to_string(),
            error_codes: vec!["card_number_invalid".to_string()],
        };
        assert_eq!(err.request_id(), Some("0HL80RJLS76I7"));
        assert_eq!(err.code(), "request_invalid");

        let err = CheckoutError::ConfigError("missing key".to_string());
        assert_eq!(err.request_id(), None);
    }
}

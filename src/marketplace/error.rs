//! Error types exposed by the marketplace client layer.

use thiserror::Error;

use crate::pagination::PaginationError;

/// Errors surfaced while validating input or talking to the marketplace API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// An access token was required but none was configured.
    #[error("access token is required for this operation")]
    MissingToken,

    /// The API base URL or a derived endpoint could not be parsed.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The backend rejected the credentials or token.
    #[error("the marketplace rejected the credentials: {message}")]
    Authentication {
        /// Message returned with the 401/403 response.
        message: String,
    },

    /// The requested record does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Description of the missing resource.
        message: String,
    },

    /// The backend returned a non-success status that is not otherwise mapped.
    #[error("marketplace API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the marketplace: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("could not decode marketplace response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A browse filter query string could not be interpreted.
    #[error("invalid browse filter: {message}")]
    InvalidFilter {
        /// Description of the offending key or value.
        message: String,
    },

    /// A rating was outside the accepted star range.
    #[error("invalid rating: {message}")]
    InvalidRating {
        /// Description of the rejected value.
        message: String,
    },

    /// A tutor profile draft or request failed client-side validation.
    #[error("invalid submission: {message}")]
    InvalidSubmission {
        /// Which field was rejected and why.
        message: String,
    },
}

impl ClientError {
    /// Returns true when the failure is transport-level and the request may be
    /// retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<PaginationError> for ClientError {
    fn from(error: PaginationError) -> Self {
        Self::InvalidPagination {
            message: error.to_string(),
        }
    }
}

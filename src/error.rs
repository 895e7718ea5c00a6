//! Error types for the pidman client.
//!
//! Errors fall into two families:
//!
//! - **Local** failures are raised before any request leaves the client
//!   (missing arguments, unknown pid types, unsupported deletions, empty
//!   updates, bad configuration).
//! - **Remote** failures are raised after a round trip: an unexpected status
//!   code, a broken connection, or a success body that is not valid JSON.

use thiserror::Error;

/// Result type for pidman client operations.
pub type Result<T> = std::result::Result<T, PidmanError>;

/// Errors returned by [`PidmanClient`](crate::PidmanClient) operations.
#[derive(Debug, Error)]
pub enum PidmanError {
    /// A required argument was empty or missing.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The pid type is neither `ark` nor `purl`.
    #[error("pid type is not recognized: {0}")]
    UnknownPidType(String),

    /// Domains cannot be deleted through the REST API.
    #[error("domains cannot be deleted")]
    DomainDeletionUnsupported,

    /// Only ARK targets can be deleted; a PURL has exactly one target.
    #[error("purl targets cannot be deleted")]
    PurlTargetDeletionUnsupported,

    /// An update was requested without any field to change.
    #[error("no update data specified")]
    NoUpdateFields,

    /// The base url could not be used to reach the service.
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl {
        /// The url as supplied by the caller
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A header value (typically the username) is not a valid HTTP header.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// A required configuration value was not supplied.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    /// The service answered with a status other than the expected one.
    #[error("HTTP {status} {reason} for {url}")]
    Http {
        /// Request url (path and query)
        url: String,
        /// Returned status code
        status: u16,
        /// Returned reason phrase
        reason: String,
        /// Returned body, lossily decoded
        body: String,
    },

    /// The request could not be delivered or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// A success response did not carry valid JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl PidmanError {
    /// True for failures raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            PidmanError::MissingArgument(_)
                | PidmanError::UnknownPidType(_)
                | PidmanError::DomainDeletionUnsupported
                | PidmanError::PurlTargetDeletionUnsupported
                | PidmanError::NoUpdateFields
                | PidmanError::InvalidBaseUrl { .. }
                | PidmanError::InvalidHeader(_)
                | PidmanError::MissingConfig(_)
        )
    }

    /// The HTTP status code, for remote failures that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PidmanError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the service reported 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for PidmanError {
    fn from(err: reqwest::Error) -> Self {
        PidmanError::Transport(err.to_string())
    }
}

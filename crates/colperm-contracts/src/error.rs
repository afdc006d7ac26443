//! Error types for the colperm pipeline.
//!
//! All fallible operations return `ColpermResult<T>`. Configuration problems
//! are detected locally before any remote call; remote failures carry the
//! service's own diagnostic verbatim.

use std::fmt;

use thiserror::Error;

/// Why a call to the remote service did not succeed.
///
/// Built by the client crate from whatever the transport or the service
/// handed back. Nothing here is translated or retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The service answered with a non-success status.
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// The service's machine-readable error type, e.g. `collection_not_found`.
        kind: Option<String>,
        /// The service's human-readable message, or the raw body if it was not JSON.
        message: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    Transport { reason: String },

    /// A success response arrived but its body could not be decoded.
    Decode { reason: String },
}

impl RemoteFailure {
    /// HTTP status of a service rejection, `None` for transport/decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteFailure::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFailure::Service {
                status,
                kind: Some(kind),
                message,
            } => write!(f, "{message} (HTTP {status}, {kind})"),
            RemoteFailure::Service {
                status,
                kind: None,
                message,
            } => write!(f, "{message} (HTTP {status})"),
            RemoteFailure::Transport { reason } => write!(f, "transport error: {reason}"),
            RemoteFailure::Decode { reason } => write!(f, "undecodable response: {reason}"),
        }
    }
}

/// The unified error type for colperm.
#[derive(Debug, Error)]
pub enum ColpermError {
    /// One or more required environment variables are absent or empty.
    #[error(
        "configuration error: missing required environment variables: {}",
        missing.join(", ")
    )]
    MissingConfig { missing: Vec<String> },

    /// A required value is present but unusable (bad URL, bad header bytes).
    ///
    /// `reason` never includes the value itself, which may be a secret.
    #[error("configuration error: invalid value for {variable}: {reason}")]
    InvalidConfig { variable: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to initialize service client: {reason}")]
    ClientSetup { reason: String },

    /// Fetching the collection descriptor failed.
    #[error("failed to fetch collection '{collection_id}': {failure}")]
    FetchFailed {
        collection_id: String,
        failure: RemoteFailure,
    },

    /// Submitting the permission update failed.
    #[error("failed to update collection '{collection_id}': {failure}")]
    UpdateFailed {
        collection_id: String,
        failure: RemoteFailure,
    },
}

impl ColpermError {
    /// True for errors detected locally before any remote call.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ColpermError::MissingConfig { .. }
                | ColpermError::InvalidConfig { .. }
                | ColpermError::ClientSetup { .. }
        )
    }

    /// Process exit status for this error: 2 for local setup failures, 1 for remote.
    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            2
        } else {
            1
        }
    }
}

/// Convenience alias used throughout the colperm crates.
pub type ColpermResult<T> = Result<T, ColpermError>;

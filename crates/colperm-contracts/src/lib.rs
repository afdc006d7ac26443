//! # colperm-contracts
//!
//! Shared types, wire models, and error contracts for colperm.
//!
//! Every crate in the workspace imports from here. No I/O lives in this
//! crate, only data definitions and error types.

pub mod collection;
pub mod config;
pub mod error;
pub mod permission;

#[cfg(test)]
mod tests {
    use error::{ColpermError, RemoteFailure};

    use super::*;

    // ── ColpermError display messages ────────────────────────────────────────

    #[test]
    fn error_missing_config_display() {
        let err = ColpermError::MissingConfig {
            missing: vec!["APPWRITE_ENDPOINT".to_string(), "APPWRITE_API_KEY".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("APPWRITE_ENDPOINT, APPWRITE_API_KEY"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn error_invalid_config_display() {
        let err = ColpermError::InvalidConfig {
            variable: "APPWRITE_ENDPOINT".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "configuration error: invalid value for APPWRITE_ENDPOINT: relative URL without a base"
        );
    }

    #[test]
    fn error_fetch_failed_carries_service_message_verbatim() {
        let err = ColpermError::FetchFailed {
            collection_id: "user_profiles".to_string(),
            failure: RemoteFailure::Service {
                status: 404,
                kind: Some("collection_not_found".to_string()),
                message: "Collection with the requested ID could not be found.".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to fetch collection 'user_profiles'"));
        assert!(msg.contains("Collection with the requested ID could not be found."));
        assert!(msg.contains("HTTP 404"));
        assert!(msg.contains("collection_not_found"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn error_update_failed_display() {
        let err = ColpermError::UpdateFailed {
            collection_id: "user_profiles".to_string(),
            failure: RemoteFailure::Transport {
                reason: "connection refused".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to update collection"));
        assert!(msg.contains("transport error: connection refused"));
        assert!(!err.is_config());
    }

    #[test]
    fn remote_failure_status_only_for_service_rejections() {
        let rejected = RemoteFailure::Service {
            status: 401,
            kind: None,
            message: "unauthorized".to_string(),
        };
        let decode = RemoteFailure::Decode {
            reason: "missing field `name`".to_string(),
        };

        assert_eq!(rejected.status(), Some(401));
        assert_eq!(rejected.to_string(), "unauthorized (HTTP 401)");
        assert_eq!(decode.status(), None);
    }
}

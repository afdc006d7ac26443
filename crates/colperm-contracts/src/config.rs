//! Service configuration read from the process environment.
//!
//! Five values are required. The lookup is injected so callers can resolve
//! names from `std::env` in production and from a map in tests.

use std::fmt;

use crate::error::{ColpermError, ColpermResult};

/// Base address of the remote service, e.g. `https://cloud.appwrite.io/v1`.
pub const ENDPOINT_VAR: &str = "APPWRITE_ENDPOINT";
/// Project the API key belongs to.
pub const PROJECT_ID_VAR: &str = "APPWRITE_PROJECT_ID";
/// Server API key.
pub const API_KEY_VAR: &str = "APPWRITE_API_KEY";
/// Database holding the target collection.
pub const DATABASE_ID_VAR: &str = "APPWRITE_DATABASE_ID";
/// Collection whose permissions are rewritten.
pub const COLLECTION_ID_VAR: &str = "USER_PROFILES_COLLECTION_ID";

/// Every required variable, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 5] = [
    ENDPOINT_VAR,
    PROJECT_ID_VAR,
    API_KEY_VAR,
    DATABASE_ID_VAR,
    COLLECTION_ID_VAR,
];

/// The (database, collection) pair an update targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTarget {
    pub database_id: String,
    pub collection_id: String,
}

/// Validated configuration: every field is present and non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub target: CollectionTarget,
}

impl ServiceConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> ColpermResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// An empty value counts as missing. All five names are checked before
    /// failing so the error lists every gap at once.
    pub fn from_lookup<F>(lookup: F) -> ColpermResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values: Vec<Option<String>> = REQUIRED_VARS
            .iter()
            .map(|name| lookup(name).filter(|v| !v.is_empty()))
            .collect();

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| (*name).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ColpermError::MissingConfig { missing });
        }

        let mut take = |idx: usize| values[idx].take().unwrap_or_default();
        Ok(Self {
            endpoint: take(0),
            project_id: take(1),
            api_key: take(2),
            target: CollectionTarget {
                database_id: take(3),
                collection_id: take(4),
            },
        })
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &"<redacted>")
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENDPOINT_VAR, "https://cloud.example.io/v1".to_string()),
            (PROJECT_ID_VAR, "proj-1".to_string()),
            (API_KEY_VAR, "secret-key".to_string()),
            (DATABASE_ID_VAR, "main".to_string()),
            (COLLECTION_ID_VAR, "user_profiles".to_string()),
        ])
    }

    fn lookup_in<'a>(env: &'a HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| env.get(name).cloned()
    }

    #[test]
    fn complete_environment_loads() {
        let env = full_env();
        let config = ServiceConfig::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(config.endpoint, "https://cloud.example.io/v1");
        assert_eq!(config.project_id, "proj-1");
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.target.database_id, "main");
        assert_eq!(config.target.collection_id, "user_profiles");
    }

    #[test]
    fn empty_environment_reports_every_variable() {
        let err = ServiceConfig::from_lookup(|_| None).unwrap_err();
        match err {
            ColpermError::MissingConfig { missing } => {
                assert_eq!(missing, REQUIRED_VARS.map(String::from).to_vec());
            }
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn single_absent_variable_fails() {
        let mut env = full_env();
        env.remove(API_KEY_VAR);

        let err = ServiceConfig::from_lookup(lookup_in(&env)).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains(API_KEY_VAR), "{err}");
        assert!(!err.to_string().contains(ENDPOINT_VAR), "{err}");
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(COLLECTION_ID_VAR, String::new());

        let err = ServiceConfig::from_lookup(lookup_in(&env)).unwrap_err();
        match err {
            ColpermError::MissingConfig { missing } => {
                assert_eq!(missing, vec![COLLECTION_ID_VAR.to_string()]);
            }
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let env = full_env();
        let config = ServiceConfig::from_lookup(lookup_in(&env)).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}

//! Collection descriptor and update request wire models.
//!
//! The descriptor is whatever the service returns for a collection; only
//! `name` is required. The update request is the full replacement body sent
//! back for the same collection.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::permission::Permission;

/// A collection as returned by the remote service.
///
/// Only `name` is required. The other fields are informational: a missing,
/// null, or malformed value decodes as `None` instead of failing the fetch.
/// Unknown fields (attributes, indexes, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionDescriptor {
    /// Display name. Echoed unchanged in the update.
    pub name: String,

    /// Current permission strings, as the service renders them.
    /// `None` when the service did not report them.
    #[serde(rename = "$permissions", default, deserialize_with = "lenient")]
    pub permissions: Option<Vec<String>>,

    #[serde(rename = "documentSecurity", default, deserialize_with = "lenient")]
    pub document_security: Option<bool>,

    #[serde(default, deserialize_with = "lenient")]
    pub enabled: Option<bool>,

    /// Last modification time, shown by plan mode.
    #[serde(rename = "$updatedAt", default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Decode an optional field, turning any value of the wrong shape into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The body of an update-collection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionUpdate {
    pub name: String,
    pub permissions: Vec<Permission>,
    #[serde(rename = "documentSecurity")]
    pub document_security: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

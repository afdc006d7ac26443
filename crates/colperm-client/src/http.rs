//! Blocking HTTP implementation of `CollectionService`.
//!
//! Talks to the service's REST API:
//!
//! - `GET {endpoint}/databases/{databaseId}/collections/{collectionId}`
//! - `PUT {endpoint}/databases/{databaseId}/collections/{collectionId}`
//!
//! Every request carries the project and API key headers. One call on the
//! trait is exactly one HTTP request.

use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{HeaderMap, HeaderValue},
    Url,
};
use serde::Deserialize;
use tracing::debug;

use colperm_contracts::{
    collection::{CollectionDescriptor, CollectionUpdate},
    config::{CollectionTarget, ServiceConfig, API_KEY_VAR, ENDPOINT_VAR, PROJECT_ID_VAR},
    error::{ColpermError, ColpermResult, RemoteFailure},
};
use colperm_core::CollectionService;

const PROJECT_HEADER: &str = "x-appwrite-project";
const KEY_HEADER: &str = "x-appwrite-key";

/// Error payload the service sends with non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// `CollectionService` backed by the service's REST API.
#[derive(Debug, Clone)]
pub struct HttpCollectionService {
    client: Client,
    base: Url,
}

impl HttpCollectionService {
    /// Build a client for the endpoint, project, and key in `config`.
    ///
    /// No request is sent here.
    ///
    /// # Errors
    ///
    /// `ColpermError::InvalidConfig` if the endpoint is not an absolute
    /// http(s) URL or the project/key cannot be sent as header values;
    /// `ColpermError::ClientSetup` if the HTTP client cannot be built.
    pub fn connect(config: &ServiceConfig) -> ColpermResult<Self> {
        let base = parse_endpoint(&config.endpoint)?;

        let mut headers = HeaderMap::new();
        headers.insert(PROJECT_HEADER, header_value(PROJECT_ID_VAR, &config.project_id)?);
        let mut key = header_value(API_KEY_VAR, &config.api_key)?;
        key.set_sensitive(true);
        headers.insert(KEY_HEADER, key);

        let client = Client::builder()
            .user_agent(concat!("colperm/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| ColpermError::ClientSetup {
                reason: e.to_string(),
            })?;

        debug!(endpoint = %base, "service client ready");
        Ok(Self { client, base })
    }

    fn collection_url(&self, target: &CollectionTarget) -> Url {
        let mut url = self.base.clone();
        // `parse_endpoint` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "databases",
                target.database_id.as_str(),
                "collections",
                target.collection_id.as_str(),
            ]);
        }
        url
    }

    /// Send `request` and return the body of a success response.
    fn send(&self, request: RequestBuilder) -> Result<String, RemoteFailure> {
        let response = request.send().map_err(|e| RemoteFailure::Transport {
            reason: e.to_string(),
        })?;
        let status = response.status();
        let body = response.text().map_err(|e| RemoteFailure::Transport {
            reason: e.to_string(),
        })?;

        debug!(status = status.as_u16(), bytes = body.len(), "service responded");

        if !status.is_success() {
            return Err(service_failure(status.as_u16(), status.canonical_reason(), &body));
        }
        Ok(body)
    }
}

impl CollectionService for HttpCollectionService {
    fn get_collection(&self, target: &CollectionTarget) -> Result<CollectionDescriptor, RemoteFailure> {
        let url = self.collection_url(target);
        debug!(%url, "GET collection");
        let body = self.send(self.client.get(url))?;
        serde_json::from_str(&body).map_err(|e| RemoteFailure::Decode {
            reason: e.to_string(),
        })
    }

    fn update_collection(
        &self,
        target: &CollectionTarget,
        update: &CollectionUpdate,
    ) -> Result<(), RemoteFailure> {
        let url = self.collection_url(target);
        debug!(%url, "PUT collection");
        // The echoed descriptor is not read: a success status already means
        // the update was applied.
        self.send(self.client.put(url).json(update))?;
        Ok(())
    }
}

fn parse_endpoint(endpoint: &str) -> ColpermResult<Url> {
    let invalid = |reason: String| ColpermError::InvalidConfig {
        variable: ENDPOINT_VAR.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

fn header_value(variable: &str, value: &str) -> ColpermResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| ColpermError::InvalidConfig {
        variable: variable.to_string(),
        reason: "contains characters not allowed in an HTTP header".to_string(),
    })
}

/// Turn a non-success response into a `RemoteFailure`, keeping the service's words.
fn service_failure(status: u16, canonical: Option<&str>, body: &str) -> RemoteFailure {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => RemoteFailure::Service {
            status,
            kind: error.kind,
            message: error.message,
        },
        Err(_) => {
            let trimmed = body.trim();
            let message = if trimmed.is_empty() {
                canonical.unwrap_or("no response body").to_string()
            } else {
                trimmed.to_string()
            };
            RemoteFailure::Service {
                status,
                kind: None,
                message,
            }
        }
    }
}

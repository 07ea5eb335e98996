//! Byte-fetching layer under the remote breed adapters.
//!
//! A transport resolves a list of path segments to a response body. It
//! knows nothing about wire formats; decoding is the adapter's job.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{StatusCode, Url, blocking::Client};
use tracing::{debug, instrument, warn};

use breeders_core::{application::ApplicationError, error::BreedersError, error::BreedersResult};

/// Fetches raw payloads from the remote breed provider.
///
/// `Ok(None)` means the provider answered but has no such resource (the
/// "no match" case). Transport failures are `RemoteUnavailable`.
pub trait BreedTransport: Send + Sync {
    fn get(&self, segments: &[String]) -> BreedersResult<Option<String>>;
}

// ── HTTP ──────────────────────────────────────────────────────────────────────

const USER_AGENT: &str = concat!("breeders/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport.
///
/// One client is built up front and reused for every call; the timeout
/// covers the whole request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// # Errors
    ///
    /// `Configuration` when `base_url` is not an absolute http(s) URL or the
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> BreedersResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| BreedersError::Configuration {
            message: format!("invalid remote.base_url '{}': {}", base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BreedersError::Configuration {
                message: format!("remote.base_url '{}' cannot carry a path", base_url),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BreedersError::Configuration {
                message: format!("http client: {e}"),
            })?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, segments: &[String]) -> BreedersResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BreedersError::Configuration {
                message: format!("remote.base_url '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl BreedTransport for HttpTransport {
    #[instrument(skip(self), fields(base = %self.base_url))]
    fn get(&self, segments: &[String]) -> BreedersResult<Option<String>> {
        let url = self.url_for(segments)?;
        debug!(%url, "Fetching from breed service");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| unavailable(format!("fetch failed: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "Breed service reported no match");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(%url, %status, "Breed service returned an error status");
            return Err(unavailable(format!("HTTP {status} fetching {url}")));
        }

        let body = resp
            .text()
            .map_err(|e| unavailable(format!("read body: {e}")))?;

        Ok(non_empty(body))
    }
}

fn unavailable(reason: String) -> BreedersError {
    ApplicationError::RemoteUnavailable { reason }.into()
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() { None } else { Some(body) }
}

// ── Static ────────────────────────────────────────────────────────────────────

/// Transport answering from a fixed table of responses.
///
/// Keys are matched case-insensitively, the same way breed names are.
/// Unknown paths answer "no match". A transport built with
/// [`StaticTransport::unavailable`] fails every call instead.
#[derive(Debug, Clone, Default)]
pub struct StaticTransport {
    responses: HashMap<String, String>,
    failure: Option<String>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every call fails with `RemoteUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            responses: HashMap::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn with_response(mut self, segments: &[String], body: impl Into<String>) -> Self {
        self.responses.insert(key(segments), body.into());
        self
    }

    pub fn contains(&self, segments: &[String]) -> bool {
        self.responses.contains_key(&key(segments))
    }
}

impl BreedTransport for StaticTransport {
    fn get(&self, segments: &[String]) -> BreedersResult<Option<String>> {
        if let Some(reason) = &self.failure {
            return Err(unavailable(reason.clone()));
        }
        Ok(self
            .responses
            .get(&key(segments))
            .cloned()
            .and_then(non_empty))
    }
}

fn key(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn static_lookup_is_case_insensitive() {
        let transport = StaticTransport::new().with_response(&path(&["api", "Siamese"]), "body");
        assert_eq!(
            transport.get(&path(&["API", "siamese"])).unwrap().as_deref(),
            Some("body")
        );
    }

    #[test]
    fn static_unknown_path_is_no_match() {
        let transport = StaticTransport::new();
        assert_eq!(transport.get(&path(&["api", "nothing"])).unwrap(), None);
    }

    #[test]
    fn static_blank_body_is_no_match() {
        let transport = StaticTransport::new().with_response(&path(&["a"]), "  \n");
        assert_eq!(transport.get(&path(&["a"])).unwrap(), None);
    }

    #[test]
    fn unavailable_transport_fails_every_call() {
        let transport = StaticTransport::unavailable("offline");
        let err = transport.get(&path(&["a"])).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn http_rejects_invalid_base_url() {
        let err = HttpTransport::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, BreedersError::Configuration { .. }));
    }

    #[test]
    fn http_url_appends_encoded_segments() {
        let transport =
            HttpTransport::new("http://localhost:4000/", Duration::from_secs(1)).unwrap();
        let url = transport
            .url_for(&path(&["api", "cat-breeds", "Maine Coon", "json"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/api/cat-breeds/Maine%20Coon/json"
        );
    }

    #[test]
    fn http_unreachable_host_is_unavailable() {
        // Port 9 (discard) on localhost is closed in test environments.
        let transport = HttpTransport::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = transport.get(&path(&["api"])).unwrap_err();
        assert!(matches!(
            err,
            BreedersError::Application(ApplicationError::RemoteUnavailable { .. })
        ));
    }
}

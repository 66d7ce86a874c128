//! Transport seam for loading nav data.

use core_types::ResourceKind;
use net::{FetchError, HttpClient};

/// Loads the raw nav description from an absolute URI.
///
/// Implementations issue a single request: `Ok` only for status 200,
/// [`FetchError::Http`] for any other status, [`FetchError::Network`] when no
/// response arrives.
pub trait Fetcher {
    fn fetch(&self, uri: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by the blocking HTTP client.
#[derive(Default)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        self.client.fetch_text(uri, ResourceKind::NavData)
    }
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        self(uri)
    }
}

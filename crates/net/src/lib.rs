use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use core_types::{RequestId, ResourceKind};

const USER_AGENT: &str = "navmenu/0.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URI could not be resolved or uses a scheme the transport rejects.
    InvalidUri { uri: String, reason: String },
    /// No response was received (DNS, connect, TLS, or reading the body).
    Network(String),
    /// A response arrived with a status other than 200.
    Http { status: u16, status_text: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUri { uri, reason } => write!(f, "invalid uri {uri:?}: {reason}"),
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http {
                status,
                status_text,
            } => write!(f, "http error {status}: {status_text}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Resolves `href` against `base`. Without a base, `href` must already be
/// absolute.
pub fn resolve_url(base: Option<&str>, href: &str) -> Result<String, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUri {
        uri: href.to_string(),
        reason,
    };
    let resolved = match base {
        Some(base) => url::Url::parse(base)
            .map_err(|e| invalid(format!("bad base {base:?}: {e}")))?
            .join(href),
        None => url::Url::parse(href),
    };
    resolved.map(|u| u.to_string()).map_err(|e| invalid(e.to_string()))
}

/// Blocking HTTP client for page resources. One GET per call, no retries,
/// no timeout; redirects are followed by the transport.
pub struct HttpClient {
    agent: ureq::Agent,
    next_request: AtomicU64,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
            next_request: AtomicU64::new(0),
        }
    }

    pub fn fetch_text(&self, url: &str, kind: ResourceKind) -> Result<String, FetchError> {
        let request_id: RequestId = self.next_request.fetch_add(1, Ordering::Relaxed) + 1;
        let start = Instant::now();
        log::debug!(target: "net", "#{request_id} GET {url} ({})", kind.label());

        let resp = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let status_text = resp.status_text().to_string();
                log::debug!(target: "net", "#{request_id} status {status} {status_text}");
                return Err(FetchError::Http {
                    status,
                    status_text,
                });
            }
            Err(ureq::Error::Transport(t)) => {
                log::debug!(target: "net", "#{request_id} transport error: {t}");
                return Err(match t.kind() {
                    ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                        FetchError::InvalidUri {
                            uri: url.to_string(),
                            reason: t.to_string(),
                        }
                    }
                    _ => FetchError::Network(t.to_string()),
                });
            }
        };

        let status = resp.status();
        if status != 200 {
            return Err(FetchError::Http {
                status,
                status_text: resp.status_text().to_string(),
            });
        }

        let body = resp
            .into_string()
            .map_err(|e| FetchError::Network(format!("reading body: {e}")))?;
        log::debug!(
            target: "net",
            "#{request_id} done: {} bytes in {} ms",
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

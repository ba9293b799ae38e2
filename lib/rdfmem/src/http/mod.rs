//! Fetching of remote documents for [`Graph::load_uri`](crate::Graph::load_uri).

#[cfg(any(not(feature = "http-client"), target_family = "wasm"))]
mod dummy;
#[cfg(all(feature = "http-client", not(target_family = "wasm")))]
mod simple;

use crate::error::LoadError;
#[cfg(any(not(feature = "http-client"), target_family = "wasm"))]
use dummy::Client;
#[cfg(all(feature = "http-client", not(target_family = "wasm")))]
use simple::Client;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// Whether TLS certificates are checked when fetching `https:` documents.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
pub enum TlsVerification {
    /// Accept any certificate, including self-signed and expired ones.
    #[default]
    Skip,
    /// Check certificates against the system and bundled root stores.
    Verify,
}

/// HTTP client used by [`Graph::load_uri`](crate::Graph::load_uri).
///
/// The TLS policy is an explicit setting of each client.
/// [`HttpClient::default()`] skips certificate checks: use [`TlsVerification::Verify`] to enable them.
///
/// ```
/// use rdfmem::{HttpClient, TlsVerification};
/// use std::time::Duration;
///
/// let client = HttpClient::new(TlsVerification::Verify)
///     .with_timeout(Duration::from_secs(10))
///     .with_redirection_limit(5);
/// assert_eq!(client.tls_verification(), TlsVerification::Verify);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct HttpClient {
    tls_verification: TlsVerification,
    timeout: Option<Duration>,
    redirection_limit: usize,
    client: Client,
}

impl HttpClient {
    pub fn new(tls_verification: TlsVerification) -> Self {
        Self::build(tls_verification, None, 10)
    }

    /// Sets a timeout covering the whole request, from connection to the end of the body.
    ///
    /// By default there is no timeout.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self::build(self.tls_verification, Some(timeout), self.redirection_limit)
    }

    /// Sets the maximal number of redirections followed. Default is 10.
    pub fn with_redirection_limit(self, redirection_limit: usize) -> Self {
        Self::build(self.tls_verification, self.timeout, redirection_limit)
    }

    fn build(
        tls_verification: TlsVerification,
        timeout: Option<Duration>,
        redirection_limit: usize,
    ) -> Self {
        Self {
            tls_verification,
            timeout,
            redirection_limit,
            client: Client::new(
                tls_verification == TlsVerification::Skip,
                timeout,
                redirection_limit,
            ),
        }
    }

    #[inline]
    pub fn tls_verification(&self) -> TlsVerification {
        self.tls_verification
    }

    /// Sends a GET request and returns the response `Content-Type` and body.
    ///
    /// Statuses other than 200 are errors.
    pub(crate) fn get(&self, uri: &str) -> Result<(String, impl Read), LoadError> {
        let (status, content_type, body) = self.client.get(uri).map_err(LoadError::Network)?;
        debug!(uri, status, content_type = %content_type, "fetched document");
        if status != 200 {
            return Err(LoadError::HttpStatus {
                uri: uri.into(),
                status,
            });
        }
        Ok((content_type, body))
    }
}

impl Default for HttpClient {
    #[inline]
    fn default() -> Self {
        Self::new(TlsVerification::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skips_verification() {
        let client = HttpClient::default();
        assert_eq!(client.tls_verification(), TlsVerification::Skip);
        assert_eq!(client.timeout, None);
        assert_eq!(client.redirection_limit, 10);
    }

    #[test]
    fn builder() {
        let client = HttpClient::new(TlsVerification::Verify)
            .with_timeout(Duration::from_millis(1500))
            .with_redirection_limit(0);
        assert_eq!(client.tls_verification(), TlsVerification::Verify);
        assert_eq!(client.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(client.redirection_limit, 0);
    }
}

//! Stand-in used when the `http-client` feature is disabled

use std::io::{Empty, Error, ErrorKind, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client;

impl Client {
    pub fn new(
        _accept_invalid_certs: bool,
        _timeout: Option<Duration>,
        _redirection_limit: usize,
    ) -> Self {
        Self
    }

    #[expect(clippy::unused_self)]
    pub fn get(&self, _uri: &str) -> Result<(u16, String, Empty)> {
        Err(Error::new(
            ErrorKind::Unsupported,
            "HTTP client is not available. Enable the feature 'http-client'",
        ))
    }
}

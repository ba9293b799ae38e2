use crate::format::ACCEPT;
use reqwest::blocking::Response;
use reqwest::header::{self, HeaderValue};
use reqwest::redirect::Policy;
use std::io::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    // A failed build is reported by every request.
    client: std::result::Result<reqwest::blocking::Client, Arc<reqwest::Error>>,
}

impl Client {
    pub fn new(
        accept_invalid_certs: bool,
        timeout: Option<Duration>,
        redirection_limit: usize,
    ) -> Self {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .timeout(timeout)
            .redirect(Policy::limited(redirection_limit))
            .user_agent(concat!("rdfmem/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Arc::new);
        Self { client }
    }

    /// Returns the status, the `Content-Type` (empty if missing) and the body of the response.
    pub fn get(&self, uri: &str) -> Result<(u16, String, Response)> {
        let client = self.client.as_ref().map_err(|e| Error::other(Arc::clone(e)))?;
        let response = client
            .get(uri)
            .header(header::ACCEPT, HeaderValue::from_static(ACCEPT))
            .send()
            .map_err(Error::other)?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        Ok((response.status().as_u16(), content_type, response))
    }
}

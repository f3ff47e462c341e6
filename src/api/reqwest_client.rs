//! Reqwest-backed [`HttpClient`].
//!
//! Each `get` becomes one task on a tokio runtime: send the request, read
//! the whole body, hand the outcome to the completion from that task.
//! Timeouts belong to the wrapped [`reqwest::Client`].

use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;
use url::Url;

use super::{HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse};

pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Wrap an existing reqwest client; requests run on `runtime`.
    pub fn new(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Build a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(runtime: Handle, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, runtime))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let request = self.client.get(url.clone());
        let url = url.clone();

        self.runtime.spawn(async move {
            let result = match request.send().await {
                Err(e) => represent(None, None, Some(e.into())),
                Ok(response) => {
                    let status = response.status().as_u16();
                    match response.bytes().await {
                        Ok(body) => represent(Some(body.to_vec()), Some(status), None),
                        Err(e) => represent(None, Some(status), Some(e.into())),
                    }
                }
            };

            if let Err(e) = &result {
                tracing::debug!(%url, error = %e, "GET failed");
            }
            completion(result);
        });
    }
}

/// Collapse the three things a transport can hand back into one result.
///
/// An error always wins.  Without one, a status is required; a missing body
/// then means an empty one.  Any other combination is unexpected.
fn represent(
    body: Option<Vec<u8>>,
    status: Option<u16>,
    error: Option<HttpClientError>,
) -> HttpClientResult {
    match (body, status, error) {
        (_, _, Some(error)) => Err(error),
        (body, Some(status), None) => Ok(HttpResponse::new(status, body.unwrap_or_default())),
        (_, None, None) => Err(HttpClientError::UnexpectedRepresentation),
    }
}

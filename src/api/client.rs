//! Transport capability consumed by [`RemoteFeedLoader`](super::RemoteFeedLoader).

use thiserror::Error;
use url::Url;

/// Status code and full body of a delivered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Errors a transport reports instead of a response.
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The transport produced neither an error nor a usable response.
    #[error("unexpected values representation")]
    UnexpectedRepresentation,

    /// Failure reported by a custom transport that has no richer error
    /// type to wrap.
    #[error("{0}")]
    Other(String),
}

pub type HttpClientResult = Result<HttpResponse, HttpClientError>;

/// Callback receiving the outcome of one `get`.
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Performs HTTP GET requests and reports the outcome asynchronously.
///
/// Implementations must call `completion` exactly once per `get`, from
/// whatever thread finished the request.  Calls are independent: each one
/// starts its own network operation right away and shares no mutable state
/// with the others.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}

//! HTTP-backed feed loading.
//!
//! ## Layout
//!
//! * [`client`] — the [`HttpClient`] transport trait and its result types.
//! * [`mapper`] — pure validation and JSON decoding of a response.
//! * [`remote`] — [`RemoteFeedLoader`], which wires the two together.
//! * [`reqwest_client`] — the production [`HttpClient`] over `reqwest`.
//!
//! The loader only depends on the trait, so tests drive it with a spy and
//! the binary plugs in [`ReqwestHttpClient`].

pub mod client;
mod mapper;
pub mod remote;
pub mod reqwest_client;

pub use client::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
};
pub(crate) use mapper::FeedItemsMapper;
pub use remote::{RemoteFeedLoader, RemoteFeedLoaderError};
pub use reqwest_client::ReqwestHttpClient;

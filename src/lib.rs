//! essential-feed — load a remote image feed into typed items.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────────────┐  get(url)  ┌──────────────┐
//! │ RemoteFeedLoader │ ─────────► │  HttpClient  │  (reqwest + tokio)
//! │   (api/remote)   │ ◄───────── │ (api/client) │
//! └──────────────────┘  (bytes,   └──────────────┘
//!          │             status)
//!          ▼
//! ┌──────────────────┐
//! │ FeedItemsMapper  │  status 200 + JSON ──► Vec<FeedItem>
//! │   (api/mapper)   │
//! └──────────────────┘
//! ```
//!
//! * **`feed/`** — the feature-level types: [`FeedItem`] and the
//!   [`FeedLoader`] trait.
//! * **`api/`** — the HTTP-backed implementation: the [`HttpClient`]
//!   transport trait, the response mapper, [`RemoteFeedLoader`] and the
//!   [`ReqwestHttpClient`] adapter.
//!
//! Every `load` issues exactly one request and reports exactly one result,
//! unless the loader was dropped first, in which case nothing is reported.

pub mod api;
pub mod feed;

pub use api::{
    HttpClient, HttpClientCompletion, HttpClientError, HttpClientResult, HttpResponse,
    RemoteFeedLoader, RemoteFeedLoaderError, ReqwestHttpClient,
};
pub use feed::{FeedItem, FeedLoader, FeedLoaderCompletion, LoadFeedResult};

//! Feed load dispatch.
//!
//! Bridges the callback-based [`FeedLoader`] to the UI thread: each call to
//! [`request`] issues one load and forwards its result over an [`mpsc`]
//! channel that the main loop drains on every tick.
//!
//! ## For contributors
//!
//! There is no polling here on purpose: a load only happens when the user
//! asks for one (start-up and the reload key).  If the loader is dropped
//! before a result arrives, nothing is sent.

use std::sync::mpsc;

use essential_feed::{FeedItem, FeedLoader, LoadFeedResult, RemoteFeedLoaderError};

/// Messages sent from load completions to the UI thread.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadMsg {
    /// A load finished with these items.
    Items(Vec<FeedItem>),
    /// A load failed.
    Error(RemoteFeedLoaderError),
}

impl From<LoadFeedResult<RemoteFeedLoaderError>> for LoadMsg {
    fn from(result: LoadFeedResult<RemoteFeedLoaderError>) -> Self {
        match result {
            Ok(items) => LoadMsg::Items(items),
            Err(e) => LoadMsg::Error(e),
        }
    }
}

/// Start one load; its result is sent on `tx` when it arrives.
pub fn request<L>(loader: &L, tx: mpsc::Sender<LoadMsg>)
where
    L: FeedLoader<Error = RemoteFeedLoaderError>,
{
    loader.load(Box::new(move |result| {
        // If the receiver is gone the main thread has exited; drop the result.
        if tx.send(LoadMsg::from(result)).is_err() {
            tracing::debug!("UI gone; dropping load result");
        }
    }));
}

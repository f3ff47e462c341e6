//! Feed feature layer.
//!
//! This module defines the [`FeedLoader`] trait and the common [`FeedItem`]
//! type.  Nothing here knows about HTTP; the remote implementation lives in
//! [`crate::api`].
//!
//! ## For contributors — adding a new loader
//!
//! 1. Define a struct holding whatever your loader needs (a store handle, a
//!    client, ...).
//! 2. Implement [`FeedLoader`] for it, choosing an error type that says what
//!    can go wrong.
//! 3. Deliver exactly one result per `load` call.

mod feed_item;

pub use feed_item::FeedItem;

/// Outcome of one `load` call: the ordered items, or why they could not be
/// produced.
pub type LoadFeedResult<E> = Result<Vec<FeedItem>, E>;

/// Callback receiving the result of one `load` call.
pub type FeedLoaderCompletion<E> = Box<dyn FnOnce(LoadFeedResult<E>) + Send + 'static>;

/// Trait that every feed loader implements.
///
/// `load` returns immediately; the result is handed to `completion` on
/// whichever thread produced it.  Loaders are shared with background tasks,
/// so implementations must be [`Send`] + [`Sync`].
///
/// ## Implementing a new loader
///
/// ```ignore
/// struct FixedLoader(Vec<FeedItem>);
///
/// impl FeedLoader for FixedLoader {
///     type Error = std::convert::Infallible;
///
///     fn load(&self, completion: FeedLoaderCompletion<Self::Error>) {
///         completion(Ok(self.0.clone()));
///     }
/// }
/// ```
pub trait FeedLoader: Send + Sync {
    /// Failure reported through [`LoadFeedResult`].
    type Error;

    /// Start loading; `completion` receives the result at most once.
    fn load(&self, completion: FeedLoaderCompletion<Self::Error>);
}

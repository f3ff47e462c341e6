//! The core data type produced by every feed loader.
//!
//! `FeedItem` represents a single image entry of the feed.  Loaders convert
//! their native representation (JSON for the remote loader) into `FeedItem`s
//! so the rest of the application never sees the wire format.

use url::Url;
use uuid::Uuid;

/// A single feed entry.
///
/// Values are immutable once built: fields are public for reading and
/// pattern matching, but nothing in the crate mutates an item after
/// construction.  Equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    /// Unique identifier of the entry.
    pub id: Uuid,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Optional free-text location, e.g. a city name.
    pub location: Option<String>,

    /// Where the entry's image can be fetched from.
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}

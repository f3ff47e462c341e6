//! Turns a delivered response into feed items.
//!
//! This is a pure function (no I/O) so tests can exercise validation and
//! decoding without a transport.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

use super::RemoteFeedLoaderError;
use crate::feed::{FeedItem, LoadFeedResult};

const OK_200: u16 = 200;

/// Length of the canonical `8-4-4-4-12` UUID text.
const HYPHENATED_UUID_LEN: usize = 36;

/// Wire shape of the payload root.
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<Item>,
}

/// Wire shape of one entry.  Field names follow the API, not [`FeedItem`].
#[derive(Debug, Deserialize)]
struct Item {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl Item {
    fn into_feed_item(self) -> FeedItem {
        FeedItem::new(self.id, self.description, self.location, self.image)
    }
}

/// Accept only the hyphenated form; braced, simple and `urn:uuid:` ids are
/// rejected even though [`Uuid::parse_str`] would take them.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a hyphenated UUID",
        ));
    }
    Uuid::parse_str(&raw).map_err(de::Error::custom)
}

pub(crate) struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Validate `status` and decode `body`.
    ///
    /// Anything but a 200 with a well-formed `{"items": [...]}` payload is
    /// [`RemoteFeedLoaderError::InvalidData`]; the reason is only logged.
    pub(crate) fn map(body: &[u8], status: u16) -> LoadFeedResult<RemoteFeedLoaderError> {
        if status != OK_200 {
            tracing::debug!(status, "rejecting non-200 response");
            return Err(RemoteFeedLoaderError::InvalidData);
        }

        let root: Root = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "feed payload failed to decode");
            RemoteFeedLoaderError::InvalidData
        })?;

        Ok(root.items.into_iter().map(Item::into_feed_item).collect())
    }
}

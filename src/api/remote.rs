//! Remote feed loader.
//!
//! [`RemoteFeedLoader`] asks its [`HttpClient`] for one URL and turns the
//! outcome into a [`LoadFeedResult`]:
//!
//! * transport error → [`RemoteFeedLoaderError::Connectivity`]
//! * response delivered → whatever the mapper says (items or
//!   [`RemoteFeedLoaderError::InvalidData`])
//!
//! Once the loader is dropped, results still in flight are discarded
//! instead of being delivered.

use std::sync::{Arc, Weak};

use thiserror::Error;
use url::Url;

use super::{FeedItemsMapper, HttpClient, HttpClientResult};
use crate::feed::{FeedLoader, FeedLoaderCompletion, LoadFeedResult};

/// Why a remote load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoteFeedLoaderError {
    /// The transport did not deliver a response.
    #[error("connectivity error")]
    Connectivity,

    /// A response arrived but was not a valid feed.
    #[error("invalid data")]
    InvalidData,
}

/// Loads the feed at a fixed URL through an [`HttpClient`].
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    /// Liveness token.  In-flight requests hold only a [`Weak`] to it, so
    /// dropping the loader makes every pending delivery a no-op.
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    /// Create a loader.  No request is made until [`FeedLoader::load`].
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    fn map(result: HttpClientResult) -> LoadFeedResult<RemoteFeedLoaderError> {
        match result {
            Ok(response) => FeedItemsMapper::map(&response.body, response.status),
            Err(e) => {
                tracing::warn!(error = %e, "feed request failed");
                Err(RemoteFeedLoaderError::Connectivity)
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    type Error = RemoteFeedLoaderError;

    fn load(&self, completion: FeedLoaderCompletion<Self::Error>) {
        tracing::debug!(url = %self.url, "loading feed");

        let alive: Weak<()> = Arc::downgrade(&self.alive);
        self.client.get(
            &self.url,
            Box::new(move |result| {
                // Held until `completion` returns.
                let Some(_alive) = alive.upgrade() else {
                    tracing::trace!("loader dropped; discarding result");
                    return;
                };

                let mapped = Self::map(result);
                if let Ok(items) = &mapped {
                    tracing::debug!(count = items.len(), "feed loaded");
                }
                completion(mapped);
            }),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rstest::rstest;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use super::*;
    use crate::api::{HttpClientCompletion, HttpClientError, HttpResponse};
    use crate::feed::FeedItem;

    type Captured = Arc<Mutex<Vec<LoadFeedResult<RemoteFeedLoaderError>>>>;

    /// Records every `get` and lets the test complete them later, in any
    /// order, by index.
    #[derive(Default)]
    struct HttpClientSpy {
        messages: Mutex<Vec<(Url, HttpClientCompletion)>>,
    }

    impl HttpClientSpy {
        fn requested_urls(&self) -> Vec<Url> {
            self.messages
                .lock()
                .unwrap()
                .iter()
                .map(|(url, _)| url.clone())
                .collect()
        }

        fn take_completion(&self, index: usize) -> HttpClientCompletion {
            let mut messages = self.messages.lock().unwrap();
            let (url, _) = &messages[index];
            let url = url.clone();
            // Replace with a no-op so indices of later requests stay stable.
            std::mem::replace(&mut messages[index], (url, Box::new(|_| {}))).1
        }

        fn complete_with_error(&self, error: HttpClientError, index: usize) {
            (self.take_completion(index))(Err(error));
        }

        fn complete_with_status(&self, status: u16, body: Vec<u8>, index: usize) {
            (self.take_completion(index))(Ok(HttpResponse::new(status, body)));
        }
    }

    impl HttpClient for HttpClientSpy {
        fn get(&self, url: &Url, completion: HttpClientCompletion) {
            self.messages.lock().unwrap().push((url.clone(), completion));
        }
    }

    fn any_url() -> Url {
        Url::parse("https://a-url.com").unwrap()
    }

    fn make_sut(url: Url) -> (RemoteFeedLoader, Arc<HttpClientSpy>) {
        let client = Arc::new(HttpClientSpy::default());
        let sut = RemoteFeedLoader::new(url, client.clone());
        (sut, client)
    }

    fn make_item(
        description: Option<&str>,
        location: Option<&str>,
        image_url: &str,
    ) -> (FeedItem, Value) {
        let item = FeedItem::new(
            Uuid::new_v4(),
            description.map(String::from),
            location.map(String::from),
            Url::parse(image_url).unwrap(),
        );

        let mut json = json!({
            "id": item.id.to_string(),
            "image": item.image_url.as_str(),
        });
        if let Some(description) = description {
            json["description"] = json!(description);
        }
        if let Some(location) = location {
            json["location"] = json!(location);
        }

        (item, json)
    }

    fn make_items_json(items: &[Value]) -> Vec<u8> {
        serde_json::to_vec(&json!({ "items": items })).unwrap()
    }

    fn capture(sut: &RemoteFeedLoader) -> Captured {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        sut.load(Box::new(move |result| sink.lock().unwrap().push(result)));
        captured
    }

    /// Issue one load, run `action` to complete it, and check the single
    /// delivered result.
    fn expect(
        sut: &RemoteFeedLoader,
        expected: LoadFeedResult<RemoteFeedLoaderError>,
        action: impl FnOnce(),
    ) {
        let captured = capture(sut);

        action();

        assert_eq!(*captured.lock().unwrap(), vec![expected]);
    }

    // -- requests ------------------------------------------------------------

    #[test]
    fn new_does_not_request_data_from_url() {
        let (_sut, client) = make_sut(any_url());

        assert!(client.requested_urls().is_empty());
    }

    #[test]
    fn load_requests_data_from_url() {
        let url = Url::parse("https://a-given-url.com").unwrap();
        let (sut, client) = make_sut(url.clone());

        sut.load(Box::new(|_| {}));

        assert_eq!(client.requested_urls(), vec![url]);
    }

    #[test]
    fn load_twice_requests_data_from_url_twice() {
        let url = Url::parse("https://a-given-url.com").unwrap();
        let (sut, client) = make_sut(url.clone());

        sut.load(Box::new(|_| {}));
        sut.load(Box::new(|_| {}));

        assert_eq!(client.requested_urls(), vec![url.clone(), url]);
    }

    // -- delivery ------------------------------------------------------------

    #[rstest]
    #[case(HttpClientError::Other("any error".into()))]
    #[case(HttpClientError::UnexpectedRepresentation)]
    fn load_delivers_connectivity_error_on_client_error(#[case] error: HttpClientError) {
        let (sut, client) = make_sut(any_url());

        expect(&sut, Err(RemoteFeedLoaderError::Connectivity), || {
            client.complete_with_error(error, 0);
        });
    }

    #[test]
    fn load_delivers_invalid_data_on_non_200_response() {
        let (sut, client) = make_sut(any_url());

        for (index, status) in [199, 201, 300, 400, 500].into_iter().enumerate() {
            expect(&sut, Err(RemoteFeedLoaderError::InvalidData), || {
                client.complete_with_status(status, make_items_json(&[]), index);
            });
        }
    }

    #[test]
    fn load_delivers_invalid_data_on_200_with_invalid_json() {
        let (sut, client) = make_sut(any_url());

        expect(&sut, Err(RemoteFeedLoaderError::InvalidData), || {
            client.complete_with_status(200, b"invalid json".to_vec(), 0);
        });
    }

    #[test]
    fn load_delivers_no_items_on_200_with_empty_list() {
        let (sut, client) = make_sut(any_url());

        expect(&sut, Ok(vec![]), || {
            client.complete_with_status(200, make_items_json(&[]), 0);
        });
    }

    #[test]
    fn load_delivers_items_on_200_with_json_items() {
        let (sut, client) = make_sut(any_url());

        let (item1, json1) = make_item(None, None, "https://a-url.com");
        let (item2, json2) = make_item(
            Some("a description"),
            Some("a location"),
            "https://another-url.com",
        );

        expect(&sut, Ok(vec![item1, item2]), || {
            client.complete_with_status(200, make_items_json(&[json1, json2]), 0);
        });
    }

    #[test]
    fn concurrent_loads_complete_independently_in_any_order() {
        let (sut, client) = make_sut(any_url());

        let first = capture(&sut);
        let second = capture(&sut);

        client.complete_with_status(200, make_items_json(&[]), 1);
        client.complete_with_error(HttpClientError::Other("offline".into()), 0);

        assert_eq!(
            *first.lock().unwrap(),
            vec![Err(RemoteFeedLoaderError::Connectivity)]
        );
        assert_eq!(*second.lock().unwrap(), vec![Ok(vec![])]);
    }

    #[test]
    fn load_does_not_deliver_result_after_loader_has_been_dropped() {
        let client = Arc::new(HttpClientSpy::default());
        let sut = RemoteFeedLoader::new(any_url(), client.clone());

        let captured = capture(&sut);

        drop(sut);
        client.complete_with_status(200, make_items_json(&[]), 0);

        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn load_does_not_deliver_error_after_loader_has_been_dropped() {
        let client = Arc::new(HttpClientSpy::default());
        let sut = RemoteFeedLoader::new(any_url(), client.clone());

        let captured = capture(&sut);

        drop(sut);
        client.complete_with_error(HttpClientError::Other("late".into()), 0);

        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn liveness_token_is_held_for_the_whole_delivery() {
        let (sut, client) = make_sut(any_url());
        let token = Arc::downgrade(&sut.alive);
        let observed = Arc::new(Mutex::new(None));

        let sink = observed.clone();
        sut.load(Box::new(move |_| {
            *sink.lock().unwrap() = Some(token.strong_count());
        }));
        client.complete_with_status(200, make_items_json(&[]), 0);

        // One reference from the loader, one from the delivery in progress.
        assert_eq!(*observed.lock().unwrap(), Some(2));
        assert_eq!(Arc::strong_count(&sut.alive), 1);
    }

    #[test]
    fn dropping_loader_releases_its_client() {
        let client = Arc::new(HttpClientSpy::default());
        let sut = RemoteFeedLoader::new(any_url(), client.clone());
        assert_eq!(Arc::strong_count(&client), 2);

        drop(sut);

        assert_eq!(Arc::strong_count(&client), 1);
    }

    // -- end to end ----------------------------------------------------------

    #[test]
    fn e2e_generic_transport_error_is_connectivity() {
        let url = Url::parse("https://a-given-url.com").unwrap();
        let (sut, client) = make_sut(url.clone());

        expect(&sut, Err(RemoteFeedLoaderError::Connectivity), || {
            client.complete_with_error(HttpClientError::Other("any error".into()), 0);
        });
        assert_eq!(client.requested_urls(), vec![url]);
    }

    #[test]
    fn e2e_status_400_with_empty_items_is_invalid_data() {
        let url = Url::parse("https://a-given-url.com").unwrap();
        let (sut, client) = make_sut(url);

        expect(&sut, Err(RemoteFeedLoaderError::InvalidData), || {
            client.complete_with_status(400, br#"{"items": []}"#.to_vec(), 0);
        });
    }

    #[test]
    fn e2e_status_200_with_two_items_is_success() {
        let url = Url::parse("https://a-given-url.com").unwrap();
        let (sut, client) = make_sut(url);

        let body = br#"{"items": [
            {
                "id": "3f1e1b0a-2c4d-4e5f-8a9b-0c1d2e3f4a5b",
                "image": "https://a-url.com"
            },
            {
                "id": "9a8b7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d",
                "description": "a description",
                "location": "a location",
                "image": "https://another-url.com"
            }
        ]}"#;

        let item1 = FeedItem::new(
            Uuid::parse_str("3f1e1b0a-2c4d-4e5f-8a9b-0c1d2e3f4a5b").unwrap(),
            None,
            None,
            Url::parse("https://a-url.com").unwrap(),
        );
        let item2 = FeedItem::new(
            Uuid::parse_str("9a8b7c6d-5e4f-4a3b-9c2d-1e0f9a8b7c6d").unwrap(),
            Some("a description".into()),
            Some("a location".into()),
            Url::parse("https://another-url.com").unwrap(),
        );

        expect(&sut, Ok(vec![item1, item2]), || {
            client.complete_with_status(200, body.to_vec(), 0);
        });
    }
}

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

use essential_feed::{FeedItem, RemoteFeedLoaderError};

use crate::load::LoadMsg;

pub struct App {
    /// Items of the most recent successful load, in feed order.
    pub items: Vec<FeedItem>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Set by the reload key; the main loop clears it when it dispatches.
    pub reload_requested: bool,
    /// When the shown items were loaded.
    pub last_loaded: Option<DateTime<Local>>,
    /// Last load status message.
    pub status: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
            quit: false,
            loading: false,
            reload_requested: false,
            last_loaded: None,
            status: "Starting…".into(),
        }
    }

    /// Record that a load has been dispatched.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.reload_requested = false;
        self.status = "Loading…".into();
    }

    /// Ask for a reload unless one is already running.
    pub fn request_reload(&mut self) {
        if !self.loading {
            self.reload_requested = true;
        }
    }

    /// Apply the result of a finished load.
    ///
    /// Success replaces the list; failure keeps whatever was shown before.
    pub fn apply(&mut self, msg: LoadMsg, now: DateTime<Local>) {
        self.loading = false;
        match msg {
            LoadMsg::Items(items) => {
                self.status = format!("Loaded {} items at {}", items.len(), now.format("%H:%M:%S"));
                self.items = items;
                self.last_loaded = Some(now);
                self.list_state.select(if self.items.is_empty() { None } else { Some(0) });
            }
            LoadMsg::Error(RemoteFeedLoaderError::Connectivity) => {
                self.status = "Error: could not reach the feed (r: retry)".into();
            }
            LoadMsg::Error(RemoteFeedLoaderError::InvalidData) => {
                self.status = "Error: the feed sent invalid data (r: retry)".into();
            }
        }
    }

    /// The currently highlighted item, if any.
    pub fn selected_item(&self) -> Option<&FeedItem> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }
}

//! Feed session state machine.
//!
//! A [`FeedSession`] owns everything a feed view needs: the append-only item
//! list, the current viewing index, the page counter, and the loading/error
//! phase. It is sans-I/O: operations that require the server return a
//! [`FetchRequest`] command, and the host feeds the outcome back through
//! [`FeedSession::resolve_initial`] or [`FeedSession::resolve_fetch_more`].
//!
//! Invariants:
//! * the item list only grows within a topic; selecting a topic rebuilds the
//!   session from scratch
//! * at most one fetch-more is in flight; further triggers are coalesced
//! * batches are appended in request order, because page N+1 is never
//!   requested until page N has resolved and bumped the page counter
//! * a resolution belongs to the session that issued its [`FetchRequest`]:
//!   selecting a topic forgets any outstanding fetch, and the host must drop
//!   that fetch's outcome instead of feeding it into the new session

use crate::{FeedItem, Topic};

/// Prefetch when the current index is within this many positions of the end.
pub const PREFETCH_THRESHOLD: usize = 2;

/// A fetch the host must perform against the feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Topic to request.
    pub topic: Topic,
    /// 1-based page number.
    pub page: u32,
}

/// One discrete navigation step (swipe or arrow key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards newer items (swipe up / arrow down).
    Forward,
    /// Towards older items (swipe down / arrow up).
    Backward,
}

/// Lifecycle of the initial page load.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Loading,
    Loaded,
    Failed(String),
}

/// What the view should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView<'a> {
    /// Initial fetch still outstanding: show a skeleton placeholder.
    Loading,
    /// Initial fetch succeeded but returned no items.
    Empty,
    /// Initial fetch failed: full-screen error state.
    Failed(&'a str),
    /// The current index points past the loaded items.
    NotAvailable,
    /// The item under the current index.
    Item(&'a FeedItem),
}

/// Client-side feed state for one selected topic.
///
/// Created fresh when a topic is selected and discarded wholesale when the
/// topic changes. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSession {
    topic: Topic,
    items: Vec<FeedItem>,
    current_index: usize,
    current_page: u32,
    phase: Phase,
    fetch_more_in_flight: bool,
    transient_error: Option<String>,
}

impl FeedSession {
    /// Start a session for `topic`. The returned request is the initial
    /// page-1 fetch the host must resolve via [`Self::resolve_initial`].
    pub fn new(topic: Topic) -> (Self, FetchRequest) {
        let session = Self {
            topic,
            items: Vec::new(),
            current_index: 0,
            current_page: 1,
            phase: Phase::Loading,
            fetch_more_in_flight: false,
            transient_error: None,
        };
        let request = FetchRequest { topic, page: 1 };
        (session, request)
    }

    /// Switch topics: discard all items and reset paging, then fetch page 1.
    ///
    /// Also used to retry after a failed initial load of the same topic.
    /// Any fetch still outstanding is forgotten with the rest of the state;
    /// its result must not be resolved against the new session.
    pub fn select_topic(&mut self, topic: Topic) -> FetchRequest {
        let (session, request) = Self::new(topic);
        *self = session;
        request
    }

    /// Resolve the initial page-1 fetch issued by [`Self::new`] or
    /// [`Self::select_topic`].
    ///
    /// On success the batch becomes the whole sequence; on failure the
    /// session enters a blocking error state with no items. May immediately
    /// request a prefetch if the batch is small enough that the first item
    /// is already near the end.
    pub fn resolve_initial(
        &mut self,
        result: Result<Vec<FeedItem>, String>,
    ) -> Option<FetchRequest> {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Loaded;
                self.prefetch_if_needed()
            }
            Err(message) => {
                self.phase = Phase::Failed(message);
                None
            }
        }
    }

    /// Move the current position by one item, clamped to the loaded range.
    ///
    /// Every advance re-runs the prefetch check, so pressing forward at the
    /// last loaded item still triggers the next page fetch even though the
    /// index does not move.
    pub fn advance(&mut self, direction: Direction) -> Option<FetchRequest> {
        match direction {
            Direction::Forward => {
                if self.current_index + 1 < self.items.len() {
                    self.current_index += 1;
                }
            }
            Direction::Backward => {
                self.current_index = self.current_index.saturating_sub(1);
            }
        }
        self.prefetch_if_needed()
    }

    /// Resolve a fetch-more issued by a previous prefetch trigger.
    ///
    /// Success appends the batch and bumps the page counter. Failure keeps
    /// the existing items and page so a later advance can retry the same
    /// page; the message is surfaced via [`Self::transient_error`]. An empty
    /// batch releases the token without bumping the page and without
    /// re-triggering: the sequence did not grow, so the next fetch waits for
    /// an index change.
    pub fn resolve_fetch_more(
        &mut self,
        result: Result<Vec<FeedItem>, String>,
    ) -> Option<FetchRequest> {
        self.fetch_more_in_flight = false;
        match result {
            Ok(batch) => {
                self.transient_error = None;
                if batch.is_empty() {
                    return None;
                }
                self.items.extend(batch);
                self.current_page += 1;
                self.prefetch_if_needed()
            }
            Err(message) => {
                self.transient_error = Some(message);
                None
            }
        }
    }

    /// Increment the like counter of the item with `id`, if present.
    pub fn like(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.likes += 1;
        }
    }

    /// Increment the save counter of the item with `id`, if present.
    pub fn save(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.saves += 1;
        }
    }

    /// What the view should render for the current state.
    pub fn view(&self) -> FeedView<'_> {
        match &self.phase {
            Phase::Loading => FeedView::Loading,
            Phase::Failed(message) => FeedView::Failed(message),
            Phase::Loaded if self.items.is_empty() => FeedView::Empty,
            Phase::Loaded => match self.items.get(self.current_index) {
                Some(item) => FeedView::Item(item),
                None => FeedView::NotAvailable,
            },
        }
    }

    /// The item under the cursor, if any.
    pub fn current(&self) -> Option<&FeedItem> {
        self.items.get(self.current_index)
    }

    /// (current index, loaded item count), for a progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index, self.items.len())
    }

    /// The selected topic.
    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// The last page that has been fetched and applied.
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Whether a fetch-more is outstanding (drives the "Loading more" toast).
    pub const fn is_fetching_more(&self) -> bool {
        self.fetch_more_in_flight
    }

    /// Message from the most recent failed fetch-more, if any.
    pub fn transient_error(&self) -> Option<&str> {
        self.transient_error.as_deref()
    }

    /// All loaded items, oldest first.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    // Single prefetch gate: runs after every index change or growth of the
    // item list. The in-flight token makes concurrent triggers coalesce.
    fn prefetch_if_needed(&mut self) -> Option<FetchRequest> {
        if self.phase != Phase::Loaded || self.fetch_more_in_flight || self.items.is_empty() {
            return None;
        }
        if self.current_index + PREFETCH_THRESHOLD < self.items.len() {
            return None;
        }
        self.fetch_more_in_flight = true;
        Some(FetchRequest {
            topic: self.topic,
            page: self.current_page + 1,
        })
    }
}

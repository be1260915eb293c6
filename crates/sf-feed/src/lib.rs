//! Feed library for Snapfact
//!
//! This crate provides the content model shared between the API and any
//! frontend, plus the client-side feed session state machine that drives
//! pagination, navigation and prefetching. It performs no I/O of its own:
//! operations that need a network fetch return a [`FetchRequest`] the host
//! resolves, and the result is fed back into the session.

mod item;
mod session;
mod topic;

pub use item::FeedItem;
pub use session::{Direction, FeedSession, FeedView, FetchRequest, PREFETCH_THRESHOLD};
pub use topic::{ParseTopicError, Topic};

/// Number of items in one feed page.
pub const PAGE_SIZE: usize = 5;

//! HTTP API for the Snapfact feed.
//!
//! One inbound surface (`GET /content/feed`) backed by one outbound
//! collaborator: a local Ollama text-generation endpoint.

pub mod config;
pub mod error;
pub mod feed;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::ApiState;

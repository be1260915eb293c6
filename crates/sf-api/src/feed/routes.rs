use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use sf_feed::{FeedItem, Topic};

use crate::{error::ApiError, state::ApiState};

/// Create the feed routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/content/feed", get(get_feed))
        .route("/content/topics", get(get_topics))
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    topic: String,
    page: Option<u32>,
}

/// One page of generated facts for a topic.
///
/// `topic` must be in the enumerated set (400 otherwise, nothing is
/// generated); `page` defaults to 1 and must be positive. Any generation
/// failure rejects the whole batch with a 500.
async fn get_feed(
    State(state): State<ApiState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    let topic: Topic = query.topic.parse()?;
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::InvalidPage);
    }

    tracing::debug!(%topic, page, "generating feed page");
    let items = state.facts.generate_page(topic, page).await?;
    Ok(Json(items))
}

/// The selectable topics, wire names, `for_you` included.
async fn get_topics() -> Json<Vec<&'static str>> {
    Json(Topic::ALL.iter().map(|t| t.as_str()).collect())
}

//! Fact batch generation.
//!
//! Stateless per request: one call produces exactly one page of
//! [`PAGE_SIZE`] facts, generated concurrently but returned in ascending
//! fact-number order. A single failed generation call fails the whole batch.

use std::fmt;
use std::sync::Arc;

use futures::future::try_join_all;
use rand::Rng;
use rand::seq::SliceRandom;
use sf_feed::{FeedItem, PAGE_SIZE, Topic};
use uuid::Uuid;

use crate::error::ApiError;

use super::cleanup::strip_generation_artifacts;
use super::generator::FactGenerator;

/// Fixed attribution for generated items.
pub const AUTHOR: &str = "AI Educator";

/// Generates pages of facts through a [`FactGenerator`].
#[derive(Clone)]
pub struct FactService {
    generator: Arc<dyn FactGenerator>,
}

impl FactService {
    /// Wrap a generator.
    pub fn new(generator: Arc<dyn FactGenerator>) -> Self {
        Self { generator }
    }

    /// Generate the facts for 1-based `page`: fact numbers
    /// `(page-1)*PAGE_SIZE+1 ..= page*PAGE_SIZE`.
    ///
    /// For `for_you`, each slot independently draws a uniformly random
    /// concrete topic. The generation calls run concurrently; the batch
    /// resolves only once all of them have, in slot order regardless of
    /// completion order.
    pub async fn generate_page(&self, topic: Topic, page: u32) -> Result<Vec<FeedItem>, ApiError> {
        let start = (page.max(1) as usize - 1) * PAGE_SIZE + 1;

        // Slot topics are resolved up front; thread_rng is not held across
        // await points.
        let slots: Vec<(Topic, usize)> = {
            let mut rng = rand::thread_rng();
            (0..PAGE_SIZE)
                .map(|slot| (resolve_topic(topic, &mut rng), start + slot))
                .collect()
        };

        let items = try_join_all(
            slots
                .into_iter()
                .map(|(topic, number)| self.generate_fact(topic, number)),
        )
        .await?;

        Ok(items)
    }

    async fn generate_fact(&self, topic: Topic, fact_number: usize) -> Result<FeedItem, ApiError> {
        let prompt = build_prompt(topic, fact_number);
        let raw = self.generator.generate(&prompt).await?;
        let body = strip_generation_artifacts(&raw);

        let (likes, saves) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(0..1000), rng.gen_range(0..100))
        };

        Ok(FeedItem {
            id: Uuid::new_v4().to_string(),
            title: format!("Interesting Fact About {} #{fact_number}", topic.title()),
            body,
            topic,
            author: AUTHOR.to_string(),
            likes,
            saves,
        })
    }
}

impl fmt::Debug for FactService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactService").finish_non_exhaustive()
    }
}

/// `for_you` draws a random concrete topic per slot; anything else is used
/// as-is.
fn resolve_topic(requested: Topic, rng: &mut impl Rng) -> Topic {
    if requested.is_for_you() {
        Topic::CONCRETE.choose(rng).copied().unwrap_or(requested)
    } else {
        requested
    }
}

fn build_prompt(topic: Topic, fact_number: usize) -> String {
    format!(
        "Generate an interesting educational fact about {topic}. This is fact number {fact_number}. \
         The fact should be 5-8 sentences long and be engaging and informative. \
         Return only the fact content, without any headings, numbers, or prefixes. \
         Do not include 'Fact Number', 'Fact', or any Markdown headings. Just the fact itself."
    )
}

use serde::{Deserialize, Serialize};

use crate::Topic;

/// One generated fact in the feed.
///
/// The wire field names (`_id`, `content`) match what the frontend consumes.
/// `likes` and `saves` are seeded with pseudo-random values at generation
/// time and incremented session-locally; they are never written back to the
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Opaque unique identifier, fresh per generated item.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title, e.g. `Interesting Fact About Science #7`.
    pub title: String,
    /// Cleaned fact text, 5-8 sentences.
    #[serde(rename = "content")]
    pub body: String,
    /// Concrete topic the fact was generated for (never `for_you`).
    pub topic: Topic,
    /// Fixed attribution string.
    pub author: String,
    /// Like counter.
    pub likes: u32,
    /// Save counter.
    pub saves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let item = FeedItem {
            id: "abc-123".to_string(),
            title: "Interesting Fact About Space #1".to_string(),
            body: "Neutron stars spin fast.".to_string(),
            topic: Topic::Space,
            author: "AI Educator".to_string(),
            likes: 12,
            saves: 3,
        };

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], "abc-123");
        assert_eq!(json["content"], "Neutron stars spin fast.");
        assert_eq!(json["topic"], "space");
        assert!(json.get("id").is_none());
        assert!(json.get("body").is_none());

        let back: FeedItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feed topic.
///
/// `ForYou` is the special mixed feed: it is a valid request topic but is
/// never attached to a generated item, which always carries the concrete
/// topic it was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Motivation,
    History,
    Science,
    Space,
    ForYou,
    Technology,
    Nature,
    Health,
    ComputerScience,
}

impl Topic {
    /// Every selectable topic, including the special `for_you` feed.
    pub const ALL: [Self; 9] = [
        Self::Motivation,
        Self::History,
        Self::Science,
        Self::Space,
        Self::ForYou,
        Self::Technology,
        Self::Nature,
        Self::Health,
        Self::ComputerScience,
    ];

    /// The concrete topics a `for_you` request draws from.
    pub const CONCRETE: [Self; 8] = [
        Self::Motivation,
        Self::History,
        Self::Science,
        Self::Space,
        Self::Technology,
        Self::Nature,
        Self::Health,
        Self::ComputerScience,
    ];

    /// The snake_case wire name, as used in query strings and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::History => "history",
            Self::Science => "science",
            Self::Space => "space",
            Self::ForYou => "for_you",
            Self::Technology => "technology",
            Self::Nature => "nature",
            Self::Health => "health",
            Self::ComputerScience => "computer_science",
        }
    }

    /// Wire name with the first letter uppercased, for item titles
    /// (e.g. `computer_science` -> `Computer_science`).
    pub fn title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether this is the special mixed feed rather than a concrete topic.
    pub const fn is_for_you(self) -> bool {
        matches!(self, Self::ForYou)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a topic string is not in the enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid topic '{0}'. Must be one of: motivation, history, science, space, for_you, technology, nature, health, computer_science"
)]
pub struct ParseTopicError(pub String);

impl FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTopicError(s.to_string()))
    }
}

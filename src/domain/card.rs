use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed interval of estimated points. `min <= max` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateRange {
    pub min: f64,
    pub max: f64,
}

impl EstimateRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    pub fn is_range(&self) -> bool {
        self.min != self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Renders `3` or `3 to 5`.
impl fmt::Display for EstimateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_range() {
            write!(f, "{} to {}", self.min, self.max)
        } else {
            write!(f, "{}", self.min)
        }
    }
}

/// Points extracted from one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub consumed: f64,
    pub estimated: EstimateRange,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.consumed == 0.0 && self.estimated.is_zero()
    }
}

/// A card as read from the host page, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Host-side handle used to write results back to the right node.
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CardSnapshot {
    /// Last URL segment, or `/` when the card has no link.
    pub fn identifier(&self) -> String {
        self.url
            .as_deref()
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
            .unwrap_or("/")
            .to_string()
    }
}

/// Decode the JSON array the host stores in a card's label attribute.
///
/// Anything that is not an array of strings yields no labels.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|err| {
        if !raw.trim().is_empty() {
            tracing::debug!(raw, error = %err, "Ignoring malformed card label list");
        }
        Vec::new()
    })
}

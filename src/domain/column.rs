use serde::{Deserialize, Serialize};

use super::card::{Annotation, CardSnapshot, EstimateRange};

/// One board column as read from the host page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    /// Host-side handle used to write the column total back.
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<CardSnapshot>,
}

/// Running sums for a column or a whole board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub consumed: f64,
    pub estimated: EstimateRange,
}

impl Totals {
    /// Fold one card into the sums. Zero values are "unset" and skipped.
    pub fn add(self, annotation: &Annotation, count_estimate: bool) -> Self {
        let mut next = self;
        if annotation.consumed > 0.0 {
            next.consumed += annotation.consumed;
        }
        if count_estimate {
            if annotation.estimated.min > 0.0 {
                next.estimated.min += annotation.estimated.min;
            }
            if annotation.estimated.max > 0.0 {
                next.estimated.max += annotation.estimated.max;
            }
        }
        next
    }

    pub fn merge(self, other: &Totals) -> Self {
        Self {
            consumed: self.consumed + other.consumed,
            estimated: EstimateRange {
                min: self.estimated.min + other.estimated.min,
                max: self.estimated.max + other.estimated.max,
            },
        }
    }
}

/// Column names exempt from estimate aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    names: Vec<String>,
}

impl ExclusionPolicy {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, column_name: &str) -> bool {
        let column_name = column_name.trim();
        self.names.iter().any(|name| name == column_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAggregate {
    pub key: String,
    pub id: String,
    /// Display title with annotations removed.
    pub title: String,
    pub url: Option<String>,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAggregate {
    pub key: String,
    pub name: String,
    pub excluded: bool,
    pub totals: Totals,
    pub cards: Vec<CardAggregate>,
}

/// Flat export row, one per card. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Column")]
    pub column: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Min. estimate")]
    pub min_estimate: f64,
    #[serde(rename = "Max. estimate")]
    pub max_estimate: f64,
    #[serde(rename = "Consumed")]
    pub consumed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardAggregate {
    pub columns: Vec<ColumnAggregate>,
    pub totals: Totals,
    pub records: Vec<ExportRecord>,
}

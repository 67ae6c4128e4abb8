//! Point annotations embedded in card titles.
//!
//! A title may carry an estimate in brackets and consumed points in
//! parentheses:
//!
//! - `Fix login [3]` estimates 3 points
//! - `Fix login [3-5]` estimates between 3 and 5 points
//! - `Fix login [3-5] (2)` additionally records 2 consumed points
//!
//! Cards without a bracketed estimate fall back to their size label
//! (`xl`, `l`, `m`, `s`).

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{Annotation, EstimateRange, SizeLabel};

fn estimate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([0-9]+)(?:-([0-9]+))?\]").expect("valid estimate pattern")
    })
}

fn consumed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(([0-9]+(?:\.[0-9]+)?)\)").expect("valid consumed pattern")
    })
}

/// Result of parsing one title.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTitle {
    pub annotation: Annotation,
    /// Title with every annotation removed, ready to be written back.
    pub title: String,
}

/// Extract the annotation from `text`, falling back to the size label found
/// in `labels` when the title has no bracketed estimate.
pub fn parse<S: AsRef<str>>(text: &str, labels: &[S]) -> ParsedTitle {
    let (mut estimated, mut consumed) = match SizeLabel::find_in(labels) {
        Some(size) => {
            let (estimate, consumed) = size.default_points();
            (EstimateRange::single(estimate), consumed)
        }
        None => (EstimateRange::default(), 0.0),
    };

    if let Some(range) = parse_estimate(text) {
        estimated = range;
    }

    if let Some(value) = parse_consumed(text) {
        consumed = value;
    }

    ParsedTitle {
        annotation: Annotation {
            consumed,
            estimated,
        },
        title: strip(text),
    }
}

/// First bracketed estimate in `text`.
pub fn parse_estimate(text: &str) -> Option<EstimateRange> {
    let captures = estimate_pattern().captures(text)?;
    let min = parse_points(captures.get(1)?.as_str())?;
    let max = match captures.get(2) {
        Some(upper) => parse_points(upper.as_str())?,
        None => min,
    };
    Some(EstimateRange::new(min, max))
}

/// First parenthesized consumed value in `text`.
pub fn parse_consumed(text: &str) -> Option<f64> {
    let captures = consumed_pattern().captures(text)?;
    parse_points(captures.get(1)?.as_str())
}

/// Remove every annotation from `text` and trim the result.
///
/// Stripping is repeated until nothing matches, so the output never contains
/// an annotation and `strip(strip(t)) == strip(t)`.
pub fn strip(text: &str) -> String {
    let mut current = text.trim().to_string();

    loop {
        let next = {
            let without_estimate = estimate_pattern().replace_all(&current, "");
            consumed_pattern()
                .replace_all(&without_estimate, "")
                .trim()
                .to_string()
        };

        if next == current {
            return current;
        }
        current = next;
    }
}

fn parse_points(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// T-shirt size label attached to a card, used when the title carries no
/// bracketed estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeLabel {
    Xl,
    L,
    M,
    S,
}

impl SizeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::Xl => "xl",
            SizeLabel::L => "l",
            SizeLabel::M => "m",
            SizeLabel::S => "s",
        }
    }

    pub fn all() -> &'static [SizeLabel] {
        &[SizeLabel::Xl, SizeLabel::L, SizeLabel::M, SizeLabel::S]
    }

    /// Default `(estimated, consumed)` points for the size.
    pub fn default_points(&self) -> (f64, f64) {
        match self {
            SizeLabel::Xl => (6.0, 4.0),
            SizeLabel::L => (3.0, 2.0),
            SizeLabel::M => (1.0, 1.0),
            SizeLabel::S => (0.5, 0.5),
        }
    }

    /// Last recognised size label in `labels`, if any.
    pub fn find_in<S: AsRef<str>>(labels: &[S]) -> Option<SizeLabel> {
        labels
            .iter()
            .filter_map(|label| label.as_ref().parse().ok())
            .last()
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SizeLabel::all()
            .iter()
            .copied()
            .find(|size| size.as_str() == normalized)
            .ok_or_else(|| format!("Invalid size label: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("XL".parse::<SizeLabel>(), Ok(SizeLabel::Xl));
        assert_eq!(" m ".parse::<SizeLabel>(), Ok(SizeLabel::M));
        assert!("medium".parse::<SizeLabel>().is_err());
    }

    #[test]
    fn test_last_size_label_wins() {
        let labels = ["bug", "s", "frontend", "xl"];
        assert_eq!(SizeLabel::find_in(&labels), Some(SizeLabel::Xl));
    }

    #[test]
    fn test_no_size_label() {
        let labels = ["bug", "enhancement"];
        assert_eq!(SizeLabel::find_in(&labels), None);
    }
}

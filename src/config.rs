use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &["Later", "Done", "Recette / Review"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Columns whose cards never count toward estimate totals.
    pub excluded_columns: Vec<String>,
    pub ready_poll_interval: Duration,
    pub column_delimiter: String,
    pub line_delimiter: String,
    /// Class carried by card container nodes on board pages.
    pub card_marker: String,
    /// Class carried by the issue list container on list pages.
    pub issue_list_marker: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let defaults = Self::default();

        Ok(Self {
            excluded_columns: std::env::var("POINTS_EXCLUDED_COLUMNS")
                .map(|v| parse_name_list(&v))
                .unwrap_or(defaults.excluded_columns),
            ready_poll_interval: std::env::var("POINTS_READY_POLL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.ready_poll_interval),
            column_delimiter: std::env::var("POINTS_CSV_COLUMN_DELIMITER")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.column_delimiter),
            line_delimiter: std::env::var("POINTS_CSV_LINE_DELIMITER")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.line_delimiter),
            card_marker: std::env::var("POINTS_CARD_MARKER")
                .unwrap_or(defaults.card_marker),
            issue_list_marker: std::env::var("POINTS_ISSUE_LIST_MARKER")
                .unwrap_or(defaults.issue_list_marker),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_columns: DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ready_poll_interval: Duration::from_millis(10),
            column_delimiter: ",".into(),
            line_delimiter: "\n".into(),
            card_marker: "js-project-column-card".into(),
            issue_list_marker: "new-discussion-timeline".into(),
        }
    }
}

fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_terminal_columns() {
        let config = Config::default();
        assert_eq!(config.excluded_columns, vec!["Later", "Done", "Recette / Review"]);
        assert_eq!(config.ready_poll_interval, Duration::from_millis(10));
    }

    #[test]
    fn test_parse_name_list_trims_and_skips_empty() {
        assert_eq!(
            parse_name_list(" Done , ,Archive,"),
            vec!["Done".to_string(), "Archive".to_string()]
        );
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let config = Config::from_env().unwrap();
        assert!(!config.column_delimiter.is_empty());
        assert!(!config.line_delimiter.is_empty());
    }
}

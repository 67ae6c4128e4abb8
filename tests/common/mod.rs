#![allow(dead_code)]

use std::cell::Cell;

use board_points::domain::{parse_label_list, CardSnapshot, PointsError};
use board_points::infrastructure::{CardRead, ColumnRead, Downloader, PageHost};
use board_points::services::{CardRender, ObservationRoot};

#[derive(Debug, Clone, Default)]
pub struct FakeCard {
    pub key: String,
    /// Raw title attribute. `None` simulates a card without a title element.
    pub data_title: Option<String>,
    pub display_title: String,
    /// Raw label attribute, a JSON array of label names.
    pub labels: String,
    pub url: Option<String>,
    pub badges: Option<String>,
    /// `false` simulates a card without a details container to attach badges to.
    pub has_details: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FakeColumn {
    pub key: String,
    /// `None` simulates a column without a header element.
    pub name: Option<String>,
    pub cards: Vec<FakeCard>,
    pub total: Option<String>,
}

/// In-memory stand-in for the tracker page.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub path: String,
    pub polls_until_ready: Cell<usize>,
    pub roots: Vec<ObservationRoot>,
    pub columns: Vec<FakeColumn>,
    pub issues: Vec<FakeCard>,
    pub has_board_header: bool,
    pub board_total: Option<String>,
    pub board_total_writes: usize,
    pub issue_passes: Cell<usize>,
}

impl FakeHost {
    pub fn board(path: &str) -> Self {
        Self {
            path: path.to_string(),
            roots: vec![ObservationRoot::BoardContainer, ObservationRoot::SearchBox],
            has_board_header: true,
            ..Default::default()
        }
    }

    pub fn issue_list(path: &str) -> Self {
        Self {
            path: path.to_string(),
            roots: vec![ObservationRoot::IssueContainer],
            ..Default::default()
        }
    }

    pub fn ready_after(self, polls: usize) -> Self {
        self.polls_until_ready.set(polls);
        self
    }

    pub fn column(mut self, name: &str, cards: Vec<FakeCard>) -> Self {
        let key = format!("column-{}", self.columns.len());
        self.columns.push(FakeColumn {
            key,
            name: Some(name.to_string()),
            cards,
            total: None,
        });
        self
    }

    pub fn issue(mut self, issue: FakeCard) -> Self {
        self.issues.push(issue);
        self
    }

    pub fn find_card(&self, key: &str) -> Option<&FakeCard> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .chain(self.issues.iter())
            .find(|card| card.key == key)
    }

    pub fn column_total(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.name.as_deref() == Some(name))
            .and_then(|column| column.total.as_deref())
    }

    pub fn column_total_at(&self, index: usize) -> Option<&str> {
        self.columns.get(index).and_then(|column| column.total.as_deref())
    }

    fn find_card_mut(&mut self, key: &str) -> Option<&mut FakeCard> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.cards.iter_mut())
            .chain(self.issues.iter_mut())
            .find(|card| card.key == key)
    }
}

pub fn card(key: &str, title: &str, labels: &[&str]) -> FakeCard {
    FakeCard {
        key: key.to_string(),
        data_title: Some(title.to_string()),
        display_title: title.to_string(),
        labels: serde_json::to_string(labels).unwrap(),
        url: Some(format!("https://example.com/acme/site/issues/{}", key)),
        badges: None,
        has_details: true,
    }
}

fn snapshot(card: &FakeCard, title: &str) -> CardSnapshot {
    CardSnapshot {
        key: card.key.clone(),
        title: title.to_string(),
        labels: parse_label_list(&card.labels),
        url: card.url.clone(),
    }
}

impl PageHost for FakeHost {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn is_ready(&self) -> bool {
        let remaining = self.polls_until_ready.get();
        if remaining == 0 {
            return true;
        }
        self.polls_until_ready.set(remaining - 1);
        false
    }

    fn observation_roots(&self) -> Vec<ObservationRoot> {
        self.roots.clone()
    }

    fn read_columns(&self) -> Vec<Result<ColumnRead, PointsError>> {
        self.columns
            .iter()
            .map(|column| -> Result<ColumnRead, PointsError> {
                let name = column
                    .name
                    .clone()
                    .ok_or_else(|| PointsError::missing("column", "span.js-project-column-name"))?;

                let cards = column
                    .cards
                    .iter()
                    .map(|card| match &card.data_title {
                        Some(title) => Ok(snapshot(card, title)),
                        None => Err(PointsError::missing(
                            format!("card {}", card.key),
                            "a.js-project-card-issue-link",
                        )),
                    })
                    .collect();

                Ok(ColumnRead {
                    key: column.key.clone(),
                    name,
                    cards,
                })
            })
            .collect()
    }

    fn read_issues(&self) -> Vec<CardRead> {
        self.issue_passes.set(self.issue_passes.get() + 1);
        // Issue rows are parsed from their visible text, which earlier passes
        // may already have stripped.
        self.issues
            .iter()
            .map(|issue| Ok(snapshot(issue, &issue.display_title)))
            .collect()
    }

    fn write_card(&mut self, render: &CardRender) -> Result<(), PointsError> {
        let card = self
            .find_card_mut(&render.key)
            .ok_or_else(|| PointsError::Host(format!("unknown card {}", render.key)))?;

        card.display_title = render.title.clone();
        if !card.has_details {
            return Err(PointsError::missing(
                format!("card {}", render.key),
                "div.js-project-issue-details-container",
            ));
        }
        card.badges = Some(render.badges.clone());
        Ok(())
    }

    fn write_column_total(&mut self, key: &str, markup: &str) -> Result<(), PointsError> {
        let target = self
            .columns
            .iter_mut()
            .find(|column| column.key == key)
            .ok_or_else(|| PointsError::Host(format!("unknown column {}", key)))?;
        target.total = Some(markup.to_string());
        Ok(())
    }

    fn write_board_total(&mut self, markup: &str) -> Result<(), PointsError> {
        if !self.has_board_header {
            return Err(PointsError::missing("board", "div.project-header-controls"));
        }
        self.board_total = Some(markup.to_string());
        self.board_total_writes += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingDownloader {
    pub downloads: Vec<(String, String)>,
}

impl Downloader for RecordingDownloader {
    fn download(&mut self, text: &str, filename: &str) -> Result<(), PointsError> {
        self.downloads.push((text.to_string(), filename.to_string()));
        Ok(())
    }
}

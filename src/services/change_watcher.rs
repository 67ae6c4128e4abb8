use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::PointsError;

/// Page containers that may be observed for structural changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationRoot {
    BoardContainer,
    IssueContainer,
    SearchBox,
}

/// A node added to or removed from an observed container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationNode {
    #[serde(default)]
    pub classes: Vec<String>,
}

impl MutationNode {
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// One observer callback's worth of mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationBatch {
    #[serde(default)]
    pub added: Vec<MutationNode>,
    #[serde(default)]
    pub removed: Vec<MutationNode>,
}

impl MutationBatch {
    pub fn nodes(&self) -> impl Iterator<Item = &MutationNode> {
        self.added.iter().chain(self.removed.iter())
    }
}

/// Pass to run in response to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Board,
    IssueList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Idle,
    Watching,
}

#[derive(Debug, Clone)]
pub struct ChangeWatcher {
    state: WatcherState,
    roots: Vec<ObservationRoot>,
    card_marker: String,
    issue_list_marker: String,
}

impl ChangeWatcher {
    pub fn new(card_marker: impl Into<String>, issue_list_marker: impl Into<String>) -> Self {
        Self {
            state: WatcherState::Idle,
            roots: Vec::new(),
            card_marker: card_marker.into(),
            issue_list_marker: issue_list_marker.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.card_marker.clone(), config.issue_list_marker.clone())
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn roots(&self) -> &[ObservationRoot] {
        &self.roots
    }

    /// Move from `Idle` to `Watching`. Happens once per page.
    pub fn start(&mut self, roots: Vec<ObservationRoot>) -> Result<(), PointsError> {
        if self.state == WatcherState::Watching {
            return Err(PointsError::AlreadyWatching);
        }

        if roots.is_empty() {
            tracing::warn!("No observable container on this page, badges will not refresh");
        } else {
            tracing::info!(roots = ?roots, "Watching page for card changes");
        }

        self.roots = roots;
        self.state = WatcherState::Watching;
        Ok(())
    }

    /// Decide which pass, if any, a batch calls for. Card changes take
    /// precedence over issue-list changes.
    pub fn classify(&self, batch: &MutationBatch) -> Option<Trigger> {
        if self.state != WatcherState::Watching {
            return None;
        }

        if batch.nodes().any(|node| node.has_class(&self.card_marker)) {
            return Some(Trigger::Board);
        }

        if batch.nodes().any(|node| node.has_class(&self.issue_list_marker)) {
            return Some(Trigger::IssueList);
        }

        None
    }
}

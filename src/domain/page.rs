use std::fmt;

use serde::{Deserialize, Serialize};

use super::PointsError;

/// Which kind of tracker page the engine is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Board,
    IssueList,
    Other,
}

impl PageKind {
    /// Detect the page kind from a URL path such as `/owner/repo/projects/3`.
    pub fn from_path(path: &str) -> Self {
        match path.split('/').nth(3) {
            Some("projects") => PageKind::Board,
            Some("issues") => PageKind::IssueList,
            _ => PageKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Board => "board",
            PageKind::IssueList => "issue_list",
            PageKind::Other => "other",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner and project segments of the current page path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPath {
    pub owner: String,
    pub project: String,
}

impl BoardPath {
    pub fn from_path(path: &str) -> Result<Self, PointsError> {
        let mut segments = path.split('/').skip(1);
        let owner = segments.next().filter(|s| !s.is_empty());
        let project = segments.next().filter(|s| !s.is_empty());

        match (owner, project) {
            (Some(owner), Some(project)) => Ok(Self {
                owner: owner.to_string(),
                project: project.to_string(),
            }),
            _ => Err(PointsError::InvalidPath(path.to_string())),
        }
    }

    pub fn export_filename(&self) -> String {
        format!("export-{}/{}.csv", self.owner, self.project)
    }
}

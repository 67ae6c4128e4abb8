use crate::domain::{CardSnapshot, PointsError};
use crate::services::badge_renderer::CardRender;
use crate::services::change_watcher::ObservationRoot;

pub type CardRead = Result<CardSnapshot, PointsError>;

/// A column as read from the page. Cards that could not be read carry the
/// error in place so their siblings are still processed.
#[derive(Debug)]
pub struct ColumnRead {
    pub key: String,
    pub name: String,
    pub cards: Vec<CardRead>,
}

pub trait PageHost {
    /// URL path of the current page, e.g. `/owner/repo/projects/1`.
    fn path(&self) -> String;

    /// Whether the document has finished loading.
    fn is_ready(&self) -> bool;

    /// Containers present on the page that can be observed for changes.
    fn observation_roots(&self) -> Vec<ObservationRoot>;

    fn read_columns(&self) -> Vec<Result<ColumnRead, PointsError>>;

    fn read_issues(&self) -> Vec<CardRead>;

    /// Replace the card's title and its badge node.
    fn write_card(&mut self, render: &CardRender) -> Result<(), PointsError>;

    /// Replace the total node next to the header of the column with `key`.
    fn write_column_total(&mut self, key: &str, markup: &str) -> Result<(), PointsError>;

    /// Replace the total node in the board header.
    fn write_board_total(&mut self, markup: &str) -> Result<(), PointsError>;
}

/// Client-side file download.
pub trait Downloader {
    fn download(&mut self, text: &str, filename: &str) -> Result<(), PointsError>;
}

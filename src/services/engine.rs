use std::time::Duration;

use futures::Stream;
use tokio_stream::StreamExt as _;

use crate::config::Config;
use crate::domain::{
    BoardAggregate, BoardPath, ColumnSnapshot, ExclusionPolicy, PageKind, PointsError,
};
use crate::infrastructure::{Downloader, PageHost};

use super::aggregator;
use super::badge_renderer::{self, CardRender};
use super::change_watcher::{ChangeWatcher, MutationBatch, Trigger};
use super::export;

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub trigger: Trigger,
    /// Cards or issue rows written back successfully.
    pub rendered: usize,
    /// Cards, columns or totals skipped because the page was missing an element.
    pub failed: usize,
}

impl PassSummary {
    fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            rendered: 0,
            failed: 0,
        }
    }
}

/// Drives parsing, aggregation and rendering against a host page.
pub struct PointsEngine<H: PageHost> {
    host: H,
    config: Config,
    policy: ExclusionPolicy,
    watcher: ChangeWatcher,
}

impl<H: PageHost> PointsEngine<H> {
    pub fn new(host: H, config: Config) -> Self {
        let policy = ExclusionPolicy::new(config.excluded_columns.iter().cloned());
        let watcher = ChangeWatcher::from_config(&config);

        Self {
            host,
            config,
            policy,
            watcher,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn watcher(&self) -> &ChangeWatcher {
        &self.watcher
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn page_kind(&self) -> PageKind {
        PageKind::from_path(&self.host.path())
    }

    /// Poll the host until the document is loaded. There is no timeout.
    pub async fn wait_until_ready(&self) {
        let period = self.config.ready_poll_interval.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;
            if self.host.is_ready() {
                tracing::debug!("Page ready");
                return;
            }
        }
    }

    /// Wait for the page, run the first pass and start watching.
    pub async fn start(&mut self) -> Result<Option<PassSummary>, PointsError> {
        self.wait_until_ready().await;

        let kind = self.page_kind();
        tracing::info!(page = %kind, "Starting board points");

        let summary = match kind {
            PageKind::Board => Some(self.refresh_board()),
            PageKind::IssueList => Some(self.refresh_issues()),
            PageKind::Other => None,
        };

        let roots = self.host.observation_roots();
        self.watcher.start(roots)?;

        Ok(summary)
    }

    /// Start, then re-aggregate for every relevant batch until the stream
    /// ends (page unload).
    pub async fn run<S>(&mut self, mut batches: S) -> Result<(), PointsError>
    where
        S: Stream<Item = MutationBatch> + Unpin,
    {
        self.start().await?;

        while let Some(batch) = batches.next().await {
            self.handle_batch(&batch);
        }

        tracing::debug!("Mutation stream closed");
        Ok(())
    }

    /// Run at most one pass for the batch.
    pub fn handle_batch(&mut self, batch: &MutationBatch) -> Option<PassSummary> {
        let trigger = self.watcher.classify(batch)?;
        tracing::debug!(?trigger, nodes = batch.nodes().count(), "Relevant mutation batch");

        Some(match trigger {
            Trigger::Board => self.refresh_board(),
            Trigger::IssueList => self.refresh_issues(),
        })
    }

    pub fn refresh_board(&mut self) -> PassSummary {
        self.board_pass().1
    }

    pub fn refresh_issues(&mut self) -> PassSummary {
        let mut summary = PassSummary::new(Trigger::IssueList);
        let mut issues = Vec::new();

        for read in self.host.read_issues() {
            match read {
                Ok(issue) => issues.push(issue),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping unreadable issue row");
                    summary.failed += 1;
                }
            }
        }

        for issue in aggregator::annotate_issues(&issues) {
            let render = badge_renderer::render_card(&issue);
            self.write_card(&render, &mut summary);
        }

        tracing::debug!(
            rendered = summary.rendered,
            failed = summary.failed,
            "Issue list pass complete"
        );
        summary
    }

    /// Run a fresh board pass and hand its records to the downloader.
    ///
    /// Returns `false` when the board has no cards and nothing was exported.
    pub fn export_board<D: Downloader>(&mut self, downloader: &mut D) -> Result<bool, PointsError> {
        let (board, _) = self.board_pass();

        let text = export::to_delimited_text(
            &board.records,
            &self.config.column_delimiter,
            &self.config.line_delimiter,
        )?;

        let Some(text) = text else {
            tracing::debug!("Nothing to export");
            return Ok(false);
        };

        let filename = BoardPath::from_path(&self.host.path())?.export_filename();
        downloader.download(&text, &filename)?;

        tracing::info!(
            filename = filename.as_str(),
            records = board.records.len(),
            "Exported board"
        );
        Ok(true)
    }

    fn board_pass(&mut self) -> (BoardAggregate, PassSummary) {
        let mut summary = PassSummary::new(Trigger::Board);
        let columns = self.read_board(&mut summary);

        let board = aggregator::aggregate(&columns, &self.policy);
        let render = badge_renderer::render_board(&board);

        for column in &render.columns {
            for card in &column.cards {
                self.write_card(card, &mut summary);
            }

            if let Err(err) = self.host.write_column_total(&column.key, &column.total) {
                tracing::warn!(
                    column = column.name.as_str(),
                    key = column.key.as_str(),
                    error = %err,
                    "Failed to render column total"
                );
                summary.failed += 1;
            }
        }

        if let Err(err) = self.host.write_board_total(&render.total) {
            tracing::warn!(error = %err, "Failed to render board total");
            summary.failed += 1;
        }

        tracing::debug!(
            columns = board.columns.len(),
            rendered = summary.rendered,
            failed = summary.failed,
            consumed = board.totals.consumed,
            estimated_min = board.totals.estimated.min,
            estimated_max = board.totals.estimated.max,
            "Board pass complete"
        );

        (board, summary)
    }

    fn read_board(&self, summary: &mut PassSummary) -> Vec<ColumnSnapshot> {
        let mut columns = Vec::new();

        for read in self.host.read_columns() {
            let column = match read {
                Ok(column) => column,
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping unreadable column");
                    summary.failed += 1;
                    continue;
                }
            };

            let mut cards = Vec::with_capacity(column.cards.len());
            for card in column.cards {
                match card {
                    Ok(card) => cards.push(card),
                    Err(err) => {
                        tracing::warn!(
                            column = column.name.as_str(),
                            error = %err,
                            "Skipping unreadable card"
                        );
                        summary.failed += 1;
                    }
                }
            }

            columns.push(ColumnSnapshot {
                key: column.key,
                name: column.name,
                cards,
            });
        }

        columns
    }

    fn write_card(&mut self, render: &CardRender, summary: &mut PassSummary) {
        match self.host.write_card(render) {
            Ok(()) => summary.rendered += 1,
            Err(err) => {
                tracing::warn!(card = render.key.as_str(), error = %err, "Failed to render card");
                summary.failed += 1;
            }
        }
    }
}

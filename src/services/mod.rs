pub mod aggregator;
pub mod annotation_parser;
pub mod badge_renderer;
pub mod change_watcher;
pub mod engine;
pub mod export;

pub use annotation_parser::ParsedTitle;
pub use badge_renderer::{BoardRender, CardRender, ColumnRender};
pub use change_watcher::{
    ChangeWatcher, MutationBatch, MutationNode, ObservationRoot, Trigger, WatcherState,
};
pub use engine::{PassSummary, PointsEngine};
pub use export::to_delimited_text;

pub mod card;
pub mod column;
pub mod error;
pub mod page;
pub mod size;

pub use card::{parse_label_list, Annotation, CardSnapshot, EstimateRange};
pub use column::{
    BoardAggregate, CardAggregate, ColumnAggregate, ColumnSnapshot, ExclusionPolicy,
    ExportRecord, Totals,
};
pub use error::PointsError;
pub use page::{BoardPath, PageKind};
pub use size::SizeLabel;

pub mod host;

pub use host::{CardRead, ColumnRead, Downloader, PageHost};

pub mod connectors;
pub mod dataset;

pub use connectors::{ColumnStats, DataValidator, DatasetSummary, TextConnector};
pub use dataset::Dataset;

mod text;
mod types;
mod validator;

pub use text::TextConnector;
pub use types::{
    ColumnStats,
    DatasetSummary,
};
pub use validator::DataValidator;

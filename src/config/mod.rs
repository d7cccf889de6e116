pub mod traits;
pub mod data;
pub mod evaluation;
pub mod report;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use data::DataConfig;
pub use evaluation::{EvaluationConfig, EvaluationMethod};
pub use report::{OutputFormat, ReportConfig};
pub use traits::ConfigSection;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatselectError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Dataset contains no instances")]
    EmptyDataset,

    #[error("Inconsistent feature count at line {line}: expected {expected}, got {actual}")]
    InconsistentFeatureCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Insufficient instances: need at least {required}, have {actual}")]
    InsufficientInstances { required: usize, actual: usize },

    #[error("Feature {feature} is outside the valid range 1..={num_features}")]
    InvalidFeature { feature: usize, num_features: usize },

    #[error("Invalid feature subset: {0}")]
    InvalidSubset(String),

    #[error("Invalid search method selector: {0}")]
    InvalidSelector(String),

    #[error("Dataset has already been normalized")]
    AlreadyNormalized,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, FeatselectError>;

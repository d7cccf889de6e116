use super::{
    data::DataConfig,
    evaluation::EvaluationConfig,
    report::ReportConfig,
    traits::ConfigSection,
};
use crate::error::FeatselectError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment overrides look like `FEATSELECT_REPORT__DECIMALS=3`
pub const ENV_PREFIX: &str = "FEATSELECT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub evaluation: EvaluationConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FeatselectError> {
        self.data.validate()?;
        self.evaluation.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Build from an optional file plus environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, FeatselectError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(FeatselectError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(::config::File::from(path));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()?
            .try_deserialize()
            .map_err(|e| FeatselectError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(Self { config })
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FeatselectError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FeatselectError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| FeatselectError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FeatselectError> {
        let toml_str = toml::to_string_pretty(&self.config)?;

        std::fs::write(path, toml_str)
            .map_err(|e| FeatselectError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&mut self, f: F) -> Result<(), FeatselectError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

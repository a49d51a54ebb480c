// JSON file dataset source
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::DashboardError;
use crate::domain::weather::WeatherDataset;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a dataset prepared by some external acquisition job
#[derive(Debug, Clone)]
pub struct JsonFileDatasetSource {
    path: PathBuf,
}

impl JsonFileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A readable but malformed dataset (e.g. a missing numeric field) is a
/// validation failure, not an unavailable source.
pub fn parse_dataset(json: &str) -> Result<WeatherDataset, DashboardError> {
    serde_json::from_str(json)
        .map_err(|e| DashboardError::validation(format!("malformed weather dataset: {}", e)))
}

#[async_trait]
impl DatasetSource for JsonFileDatasetSource {
    async fn load(&self) -> Result<WeatherDataset> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset {}", self.path.display()))?;

        let dataset = parse_dataset(&contents).map_err(|e| match e {
            DashboardError::Validation(msg) => {
                DashboardError::validation(format!("{} in {}", msg, self.path.display()))
            }
            other => other,
        })?;

        tracing::debug!(
            "Loaded dataset from {}: {} hourly readings, {} forecast days",
            self.path.display(),
            dataset.hourly_data.len(),
            dataset.forecast.len()
        );

        Ok(dataset)
    }
}

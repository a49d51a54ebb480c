// Dataset source trait - Where a dashboard's input comes from
use crate::domain::weather::WeatherDataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load the full dataset for one dashboard build
    async fn load(&self) -> anyhow::Result<WeatherDataset>;
}

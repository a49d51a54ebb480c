// Dashboard service - Use case for building the weather dashboard
use crate::application::assembler::DashboardAssembler;
use crate::application::dataset_source::DatasetSource;
use crate::domain::dashboard::DashboardViewModel;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DatasetSource>,
    assembler: Arc<DashboardAssembler>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DatasetSource>, assembler: DashboardAssembler) -> Self {
        Self {
            source,
            assembler: Arc::new(assembler),
        }
    }

    /// Loads a fresh dataset and rebuilds the view model from scratch.
    ///
    /// Pipeline failures stay downcastable to `DashboardError`.
    pub async fn get_dashboard(&self) -> anyhow::Result<DashboardViewModel> {
        let dataset = self.source.load().await?;
        let view = self.assembler.assemble(&dataset)?;
        Ok(view)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::assembler::tests::sample_dataset;
    use crate::domain::error::DashboardError;
    use crate::domain::weather::{MonthlyPrecipitation, WeatherDataset};
    use crate::infrastructure::config::PipelineConfig;
    use async_trait::async_trait;

    pub(crate) struct StaticSource(pub Option<WeatherDataset>);

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn load(&self) -> anyhow::Result<WeatherDataset> {
            self.0
                .clone()
                .ok_or_else(|| anyhow::anyhow!("dataset unavailable"))
        }
    }

    fn service(dataset: Option<WeatherDataset>) -> DashboardService {
        DashboardService::new(
            Arc::new(StaticSource(dataset)),
            DashboardAssembler::from_config(&PipelineConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let view = service(Some(sample_dataset())).get_dashboard().await.unwrap();
        assert_eq!(view.current.location, "Buenos Aires, Argentina");
    }

    #[tokio::test]
    async fn test_pipeline_error_is_downcastable() {
        let mut dataset = sample_dataset();
        dataset.precipitation.push(MonthlyPrecipitation::new("Mar", -1.0));
        let err = service(Some(dataset)).get_dashboard().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let err = service(None).get_dashboard().await.unwrap_err();
        assert!(err.downcast_ref::<DashboardError>().is_none());
    }
}

// Dashboard assembler - Composes every panel into one view model
use crate::application::distribution::{CategoryPalette, DistributionNormalizer};
use crate::application::forecast_scaler::{build_forecast_rows, check_scale_max};
use crate::application::icon_resolver::IconResolver;
use crate::application::precipitation::build_precipitation_series;
use crate::application::trend_series::build_trend_series;
use crate::domain::dashboard::{CurrentSummary, DashboardViewModel, UvRisk};
use crate::domain::error::DashboardError;
use crate::domain::weather::{CurrentConditions, WeatherDataset};
use crate::infrastructure::config::PipelineConfig;

/// All-or-nothing: the first failing panel aborts the whole assembly.
#[derive(Debug, Clone)]
pub struct DashboardAssembler {
    scale_max: f64,
    icons: IconResolver,
    normalizer: DistributionNormalizer,
}

impl DashboardAssembler {
    pub fn new(config: &PipelineConfig, icons: IconResolver, palette: CategoryPalette) -> Self {
        Self {
            scale_max: config.scale_max,
            icons,
            normalizer: DistributionNormalizer::new(palette, config.distribution_tolerance),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config, IconResolver::new(), CategoryPalette::new())
    }

    /// Fails on invalid configuration without looking at any data
    pub fn check_config(&self) -> Result<(), DashboardError> {
        check_scale_max(self.scale_max)?;
        self.normalizer.check_tolerance()
    }

    pub fn assemble(&self, dataset: &WeatherDataset) -> Result<DashboardViewModel, DashboardError> {
        self.check_config()?;

        let current = self.summarize_current(&dataset.current)?;
        let hourly_trend = build_trend_series(&dataset.hourly_data)?;
        let precipitation = build_precipitation_series(&dataset.precipitation)?;
        let forecast = build_forecast_rows(&dataset.forecast, self.scale_max, &self.icons)?;
        let distribution = self.normalizer.normalize(&dataset.weather_distribution)?;

        tracing::debug!(
            "Assembled dashboard for {}: {} hourly points, {} months, {} forecast days, {} slices",
            current.location,
            hourly_trend.points.len(),
            precipitation.points.len(),
            forecast.len(),
            distribution.len()
        );

        Ok(DashboardViewModel {
            current,
            hourly_trend,
            precipitation,
            forecast,
            distribution,
        })
    }

    fn summarize_current(&self, current: &CurrentConditions) -> Result<CurrentSummary, DashboardError> {
        let checks = [
            ("temperature", current.temperature, current.temperature.is_finite()),
            ("feelsLike", current.feels_like, current.feels_like.is_finite()),
            ("humidity", current.humidity, (0.0..=100.0).contains(&current.humidity)),
            ("windSpeed", current.wind_speed, current.wind_speed >= 0.0),
            ("visibility", current.visibility, current.visibility >= 0.0),
            ("pressure", current.pressure, current.pressure > 0.0),
            ("uvIndex", current.uv_index, current.uv_index >= 0.0),
        ];
        for (field, value, valid) in checks {
            if !valid || !value.is_finite() {
                return Err(DashboardError::validation(format!(
                    "current {} is out of range: {}",
                    field, value
                )));
            }
        }

        let uv_risk = UvRisk::from_index(current.uv_index);
        Ok(CurrentSummary {
            location: current.location.clone(),
            temperature: current.temperature,
            feels_like: current.feels_like,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            visibility: current.visibility,
            pressure: current.pressure,
            uv_index: current.uv_index,
            uv_risk,
            uv_label: uv_risk.label().to_string(),
            condition: current.condition.clone(),
            icon: self.icons.resolve(current.icon_keyword()),
        })
    }
}

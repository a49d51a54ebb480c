// Dashboard view model - What the presentation shell renders
use super::chart::{ChartSeries, DistributionSlice, ForecastRow, IconVariant, PrecipitationBar, TrendPoint};
use serde::Serialize;

/// WHO UV index band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index < 3.0 {
            Self::Low
        } else if uv_index < 6.0 {
            Self::Moderate
        } else if uv_index < 8.0 {
            Self::High
        } else if uv_index < 11.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSummary {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub visibility: f64,
    pub pressure: f64,
    pub uv_index: f64,
    pub uv_risk: UvRisk,
    /// Display text for `uv_risk`
    pub uv_label: String,
    pub condition: String,
    pub icon: IconVariant,
}

/// Everything the panels need, built in one pass and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel {
    pub current: CurrentSummary,
    pub hourly_trend: ChartSeries<TrendPoint>,
    pub precipitation: ChartSeries<PrecipitationBar>,
    pub forecast: Vec<ForecastRow>,
    pub distribution: Vec<DistributionSlice>,
}

// Chart-ready domain models (pipeline output)
use serde::Serialize;

/// Icon a presentation layer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconVariant {
    Sun,
    Cloud,
    CloudRain,
    CloudSnow,
}

/// Name and stroke color of one plotted field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub key: String,
    pub name: String,
    pub color: String,
}

impl LegendEntry {
    pub fn new(key: &str, name: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<P> {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub legend: Vec<LegendEntry>,
    pub points: Vec<P>,
}

impl<P> ChartSeries<P> {
    pub fn new(
        id: String,
        title: String,
        unit: Option<String>,
        legend: Vec<LegendEntry>,
        points: Vec<P>,
    ) -> Self {
        Self {
            id,
            title,
            unit,
            legend,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationBar {
    pub month: String,
    pub rainfall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub day: String,
    pub high: f64,
    pub low: f64,
    pub icon: IconVariant,
    /// Fraction of the bar track to fill, always within [0, 1]
    pub bar_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub share: f64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_variant_serializes_kebab_case() {
        let json = serde_json::to_string(&IconVariant::CloudRain).unwrap();
        assert_eq!(json, "\"cloud-rain\"");
    }

    #[test]
    fn test_forecast_row_serializes_camel_case() {
        let row = ForecastRow {
            day: "Mon".to_string(),
            high: 26.0,
            low: 18.0,
            icon: IconVariant::Sun,
            bar_ratio: 0.5,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["barRatio"], 0.5);
        assert_eq!(value["icon"], "sun");
    }
}

// Weather dataset domain models (pipeline input)
use serde::Deserialize;

/// Canonical form of a condition or category keyword.
///
/// `"  Partly_Cloudy "` and `"partly cloudy"` both become `"partly-cloudy"`.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Snapshot of the conditions at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub visibility: f64,
    pub pressure: f64,
    pub uv_index: f64,
    /// Display text, e.g. "Partly Cloudy"
    pub condition: String,
    /// Icon keyword, e.g. "partly-cloudy". Falls back to `condition` when absent.
    #[serde(default)]
    pub icon: Option<String>,
}

impl CurrentConditions {
    /// Keyword used to pick the icon
    pub fn icon_keyword(&self) -> &str {
        self.icon.as_deref().unwrap_or(&self.condition)
    }
}

/// One intraday reading. Numeric fields may be missing in raw data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyReading {
    pub time: String,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

impl HourlyReading {
    pub fn new(time: impl Into<String>, temp: f64, humidity: f64) -> Self {
        Self {
            time: time.into(),
            temp: Some(temp),
            humidity: Some(humidity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: f64,
    pub low: f64,
    pub condition: String,
}

impl ForecastDay {
    pub fn new(day: impl Into<String>, high: f64, low: f64, condition: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            high,
            low,
            condition: condition.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyPrecipitation {
    pub month: String,
    pub rainfall: f64,
}

impl MonthlyPrecipitation {
    pub fn new(month: impl Into<String>, rainfall: f64) -> Self {
        Self {
            month: month.into(),
            rainfall,
        }
    }
}

/// Raw category share before normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistributionInput {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl DistributionInput {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The whole input of one dashboard load
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDataset {
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    #[serde(default)]
    pub hourly_data: Vec<HourlyReading>,
    #[serde(default)]
    pub precipitation: Vec<MonthlyPrecipitation>,
    #[serde(default)]
    pub weather_distribution: Vec<DistributionInput>,
}

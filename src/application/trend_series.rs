// Trend series builder - Hourly readings to a line chart series
use crate::domain::chart::{ChartSeries, LegendEntry, TrendPoint};
use crate::domain::error::DashboardError;
use crate::domain::weather::HourlyReading;

pub const TREND_SERIES_ID: &str = "hourly-trend";

/// Builds the 24-hour trend chart.
///
/// Readings keep their input order; the sequence is the time axis.
pub fn build_trend_series(
    readings: &[HourlyReading],
) -> Result<ChartSeries<TrendPoint>, DashboardError> {
    let points = readings
        .iter()
        .enumerate()
        .map(|(index, reading)| -> Result<TrendPoint, DashboardError> {
            let temperature = require_field(reading.temp, index, reading, "temp")?;
            let humidity = require_field(reading.humidity, index, reading, "humidity")?;
            Ok(TrendPoint {
                time: reading.time.clone(),
                temperature,
                humidity,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Built hourly trend with {} points", points.len());

    Ok(ChartSeries::new(
        TREND_SERIES_ID.to_string(),
        "24-Hour Trends".to_string(),
        None,
        vec![
            LegendEntry::new("temperature", "Temperature (°C)", "#3B82F6"),
            LegendEntry::new("humidity", "Humidity (%)", "#10B981"),
        ],
        points,
    ))
}

fn require_field(
    value: Option<f64>,
    index: usize,
    reading: &HourlyReading,
    field: &str,
) -> Result<f64, DashboardError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(DashboardError::validation(format!(
            "hourly reading {} ({}) has non-finite {}: {}",
            index, reading.time, field, v
        ))),
        None => Err(DashboardError::validation(format!(
            "hourly reading {} ({}) is missing {}",
            index, reading.time, field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(series: &ChartSeries<TrendPoint>) -> Vec<&str> {
        series.points.iter().map(|p| p.time.as_str()).collect()
    }

    #[test]
    fn test_preserves_input_order() {
        let readings = vec![
            HourlyReading::new("09:00", 22.0, 68.0),
            HourlyReading::new("12:00", 25.0, 60.0),
        ];
        let series = build_trend_series(&readings).unwrap();
        assert_eq!(labels(&series), vec!["09:00", "12:00"]);
        assert_eq!(series.points[0].temperature, 22.0);
        assert_eq!(series.points[1].humidity, 60.0);

        let reversed: Vec<_> = readings.into_iter().rev().collect();
        let series = build_trend_series(&reversed).unwrap();
        assert_eq!(labels(&series), vec!["12:00", "09:00"]);
    }

    #[test]
    fn test_does_not_dedup_or_sort() {
        let readings = vec![
            HourlyReading::new("12:00", 25.0, 60.0),
            HourlyReading::new("03:00", 18.0, 75.0),
            HourlyReading::new("12:00", 25.0, 60.0),
        ];
        let series = build_trend_series(&readings).unwrap();
        assert_eq!(labels(&series), vec!["12:00", "03:00", "12:00"]);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let series = build_trend_series(&[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.id, TREND_SERIES_ID);
        assert_eq!(series.legend.len(), 2);
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let readings = vec![
            HourlyReading::new("00:00", 20.0, 70.0),
            HourlyReading {
                time: "03:00".to_string(),
                temp: Some(18.0),
                humidity: None,
            },
        ];
        match build_trend_series(&readings) {
            Err(DashboardError::Validation(msg)) => {
                assert!(msg.contains("humidity"));
                assert!(msg.contains("03:00"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

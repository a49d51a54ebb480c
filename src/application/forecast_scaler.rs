// Forecast range scaler - High temperature to a bar width ratio
use crate::application::icon_resolver::IconResolver;
use crate::domain::chart::ForecastRow;
use crate::domain::error::DashboardError;
use crate::domain::weather::ForecastDay;

/// Reference ceiling used when none is configured, in degrees
pub const DEFAULT_SCALE_MAX: f64 = 30.0;

/// Computes `clamp(high / scale_max, 0, 1)`.
///
/// `scale_max` is a fixed ceiling so the same high always gets the same bar,
/// whatever else is on screen.
pub fn scale(day: &ForecastDay, scale_max: f64) -> Result<f64, DashboardError> {
    check_scale_max(scale_max)?;
    validate_day(day)?;
    Ok((day.high / scale_max).clamp(0.0, 1.0))
}

pub fn check_scale_max(scale_max: f64) -> Result<(), DashboardError> {
    if !scale_max.is_finite() || scale_max <= 0.0 {
        return Err(DashboardError::configuration(format!(
            "forecast scale ceiling must be a positive number, got {}",
            scale_max
        )));
    }
    Ok(())
}

fn validate_day(day: &ForecastDay) -> Result<(), DashboardError> {
    if !day.high.is_finite() || !day.low.is_finite() {
        return Err(DashboardError::validation(format!(
            "forecast for {} has a non-finite temperature (high {}, low {})",
            day.day, day.high, day.low
        )));
    }
    if day.high < day.low {
        return Err(DashboardError::validation(format!(
            "forecast for {} has high {} below low {}",
            day.day, day.high, day.low
        )));
    }
    Ok(())
}

/// Forecast list rows, in input order
pub fn build_forecast_rows(
    days: &[ForecastDay],
    scale_max: f64,
    icons: &IconResolver,
) -> Result<Vec<ForecastRow>, DashboardError> {
    days.iter()
        .map(|day| -> Result<ForecastRow, DashboardError> {
            Ok(ForecastRow {
                day: day.day.clone(),
                high: day.high,
                low: day.low,
                icon: icons.resolve(&day.condition),
                bar_ratio: scale(day, scale_max)?,
            })
        })
        .collect()
}

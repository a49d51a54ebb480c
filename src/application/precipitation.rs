// Precipitation aggregator - Monthly rainfall to a bar chart series
use crate::domain::chart::{ChartSeries, LegendEntry, PrecipitationBar};
use crate::domain::error::DashboardError;
use crate::domain::weather::MonthlyPrecipitation;

pub const PRECIPITATION_SERIES_ID: &str = "monthly-precipitation";

/// Shapes monthly totals for the histogram.
///
/// Input is already one total per month. Negative rainfall is rejected, not clamped.
pub fn build_precipitation_series(
    monthly: &[MonthlyPrecipitation],
) -> Result<ChartSeries<PrecipitationBar>, DashboardError> {
    let mut bars = Vec::with_capacity(monthly.len());

    for entry in monthly {
        if !entry.rainfall.is_finite() || entry.rainfall < 0.0 {
            return Err(DashboardError::validation(format!(
                "rainfall for {} must be a non-negative number, got {}",
                entry.month, entry.rainfall
            )));
        }
        bars.push(PrecipitationBar {
            month: entry.month.clone(),
            rainfall: entry.rainfall,
        });
    }

    Ok(ChartSeries::new(
        PRECIPITATION_SERIES_ID.to_string(),
        "Monthly Precipitation".to_string(),
        Some("mm".to_string()),
        vec![LegendEntry::new("rainfall", "Rainfall (mm)", "#3B82F6")],
        bars,
    ))
}

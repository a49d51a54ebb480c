// Application layer - The data-to-visualization pipeline and its use case
pub mod assembler;
pub mod dashboard_service;
pub mod dataset_source;
pub mod distribution;
pub mod forecast_scaler;
pub mod icon_resolver;
pub mod precipitation;
pub mod trend_series;

// Domain layer - Input records, view model value types and pipeline errors
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod weather;

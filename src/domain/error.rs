// Pipeline errors
use thiserror::Error;

/// Errors raised while turning a dataset into a view model.
///
/// Both kinds are terminal for an assembly call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// Malformed or physically invalid input data
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

// Infrastructure layer - Configuration and dataset adapters
pub mod config;
pub mod json_dataset_source;

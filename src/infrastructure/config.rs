use crate::application::distribution::DEFAULT_TOLERANCE;
use crate::application::forecast_scaler::DEFAULT_SCALE_MAX;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Knobs of the pipeline itself
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Temperature that fills a forecast bar completely
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    /// Logging threshold for distribution shares. Sums further than this from
    /// 100 are rescaled with a warning; smaller drift is rescaled silently.
    /// Output shares are the same either way.
    #[serde(default = "default_tolerance")]
    pub distribution_tolerance: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale_max: default_scale_max(),
            distribution_tolerance: default_tolerance(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "data/weather.json".to_string()
}

fn default_scale_max() -> f64 {
    DEFAULT_SCALE_MAX
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Reads `config/dashboard.*` (optional) overlaid with `DASHBOARD__*` env vars
pub fn load_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false));
    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<AppConfig> {
    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

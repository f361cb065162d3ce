use crate::telemetry::TelemetryConfig;
use config::{Config, ConfigError, Environment};
use lorabridge_payload::PayloadFormat;
use serde::{Deserialize, Serialize};

/// Worker configuration, read from `LORABRIDGE_*` environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UplinkWorkerConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Codec applied to `payload_raw` (feather | cayenne_lpp)
    #[serde(default = "default_payload_format")]
    pub payload_format: PayloadFormat,

    /// Service name reported in startup logs
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_payload_format() -> PayloadFormat {
    PayloadFormat::default()
}

fn default_service_name() -> String {
    "uplink-worker".to_string()
}

impl UplinkWorkerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("LORABRIDGE"))
            .build()?;

        config.try_deserialize()
    }

    /// Telemetry settings derived from this config
    pub fn telemetry_config(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_level: self.log_level.clone(),
        }
    }
}

impl Default for UplinkWorkerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            payload_format: default_payload_format(),
            service_name: default_service_name(),
        }
    }
}

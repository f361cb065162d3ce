pub mod config;
pub mod telemetry;
pub mod uplink_worker;

pub use config::UplinkWorkerConfig;
pub use telemetry::{TelemetryConfig, init_telemetry};
pub use uplink_worker::UplinkWorker;

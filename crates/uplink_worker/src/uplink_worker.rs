use crate::config::UplinkWorkerConfig;
use lorabridge_domain::{
    DeviceStateRepository, DomainError, DomainResult, TelemetryLogRepository, UplinkMessage,
    UplinkService,
};
use lorabridge_payload::PayloadDecoder;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Uplink processing module. Owns the domain service wired with the
/// config-selected payload codec and the injected sinks.
pub struct UplinkWorker {
    service: UplinkService,
}

impl UplinkWorker {
    pub fn new(
        config: &UplinkWorkerConfig,
        state_repository: Arc<dyn DeviceStateRepository>,
        log_repository: Arc<dyn TelemetryLogRepository>,
    ) -> Self {
        info!(
            service = %config.service_name,
            payload_format = ?config.payload_format,
            "initializing uplink worker"
        );

        let decoder: Arc<dyn PayloadDecoder + Send + Sync> =
            config.payload_format.decoder().into();

        Self {
            service: UplinkService::new(decoder, state_repository, log_repository),
        }
    }

    /// Handle one uplink delivered by the platform trigger as raw JSON bytes
    pub async fn handle_uplink(&self, body: &[u8]) -> DomainResult<()> {
        let msg: UplinkMessage = match serde_json::from_slice(body) {
            Ok(msg) => msg,
            Err(e) => {
                error!(error = %e, "failed to parse uplink envelope");
                return Err(DomainError::InvalidUplink(e.to_string()));
            }
        };

        debug!(device_id = %msg.dev_id, "received uplink envelope");
        self.service.process_uplink(msg).await
    }
}

use crate::error::DomainResult;
use crate::repository::{DeviceStateRepository, TelemetryLogRepository};
use crate::row::DeviceDataRow;
use crate::uplink::UplinkMessage;
use crate::update::DeviceUpdate;
use lorabridge_payload::{DecodedPayload, PayloadDecoder};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Domain service that turns one uplink into a live state update and a
/// telemetry log row and hands both to the sinks.
///
/// Flow:
/// 1. Decode the base64 payload with the configured codec
/// 2. Build the device update, decode failures included
/// 3. Serialize the decoded fields into a log row
/// 4. Merge the update, then append the row
pub struct UplinkService {
    decoder: Arc<dyn PayloadDecoder + Send + Sync>,
    state_repository: Arc<dyn DeviceStateRepository>,
    log_repository: Arc<dyn TelemetryLogRepository>,
}

impl UplinkService {
    pub fn new(
        decoder: Arc<dyn PayloadDecoder + Send + Sync>,
        state_repository: Arc<dyn DeviceStateRepository>,
        log_repository: Arc<dyn TelemetryLogRepository>,
    ) -> Self {
        Self {
            decoder,
            state_repository,
            log_repository,
        }
    }

    /// Process a single uplink end to end. Payload decode failures never
    /// abort the message; repository and serialization errors propagate.
    #[instrument(skip_all, fields(app_id = %msg.app_id, device_id = %msg.dev_id))]
    pub async fn process_uplink(&self, msg: UplinkMessage) -> DomainResult<()> {
        debug!(
            counter = msg.counter,
            port = msg.port,
            payload_len = msg.payload_raw.len(),
            "processing uplink"
        );

        let data = self.decoder.decode_base64(&msg.payload_raw);
        if let DecodedPayload::Failed { error, .. } = &data {
            warn!(reason = %error, "payload decode failed, storing raw payload");
        }

        let row = DeviceDataRow::new(msg.dev_id.clone(), &data, msg.metadata.time)?;
        let update = DeviceUpdate::from_uplink(&msg, data);

        self.state_repository.merge_update(&update).await?;
        self.log_repository.append_row(&row).await?;

        debug!(
            gateway_count = update.meta.gateways.len(),
            "stored device update and telemetry row"
        );

        Ok(())
    }
}

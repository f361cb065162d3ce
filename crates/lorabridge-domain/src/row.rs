use crate::error::DomainResult;
use chrono::{DateTime, Utc};
use lorabridge_payload::DecodedPayload;
use serde::{Deserialize, Serialize};

/// Append-only telemetry log row. The decoded payload is carried as a JSON
/// text blob so the log schema stays identical across codecs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDataRow {
    pub device_id: String,
    pub data: String,
    pub time: DateTime<Utc>,
}

impl DeviceDataRow {
    pub fn new(
        device_id: String,
        data: &DecodedPayload,
        time: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            device_id,
            data: serde_json::to_string(data)?,
            time,
        })
    }
}

use crate::uplink::{GatewayRx, UplinkMessage};
use chrono::{DateTime, Utc};
use lorabridge_payload::DecodedPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-gateway reception summary carried in a device update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewaySummary {
    pub id: String,
    pub rssi: i32,
    pub snr: Option<f64>,
    pub channel: u32,
    /// Gateway-local receive counter, not wall-clock time
    pub time: u64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

impl From<&GatewayRx> for GatewaySummary {
    fn from(rx: &GatewayRx) -> Self {
        Self {
            id: rx.gtw_id.clone(),
            rssi: rx.rssi,
            snr: rx.snr,
            channel: rx.channel,
            time: rx.timestamp,
            latitude: rx.latitude,
            longitude: rx.longitude,
            altitude: rx.altitude,
        }
    }
}

/// Collapse gateway reports into a map keyed by gateway id. A duplicate id
/// keeps the last report in slice order; no report is filtered out.
pub fn aggregate_gateways(reports: &[GatewayRx]) -> BTreeMap<String, GatewaySummary> {
    reports
        .iter()
        .map(|rx| (rx.gtw_id.clone(), GatewaySummary::from(rx)))
        .collect()
}

/// Metadata block of a device update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMeta {
    pub updated: DateTime<Utc>,
    pub frequency: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub gateways: BTreeMap<String, GatewaySummary>,
}

/// Overwrite-style record for the live device state store, keyed downstream
/// by device id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    pub device_id: String,
    pub serial: String,
    pub data: DecodedPayload,
    pub meta: DeviceMeta,
}

impl DeviceUpdate {
    /// Assemble an update from an uplink and its decoded payload. Decode
    /// failures ride along inside `data`, so every uplink yields an update.
    pub fn from_uplink(msg: &UplinkMessage, data: DecodedPayload) -> Self {
        Self {
            device_id: msg.dev_id.clone(),
            serial: msg.hardware_serial.clone(),
            data,
            meta: DeviceMeta {
                updated: msg.metadata.time,
                frequency: msg.metadata.frequency,
                latitude: msg.metadata.latitude,
                longitude: msg.metadata.longitude,
                altitude: msg.metadata.altitude,
                gateways: aggregate_gateways(&msg.metadata.gateways),
            },
        }
    }
}

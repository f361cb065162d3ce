use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One uplink envelope as posted by the network's HTTP integration.
/// Field names follow the provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinkMessage {
    pub app_id: String,
    pub dev_id: String,
    pub hardware_serial: String,
    pub port: u8,
    pub counter: u32,
    #[serde(default)]
    pub is_retry: bool,
    #[serde(default)]
    pub confirmed: bool,
    /// Base64 payload, kept as received so decode failures can echo it back
    pub payload_raw: String,
    pub metadata: UplinkMetadata,
    pub downlink_url: Option<String>,
}

/// Radio and capture metadata attached to an uplink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinkMetadata {
    pub time: DateTime<Utc>,
    pub frequency: f64,
    pub modulation: String,
    /// Spreading factor and bandwidth, LoRa modulation only
    pub data_rate: Option<String>,
    /// Bits per second, FSK modulation only
    pub bit_rate: Option<u32>,
    pub coding_rate: Option<String>,
    #[serde(default)]
    pub gateways: Vec<GatewayRx>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

/// Reception report from one gateway that heard the uplink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayRx {
    pub gtw_id: String,
    /// Gateway-local receive counter in microseconds
    pub timestamp: u64,
    pub time: Option<String>,
    pub channel: u32,
    pub rssi: i32,
    /// Missing from gateways that do not report signal-to-noise
    pub snr: Option<f64>,
    #[serde(default)]
    pub rf_chain: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

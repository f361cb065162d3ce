pub mod error;
pub mod repository;
pub mod row;
pub mod uplink;
pub mod uplink_service;
pub mod update;

pub use error::{DomainError, DomainResult};
pub use repository::*;
pub use row::DeviceDataRow;
pub use uplink::{GatewayRx, UplinkMessage, UplinkMetadata};
pub use uplink_service::UplinkService;
pub use update::{DeviceMeta, DeviceUpdate, GatewaySummary, aggregate_gateways};

use crate::error::DomainResult;
use crate::row::DeviceDataRow;
use crate::update::DeviceUpdate;
use async_trait::async_trait;

/// Trait for the live device state sink
///
/// Implementations should:
/// - Write the update under the device id
/// - Overwrite whatever the previous uplink stored there
/// - Return an error when the write fails
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DeviceStateRepository: Send + Sync {
    async fn merge_update(&self, update: &DeviceUpdate) -> DomainResult<()>;
}

/// Trait for the append-only telemetry log sink
///
/// Implementations should:
/// - Append the row without modifying existing rows
/// - Return an error when the append fails
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TelemetryLogRepository: Send + Sync {
    async fn append_row(&self, row: &DeviceDataRow) -> DomainResult<()>;
}

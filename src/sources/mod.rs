pub mod csv_tree;
pub mod live;
pub mod mock;

pub use csv_tree::CsvTreeSource;
pub use live::LiveSource;
pub use mock::MockSource;

use crate::config::{DeviceTable, SourceConfig, SourceKind};
use crate::error::Result;
use crate::models::DeviceDataResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Backend capability behind `/api/device-data`. The dashboard has had three
/// of these over its lifetime (live device pull, exported CSV trees, mock
/// synthesis); they now share one seam and one response shape.
#[async_trait]
pub trait DeviceDataSource: Send + Sync {
    async fn device_data(&self, participant_id: &str) -> Result<DeviceDataResponse>;
}

/// Build the source selected by configuration.
pub fn from_config(config: &SourceConfig, devices: Arc<DeviceTable>) -> Arc<dyn DeviceDataSource> {
    match config.kind {
        SourceKind::Mock => Arc::new(MockSource::new(devices)),
        SourceKind::CsvTree => Arc::new(CsvTreeSource::new(config.data_dir.clone())),
        SourceKind::Live => Arc::new(LiveSource::new(
            devices,
            std::time::Duration::from_secs(config.live_timeout_secs),
        )),
    }
}

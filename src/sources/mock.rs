use crate::config::DeviceTable;
use crate::error::Result;
use crate::models::DeviceDataResponse;
use crate::simulate::LoadSimulator;
use crate::sources::DeviceDataSource;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves synthetic readings for every configured device. The participant id
/// is accepted but ignored: mock data is the same for everyone.
pub struct MockSource {
    simulator: LoadSimulator,
}

impl MockSource {
    pub fn new(devices: Arc<DeviceTable>) -> Self {
        Self {
            simulator: LoadSimulator::new(devices),
        }
    }
}

#[async_trait]
impl DeviceDataSource for MockSource {
    async fn device_data(&self, _participant_id: &str) -> Result<DeviceDataResponse> {
        let mut response = DeviceDataResponse::new();
        for device_id in self.simulator.devices().device_ids() {
            response.insert(device_id.to_string(), self.simulator.reading(device_id));
        }
        Ok(response)
    }
}

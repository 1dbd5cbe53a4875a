use crate::config::DeviceTable;
use crate::error::Result;
use crate::models::{DeviceDataResponse, DeviceReading};
use crate::simulate::LoadSimulator;
use crate::sources::DeviceDataSource;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Pulls each configured device's export endpoint over HTTP. A slow or
/// failing device falls back to the simulator for that device, so the
/// dashboard keeps rendering when plugs are unreachable.
pub struct LiveSource {
    client: reqwest::Client,
    devices: Arc<DeviceTable>,
    timeout: Duration,
    fallback: LoadSimulator,
}

impl LiveSource {
    pub fn new(devices: Arc<DeviceTable>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            fallback: LoadSimulator::new(devices.clone()),
            devices,
            timeout,
        }
    }

    async fn pull_device(&self, device_id: &str, endpoint: &str) -> Result<DeviceReading> {
        let response = self
            .client
            .get(endpoint)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let reading: DeviceReading = response.json().await?;
        tracing::debug!("Pulled live reading for {} from {}", device_id, endpoint);
        Ok(reading)
    }
}

#[async_trait]
impl DeviceDataSource for LiveSource {
    async fn device_data(&self, _participant_id: &str) -> Result<DeviceDataResponse> {
        let mut response = DeviceDataResponse::new();

        for device_id in self.devices.device_ids() {
            let reading = match self.devices.endpoint(device_id) {
                Some(endpoint) => match self.pull_device(device_id, endpoint).await {
                    Ok(reading) => reading,
                    Err(e) => {
                        tracing::warn!(
                            "Could not fetch live data for {}: {}. Using mock data.",
                            device_id,
                            e
                        );
                        self.fallback.reading(device_id)
                    }
                },
                None => {
                    tracing::warn!("No endpoint configured for {}. Using mock data.", device_id);
                    self.fallback.reading(device_id)
                }
            };
            response.insert(device_id.to_string(), reading);
        }

        Ok(response)
    }
}

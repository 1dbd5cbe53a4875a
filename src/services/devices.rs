use crate::error::{AppError, Result};
use crate::models::DeviceDataResponse;
use crate::sources::DeviceDataSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct DeviceService {
    source: Arc<dyn DeviceDataSource>,
}

impl DeviceService {
    pub fn new(source: Arc<dyn DeviceDataSource>) -> Self {
        Self { source }
    }

    pub async fn device_data(&self, participant_id: &str) -> Result<DeviceDataResponse> {
        self.validate_participant_id(participant_id)?;
        self.source.device_data(participant_id).await
    }

    // The id ends up as a path component under the CSV root, so it must not
    // be empty and must not traverse.
    fn validate_participant_id(&self, participant_id: &str) -> Result<()> {
        if participant_id.trim().is_empty() {
            return Err(AppError::Validation(
                "Participant id must not be empty".to_string(),
            ));
        }

        if participant_id.contains('/') || participant_id.contains('\\') || participant_id.contains("..")
        {
            return Err(AppError::Validation(format!(
                "Invalid participant id: {}",
                participant_id
            )));
        }

        Ok(())
    }
}

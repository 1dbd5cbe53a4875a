use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Device type/model tags the frontend matches on. All dashboard devices
/// report as Tapo P110 smart plugs regardless of where the data came from.
pub const DEVICE_TYPE: &str = "SMART.TAPOPLUG";
pub const DEVICE_MODEL: &str = "P110";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub model: String,
}

impl DeviceInfo {
    pub fn new(device_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            device_type: DEVICE_TYPE.to_string(),
            model: DEVICE_MODEL.to_string(),
        }
    }
}

/// One measurement series (hourly or daily) plus the time it was produced.
/// `time_stamp` serializes as RFC 3339, which is what the frontend parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySeries {
    pub data: Vec<f64>,
    pub time_stamp: DateTime<Utc>,
}

/// The per-device payload: identity, a 24-point hourly curve and a trailing
/// daily series. Constructed fresh per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReading {
    pub device_info: DeviceInfo,
    pub hourly: EnergySeries,
    pub daily: EnergySeries,
}

/// Response body for `/api/device-data/:participant_id`, keyed by device id.
/// BTreeMap keeps the JSON key order stable across requests.
pub type DeviceDataResponse = BTreeMap<String, DeviceReading>;

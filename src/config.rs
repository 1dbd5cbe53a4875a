use crate::error::{AppError, Result};
use crate::simulate::LoadProfile;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub devices_file: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which backend feeds `/api/device-data`. The original deployment went
/// through three generations (live Tapo pull, exported CSV trees, mock) that
/// are now selected here instead of by swapping server scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    CsvTree,
    Live,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub data_dir: String,
    pub live_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let kind = match env::var("DATA_SOURCE")
            .unwrap_or_else(|_| "mock".to_string())
            .to_lowercase()
            .as_str()
        {
            "mock" => SourceKind::Mock,
            "csv" => SourceKind::CsvTree,
            "live" => SourceKind::Live,
            other => {
                return Err(AppError::Config(format!(
                    "Unknown DATA_SOURCE '{}', expected mock, csv or live",
                    other
                )))
            }
        };

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "all-data".to_string());

        let live_timeout_secs = env::var("LIVE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4);

        let devices_file =
            env::var("DEVICES_CONFIG").unwrap_or_else(|_| "config/devices.yaml".to_string());

        Ok(Config {
            server: ServerConfig { host, port },
            source: SourceConfig {
                kind,
                data_dir,
                live_timeout_secs,
            },
            devices_file,
        })
    }
}

/// One configured device: display name, optional synthetic load profile and
/// optional live export endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceEntry {
    pub name: String,
    #[serde(default)]
    pub profile: Option<LoadProfile>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Explicit device-id -> entry mapping passed into the simulator and the
/// data sources at construction time. Unknown ids degrade to defaults
/// rather than failing, so lookups never error.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceTable {
    pub devices: BTreeMap<String, DeviceEntry>,
}

impl DeviceTable {
    /// Load from a YAML file; a missing file means the built-in table.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            tracing::info!("Device config {} not found, using built-in devices", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let table: DeviceTable = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {}", path, e)))?;

        tracing::info!("Loaded {} devices from {}", table.devices.len(), path);
        Ok(table)
    }

    pub fn display_name(&self, device_id: &str) -> String {
        self.devices
            .get(device_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("Device {}", device_id))
    }

    pub fn profile(&self, device_id: &str) -> LoadProfile {
        self.devices
            .get(device_id)
            .and_then(|d| d.profile.clone())
            .unwrap_or_default()
    }

    pub fn endpoint(&self, device_id: &str) -> Option<&str> {
        self.devices
            .get(device_id)
            .and_then(|d| d.endpoint.as_deref())
    }

    pub fn device_ids(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(|s| s.as_str())
    }
}

impl Default for DeviceTable {
    /// The three devices the dashboard originally monitored.
    fn default() -> Self {
        let mut devices = BTreeMap::new();
        devices.insert(
            "device1".to_string(),
            DeviceEntry {
                name: "Sonos Lamp".to_string(),
                profile: Some(LoadProfile {
                    base_load: 0.02,
                    peak_windows: vec![(18, 23)],
                    peak_multiplier: 3.0,
                    weekend_multiplier: 1.2,
                }),
                endpoint: None,
            },
        );
        devices.insert(
            "device2".to_string(),
            DeviceEntry {
                name: "Nintendo Switch".to_string(),
                profile: Some(LoadProfile {
                    base_load: 0.015,
                    peak_windows: vec![(14, 22)],
                    peak_multiplier: 4.0,
                    weekend_multiplier: 1.5,
                }),
                endpoint: None,
            },
        );
        devices.insert(
            "device3".to_string(),
            DeviceEntry {
                name: "Living Room TV".to_string(),
                profile: Some(LoadProfile {
                    base_load: 0.05,
                    peak_windows: vec![(7, 9), (18, 23)],
                    peak_multiplier: 2.5,
                    weekend_multiplier: 1.3,
                }),
                endpoint: None,
            },
        );
        Self { devices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_devices() {
        let table = DeviceTable::default();
        assert_eq!(table.devices.len(), 3);
        assert_eq!(table.display_name("device1"), "Sonos Lamp");
        assert_eq!(table.display_name("device2"), "Nintendo Switch");
        assert_eq!(table.display_name("device3"), "Living Room TV");
    }

    #[test]
    fn unknown_device_gets_fallback_name_and_profile() {
        let table = DeviceTable::default();
        assert_eq!(table.display_name("device9"), "Device device9");

        let profile = table.profile("device9");
        assert_eq!(profile.base_load, 0.02);
        assert_eq!(profile.peak_windows, vec![(9, 21)]);
    }

    #[test]
    fn parses_yaml_device_table() {
        let yaml = r#"
devices:
  lamp:
    name: Desk Lamp
    profile:
      base_load: 0.01
      peak_windows: [[8, 17]]
      peak_multiplier: 2.0
      weekend_multiplier: 0.9
  plug:
    name: Bare Plug
"#;
        let table: DeviceTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.devices.len(), 2);
        assert_eq!(table.profile("lamp").base_load, 0.01);
        assert_eq!(table.profile("lamp").weekend_multiplier, 0.9);
        // No profile configured: falls back to the default shape.
        assert_eq!(table.profile("plug").base_load, 0.02);
        assert_eq!(table.endpoint("lamp"), None);
    }
}

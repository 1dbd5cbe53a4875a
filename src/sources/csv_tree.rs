use crate::error::{AppError, Result};
use crate::models::{DeviceDataResponse, DeviceInfo, DeviceReading, EnergySeries};
use crate::sources::DeviceDataSource;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Name of the per-day export file inside each date folder.
const DAY_TABLE: &str = "Day-Table 1.csv";

/// Reads the exported energy-data layout:
///
/// ```text
/// <root>/<participant_id>/<device_name>_<device_id>/<date>/Day-Table 1.csv
/// ```
///
/// Each CSV has a header row, then `timestamp,energy,...` rows. Date folders
/// sort lexicographically as dates, so the newest folder supplies the hourly
/// curve and the per-folder sums form the daily series.
pub struct CsvTreeSource {
    root: PathBuf,
}

impl CsvTreeSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_device(&self, device_dir: &Path, device_id: &str, name: &str) -> Result<DeviceReading> {
        let mut date_dirs: Vec<PathBuf> = std::fs::read_dir(device_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        date_dirs.sort();

        let mut daily = Vec::with_capacity(date_dirs.len());
        let mut hourly = Vec::new();

        for date_dir in &date_dirs {
            let csv_path = date_dir.join(DAY_TABLE);
            if !csv_path.exists() {
                continue;
            }

            match read_day_table(&csv_path) {
                Ok(values) => {
                    daily.push(round3(values.iter().sum()));
                    // The newest folder read last wins the hourly slot.
                    hourly = values;
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable {}: {}", csv_path.display(), e);
                }
            }
        }

        let now = Utc::now();
        Ok(DeviceReading {
            device_info: DeviceInfo::new(device_id, name),
            hourly: EnergySeries {
                data: hourly,
                time_stamp: now,
            },
            daily: EnergySeries {
                data: daily,
                time_stamp: now,
            },
        })
    }
}

#[async_trait]
impl DeviceDataSource for CsvTreeSource {
    async fn device_data(&self, participant_id: &str) -> Result<DeviceDataResponse> {
        let participant_dir = self.root.join(participant_id);
        if !participant_dir.is_dir() {
            return Err(AppError::NotFound(format!(
                "Participant not found: {}",
                participant_id
            )));
        }

        let mut response = DeviceDataResponse::new();
        for entry in std::fs::read_dir(&participant_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let folder = entry.file_name().to_string_lossy().into_owned();
            let (name, device_id) = split_device_folder(&folder);
            let reading = self.read_device(&path, device_id, name)?;
            response.insert(device_id.to_string(), reading);
        }

        Ok(response)
    }
}

/// Device folders are named `<device_name>_<device_id>`; a folder without an
/// underscore serves as both.
fn split_device_folder(folder: &str) -> (&str, &str) {
    match folder.rsplit_once('_') {
        Some((name, id)) => (name, id),
        None => (folder, folder),
    }
}

/// Parse one day table: skip the header, take column 1 as the energy value.
fn read_day_table(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let energy = record
            .get(1)
            .ok_or_else(|| AppError::Validation(format!("Missing energy column in {}", path.display())))?;
        let energy: f64 = energy.trim().parse().map_err(|_| {
            AppError::Validation(format!("Bad energy value '{}' in {}", energy, path.display()))
        })?;
        values.push(energy);
    }

    Ok(values)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

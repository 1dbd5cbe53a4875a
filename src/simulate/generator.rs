use crate::config::DeviceTable;
use crate::models::{DeviceInfo, DeviceReading, EnergySeries};
use crate::simulate::rng::{RandomSource, ThreadRandom};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use std::sync::Arc;

/// Number of trailing days in a default daily series.
pub const DEFAULT_DAYS: u32 = 30;

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Produces plausible synthetic consumption curves for a device. Used as the
/// mock backend and as the last-resort fallback when live data is
/// unavailable, so none of its operations can fail.
#[derive(Clone)]
pub struct LoadSimulator {
    devices: Arc<DeviceTable>,
}

impl LoadSimulator {
    pub fn new(devices: Arc<DeviceTable>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &DeviceTable {
        &self.devices
    }

    /// A 24-point hourly curve for one calendar day.
    ///
    /// Per hour: base load with uniform noise, a peak boost (with its own,
    /// wider noise) once per matching peak window, and a flat weekend
    /// multiplier on Saturdays and Sundays. Unknown device ids use the
    /// default profile.
    pub fn hourly(&self, device_id: &str, date: NaiveDate, rng: &mut dyn RandomSource) -> Vec<f64> {
        let profile = self.devices.profile(device_id);
        let weekend = is_weekend(date);

        (0..24u32)
            .map(|hour| {
                let mut consumption = profile.base_load * rng.uniform(0.8, 1.2);

                for _ in profile.peak_windows_containing(hour) {
                    consumption *= profile.peak_multiplier;
                    // Active use varies more than standby draw.
                    consumption *= rng.uniform(0.7, 1.3);
                }

                if weekend {
                    consumption *= profile.weekend_multiplier;
                }

                round3(consumption)
            })
            .collect()
    }

    /// Per-day totals for `days` consecutive days starting at `start_date`,
    /// oldest first. Each day is an independent hourly curve summed and
    /// jittered at the day level.
    pub fn daily(
        &self,
        device_id: &str,
        start_date: NaiveDate,
        days: u32,
        rng: &mut dyn RandomSource,
    ) -> Vec<f64> {
        (0..days)
            .map(|i| {
                let day = start_date + Duration::days(i64::from(i));
                let day_sum: f64 = self.hourly(device_id, day, rng).iter().sum();
                round3(day_sum * rng.uniform(0.9, 1.1))
            })
            .collect()
    }

    /// Full device payload as of `now`: today's hourly curve plus a
    /// 30-day daily series ending on, and including, today.
    pub fn reading_at(
        &self,
        device_id: &str,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> DeviceReading {
        let today = now.date_naive();
        let daily_start = today - Duration::days(i64::from(DEFAULT_DAYS) - 1);

        DeviceReading {
            device_info: DeviceInfo::new(device_id, self.devices.display_name(device_id)),
            hourly: EnergySeries {
                data: self.hourly(device_id, today, rng),
                time_stamp: now,
            },
            daily: EnergySeries {
                data: self.daily(device_id, daily_start, DEFAULT_DAYS, rng),
                time_stamp: now,
            },
        }
    }

    /// `reading_at` with the wall clock and thread-local randomness.
    pub fn reading(&self, device_id: &str) -> DeviceReading {
        self.reading_at(device_id, Utc::now(), &mut ThreadRandom)
    }
}

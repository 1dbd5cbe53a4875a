use serde::Deserialize;

/// Static parameters shaping a device's synthetic load curve.
///
/// `peak_windows` are half-open `[start, end)` hour intervals in `[0, 24)`;
/// they may be disjoint or overlap. When an hour falls inside several
/// windows the peak boost applies once per matching window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadProfile {
    /// Average non-peak hourly consumption, kWh.
    pub base_load: f64,
    pub peak_windows: Vec<(u32, u32)>,
    pub peak_multiplier: f64,
    /// Applied to the whole day on Saturdays and Sundays.
    pub weekend_multiplier: f64,
}

impl Default for LoadProfile {
    /// Shape used for devices without a configured profile.
    fn default() -> Self {
        Self {
            base_load: 0.02,
            peak_windows: vec![(9, 21)],
            peak_multiplier: 2.0,
            weekend_multiplier: 1.1,
        }
    }
}

impl LoadProfile {
    pub fn peak_windows_containing(&self, hour: u32) -> impl Iterator<Item = &(u32, u32)> {
        self.peak_windows
            .iter()
            .filter(move |(start, end)| *start <= hour && hour < *end)
    }
}

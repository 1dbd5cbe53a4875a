// Property and exact-value tests for the synthetic load-curve generator.
// Exact values use the fixed-midpoint random source, under which every
// uniform draw collapses to 1.0 and the output is fully deterministic.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use energy_dashboard_api::config::DeviceTable;
use energy_dashboard_api::models::DeviceReading;
use energy_dashboard_api::simulate::{LoadProfile, LoadSimulator, Midpoint, ThreadRandom};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn simulator() -> LoadSimulator {
    LoadSimulator::new(Arc::new(DeviceTable::default()))
}

// 2025-06-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()
}

#[test]
fn hourly_is_24_nonnegative_values_for_any_device_and_date() {
    let sim = simulator();
    let dates = [
        monday(),
        saturday(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    ];
    for device_id in ["device1", "device2", "device3", "", "garage-heater"] {
        for date in dates {
            let curve = sim.hourly(device_id, date, &mut ThreadRandom);
            assert_eq!(curve.len(), 24);
            assert!(
                curve.iter().all(|v| *v >= 0.0),
                "negative value for {} on {}",
                device_id,
                date
            );
        }
    }
}

#[test]
fn midpoint_hourly_matches_profile_exactly() {
    let sim = simulator();
    // Unknown id -> default profile: base 0.02, peak 9..21 at x2.
    let curve = sim.hourly("unknown", monday(), &mut Midpoint);

    let mut expected = vec![0.02; 24];
    for hour in 9..21 {
        expected[hour] = 0.04;
    }
    assert_eq!(curve, expected);
}

#[test]
fn peak_hours_are_strictly_higher_than_off_peak() {
    let sim = simulator();
    // device2 peaks 14..22 at x4.
    let curve = sim.hourly("device2", monday(), &mut Midpoint);
    for peak_hour in 14..22 {
        for off_hour in 0..14 {
            assert!(curve[peak_hour] > curve[off_hour]);
        }
    }
}

#[test]
fn weekend_is_weekday_scaled_by_the_weekend_multiplier() {
    let sim = simulator();
    // device3: weekend multiplier 1.3.
    let week = sim.hourly("device3", monday(), &mut Midpoint);
    let weekend = sim.hourly("device3", saturday(), &mut Midpoint);
    for (hour, (w, we)) in week.iter().zip(weekend.iter()).enumerate() {
        let scaled = (w * 1.3 * 1000.0).round() / 1000.0;
        assert_eq!(*we, scaled, "hour {}", hour);
    }
}

#[test]
fn unknown_device_equals_the_explicit_default_profile() {
    let defaults = DeviceTable::default();
    let sim = simulator();

    let mut custom = defaults.clone();
    custom
        .devices
        .get_mut("device1")
        .unwrap()
        .profile = Some(LoadProfile::default());
    let custom_sim = LoadSimulator::new(Arc::new(custom));

    let unknown = sim.hourly("never-configured", monday(), &mut Midpoint);
    let explicit = custom_sim.hourly("device1", monday(), &mut Midpoint);
    assert_eq!(unknown, explicit);
}

#[test]
fn daily_has_exactly_the_requested_length() {
    let sim = simulator();
    for days in [0u32, 1, 7, 30, 365] {
        let series = sim.daily("device1", monday(), days, &mut ThreadRandom);
        assert_eq!(series.len(), days as usize);
    }
}

#[test]
fn daily_is_chronological_weekends_land_on_the_right_indices() {
    let sim = simulator();
    // Start on a Monday with the midpoint source: indices 5, 6, 12, 13...
    // are Saturdays/Sundays and carry the weekend multiplier, everything
    // else is the flat weekday total. Default profile weekday total:
    // 12 peak hours at 0.04 + 12 off-peak at 0.02 = 0.72.
    let series = sim.daily("unknown", monday(), 14, &mut Midpoint);
    for (i, value) in series.iter().enumerate() {
        let expected = if i % 7 == 5 || i % 7 == 6 { 0.792 } else { 0.72 };
        assert_eq!(*value, expected, "day index {}", i);
    }
}

#[test]
fn reading_has_24_hourly_and_30_daily_points() {
    let sim = simulator();
    let reading = sim.reading("device2");
    assert_eq!(reading.device_info.device_id, "device2");
    assert_eq!(reading.device_info.name, "Nintendo Switch");
    assert_eq!(reading.hourly.data.len(), 24);
    assert_eq!(reading.daily.data.len(), 30);
}

#[test]
fn reading_is_stamped_with_the_reference_time() {
    let sim = simulator();
    let now: DateTime<Utc> = Utc::now();
    let reading = sim.reading_at("device1", now, &mut Midpoint);
    assert_eq!(reading.hourly.time_stamp, now);
    assert_eq!(reading.daily.time_stamp, now);

    // A second call 29 days later still yields a 30-point daily series
    // ending on the new reference day.
    let later = now + Duration::days(29);
    let reading = sim.reading_at("device1", later, &mut Midpoint);
    assert_eq!(reading.daily.data.len(), 30);
}

#[test]
fn reading_serializes_with_the_frontend_field_names() {
    let sim = simulator();
    let reading = sim.reading_at("device1", Utc::now(), &mut Midpoint);
    let json = serde_json::to_value(&reading).unwrap();

    assert_eq!(json["device_info"]["device_id"], "device1");
    assert_eq!(json["device_info"]["name"], "Sonos Lamp");
    assert_eq!(json["device_info"]["type"], "SMART.TAPOPLUG");
    assert_eq!(json["device_info"]["model"], "P110");
    assert_eq!(json["hourly"]["data"].as_array().unwrap().len(), 24);
    assert_eq!(json["daily"]["data"].as_array().unwrap().len(), 30);

    let stamp = json["hourly"]["time_stamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[test]
fn reading_round_trips_through_json() {
    let sim = simulator();
    let reading = sim.reading("device3");
    let json = serde_json::to_string(&reading).unwrap();
    let parsed: DeviceReading = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reading);
}

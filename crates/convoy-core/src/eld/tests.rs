//! Tests for ELD log generation.

use jiff::{civil::date, civil::time, tz::TimeZone};

use super::*;
use crate::{HosPolicy, hos::plan_stops};

fn start() -> Zoned {
    date(2025, 3, 3)
        .at(8, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("Failed to build start time")
}

fn trip_stops(total_distance: f64, initial_cycle_hours: f64) -> Vec<Stop> {
    plan_stops(
        &HosPolicy::default(),
        total_distance,
        initial_cycle_hours,
        "Chicago, IL",
        "Dallas, TX",
    )
    .expect("Failed to plan stops")
}

#[test]
fn test_zero_distance_logs() {
    let logs =
        generate_logs(&trip_stops(0.0, 0.0), 0.0, &start()).expect("Failed to generate logs");

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].status, DutyStatus::OnDuty);
    assert_eq!(logs[1].status, DutyStatus::OnDuty);
    assert_eq!(logs[0].time, time(8, 0, 0, 0));
    assert_eq!(logs[1].time, time(9, 0, 0, 0));
    assert_eq!(logs[0].hours_driven, 0.0);
    assert_eq!(logs[1].hours_driven, 1.0);
    assert_eq!(logs[0].location, "Chicago, IL");
    assert_eq!(logs[1].location, "Dallas, TX");
    assert_eq!(logs[0].remarks, "Pickup");
    assert_eq!(logs[1].remarks, "Dropoff");
}

#[test]
fn test_long_trip_timeline() {
    let stops = trip_stops(1500.0, 0.0);
    let logs = generate_logs(&stops, 3.0, &start()).expect("Failed to generate logs");

    let observed: Vec<_> = logs
        .iter()
        .map(|entry| {
            (
                entry.date.to_string(),
                entry.time.strftime("%H:%M").to_string(),
                entry.status,
                entry.hours_driven,
            )
        })
        .collect();
    let expected = [
        ("2025-03-03", "08:00", DutyStatus::OnDuty, 3.0),
        ("2025-03-03", "09:00", DutyStatus::SleeperBerth, 4.0),
        ("2025-03-03", "09:30", DutyStatus::OffDuty, 4.5),
        ("2025-03-03", "19:30", DutyStatus::OnDuty, 4.5),
        ("2025-03-03", "20:00", DutyStatus::SleeperBerth, 5.0),
        ("2025-03-03", "20:30", DutyStatus::OffDuty, 5.5),
        ("2025-03-04", "06:30", DutyStatus::OnDuty, 5.5),
    ];
    let expected: Vec<_> = expected
        .iter()
        .map(|(d, t, s, h)| (d.to_string(), t.to_string(), *s, *h))
        .collect();

    assert_eq!(observed, expected);
}

#[test]
fn test_one_entry_per_stop_in_order() {
    let stops = trip_stops(2600.0, 6.0);
    let logs = generate_logs(&stops, 6.0, &start()).expect("Failed to generate logs");

    assert_eq!(logs.len(), stops.len());
    for (stop, entry) in stops.iter().zip(&logs) {
        assert_eq!(entry.remarks, stop.kind.as_str());
        assert_eq!(entry.status, status_for(stop.kind));
    }
}

#[test]
fn test_hours_driven_never_decreases() {
    let stops = trip_stops(4000.0, 9.0);
    let logs = generate_logs(&stops, 9.0, &start()).expect("Failed to generate logs");

    assert!(
        logs.windows(2)
            .all(|pair| pair[0].hours_driven <= pair[1].hours_driven)
    );
}

#[test]
fn test_rest_does_not_add_hours() {
    let stops = vec![
        Stop::at(StopKind::Pickup, "A", 1.0, 0.0),
        Stop::en_route(StopKind::Rest, 10.0, 0.0),
        Stop::at(StopKind::Dropoff, "B", 1.0, 0.0),
    ];
    let logs = generate_logs(&stops, 0.0, &start()).expect("Failed to generate logs");

    assert_eq!(logs[1].hours_driven, 1.0);
    assert_eq!(logs[2].hours_driven, 1.0);
    assert_eq!(logs[2].time, time(19, 0, 0, 0));
}

#[test]
fn test_en_route_location() {
    let stops = trip_stops(500.0, 0.0);
    let logs = generate_logs(&stops, 0.0, &start()).expect("Failed to generate logs");

    assert_eq!(logs[1].remarks, "30-min Break");
    assert_eq!(logs[1].location, EN_ROUTE);
}

#[test]
fn test_hours_rounded_to_one_decimal() {
    let stops = trip_stops(0.0, 0.0);
    let logs = generate_logs(&stops, 2.26, &start()).expect("Failed to generate logs");

    assert_eq!(logs[0].hours_driven, 2.3);
    assert_eq!(logs[1].hours_driven, 3.3);
}

#[test]
fn test_hours_half_tenths_round_to_even() {
    let stops = trip_stops(0.0, 0.0);
    let logs = generate_logs(&stops, 0.25, &start()).expect("Failed to generate logs");

    assert_eq!(logs[0].hours_driven, 0.2);
    assert_eq!(logs[1].hours_driven, 1.2);

    let logs = generate_logs(&stops, 0.75, &start()).expect("Failed to generate logs");
    assert_eq!(logs[0].hours_driven, 0.8);
    assert_eq!(logs[1].hours_driven, 1.8);

    let logs = generate_logs(&stops, 0.15, &start()).expect("Failed to generate logs");
    assert_eq!(logs[0].hours_driven, 0.1);
    assert_eq!(logs[1].hours_driven, 1.1);
}

#[test]
fn test_status_mapping() {
    assert_eq!(status_for(StopKind::Rest), DutyStatus::OffDuty);
    assert_eq!(status_for(StopKind::Break), DutyStatus::SleeperBerth);
    assert_eq!(status_for(StopKind::Pickup), DutyStatus::OnDuty);
    assert_eq!(status_for(StopKind::Dropoff), DutyStatus::OnDuty);
    assert_eq!(status_for(StopKind::FuelStop), DutyStatus::OnDuty);
}

#[test]
fn test_planned_trips_never_log_driving() {
    let stops = trip_stops(5000.0, 0.0);
    let logs = generate_logs(&stops, 0.0, &start()).expect("Failed to generate logs");
    assert!(logs.iter().all(|entry| entry.status != DutyStatus::Driving));
}

#[test]
fn test_empty_stop_list() {
    let logs = generate_logs(&[], 0.0, &start()).expect("Failed to generate logs");
    assert!(logs.is_empty());
}

#[test]
fn test_negative_cycle_hours_rejected() {
    let err = generate_logs(&trip_stops(0.0, 0.0), -1.0, &start()).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_fixed_clock_returns_same_instant() {
    let clock = FixedClock::new(start());
    assert_eq!(clock.now(), clock.now());
    assert_eq!(clock.now(), start());
}

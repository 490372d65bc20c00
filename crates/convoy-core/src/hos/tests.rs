//! Tests for the stop planner.

use super::*;

fn plan(total_distance: f64, initial_cycle_hours: f64) -> Itinerary {
    plan_itinerary(
        &HosPolicy::default(),
        total_distance,
        initial_cycle_hours,
        "Chicago, IL",
        "Dallas, TX",
    )
    .expect("Failed to plan itinerary")
}

fn kinds(stops: &[Stop]) -> Vec<StopKind> {
    stops.iter().map(|stop| stop.kind).collect()
}

fn count(stops: &[Stop], kind: StopKind) -> usize {
    stops.iter().filter(|stop| stop.kind == kind).count()
}

#[test]
fn test_zero_distance_is_pickup_then_dropoff() {
    let itinerary = plan(0.0, 0.0);

    assert_eq!(kinds(&itinerary.stops), [StopKind::Pickup, StopKind::Dropoff]);
    assert_eq!(itinerary.stops[0].distance_from_start, 0.0);
    assert_eq!(itinerary.stops[1].distance_from_start, 0.0);
    assert_eq!(itinerary.segments, 0);
    assert_eq!(itinerary.driving_hours, 0.0);
}

#[test]
fn test_pickup_and_dropoff_carry_locations() {
    let itinerary = plan(1500.0, 0.0);
    let first = itinerary.stops.first().unwrap();
    let last = itinerary.stops.last().unwrap();

    assert_eq!(first.kind, StopKind::Pickup);
    assert_eq!(first.location.as_deref(), Some("Chicago, IL"));
    assert_eq!(first.duration, 1.0);
    assert_eq!(last.kind, StopKind::Dropoff);
    assert_eq!(last.location.as_deref(), Some("Dallas, TX"));
    assert_eq!(last.distance_from_start, 1500.0);
    assert_eq!(last.duration, 1.0);

    let inner = &itinerary.stops[1..itinerary.stops.len() - 1];
    assert!(inner.iter().all(|stop| stop.location.is_none()));
}

#[test]
fn test_500_miles_takes_one_break() {
    let itinerary = plan(500.0, 0.0);

    assert_eq!(count(&itinerary.stops, StopKind::Break), 1);
    assert_eq!(count(&itinerary.stops, StopKind::Rest), 0);
    assert_eq!(count(&itinerary.stops, StopKind::FuelStop), 0);

    let brk = &itinerary.stops[1];
    assert_eq!(brk.kind, StopKind::Break);
    assert_eq!(brk.distance_from_start, 480.0);
    assert_eq!(brk.duration, 0.5);
}

#[test]
fn test_1500_miles_full_sequence() {
    let itinerary = plan(1500.0, 0.0);

    let observed: Vec<_> = itinerary
        .stops
        .iter()
        .map(|stop| (stop.kind, stop.distance_from_start))
        .collect();
    assert_eq!(
        observed,
        [
            (StopKind::Pickup, 0.0),
            (StopKind::Break, 480.0),
            (StopKind::Rest, 720.0),
            (StopKind::FuelStop, 1080.0),
            (StopKind::Break, 1200.0),
            (StopKind::Rest, 1440.0),
            (StopKind::Dropoff, 1500.0),
        ]
    );
    assert_eq!(itinerary.segments, 13);
}

#[test]
fn test_rest_lasts_off_duty_required() {
    let itinerary = plan(1500.0, 0.0);
    let rest = itinerary
        .stops
        .iter()
        .find(|stop| stop.kind == StopKind::Rest)
        .unwrap();
    assert_eq!(rest.duration, 10.0);
}

#[test]
fn test_short_trip_near_cycle_limit_finishes_without_rest() {
    // 100 miles fits in one segment, so the rest check never runs again.
    let itinerary = plan(100.0, 10.5);
    assert_eq!(kinds(&itinerary.stops), [StopKind::Pickup, StopKind::Dropoff]);
}

#[test]
fn test_rest_inserted_once_cycle_limit_crossed() {
    let itinerary = plan(200.0, 10.5);

    assert_eq!(
        kinds(&itinerary.stops),
        [StopKind::Pickup, StopKind::Rest, StopKind::Dropoff]
    );
    assert_eq!(itinerary.stops[1].distance_from_start, 120.0);
}

#[test]
fn test_rest_immediately_when_cycle_already_exhausted() {
    let itinerary = plan(100.0, 11.0);

    assert_eq!(
        kinds(&itinerary.stops),
        [StopKind::Pickup, StopKind::Rest, StopKind::Dropoff]
    );
    assert_eq!(itinerary.stops[1].distance_from_start, 0.0);
}

#[test]
fn test_rest_resets_break_counter() {
    // Starting 4 h into the cycle, the break and the rest both fall due at
    // mile 480 (8 h driven, 12 cycle hours).
    let itinerary = plan(600.0, 4.0);

    let observed: Vec<_> = itinerary
        .stops
        .iter()
        .map(|stop| (stop.kind, stop.distance_from_start))
        .collect();
    assert_eq!(
        observed,
        [
            (StopKind::Pickup, 0.0),
            (StopKind::Break, 480.0),
            (StopKind::Rest, 480.0),
            (StopKind::Dropoff, 600.0),
        ]
    );
}

#[test]
fn test_fuel_and_break_at_same_mile_keep_order() {
    let policy = HosPolicy {
        fuel_interval: 480.0,
        ..HosPolicy::default()
    };
    let stops = plan_stops(&policy, 500.0, 0.0, "A", "B").expect("Failed to plan stops");

    assert_eq!(
        kinds(&stops),
        [
            StopKind::Pickup,
            StopKind::FuelStop,
            StopKind::Break,
            StopKind::Dropoff
        ]
    );
    assert_eq!(stops[1].distance_from_start, 480.0);
    assert_eq!(stops[2].distance_from_start, 480.0);
}

#[test]
fn test_fuel_stop_every_interval() {
    let itinerary = plan(3000.0, 0.0);
    let fuel: Vec<_> = itinerary
        .stops
        .iter()
        .filter(|stop| stop.kind == StopKind::FuelStop)
        .map(|stop| stop.distance_from_start)
        .collect();

    // Segments are 120 miles long, so the 1000 mile interval is noticed at
    // the first segment boundary past it.
    assert_eq!(fuel, [1080.0, 2160.0]);
}

#[test]
fn test_distances_never_decrease() {
    for total in [0.0, 1.0, 59.9, 120.0, 999.99, 1000.0, 2500.0, 5000.0] {
        for cycle in [0.0, 5.5, 10.9, 30.0] {
            let itinerary = plan(total, cycle);
            let stops = &itinerary.stops;

            assert_eq!(stops.first().unwrap().kind, StopKind::Pickup);
            assert_eq!(stops.last().unwrap().kind, StopKind::Dropoff);
            assert_eq!(stops.last().unwrap().distance_from_start, total);
            assert!(
                stops
                    .windows(2)
                    .all(|pair| pair[0].distance_from_start <= pair[1].distance_from_start),
                "distances decreased for {total} miles / {cycle} h"
            );
            assert!(
                stops
                    .iter()
                    .all(|stop| (0.0..=total).contains(&stop.distance_from_start))
            );
        }
    }
}

#[test]
fn test_driving_hours_cover_whole_distance() {
    for total in [0.0, 37.5, 500.0, 1234.5, 4321.0] {
        let itinerary = plan(total, 0.0);
        assert!(
            (itinerary.driving_hours * 60.0 - total).abs() < 1e-6,
            "{} h of driving for {total} miles",
            itinerary.driving_hours
        );
    }
}

#[test]
fn test_no_segment_longer_than_cap() {
    let itinerary = plan(1000.0, 0.0);
    // 1000 miles at 60 mph in segments of at most 2 h.
    assert_eq!(itinerary.segments, 9);
}

#[test]
fn test_policy_parameters_are_honoured() {
    let policy = HosPolicy {
        required_break_after: 4.0,
        break_duration: 0.25,
        average_speed: 50.0,
        ..HosPolicy::default()
    };
    let stops = plan_stops(&policy, 450.0, 0.0, "A", "B").expect("Failed to plan stops");

    let breaks: Vec<_> = stops
        .iter()
        .filter(|stop| stop.kind == StopKind::Break)
        .map(|stop| (stop.distance_from_start, stop.duration))
        .collect();
    assert_eq!(breaks, [(200.0, 0.25), (400.0, 0.25)]);
}

#[test]
fn test_negative_distance_rejected() {
    let err = plan_stops(&HosPolicy::default(), -1.0, 0.0, "A", "B").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("total_distance"));
}

#[test]
fn test_non_finite_distance_rejected() {
    for distance in [f64::NAN, f64::INFINITY] {
        let err = plan_stops(&HosPolicy::default(), distance, 0.0, "A", "B").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("must be finite"));
    }
}

#[test]
fn test_negative_cycle_hours_rejected() {
    let err = plan_stops(&HosPolicy::default(), 100.0, -0.5, "A", "B").unwrap_err();
    assert!(err.to_string().contains("initial_cycle_hours"));
    assert!(err.to_string().contains("must not be negative, got -0.5"));
}

#[test]
fn test_oversized_trip_rejected() {
    let err = plan_stops(&HosPolicy::default(), 1.0e9, 0.0, "A", "B").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_invalid_policy_rejected() {
    let policy = HosPolicy {
        segment_cap: 0.0,
        ..HosPolicy::default()
    };
    let err = plan_stops(&policy, 100.0, 0.0, "A", "B").unwrap_err();
    assert!(err.to_string().contains("segment_cap"));
}

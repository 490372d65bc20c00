use convoy_core::{TripPlanner, TripPlannerBuilder, eld::FixedClock};
use jiff::{civil::date, tz::TimeZone};

/// Helper function to create a planner whose logs start on
/// 2025-03-03 08:00 UTC
pub fn create_test_planner() -> TripPlanner {
    let start = date(2025, 3, 3)
        .at(8, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("Failed to build start time");
    TripPlannerBuilder::new()
        .with_user_config(false)
        .with_clock(FixedClock::new(start))
        .build()
        .expect("Failed to create planner")
}

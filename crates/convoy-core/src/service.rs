//! Trip service: route resolution followed by trip planning.
//!
//! This is the layer that talks to the outside world. It asks its
//! [`RouteResolver`] for the distance of `current → pickup → dropoff` and
//! hands that distance to the [`TripPlanner`]. Resolution failures surface as
//! [`crate::TripError::RouteResolution`]; nothing is planned in that case.

use std::fmt;

use log::{info, warn};

use crate::{
    error::Result,
    models::RoutedTrip,
    params::{PlanTrip, RouteTrip},
    planner::TripPlanner,
    route::RouteResolver,
};

/// Plans trips between addresses.
pub struct TripService {
    planner: TripPlanner,
    resolver: Box<dyn RouteResolver>,
}

impl TripService {
    pub fn new(planner: TripPlanner, resolver: impl RouteResolver + 'static) -> Self {
        Self {
            planner,
            resolver: Box::new(resolver),
        }
    }

    pub fn planner(&self) -> &TripPlanner {
        &self.planner
    }

    /// Resolves the route and plans the trip over it.
    pub async fn route_trip(&self, params: &RouteTrip) -> Result<RoutedTrip> {
        info!(
            "Resolving {} → {} → {} with {} resolver",
            params.current_location,
            params.pickup_location,
            params.dropoff_location,
            self.resolver.name()
        );

        let route = self
            .resolver
            .resolve_route(
                &params.current_location,
                &params.pickup_location,
                &params.dropoff_location,
            )
            .await
            .inspect_err(|e| warn!("Route resolution failed: {e}"))?;

        let trip = self.planner.plan_trip(&PlanTrip {
            total_distance: route.distance,
            current_cycle_used: params.current_cycle_used,
            pickup_location: params.pickup_location.clone(),
            dropoff_location: params.dropoff_location.clone(),
        })?;

        Ok(RoutedTrip::new(route, trip))
    }
}

impl fmt::Debug for TripService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripService")
            .field("planner", &self.planner)
            .field("resolver", &self.resolver.name())
            .finish()
    }
}

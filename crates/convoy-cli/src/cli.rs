//! Command-line argument wrappers and command handlers
//!
//! Each command has a clap `Args` struct that converts into the matching
//! core parameter type, keeping clap attributes out of `convoy_core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner / TripService
//! ```

use anyhow::{Context, Result};
use clap::Args;
use convoy_core::{
    PlanTrip, RouteTrip, TripPlanner, TripService, user_policy_path,
    route::{DEFAULT_NOMINATIM_URL, FixedRoute, GeocodingRouteResolver, NominatimGeocoder},
};
use log::info;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Plan a trip over a known distance
#[derive(Args)]
pub struct PlanArgs {
    /// Distance from pickup to dropoff in miles
    #[arg(short, long, allow_negative_numbers = true)]
    pub distance: f64,
    /// Hours already used in the current cycle
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cycle_used: f64,
    /// Pickup location name
    #[arg(long, default_value = "Pickup")]
    pub pickup: String,
    /// Dropoff location name
    #[arg(long, default_value = "Dropoff")]
    pub dropoff: String,
    /// Print the trip as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&PlanArgs> for PlanTrip {
    fn from(val: &PlanArgs) -> Self {
        PlanTrip {
            total_distance: val.distance,
            current_cycle_used: val.cycle_used,
            pickup_location: val.pickup.clone(),
            dropoff_location: val.dropoff.clone(),
        }
    }
}

/// Resolve a route between addresses and plan the trip over it
#[derive(Args)]
pub struct RouteArgs {
    /// Where the driver is now
    pub current: String,
    /// Pickup address
    pub pickup: String,
    /// Dropoff address
    pub dropoff: String,
    /// Hours already used in the current cycle
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cycle_used: f64,
    /// Nominatim instance used for geocoding
    #[arg(long, default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,
    /// Skip geocoding and use this route distance in miles
    #[arg(short, long, allow_negative_numbers = true)]
    pub distance: Option<f64>,
    /// Print the trip as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&RouteArgs> for RouteTrip {
    fn from(val: &RouteArgs) -> Self {
        RouteTrip {
            current_location: val.current.clone(),
            pickup_location: val.pickup.clone(),
            dropoff_location: val.dropoff.clone(),
            current_cycle_used: val.cycle_used,
        }
    }
}

/// Show the effective Hours-of-Service policy
#[derive(Args)]
pub struct PolicyArgs {
    /// Print the policy as JSON
    #[arg(long)]
    pub json: bool,
    /// Write the policy to $XDG_CONFIG_HOME/convoy/policy.json
    #[arg(long)]
    pub save: bool,
}

/// Start the MCP server
#[derive(Args)]
pub struct ServeArgs {
    /// Nominatim instance used by the route_trip tool
    #[arg(long, default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,
}

/// Builds the trip service for a route command.
pub fn trip_service(
    planner: TripPlanner,
    distance: Option<f64>,
    nominatim_url: &str,
) -> Result<TripService> {
    let service = match distance {
        Some(distance) => TripService::new(planner, FixedRoute::new(distance)),
        None => {
            let geocoder = NominatimGeocoder::new(nominatim_url)
                .context("Failed to create geocoding client")?;
            TripService::new(planner, GeocodingRouteResolver::new(geocoder))
        }
    };
    Ok(service)
}

/// Command handlers for the terminal interface
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let trip = self
            .planner
            .plan_trip(&PlanTrip::from(&args))
            .context("Failed to plan trip")?;

        if args.json {
            print_json(&trip)
        } else {
            self.renderer.render(&trip.to_string())
        }
    }

    pub async fn route(&self, args: RouteArgs) -> Result<()> {
        let service = trip_service(self.planner.clone(), args.distance, &args.nominatim_url)?;
        let trip = service
            .route_trip(&RouteTrip::from(&args))
            .await
            .context("Failed to plan routed trip")?;

        if args.json {
            print_json(&trip)
        } else {
            self.renderer.render(&trip.to_string())
        }
    }

    pub fn policy(&self, args: PolicyArgs) -> Result<()> {
        let policy = self.planner.policy();

        if args.save {
            let path = user_policy_path().context("Failed to locate policy file")?;
            policy
                .save(&path)
                .with_context(|| format!("Failed to save policy to {}", path.display()))?;
            info!("Saved policy to {}", path.display());
            println!("Saved policy to {}", path.display());
        }

        if args.json {
            print_json(policy)
        } else {
            self.renderer.render(&policy.to_string())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

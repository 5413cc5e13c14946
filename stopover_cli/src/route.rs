use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use stopover::{PrecisionTier, RouteMaterializer, RouteResult, Stop, TravelEstimateParams};
use stopover_osrm::{OsrmClient, OsrmClientParams};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct RouteArgs {
    /// A stop as LAT,LNG[,LABEL], repeat for every stop. The first one is the start
    #[arg(short, long = "stop", required = true, value_parser = parsers::parse_stop)]
    stops: Vec<Stop>,

    /// OSRM server, overrides STOPOVER_OSRM_URL
    #[arg(long)]
    osrm_url: Option<String>,

    #[arg(long)]
    cost_per_km: Option<f64>,

    #[arg(long)]
    speed_kmh: Option<f64>,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

fn tier_name(tier: Option<PrecisionTier>) -> &'static str {
    match tier {
        Some(PrecisionTier::Road) => "road path",
        Some(PrecisionTier::Matrix) => "road matrix",
        Some(PrecisionTier::Geodesic) => "great-circle",
        None => "none",
    }
}

fn legs_table(result: &RouteResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#",
        "Stop",
        "Latitude",
        "Longitude",
        "Leg (km)",
        "Total (km)",
    ]);

    for leg in &result.legs {
        table.add_row(vec![
            leg.sequence.to_string(),
            leg.stop.label.clone().unwrap_or_default(),
            format!("{:.5}", leg.stop.latitude),
            format!("{:.5}", leg.stop.longitude),
            format!("{:.2}", leg.distance_from_previous_km),
            format!("{:.2}", leg.cumulative_distance_km),
        ]);
    }

    table
}

pub async fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let mut params = OsrmClientParams::from_env();
    if let Some(osrm_url) = args.osrm_url {
        params = params.with_osrm_url(osrm_url);
    }

    let defaults = TravelEstimateParams::default();
    let estimates = TravelEstimateParams {
        cost_per_km: args.cost_per_km.unwrap_or(defaults.cost_per_km),
        average_speed_kmh: args.speed_kmh.unwrap_or(defaults.average_speed_kmh),
    };

    info!(
        "Routing {} stops through {}",
        args.stops.len(),
        params.osrm_url
    );

    let materializer = RouteMaterializer::new(OsrmClient::new(params)?).with_estimates(estimates);
    let result = materializer.compute_route(&args.stops).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", legs_table(&result));
    println!("Distance: {:.2} km", result.total_distance_km);
    println!("Cost: {:.2}", result.total_cost);
    println!("Time: {:.1} min", result.total_time_min);
    if let Some(road_duration) = result.road_duration {
        println!("Road time: {:.1} min", road_duration.as_secs_f64() / 60.0);
    }
    println!("Measured with: {}", tier_name(result.tier));

    Ok(())
}

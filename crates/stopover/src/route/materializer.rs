use jiff::SignedDuration;
use tracing::{Level, debug, instrument, warn};

use crate::{
    error::RouteError,
    problem::{distance_matrix::DistanceMatrix, stop::Stop},
    road_network::RoadNetwork,
    route::{
        estimates::TravelEstimateParams,
        route_result::{PrecisionTier, RouteResult},
    },
    tour::{
        oracle::{DistanceOracle, GeodesicOracle, MatrixOracle},
        sequencer::nearest_neighbor_tour,
        tour_order::TourOrder,
    },
};

/// Orders stops into a route and measures it with the best data the road
/// network can provide.
///
/// Precision degrades in three steps: routed road path, then road matrix
/// distances without geometry, then great-circle distances. Failures of the
/// road network never reach the caller. The materializer holds no state
/// between calls.
pub struct RouteMaterializer<N> {
    network: N,
    estimates: TravelEstimateParams,
}

fn ensure_routable(stops: &[Stop]) -> Result<(), RouteError> {
    if stops.len() < 2 {
        return Err(RouteError::InsufficientStops(stops.len()));
    }

    Ok(())
}

fn leg_distances<O>(order: &TourOrder, oracle: &O) -> Vec<f64>
where
    O: DistanceOracle,
{
    order
        .pairs()
        .map(|(from, to)| oracle.distance(from, to))
        .collect()
}

/// Sum of the leg durations, `None` as soon as one leg has none.
fn road_duration<I>(leg_durations: I) -> Option<SignedDuration>
where
    I: IntoIterator<Item = Option<SignedDuration>>,
{
    leg_durations
        .into_iter()
        .try_fold(SignedDuration::ZERO, |total, leg| total.checked_add(leg?))
}

fn matrix_duration(order: &TourOrder, matrix: &DistanceMatrix) -> Option<SignedDuration> {
    road_duration(order.pairs().map(|(from, to)| matrix.travel_time(from, to)))
}

impl<N> RouteMaterializer<N>
where
    N: RoadNetwork,
{
    pub fn new(network: N) -> Self {
        Self {
            network,
            estimates: TravelEstimateParams::default(),
        }
    }

    pub fn with_estimates(mut self, estimates: TravelEstimateParams) -> Self {
        self.estimates = estimates;
        self
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    /// The first stop is the starting location. Fewer than two stops give
    /// an empty route without contacting the road network.
    #[instrument(skip_all, level = Level::DEBUG, fields(num_stops = stops.len()))]
    pub async fn compute_route(&self, stops: &[Stop]) -> RouteResult {
        if let Err(err) = ensure_routable(stops) {
            debug!("{err}, returning an empty route");
            return RouteResult::empty();
        }

        match self.road_route(stops).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "Falling back to geodesic distances");
                self.geodesic_route(stops)
            }
        }
    }

    /// Road and matrix tiers. Errors only when the matrix itself is unavailable.
    async fn road_route(&self, stops: &[Stop]) -> Result<RouteResult, RouteError> {
        let matrix = self.network.fetch_matrix(stops).await?;
        let oracle = MatrixOracle::new(&matrix, stops);
        let order = nearest_neighbor_tour(stops.len(), &oracle);
        let ordered_stops = order.apply(stops);

        match self.network.fetch_path(&ordered_stops).await {
            Ok(path) => {
                let legs: Vec<f64> = order
                    .pairs()
                    .enumerate()
                    .map(|(leg, (from, to))| match path.leg_distances.get(leg) {
                        Some(&distance) => distance,
                        None => oracle.distance(from, to),
                    })
                    .collect();
                let durations = order.pairs().enumerate().map(|(leg, (from, to))| {
                    match path.leg_durations.get(leg).copied().flatten() {
                        Some(seconds) => SignedDuration::try_from_secs_f64(seconds).ok(),
                        None => matrix.travel_time(from, to),
                    }
                });
                let duration = road_duration(durations);

                Ok(RouteResult::from_ordered_stops(
                    ordered_stops,
                    &legs,
                    Some(path.geometry),
                    PrecisionTier::Road,
                    &self.estimates,
                )
                .with_road_duration(duration))
            }
            Err(err) => {
                warn!(error = %err, "Falling back to road matrix distances");

                Ok(RouteResult::from_ordered_stops(
                    ordered_stops,
                    &leg_distances(&order, &oracle),
                    None,
                    PrecisionTier::Matrix,
                    &self.estimates,
                )
                .with_road_duration(matrix_duration(&order, &matrix)))
            }
        }
    }

    fn geodesic_route(&self, stops: &[Stop]) -> RouteResult {
        let oracle = GeodesicOracle::new(stops);
        let order = nearest_neighbor_tour(stops.len(), &oracle);

        RouteResult::from_ordered_stops(
            order.apply(stops),
            &leg_distances(&order, &oracle),
            None,
            PrecisionTier::Geodesic,
            &self.estimates,
        )
    }
}

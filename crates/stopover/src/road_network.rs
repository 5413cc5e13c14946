use std::future::Future;

use stopover_osrm::{OsrmClient, response::OsrmRoute};

use crate::{
    error::RouteError,
    problem::{
        distance_matrix::{Distance, DistanceMatrix, Time},
        stop::{LatLng, Stop},
    },
};

/// Road geometry through stops in visiting order, plus the road distance of
/// every leg between consecutive stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    pub geometry: Vec<LatLng>,

    /// Meters, one per consecutive stop pair
    pub leg_distances: Vec<Distance>,

    /// Seconds, aligned with `leg_distances`
    pub leg_durations: Vec<Option<Time>>,
}

impl From<OsrmRoute> for RoutedPath {
    fn from(route: OsrmRoute) -> Self {
        Self {
            geometry: route
                .coordinates
                .into_iter()
                .map(LatLng::from_lon_lat)
                .collect(),
            leg_distances: route.legs.iter().map(|leg| leg.distance).collect(),
            leg_durations: route.legs.iter().map(|leg| leg.duration).collect(),
        }
    }
}

/// The external road-network service the route engine depends on.
pub trait RoadNetwork {
    /// All-pairs road matrix over `stops`, indexed like `stops`.
    /// Fewer than two stops yield an empty matrix.
    fn fetch_matrix(
        &self,
        stops: &[Stop],
    ) -> impl Future<Output = Result<DistanceMatrix, RouteError>> + Send;

    /// Road path visiting `ordered_stops` in the given order.
    fn fetch_path(
        &self,
        ordered_stops: &[Stop],
    ) -> impl Future<Output = Result<RoutedPath, RouteError>> + Send;
}

impl RoadNetwork for OsrmClient {
    async fn fetch_matrix(&self, stops: &[Stop]) -> Result<DistanceMatrix, RouteError> {
        self.fetch_table(stops)
            .await
            .map(DistanceMatrix::from_osrm_table)
            .map_err(|err| RouteError::MatrixUnavailable(err.to_string()))
    }

    async fn fetch_path(&self, ordered_stops: &[Stop]) -> Result<RoutedPath, RouteError> {
        self.fetch_route(ordered_stops)
            .await
            .map(RoutedPath::from)
            .map_err(|err| RouteError::PathUnavailable(err.to_string()))
    }
}

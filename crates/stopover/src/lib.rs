pub mod error;
pub mod geodesic;
pub mod problem;
pub mod road_network;
pub mod route;
pub mod tour;
mod utils;

pub use error::RouteError;
pub use problem::{
    distance_matrix::DistanceMatrix,
    stop::{LatLng, Stop, StopIdx},
};
pub use road_network::{RoadNetwork, RoutedPath};
pub use route::{
    estimates::TravelEstimateParams,
    materializer::RouteMaterializer,
    route_result::{PrecisionTier, RouteLeg, RouteResult},
};

#[cfg(test)]
pub(crate) mod test_utils;

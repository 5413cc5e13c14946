use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    problem::stop::{LatLng, Stop},
    route::estimates::{TravelEstimateParams, round_km},
};

/// Which data the legs of a route were measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionTier {
    /// Routed path geometry and road leg distances
    Road,
    /// Road matrix distances, no geometry
    Matrix,
    /// Great-circle distances only
    Geodesic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub stop: Stop,
    pub sequence: usize,
    pub distance_from_previous_km: f64,
    pub cumulative_distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub legs: Vec<RouteLeg>,
    pub total_distance_km: f64,
    pub total_cost: f64,
    pub total_time_min: f64,

    /// Road geometry, `None` unless the path service answered
    pub path: Option<Vec<LatLng>>,

    /// Driving time reported by the road network along the whole route.
    /// `None` in the geodesic tier or when any leg has no duration.
    pub road_duration: Option<SignedDuration>,

    /// `None` for the empty route
    pub tier: Option<PrecisionTier>,
}

impl RouteResult {
    pub fn empty() -> Self {
        Self {
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_cost: 0.0,
            total_time_min: 0.0,
            path: None,
            road_duration: None,
            tier: None,
        }
    }

    /// Builds the legs from stops already in visiting order and the
    /// distance in meters of each leg, `leg_meters[i]` leading into stop `i + 1`.
    pub fn from_ordered_stops(
        ordered_stops: Vec<Stop>,
        leg_meters: &[f64],
        path: Option<Vec<LatLng>>,
        tier: PrecisionTier,
        estimates: &TravelEstimateParams,
    ) -> Self {
        let mut cumulative_km = 0.0;

        let legs: Vec<RouteLeg> = ordered_stops
            .into_iter()
            .enumerate()
            .map(|(sequence, stop)| {
                let distance_from_previous_km = match sequence {
                    0 => 0.0,
                    _ => leg_meters.get(sequence - 1).copied().unwrap_or(0.0) / 1000.0,
                };
                cumulative_km += distance_from_previous_km;

                RouteLeg {
                    stop,
                    sequence,
                    distance_from_previous_km,
                    cumulative_distance_km: cumulative_km,
                }
            })
            .collect();

        let total_distance_km = round_km(cumulative_km);

        Self {
            legs,
            total_distance_km,
            total_cost: estimates.cost(total_distance_km),
            total_time_min: estimates.time_minutes(total_distance_km),
            path,
            road_duration: None,
            tier: Some(tier),
        }
    }

    pub fn with_road_duration(mut self, road_duration: Option<SignedDuration>) -> Self {
        self.road_duration = road_duration;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

use crate::{
    geodesic,
    problem::{
        distance_matrix::{Distance, DistanceMatrix},
        stop::{Stop, StopIdx},
    },
};

/// Answers "how far is it from one stop to another", in meters.
pub trait DistanceOracle {
    fn distance(&self, from: StopIdx, to: StopIdx) -> Distance;
}

/// Great-circle distances only.
pub struct GeodesicOracle<'a> {
    stops: &'a [Stop],
}

impl<'a> GeodesicOracle<'a> {
    pub fn new(stops: &'a [Stop]) -> Self {
        Self { stops }
    }
}

impl DistanceOracle for GeodesicOracle<'_> {
    fn distance(&self, from: StopIdx, to: StopIdx) -> Distance {
        geodesic::distance_meters(&self.stops[from], &self.stops[to])
    }
}

/// Road distances from a [`DistanceMatrix`], great-circle distance for
/// pairs the matrix has no entry for.
pub struct MatrixOracle<'a> {
    matrix: &'a DistanceMatrix,
    geodesic: GeodesicOracle<'a>,
}

impl<'a> MatrixOracle<'a> {
    pub fn new(matrix: &'a DistanceMatrix, stops: &'a [Stop]) -> Self {
        Self {
            matrix,
            geodesic: GeodesicOracle::new(stops),
        }
    }
}

impl DistanceOracle for MatrixOracle<'_> {
    fn distance(&self, from: StopIdx, to: StopIdx) -> Distance {
        self.matrix
            .travel_distance(from, to)
            .unwrap_or_else(|| self.geodesic.distance(from, to))
    }
}

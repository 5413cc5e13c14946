use jiff::SignedDuration;
use stopover_osrm::response::OsrmTable;

use crate::problem::stop::StopIdx;

pub type Distance = f64;
pub type Time = f64;

/// Road distances (meters) and durations (seconds) between the stops of one
/// stop list, in the order of that list.
///
/// Entries are stored flat: `index = from * num_locations + to`.
/// `None` marks a pair the road service could not resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: Vec<Option<Distance>>,
    times: Vec<Option<Time>>,
    num_locations: usize,
}

impl DistanceMatrix {
    pub fn empty() -> Self {
        Self {
            distances: Vec::new(),
            times: Vec::new(),
            num_locations: 0,
        }
    }

    pub fn new(distances: Vec<Vec<Option<Distance>>>, times: Vec<Vec<Option<Time>>>) -> Self {
        let num_locations = distances.len();

        Self {
            distances: distances.into_iter().flatten().collect(),
            times: times.into_iter().flatten().collect(),
            num_locations,
        }
    }

    pub fn from_osrm_table(table: OsrmTable) -> Self {
        Self {
            distances: table.distances,
            times: table.durations,
            num_locations: table.num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: StopIdx, to: StopIdx) -> Option<usize> {
        if from.get() >= self.num_locations || to.get() >= self.num_locations {
            return None;
        }

        Some(from.get() * self.num_locations + to.get())
    }

    /// Meters from `from` to `to`, or `None` when the pair is missing.
    #[inline(always)]
    pub fn travel_distance(&self, from: StopIdx, to: StopIdx) -> Option<Distance> {
        let index = self.index(from, to)?;
        if from == to {
            return Some(0.0);
        }

        self.distances.get(index).copied().flatten()
    }

    #[inline(always)]
    pub fn travel_time(&self, from: StopIdx, to: StopIdx) -> Option<SignedDuration> {
        let index = self.index(from, to)?;
        if from == to {
            return Some(SignedDuration::ZERO);
        }

        self.times
            .get(index)
            .copied()
            .flatten()
            .map(SignedDuration::from_secs_f64)
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn is_empty(&self) -> bool {
        self.num_locations == 0
    }
}

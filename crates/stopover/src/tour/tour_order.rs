use crate::problem::stop::{Stop, StopIdx};

/// Visiting order over the stops of one stop list.
/// Starts at stop 0 and holds every index exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourOrder(Vec<StopIdx>);

impl TourOrder {
    pub(crate) fn from_indices(indices: Vec<StopIdx>) -> Self {
        debug_assert!(indices.first().is_none_or(|first| first.get() == 0));
        Self(indices)
    }

    pub fn indices(&self) -> &[StopIdx] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the tour.
    pub fn pairs(&self) -> impl Iterator<Item = (StopIdx, StopIdx)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Stops rearranged into visiting order.
    pub fn apply(&self, stops: &[Stop]) -> Vec<Stop> {
        self.0.iter().map(|&idx| stops[idx].clone()).collect()
    }
}

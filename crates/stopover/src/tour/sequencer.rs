use fixedbitset::FixedBitSet;

use crate::{
    problem::stop::StopIdx,
    tour::{oracle::DistanceOracle, tour_order::TourOrder},
};

/// Greedy nearest-neighbor tour starting at stop 0.
///
/// From the current stop, the closest unvisited stop under `oracle` is
/// visited next. Unvisited stops are scanned in ascending index order and
/// only a strictly shorter distance replaces the current candidate, so ties
/// go to the lowest index. No improvement pass is run on the result.
pub fn nearest_neighbor_tour<O>(num_stops: usize, oracle: &O) -> TourOrder
where
    O: DistanceOracle + ?Sized,
{
    if num_stops == 0 {
        return TourOrder::from_indices(Vec::new());
    }

    let mut visited = FixedBitSet::with_capacity(num_stops);
    let mut order = Vec::with_capacity(num_stops);

    let mut current = StopIdx::new(0);
    visited.insert(current.get());
    order.push(current);

    while order.len() < num_stops {
        let mut nearest: Option<(StopIdx, f64)> = None;

        for candidate in visited.zeroes().map(StopIdx::new) {
            let distance = oracle.distance(current, candidate);

            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((candidate, distance)),
            }
        }

        // zeroes() is non-empty while the order is incomplete
        let Some((next, _)) = nearest else { break };

        visited.insert(next.get());
        order.push(next);
        current = next;
    }

    TourOrder::from_indices(order)
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_COST_PER_KM: f64 = 12.0;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Flat-rate conversion of route distance into cost and driving time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimateParams {
    /// Currency units per kilometer
    pub cost_per_km: f64,
    pub average_speed_kmh: f64,
}

impl Default for TravelEstimateParams {
    fn default() -> Self {
        Self {
            cost_per_km: DEFAULT_COST_PER_KM,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

/// Rounds half away from zero at `decimals`, after nudging by `f64::EPSILON`
/// so values such as `1.005`, stored just below the half, still round up.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    ((value + f64::EPSILON) * factor).round() / factor
}

pub fn round_km(km: f64) -> f64 {
    round_to(km, 2)
}

impl TravelEstimateParams {
    pub fn cost(&self, distance_km: f64) -> f64 {
        round_to(distance_km * self.cost_per_km, 2)
    }

    /// Minutes, rounded to one decimal. Zero when the speed is not positive.
    pub fn time_minutes(&self, distance_km: f64) -> f64 {
        if self.average_speed_kmh <= 0.0 {
            return 0.0;
        }

        round_to(distance_km / self.average_speed_kmh * 60.0, 1)
    }
}

use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

define_index_newtype!(StopIdx, Stop);

/// A plain WGS84 coordinate, used for path vertices.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// From a GeoJSON `[longitude, latitude]` pair.
    pub fn from_lon_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for geo_types::Point {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<&LatLng> for geo_types::Point {
    fn from(value: &LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

/// A location to visit. The label is for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Stop {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

impl From<&Stop> for geo_types::Point {
    fn from(stop: &Stop) -> Self {
        geo_types::Point::new(stop.longitude, stop.latitude)
    }
}

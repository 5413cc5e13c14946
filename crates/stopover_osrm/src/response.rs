use serde::Deserialize;

use crate::client::OsrmError;

const OSRM_OK: &str = "Ok";

#[derive(Deserialize)]
struct TableResponse {
    code: String,
    message: Option<String>,
    distances: Option<Vec<Vec<Option<f64>>>>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

#[derive(Deserialize)]
struct RouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    geometry: Option<Geometry>,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct Leg {
    distance: f64,
    #[serde(default)]
    duration: Option<f64>,
}

/// All-pairs result of the table service.
/// Stored as flat row-major vectors, `None` for pairs OSRM could not route.
#[derive(Debug, Clone, PartialEq)]
pub struct OsrmTable {
    /// Distances in meters
    pub distances: Vec<Option<f64>>,

    /// Travel times in seconds
    pub durations: Vec<Option<f64>>,

    pub num_locations: usize,
}

impl OsrmTable {
    pub fn empty() -> Self {
        Self {
            distances: Vec::new(),
            durations: Vec::new(),
            num_locations: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OsrmLeg {
    /// Meters
    pub distance: f64,

    /// Seconds, when the service reported it
    pub duration: Option<f64>,
}

/// First route returned by the route service.
#[derive(Debug, Clone, PartialEq)]
pub struct OsrmRoute {
    /// Vertices as `[longitude, latitude]`, in travel order
    pub coordinates: Vec<[f64; 2]>,
    pub legs: Vec<OsrmLeg>,
}

fn check_code(code: String, message: Option<String>) -> Result<(), OsrmError> {
    if code == OSRM_OK {
        Ok(())
    } else {
        Err(OsrmError::Code {
            code,
            message: message.unwrap_or_default(),
        })
    }
}

fn flatten_square(
    rows: Vec<Vec<Option<f64>>>,
    num_locations: usize,
) -> Result<Vec<Option<f64>>, OsrmError> {
    if rows.len() != num_locations || rows.iter().any(|row| row.len() != num_locations) {
        return Err(OsrmError::IncompleteResponse("matrix dimensions mismatch"));
    }

    Ok(rows.into_iter().flatten().collect())
}

/// Parses a table service body for a request over `num_locations` points.
pub fn parse_table(body: &[u8], num_locations: usize) -> Result<OsrmTable, OsrmError> {
    let response: TableResponse = serde_json::from_slice(body)?;
    check_code(response.code, response.message)?;

    let distances = response
        .distances
        .ok_or(OsrmError::IncompleteResponse("missing distances"))?;
    let durations = response
        .durations
        .ok_or(OsrmError::IncompleteResponse("missing durations"))?;

    Ok(OsrmTable {
        distances: flatten_square(distances, num_locations)?,
        durations: flatten_square(durations, num_locations)?,
        num_locations,
    })
}

/// Parses a route service body requested with `geometries=geojson`.
pub fn parse_route(body: &[u8]) -> Result<OsrmRoute, OsrmError> {
    let response: RouteResponse = serde_json::from_slice(body)?;
    check_code(response.code, response.message)?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(OsrmError::IncompleteResponse("no route"))?;

    let geometry = route
        .geometry
        .ok_or(OsrmError::IncompleteResponse("missing geometry"))?;

    Ok(OsrmRoute {
        coordinates: geometry.coordinates,
        legs: route
            .legs
            .into_iter()
            .map(|leg| OsrmLeg {
                distance: leg.distance,
                duration: leg.duration,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let body = br#"{
            "code": "Ok",
            "distances": [[0, 1200.5], [1300, 0]],
            "durations": [[0, 100], [110.5, 0]]
        }"#;

        let table = parse_table(body, 2).unwrap();

        assert_eq!(table.num_locations, 2);
        assert_eq!(
            table.distances,
            vec![Some(0.0), Some(1200.5), Some(1300.0), Some(0.0)]
        );
        assert_eq!(
            table.durations,
            vec![Some(0.0), Some(100.0), Some(110.5), Some(0.0)]
        );
    }

    #[test]
    fn test_parse_table_keeps_null_entries() {
        let body = br#"{
            "code": "Ok",
            "distances": [[0, null], [1300, 0]],
            "durations": [[0, null], [110, 0]]
        }"#;

        let table = parse_table(body, 2).unwrap();

        assert_eq!(table.distances[1], None);
        assert_eq!(table.durations[1], None);
        assert_eq!(table.distances[2], Some(1300.0));
    }

    #[test]
    fn test_parse_table_rejects_error_code() {
        let body = br#"{ "code": "InvalidQuery", "message": "Query string malformed" }"#;

        match parse_table(body, 2) {
            Err(OsrmError::Code { code, message }) => {
                assert_eq!(code, "InvalidQuery");
                assert_eq!(message, "Query string malformed");
            }
            other => panic!("expected code error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_rejects_missing_distances() {
        let body = br#"{ "code": "Ok", "durations": [[0, 1], [1, 0]] }"#;

        assert!(matches!(
            parse_table(body, 2),
            Err(OsrmError::IncompleteResponse(_))
        ));
    }

    #[test]
    fn test_parse_table_rejects_wrong_dimensions() {
        let body = br#"{
            "code": "Ok",
            "distances": [[0, 1], [1, 0]],
            "durations": [[0, 1], [1, 0]]
        }"#;

        assert!(matches!(
            parse_table(body, 3),
            Err(OsrmError::IncompleteResponse(_))
        ));
    }

    #[test]
    fn test_parse_table_rejects_garbage() {
        assert!(matches!(
            parse_table(b"<html>502 Bad Gateway</html>", 2),
            Err(OsrmError::Deserialize(_))
        ));
    }

    #[test]
    fn test_parse_route() {
        let body = br#"{
            "code": "Ok",
            "routes": [{
                "geometry": { "type": "LineString", "coordinates": [[77.21, 28.61], [77.15, 28.66], [77.10, 28.70]] },
                "legs": [{ "distance": 15000.0, "duration": 1200.0, "steps": [] }],
                "distance": 15000.0,
                "duration": 1200.0
            }],
            "waypoints": []
        }"#;

        let route = parse_route(body).unwrap();

        assert_eq!(route.coordinates.len(), 3);
        assert_eq!(route.coordinates[0], [77.21, 28.61]);
        assert_eq!(
            route.legs,
            vec![OsrmLeg {
                distance: 15000.0,
                duration: Some(1200.0)
            }]
        );
    }

    #[test]
    fn test_parse_route_without_totals_or_durations() {
        let body = br#"{
            "code": "Ok",
            "routes": [{
                "geometry": { "coordinates": [[77.21, 28.61], [77.10, 28.70]] },
                "legs": [{ "distance": 15000.0 }]
            }]
        }"#;

        let route = parse_route(body).unwrap();

        assert_eq!(route.coordinates.len(), 2);
        assert_eq!(
            route.legs,
            vec![OsrmLeg {
                distance: 15000.0,
                duration: None
            }]
        );
    }

    #[test]
    fn test_parse_route_rejects_empty_routes() {
        let body = br#"{ "code": "Ok", "routes": [] }"#;

        assert!(matches!(
            parse_route(body),
            Err(OsrmError::IncompleteResponse("no route"))
        ));
    }

    #[test]
    fn test_parse_route_rejects_missing_geometry() {
        let body = br#"{
            "code": "Ok",
            "routes": [{ "legs": [] }]
        }"#;

        assert!(matches!(
            parse_route(body),
            Err(OsrmError::IncompleteResponse("missing geometry"))
        ));
    }

    #[test]
    fn test_parse_route_rejects_no_route_code() {
        let body = br#"{ "code": "NoRoute", "message": "Impossible route between points" }"#;

        assert!(matches!(parse_route(body), Err(OsrmError::Code { .. })));
    }
}

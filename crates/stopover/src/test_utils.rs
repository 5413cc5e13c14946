use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use crate::{
    DistanceMatrix, LatLng, RoutedPath, Stop, error::RouteError, road_network::RoadNetwork,
};

/// In-memory road network. Counts the requests it receives.
pub struct FakeRoadNetwork {
    matrix: Option<Vec<Vec<Option<f64>>>>,
    path_legs: Option<Vec<f64>>,
    fail_path: bool,
    matrix_calls: AtomicUsize,
    path_calls: AtomicUsize,
}

pub const FAKE_PATH_LEG_METERS: f64 = 1500.0;
pub const FAKE_PATH_LEG_SECONDS: f64 = 120.0;

impl FakeRoadNetwork {
    fn new(matrix: Option<Vec<Vec<Option<f64>>>>) -> Self {
        Self {
            matrix,
            path_legs: None,
            fail_path: false,
            matrix_calls: AtomicUsize::new(0),
            path_calls: AtomicUsize::new(0),
        }
    }

    /// Matrix of 1 km and 100 s per index step, path legs of
    /// [`FAKE_PATH_LEG_METERS`] and [`FAKE_PATH_LEG_SECONDS`].
    pub fn road(num_stops: usize) -> Self {
        let matrix = (0..num_stops)
            .map(|from| {
                (0..num_stops)
                    .map(|to| Some(from.abs_diff(to) as f64 * 1000.0))
                    .collect()
            })
            .collect();

        Self::new(Some(matrix))
    }

    pub fn with_matrix(matrix: Vec<Vec<Option<f64>>>) -> Self {
        Self::new(Some(matrix))
    }

    /// Both services down.
    pub fn unavailable() -> Self {
        Self::new(None).with_failing_path()
    }

    pub fn with_failing_path(mut self) -> Self {
        self.fail_path = true;
        self
    }

    /// Path legs without durations.
    pub fn with_path_legs(mut self, legs: Vec<f64>) -> Self {
        self.path_legs = Some(legs);
        self
    }

    pub fn matrix_calls(&self) -> usize {
        self.matrix_calls.load(Ordering::SeqCst)
    }

    pub fn path_calls(&self) -> usize {
        self.path_calls.load(Ordering::SeqCst)
    }
}

impl RoadNetwork for FakeRoadNetwork {
    async fn fetch_matrix(&self, stops: &[Stop]) -> Result<DistanceMatrix, RouteError> {
        self.matrix_calls.fetch_add(1, Ordering::SeqCst);

        let Some(distances) = &self.matrix else {
            return Err(RouteError::MatrixUnavailable(
                "HTTP request failed: connection refused".to_string(),
            ));
        };

        if distances.len() != stops.len() {
            return Err(RouteError::MatrixUnavailable(
                "Incomplete response: matrix dimensions mismatch".to_string(),
            ));
        }

        let durations = distances
            .iter()
            .map(|row| row.iter().map(|d| d.map(|d| d / 10.0)).collect())
            .collect();

        Ok(DistanceMatrix::new(distances.clone(), durations))
    }

    async fn fetch_path(&self, ordered_stops: &[Stop]) -> Result<RoutedPath, RouteError> {
        self.path_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_path {
            return Err(RouteError::PathUnavailable(
                "OSRM returned NoRoute: Impossible route between points".to_string(),
            ));
        }

        let num_legs = ordered_stops.len().saturating_sub(1);
        let (leg_distances, leg_durations) = match &self.path_legs {
            Some(legs) => (legs.clone(), Vec::new()),
            None => (
                vec![FAKE_PATH_LEG_METERS; num_legs],
                vec![Some(FAKE_PATH_LEG_SECONDS); num_legs],
            ),
        };

        Ok(RoutedPath {
            geometry: ordered_stops.iter().map(Stop::lat_lng).collect::<Vec<LatLng>>(),
            leg_distances,
            leg_durations,
        })
    }
}

/// Stops on the equator, 0.01 degrees apart, labelled `S0`, `S1`, ...
pub fn line_stops(count: usize) -> Vec<Stop> {
    (0..count)
        .map(|i| Stop::new(0.0, i as f64 * 0.01).with_label(format!("S{i}")))
        .collect()
}

pub fn delhi_stops() -> Vec<Stop> {
    vec![
        Stop::new(28.61, 77.21).with_label("Start"),
        Stop::new(28.70, 77.10).with_label("A"),
        Stop::new(28.55, 77.30).with_label("B"),
    ]
}

/// Status and JSON body of a canned HTTP reply.
pub type CannedReply = (u16, &'static str);

/// Serves canned replies on a loopback port: `table` for requests to the
/// table service, `route` for everything else. Returns the base URL.
pub fn canned_osrm_server(table: CannedReply, route: CannedReply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(read) => request.extend_from_slice(&buf[..read]),
                }
            }

            let request_text = String::from_utf8_lossy(&request);
            let (status, body) = if request_text.contains("/table/v1/") {
                table
            } else {
                route
            };
            let reason = if status == 200 { "OK" } else { "Error" };

            let reply = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });

    format!("http://{addr}")
}

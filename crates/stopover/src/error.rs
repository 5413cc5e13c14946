use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Road matrix unavailable: {0}")]
    MatrixUnavailable(String),

    #[error("Road path unavailable: {0}")]
    PathUnavailable(String),

    #[error("At least 2 stops are required, got {0}")]
    InsufficientStops(usize),
}

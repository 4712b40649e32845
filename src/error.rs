use thiserror::Error;

/// Errors raised while building arenas or planning paths.
#[derive(Error, Debug)]
pub enum Error {
    /// A circle had a non-finite centre or a negative or non-finite radius,
    /// or an arena boundary a radius of zero.
    #[error("invalid geometry: circle at {centre:?} with radius {radius}")]
    InvalidGeometry { centre: [f64; 2], radius: f64 },

    /// A sampling or waypoint loop ran out of attempts.
    #[error("planning failed after {attempts} attempts")]
    PlanningFailed { attempts: usize },

    #[error("invalid planner config: {0}")]
    InvalidConfig(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

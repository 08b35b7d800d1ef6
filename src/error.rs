use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insufficient samples: {axis} differences need a grid of at least 2, got {size}")]
    InsufficientSamples { axis: &'static str, size: usize },

    #[error("degenerate ratio: near-origin {statistic} is zero")]
    DegenerateRatio { statistic: &'static str },

    #[error("non-finite {statistic}: far {far}, near {normal}")]
    NonFiniteRatio { statistic: &'static str, normal: f64, far: f64 },

    #[error("failed to write image {}: {reason}", .path.display())]
    ImageWrite { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

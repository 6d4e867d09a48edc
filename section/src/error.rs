use crate::interp::InterpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("invalid numeric token '{0}'")]
    Parse(String),

    #[error("point-count mismatch: {distances} distances vs {altitudes} altitudes")]
    CountMismatch { distances: usize, altitudes: usize },

    #[error("a profile needs at least 3 sample points, got {0}")]
    InsufficientSamples(usize),

    #[error("invalid map scale '{0}'")]
    Scale(String),

    #[error("interpolation failed: {0}")]
    Interpolation(#[from] InterpError),
}

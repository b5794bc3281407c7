//! Error type shared by level loading and reporting.
//!
//! Search exhaustion is not an error: `solve` reports it as `None`.

use thiserror::Error;

/// Errors raised while reading, validating, or persisting a level.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown block kind `{0}`")]
    InvalidBlockKind(char),

    #[error("malformed grid: {0}")]
    Grid(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("{what} ({x}, {y}) lies outside the lattice [0, {max_x}] x [0, {max_y}]")]
    OutOfLattice {
        what: &'static str,
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("laser direction ({dx}, {dy}) must have unit components")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

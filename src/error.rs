//! Error types.

use thiserror::Error;

use crate::neighborhood::NeighborhoodKind;

/// Errors raised while building instances, configuring solvers or
/// persisting tours.
///
/// No variant is produced from inside a solve loop: once a solver has been
/// constructed, `solve()` always completes.
#[derive(Debug, Error)]
pub enum AtspError {
    /// The cost matrix has no rows.
    #[error("cost matrix is empty")]
    EmptyMatrix,

    /// A row length differs from the number of rows.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cost entry is negative.
    #[error("negative cost {cost} on edge {from} -> {to}")]
    NegativeCost { from: usize, to: usize, cost: i64 },

    /// A cost entry is large enough that a tour total could overflow.
    #[error("cost {cost} on edge {from} -> {to} exceeds the limit {max} for this size")]
    CostTooLarge {
        from: usize,
        to: usize,
        cost: i64,
        max: i64,
    },

    /// The instance is too small to form a meaningful tour.
    #[error("invalid instance: {cities} cities, at least 2 are required")]
    InvalidInstance { cities: usize },

    /// The requested neighborhood has no implementation.
    #[error("neighborhood {0:?} is not supported by this engine")]
    UnsupportedNeighborhood(NeighborhoodKind),

    /// Tour file content could not be interpreted.
    #[error("malformed tour: {0}")]
    MalformedTour(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AtspError>;

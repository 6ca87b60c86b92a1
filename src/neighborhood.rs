//! Neighborhood structures for position-pair local search.
//!
//! A neighborhood move is addressed by a pair of tour positions `(i, j)`
//! with `i < j`. The tabu engine scans every pair, asks the neighborhood for
//! the exact cost delta and applies the chosen move.
//!
//! Only the swap neighborhood is implemented. 2-opt and 3-opt are named in
//! [`NeighborhoodKind`] as extension points: 2-opt on an asymmetric matrix
//! reverses a segment and therefore needs an O(segment) delta, and 3-opt
//! needs a triple-indexed move key the tabu memory does not model.

use crate::cost::swap_delta;
use crate::matrix::{Cost, CostMatrix};

/// Available neighborhood families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborhoodKind {
    /// Exchange the cities at two positions.
    #[default]
    Swap,
    /// Reverse the segment between two positions.
    TwoOpt,
    /// Reconnect three removed edges.
    ThreeOpt,
}

impl NeighborhoodKind {
    /// Whether an implementation exists for this kind.
    pub fn is_supported(self) -> bool {
        matches!(self, NeighborhoodKind::Swap)
    }
}

/// A pairwise move neighborhood over tours.
pub trait Neighborhood: Send + Sync {
    /// Which family this is.
    fn kind(&self) -> NeighborhoodKind;

    /// Exact cost change of applying move `(i, j)` to `tour`.
    fn delta(&self, tour: &[usize], matrix: &CostMatrix, i: usize, j: usize) -> Cost;

    /// Applies move `(i, j)` to `tour` in place.
    fn apply(&self, tour: &mut [usize], i: usize, j: usize);
}

/// Exchanges the cities at two positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapNeighborhood;

impl Neighborhood for SwapNeighborhood {
    fn kind(&self) -> NeighborhoodKind {
        NeighborhoodKind::Swap
    }

    #[inline]
    fn delta(&self, tour: &[usize], matrix: &CostMatrix, i: usize, j: usize) -> Cost {
        swap_delta(tour, matrix, i, j)
    }

    #[inline]
    fn apply(&self, tour: &mut [usize], i: usize, j: usize) {
        tour.swap(i, j);
    }
}

//! Tour cost model and O(1) move deltas.
//!
//! A tour is a slice of `n` distinct city indices. The closing edge from the
//! last city back to the first is implicit and always counted.

use crate::matrix::{Cost, CostMatrix};

/// Returns `true` if `tour` visits every city in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Total cost of a tour, including the closing edge.
///
/// # Panics
///
/// In debug builds, panics if `tour` is not a permutation of the matrix's
/// cities.
pub fn tour_cost(tour: &[usize], matrix: &CostMatrix) -> Cost {
    debug_assert!(
        is_permutation(tour, matrix.size()),
        "tour is not a permutation of 0..{}",
        matrix.size()
    );
    let n = tour.len();
    if n == 0 {
        return 0;
    }
    let open: Cost = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    open + matrix.get(tour[n - 1], tour[0])
}

/// Exact cost change of swapping the cities at positions `i` and `j`.
///
/// Only the edges touching `i` and `j` are inspected. Adjacent positions
/// (including the wraparound pair `0` / `n - 1`) share an edge and are
/// handled separately.
pub fn swap_delta(tour: &[usize], matrix: &CostMatrix, i: usize, j: usize) -> Cost {
    let n = tour.len();
    if i == j || n < 3 {
        // Any 2-city cycle is the same cycle.
        return 0;
    }
    let next = |k: usize| (k + 1) % n;
    let prev = |k: usize| (k + n - 1) % n;

    if next(i) == j {
        return adjacent_swap_delta(tour, matrix, i, j);
    }
    if next(j) == i {
        return adjacent_swap_delta(tour, matrix, j, i);
    }

    let (a, b) = (tour[i], tour[j]);
    let (pa, na) = (tour[prev(i)], tour[next(i)]);
    let (pb, nb) = (tour[prev(j)], tour[next(j)]);

    let removed = matrix.get(pa, a) + matrix.get(a, na) + matrix.get(pb, b) + matrix.get(b, nb);
    let added = matrix.get(pa, b) + matrix.get(b, na) + matrix.get(pb, a) + matrix.get(a, nb);
    added - removed
}

/// Delta of swapping positions `i` and `j` where `j` directly follows `i`.
fn adjacent_swap_delta(tour: &[usize], matrix: &CostMatrix, i: usize, j: usize) -> Cost {
    let n = tour.len();
    let (a, b) = (tour[i], tour[j]);
    let before = tour[(i + n - 1) % n];
    let after = tour[(j + 1) % n];

    let removed = matrix.get(before, a) + matrix.get(a, b) + matrix.get(b, after);
    let added = matrix.get(before, b) + matrix.get(b, a) + matrix.get(a, after);
    added - removed
}

/// Exact cost change of removing the city at `from` and reinserting it so
/// that it ends up at position `to` (see [`apply_relocate`]).
pub fn relocate_delta(tour: &[usize], matrix: &CostMatrix, from: usize, to: usize) -> Cost {
    let n = tour.len();
    if from == to || n < 3 {
        return 0;
    }
    // Moving the first city to the end (or back) only rotates the cycle.
    if (from == 0 && to == n - 1) || (from == n - 1 && to == 0) {
        return 0;
    }

    let v = tour[from];
    let before = tour[(from + n - 1) % n];
    let after = tour[(from + 1) % n];

    // Closing the gap left by `v`.
    let mut delta = matrix.get(before, after) - matrix.get(before, v) - matrix.get(v, after);

    // Opening the gap `v` lands in.
    let (left, right) = if from < to {
        (tour[to], tour[(to + 1) % n])
    } else {
        (tour[(to + n - 1) % n], tour[to])
    };
    delta += matrix.get(left, v) + matrix.get(v, right) - matrix.get(left, right);
    delta
}

/// Removes the city at `from` and reinserts it at position `to`.
pub fn apply_relocate(tour: &mut Vec<usize>, from: usize, to: usize) {
    let city = tour.remove(from);
    tour.insert(to, city);
}

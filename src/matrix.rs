//! Directed cost matrix.

use crate::error::{AtspError, Result};

/// Integer cost of an edge or a tour.
///
/// Signed so that move deltas share the type of absolute costs.
pub type Cost = i64;

/// Square matrix of directed, non-negative edge costs.
///
/// Stored row-major: `get(from, to)` is the cost of travelling from city
/// `from` to city `to`. Entries need not be symmetric. Diagonal entries are
/// kept but never read by a tour.
///
/// Every entry is at most [`CostMatrix::max_entry`] for the matrix size, so
/// any tour total and any move delta fits in [`Cost`] and stays below the
/// unsolved sentinel `Cost::MAX`.
///
/// # Examples
///
/// ```
/// use atsp_metaheur::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![vec![0, 3], vec![5, 0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), 3);
/// assert_eq!(m.get(1, 0), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct CostMatrix {
    n: usize,
    costs: Vec<Cost>,
}

/// Unvalidated serialized form; deserialization goes through
/// [`CostMatrix::from_flat`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    n: usize,
    costs: Vec<Cost>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for CostMatrix {
    type Error = AtspError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_flat(raw.n, raw.costs)
    }
}

impl CostMatrix {
    /// Builds a matrix from nested rows, validating shape and sign.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AtspError::EmptyMatrix);
        }

        let mut costs = Vec::with_capacity(n * n);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AtspError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            for (to, &cost) in row.iter().enumerate() {
                check_entry(n, from, to, cost)?;
            }
            costs.extend(row);
        }

        Ok(Self { n, costs })
    }

    /// Builds a matrix from a flat row-major buffer of `n * n` entries.
    pub fn from_flat(n: usize, costs: Vec<Cost>) -> Result<Self> {
        if n == 0 {
            return Err(AtspError::EmptyMatrix);
        }
        if costs.len() != n * n {
            return Err(AtspError::NotSquare {
                row: costs.len() / n,
                len: costs.len() % n,
                expected: n,
            });
        }
        for (pos, &cost) in costs.iter().enumerate() {
            check_entry(n, pos / n, pos % n, cost)?;
        }
        Ok(Self { n, costs })
    }

    /// Largest entry accepted for an `n`-city matrix.
    ///
    /// `n` edges of this cost sum to less than `Cost::MAX`.
    pub fn max_entry(n: usize) -> Cost {
        (Cost::MAX - 1) / n.max(1) as Cost
    }

    /// Number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of the directed edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.costs[from * self.n + to]
    }

    /// Outgoing costs of city `from`, indexed by destination.
    #[inline]
    pub fn row(&self, from: usize) -> &[Cost] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// Whether `get(a, b) == get(b, a)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

fn check_entry(n: usize, from: usize, to: usize, cost: Cost) -> Result<()> {
    if cost < 0 {
        return Err(AtspError::NegativeCost { from, to, cost });
    }
    let max = CostMatrix::max_entry(n);
    if cost > max {
        return Err(AtspError::CostTooLarge {
            from,
            to,
            cost,
            max,
        });
    }
    Ok(())
}

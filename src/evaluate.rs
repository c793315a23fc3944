//! Field evaluator: sample closed-form fields on uniform grids

use serde::{Deserialize, Serialize};

use crate::math::{Grid, Polynomial, Vec as Samples};
use crate::response::Deflection;

/// Ordered (coordinate, value) samples of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub coordinates: Samples,
    pub values: Samples,
}

impl SampledCurve {
    /// Pair up coordinates and values; both must have the same length
    pub fn new(coordinates: Samples, values: Samples) -> Self {
        debug_assert_eq!(coordinates.len(), values.len());
        Self {
            coordinates,
            values,
        }
    }

    /// Curve with no samples (absent reference data)
    pub fn empty() -> Self {
        Self::new(Samples::zeros(0), Samples::zeros(0))
    }

    /// Build from (coordinate, value) pairs in order
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(
            Samples::from_iterator(pairs.len(), pairs.iter().map(|p| p.0)),
            Samples::from_iterator(pairs.len(), pairs.iter().map(|p| p.1)),
        )
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coordinates.iter().copied().zip(self.values.iter().copied())
    }

    /// Smallest and largest value, `None` when empty
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some((self.values.min(), self.values.max()))
    }

    /// Append another curve's samples after this one's
    fn concat(self, other: SampledCurve) -> Self {
        let n = self.len() + other.len();
        Self::new(
            Samples::from_iterator(n, self.coordinates.iter().chain(other.coordinates.iter()).copied()),
            Samples::from_iterator(n, self.values.iter().chain(other.values.iter()).copied()),
        )
    }
}

/// Sample a polynomial on a grid
pub fn sample_polynomial(f: &Polynomial, grid: &Grid) -> SampledCurve {
    let coordinates = grid.points();
    let values = f.eval_all(&coordinates);
    SampledCurve::new(coordinates, values)
}

/// Sample a deflection, one sub-grid per piece
///
/// Each piece is evaluated only on its own half-open sub-grid, so the result
/// has strictly increasing coordinates with no duplicate at a breakpoint.
pub fn sample(deflection: &Deflection, grid: &Grid) -> SampledCurve {
    match deflection {
        Deflection::Continuous(w) => sample_polynomial(w, grid),
        Deflection::Piecewise { left, right, split } => {
            let (lo, hi) = grid.split_at(*split);
            // Keep the right sub-grid on the parent lattice
            let offset = (lo.len() as f64) * grid.step;
            let hi = Grid::new(grid.start + offset, hi.end, grid.step);
            sample_polynomial(left, &lo).concat(sample_polynomial(right, &hi))
        }
    }
}

/// Sample a through-thickness stress profile on a z grid
pub fn sample_profile(profile: &Polynomial, grid: &Grid) -> SampledCurve {
    sample_polynomial(profile, grid)
}

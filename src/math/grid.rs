//! Uniform half-open sampling grids

use serde::{Deserialize, Serialize};

use super::Vec as Samples;

/// Uniform grid over the half-open interval `[start, end)` with spacing `step`
///
/// Points are `start + i * step` for every `i` with the point strictly below
/// `end`, so adjacent grids sharing an endpoint never sample it twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Grid {
    /// Create a new grid
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// In-plane grid x ∈ [0, 1)
    pub fn span(step: f64) -> Self {
        Self::new(super::SPAN_INTERVAL.0, super::SPAN_INTERVAL.1, step)
    }

    /// Through-thickness grid z ∈ [-1/2, 1/2)
    pub fn thickness(step: f64) -> Self {
        Self::new(super::THICKNESS_INTERVAL.0, super::THICKNESS_INTERVAL.1, step)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        if self.step <= 0.0 || self.end <= self.start {
            return 0;
        }
        // Guard against start + n*step landing a rounding error below `end`
        let n = ((self.end - self.start) / self.step - 1e-9).ceil();
        n.max(0.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid coordinates
    pub fn points(&self) -> Samples {
        Samples::from_fn(self.len(), |i, _| self.start + i as f64 * self.step)
    }

    /// Split at `at` into `[start, at)` and `[at, end)`
    pub fn split_at(&self, at: f64) -> (Grid, Grid) {
        let at = at.clamp(self.start, self.end);
        (
            Grid::new(self.start, at, self.step),
            Grid::new(at, self.end, self.step),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution_point_counts() {
        assert_eq!(Grid::span(0.001).len(), 1000);
        assert_eq!(Grid::thickness(0.001).len(), 1000);
        assert_eq!(Grid::new(0.0, 0.5, 0.001).len(), 500);
    }

    #[test]
    fn test_half_open() {
        let pts = Grid::new(0.0, 1.0, 0.25).points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3], 0.75);
    }

    #[test]
    fn test_split_has_no_overlap() {
        let (left, right) = Grid::span(0.001).split_at(0.5);
        let l = left.points();
        let r = right.points();
        assert_eq!(l.len() + r.len(), 1000);
        assert!(l[l.len() - 1] < 0.5);
        assert_eq!(r[0], 0.5);
    }

    #[test]
    fn test_degenerate_grid_is_empty() {
        assert!(Grid::new(1.0, 0.0, 0.1).is_empty());
        assert!(Grid::new(0.0, 1.0, 0.0).is_empty());
    }
}

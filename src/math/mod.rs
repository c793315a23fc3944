//! Mathematical utilities: closed-form polynomial algebra and sampling grids

pub mod grid;
pub mod polynomial;

use nalgebra::{DVector, Matrix6};

pub use grid::Grid;
pub use polynomial::Polynomial;

pub type Vec = DVector<f64>;
pub type Mat6 = Matrix6<f64>;

/// Normalized through-thickness interval z ∈ [-1/2, 1/2]
pub const THICKNESS_INTERVAL: (f64, f64) = (-0.5, 0.5);

/// In-plane span x ∈ [0, 1]
pub const SPAN_INTERVAL: (f64, f64) = (0.0, 1.0);

/// Magnitude below which a dimensionless denominator is treated as zero
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Divide, failing with `err` instead of producing an infinity or NaN
pub fn checked_div<E>(num: f64, den: f64, err: impl FnOnce() -> E) -> Result<f64, E> {
    if den.abs() < DEGENERACY_TOLERANCE || !den.is_finite() {
        return Err(err());
    }
    let q = num / den;
    if q.is_finite() {
        Ok(q)
    } else {
        Err(err())
    }
}

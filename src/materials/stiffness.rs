//! Reduced elastic stiffness of an orthotropic solid

use log::debug;
use serde::{Deserialize, Serialize};

use super::EngineeringModuli;
use crate::error::{PlateError, PlateResult};
use crate::math::DEGENERACY_TOLERANCE;

/// Stiffness components entering the through-thickness problem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffnessTensor {
    pub c1111: f64,
    pub c1133: f64,
    pub c3333: f64,
    pub c1313: f64,
    pub c3311: f64,
}

impl StiffnessTensor {
    /// Invert the orthotropic compliance in closed form
    ///
    /// All normal components share the denominator
    /// Δ = 1 - ν12ν21 - ν23ν32 - ν13ν31 - 2ν12ν23ν31, which must not vanish.
    pub fn from_moduli(m: &EngineeringModuli) -> PlateResult<Self> {
        let delta = m.inversion_denominator();
        if !delta.is_finite() || delta.abs() < DEGENERACY_TOLERANCE {
            return Err(PlateError::DegenerateStiffness(format!(
                "compliance inversion denominator is {delta:e}"
            )));
        }

        let nu31 = m.nu31();
        let nu32 = m.nu32();

        let c1111 = m.e1 * (1.0 - m.nu23 * nu32) / delta;
        let c3333 = m.e3 * (1.0 - m.nu12 * m.nu21) / delta;
        let c1133 = m.e3 * (m.nu13 + m.nu12 * m.nu23) / delta;

        debug!("stiffness: delta={delta:.6e} C1111={c1111:.6e} C1133={c1133:.6e} C3333={c3333:.6e}");

        Ok(Self {
            c1111,
            c1133,
            c3333,
            c1313: m.g13,
            c3311: c1133,
        })
    }

    /// Effective in-plane modulus C1111 - C1133·C3311 / C3333
    pub fn reduced_in_plane(&self) -> f64 {
        self.c1111 - self.c1133 * self.c3311 / self.c3333
    }
}

/// Build the reduced stiffness tensor from engineering moduli
pub fn stiffness(m: &EngineeringModuli) -> PlateResult<StiffnessTensor> {
    StiffnessTensor::from_moduli(m)
}

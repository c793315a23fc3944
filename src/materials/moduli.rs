//! Orthotropic engineering moduli of the homogenized material

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Mat6;

/// Effective orthotropic engineering constants
///
/// Axis 1 runs along the plate span, axis 3 through the thickness. The
/// reciprocal Poisson ratios ν31 and ν32 are derived from reciprocity and are
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeringModuli {
    pub e1: f64,
    pub e2: f64,
    pub e3: f64,
    pub nu12: f64,
    pub nu21: f64,
    pub nu13: f64,
    pub nu23: f64,
    pub g12: f64,
    pub g13: f64,
    pub g23: f64,
}

impl EngineeringModuli {
    /// Isotropic material from E and ν
    pub fn isotropic(e: f64, nu: f64) -> Self {
        let g = e / (2.0 * (1.0 + nu));
        Self {
            e1: e,
            e2: e,
            e3: e,
            nu12: nu,
            nu21: nu,
            nu13: nu,
            nu23: nu,
            g12: g,
            g13: g,
            g23: g,
        }
    }

    /// ν31 = E3 ν13 / E1
    pub fn nu31(&self) -> f64 {
        self.e3 * self.nu13 / self.e1
    }

    /// ν32 = E3 ν23 / E2
    pub fn nu32(&self) -> f64 {
        self.e3 * self.nu23 / self.e2
    }

    /// Largest relative violation of ν_ij / E_i = ν_ji / E_j over the 1-2 pair
    pub fn reciprocity_residual(&self) -> f64 {
        let lhs = self.nu12 * self.e2;
        let rhs = self.nu21 * self.e1;
        (lhs - rhs).abs() / lhs.abs().max(rhs.abs()).max(f64::MIN_POSITIVE)
    }

    /// Denominator Δ = 1 - ν12ν21 - ν23ν32 - ν13ν31 - 2ν12ν23ν31
    pub fn inversion_denominator(&self) -> f64 {
        let nu31 = self.nu31();
        let nu32 = self.nu32();
        1.0 - self.nu12 * self.nu21
            - self.nu23 * nu32
            - self.nu13 * nu31
            - 2.0 * self.nu12 * self.nu23 * nu31
    }

    /// Full 6x6 compliance matrix in Voigt order (11, 22, 33, 23, 13, 12)
    pub fn compliance(&self) -> Mat6 {
        let mut s = Mat6::zeros();
        s[(0, 0)] = 1.0 / self.e1;
        s[(1, 1)] = 1.0 / self.e2;
        s[(2, 2)] = 1.0 / self.e3;

        s[(0, 1)] = -self.nu21 / self.e2;
        s[(1, 0)] = -self.nu12 / self.e1;
        s[(0, 2)] = -self.nu31() / self.e3;
        s[(2, 0)] = -self.nu13 / self.e1;
        s[(1, 2)] = -self.nu32() / self.e3;
        s[(2, 1)] = -self.nu23 / self.e2;

        s[(3, 3)] = 1.0 / self.g23;
        s[(4, 4)] = 1.0 / self.g13;
        s[(5, 5)] = 1.0 / self.g12;
        s
    }
}

impl fmt::Display for EngineeringModuli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "E_1={}", self.e1)?;
        writeln!(f, "E_2={}", self.e2)?;
        writeln!(f, "E_3={}", self.e3)?;
        writeln!(f, "n_12={}", self.nu12)?;
        writeln!(f, "n_21={}", self.nu21)?;
        writeln!(f, "n_13={}", self.nu13)?;
        writeln!(f, "n_23={}", self.nu23)?;
        writeln!(f, "G_12={}", self.g12)?;
        writeln!(f, "G_13={}", self.g13)?;
        write!(f, "G_23={}", self.g23)
    }
}

//! Constituent materials and the composite plate specification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};
use crate::loads::LoadingKind;

/// Micromechanical topology of the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Unidirectional fibres in a matrix (rule of mixtures)
    Fiber,
    /// Polydisperse cylindrical inclusions (generalized self-consistent scheme)
    Polydisperse,
}

impl Topology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Fiber => "fiber",
            Topology::Polydisperse => "polydisperse",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = PlateError;

    fn from_str(s: &str) -> PlateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fiber" | "fibre" => Ok(Topology::Fiber),
            "polydisperse" => Ok(Topology::Polydisperse),
            _ => Err(PlateError::UnknownTopology(s.to_string())),
        }
    }
}

/// Isotropic constituent phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    /// Young's modulus
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
}

impl Constituent {
    /// Create a new constituent
    pub fn new(e: f64, nu: f64) -> Self {
        Self { e, nu }
    }

    /// Shear modulus G = E / (2(1 + ν))
    pub fn shear_modulus(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.nu))
    }

    /// Bulk modulus k = E / (3(1 - 2ν)); `None` in the incompressible limit
    pub fn bulk_modulus(&self) -> Option<f64> {
        let den = 3.0 * (1.0 - 2.0 * self.nu);
        if den.abs() < crate::math::DEGENERACY_TOLERANCE {
            None
        } else {
            Some(self.e / den)
        }
    }

    fn validate(&self, role: &str) -> PlateResult<()> {
        if self.e <= 0.0 || !self.e.is_finite() {
            return Err(PlateError::InvalidInput(format!(
                "{role} Young's modulus must be positive, got {}",
                self.e
            )));
        }
        if !(self.nu > -1.0 && self.nu <= 0.5) {
            return Err(PlateError::InvalidInput(format!(
                "{role} Poisson's ratio must be in (-1, 0.5], got {}",
                self.nu
            )));
        }
        Ok(())
    }
}

/// A composite plate to analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name of the material pair
    pub name: String,
    /// Composite topology
    pub topology: Topology,
    /// Inclusion (fibre / particle) phase
    pub inclusion: Constituent,
    /// Matrix phase
    pub matrix: Constituent,
    /// Inclusion volume fraction g
    pub concentration: f64,
    /// Plate thickness h relative to the unit span
    pub thickness: f64,
    /// Transverse loading kind
    pub loading: LoadingKind,
    /// Base name of the reference result files
    pub reference_name: String,
}

impl MaterialSpec {
    /// Create and validate a new specification
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        topology: Topology,
        inclusion: Constituent,
        matrix: Constituent,
        concentration: f64,
        thickness: f64,
        loading: LoadingKind,
        reference_name: &str,
    ) -> PlateResult<Self> {
        let spec = Self {
            name: name.to_string(),
            topology,
            inclusion,
            matrix,
            concentration,
            thickness,
            loading,
            reference_name: reference_name.to_string(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check physical admissibility of the inputs
    pub fn validate(&self) -> PlateResult<()> {
        self.inclusion.validate("inclusion")?;
        self.matrix.validate("matrix")?;
        if !(0.0..=1.0).contains(&self.concentration) {
            return Err(PlateError::InvalidInput(format!(
                "concentration must be in [0, 1], got {}",
                self.concentration
            )));
        }
        if self.thickness <= 0.0 || !self.thickness.is_finite() {
            return Err(PlateError::InvalidInput(format!(
                "thickness must be positive, got {}",
                self.thickness
            )));
        }
        Ok(())
    }

    /// Matrix volume fraction 1 - g
    pub fn matrix_fraction(&self) -> f64 {
        1.0 - self.concentration
    }
}

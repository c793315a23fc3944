//! Analysis options and the asymptotic through-thickness solver

pub mod solver;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};

pub use solver::{solve, Approximation, AsymptoticSolution, PlateStiffness, ShapeFunctions};

/// Finest accepted grid spacing; bounds the number of samples per curve
pub const MIN_GRID_STEP: f64 = 1e-6;

/// Options controlling response evaluation and sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Transverse load magnitude p
    pub load_magnitude: f64,
    /// Spacing of the x and z sampling grids
    pub grid_step: f64,
    /// Thickness-profile scale of the reference finite-element model, used
    /// by the equilibrium-recovered transverse stress profiles
    pub shear_profile_scale: f64,
    /// Tolerance used by the invariant checks after solving
    pub tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            load_magnitude: 1.0,
            grid_step: 0.001,
            shear_profile_scale: 20.0,
            tolerance: 1e-9,
        }
    }
}

impl AnalysisOptions {
    /// Load options from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> PlateResult<Self> {
        let text = fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&text)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject options that would produce empty or unbounded sampling
    pub fn validate(&self) -> PlateResult<()> {
        let positive = |name: &str, value: f64| {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(PlateError::InvalidInput(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        };
        positive("load_magnitude", self.load_magnitude)?;
        positive("grid_step", self.grid_step)?;
        positive("shear_profile_scale", self.shear_profile_scale)?;
        positive("tolerance", self.tolerance)?;
        if self.grid_step < MIN_GRID_STEP {
            return Err(PlateError::InvalidInput(format!(
                "grid_step must be at least {MIN_GRID_STEP:e}, got {}",
                self.grid_step
            )));
        }
        Ok(())
    }

    /// Set the load magnitude
    pub fn with_load(mut self, p: f64) -> Self {
        self.load_magnitude = p;
        self
    }

    /// Set the sampling resolution
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Set the invariant-check tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }
}

//! Plate response model: deflection and stress fields per plate theory

mod asymptotic;
mod classical;
mod field;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::AsymptoticSolution;
use crate::loads::PlateLoad;
use crate::materials::EngineeringModuli;

pub use field::{Deflection, FieldFamily, Sections, StressComponent, StressField};

/// Plate theory a field family is computed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theory {
    /// First-order (classical thin plate) theory
    KirchhoffLove,
    /// Second-order theory with constant transverse shear
    ReissnerMindlin,
    /// Third-order shear deformation theory
    Reddy,
    /// Higher-order asymptotic theory
    Asymptotic,
}

impl Theory {
    /// Order in which curves are overlaid: classical theories first
    pub const ALL: [Theory; 4] = [
        Theory::KirchhoffLove,
        Theory::ReissnerMindlin,
        Theory::Reddy,
        Theory::Asymptotic,
    ];
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theory::KirchhoffLove => "Kirchhoff-Love",
            Theory::ReissnerMindlin => "Reissner-Mindlin",
            Theory::Reddy => "Reddy",
            Theory::Asymptotic => "asymptotic",
        };
        f.write_str(name)
    }
}

/// Everything the response model reads for one plate
#[derive(Debug, Clone, Copy)]
pub struct ResponseInputs<'a> {
    pub load: PlateLoad,
    pub moduli: &'a EngineeringModuli,
    pub solution: &'a AsymptoticSolution,
    /// Plate thickness h
    pub thickness: f64,
    /// Thickness-profile scale of the reference finite-element model
    pub shear_profile_scale: f64,
}

/// Closed-form fields of `theory` for the given plate and load
pub fn respond(theory: Theory, inputs: &ResponseInputs<'_>) -> FieldFamily {
    match theory {
        Theory::Asymptotic => asymptotic::fields(inputs),
        Theory::KirchhoffLove => classical::kirchhoff_love(inputs),
        Theory::ReissnerMindlin => classical::reissner_mindlin(inputs),
        Theory::Reddy => classical::reddy(inputs),
    }
}

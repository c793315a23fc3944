//! Result types for plate comparisons

use serde::{Deserialize, Serialize};

use crate::analysis::PlateStiffness;
use crate::evaluate::SampledCurve;
use crate::loads::LoadingKind;
use crate::materials::{EngineeringModuli, StiffnessTensor, Topology};
use crate::reference::ReferenceQuantity;
use crate::response::{StressComponent, Theory};

/// Field compared across theories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Deflection w(x) along the span
    Deflection,
    /// σ11 through the thickness
    Sigma11,
    /// σ13 through the thickness
    Sigma13,
    /// σ33 through the thickness
    Sigma33,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Deflection,
        FieldKind::Sigma11,
        FieldKind::Sigma13,
        FieldKind::Sigma33,
    ];

    /// Short tag used in output file names
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Deflection => "W",
            FieldKind::Sigma11 => "SX",
            FieldKind::Sigma13 => "SXY",
            FieldKind::Sigma33 => "SZ",
        }
    }

    /// Stress component, `None` for the deflection
    pub fn stress_component(&self) -> Option<StressComponent> {
        match self {
            FieldKind::Deflection => None,
            FieldKind::Sigma11 => Some(StressComponent::Sigma11),
            FieldKind::Sigma13 => Some(StressComponent::Sigma13),
            FieldKind::Sigma33 => Some(StressComponent::Sigma33),
        }
    }

    /// Reference file holding this field; σ33 has none
    pub fn reference_quantity(&self) -> Option<ReferenceQuantity> {
        match self {
            FieldKind::Deflection => Some(ReferenceQuantity::Deflection),
            FieldKind::Sigma11 => Some(ReferenceQuantity::NormalStress),
            FieldKind::Sigma13 => Some(ReferenceQuantity::ShearStress),
            FieldKind::Sigma33 => None,
        }
    }
}

/// One theory's sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoryCurve {
    pub theory: Theory,
    pub curve: SampledCurve,
}

/// All theories for one field of one plate, with optional reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub kind: FieldKind,
    pub loading: LoadingKind,
    /// Section x of a through-thickness profile
    pub section: Option<f64>,
    /// Output stem, `{base}_conc0{g}_h{h}_{tag}_{loading}`
    pub stem: String,
    pub curves: Vec<TheoryCurve>,
    /// Reference curve, empty when unavailable
    pub reference: SampledCurve,
}

impl Comparison {
    pub fn curve(&self, theory: Theory) -> Option<&SampledCurve> {
        self.curves
            .iter()
            .find(|c| c.theory == theory)
            .map(|c| &c.curve)
    }

    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    /// Value range over every curve including the reference
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.curves
            .iter()
            .map(|c| &c.curve)
            .chain(std::iter::once(&self.reference))
            .filter_map(SampledCurve::value_range)
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }
}

/// Everything derived for one successfully analyzed plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateReport {
    pub name: String,
    pub topology: Topology,
    pub loading: LoadingKind,
    pub moduli: EngineeringModuli,
    pub tensor: StiffnessTensor,
    pub stiffness: PlateStiffness,
    pub comparisons: Vec<Comparison>,
}

impl PlateReport {
    pub fn comparison(&self, kind: FieldKind) -> Option<&Comparison> {
        self.comparisons.iter().find(|c| c.kind == kind)
    }
}

/// A catalogue entry that could not be analyzed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecFailure {
    pub name: String,
    pub topology: String,
    pub error: String,
}

/// Outcome of a catalogue run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub reports: Vec<PlateReport>,
    pub failures: Vec<SpecFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.reports.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Summary line for logging
    pub fn summary(&self) -> String {
        format!(
            "{} plate(s) analyzed, {} skipped",
            self.succeeded(),
            self.failed()
        )
    }
}

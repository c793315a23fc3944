//! Asymptotic Plate - higher-order analysis of homogenized composite plates
//!
//! This library computes the static response of a symmetric single-layer
//! composite plate strip on the unit span and compares it against classical
//! plate theories:
//! - Homogenization of fibre and polydisperse composites into orthotropic moduli
//! - Closed-form stiffness tensor from the orthotropic compliance
//! - Three-order asymptotic through-thickness solution (shape functions, D1111, D111111)
//! - Kirchhoff-Love, Reissner-Mindlin, Reddy and asymptotic deflections and stresses
//! - Sampling, reference finite-element data and plot documents
//!
//! ## Example
//! ```rust
//! use asymptotic_plate::prelude::*;
//!
//! let spec = MaterialSpec::new(
//!     "Steel-Rubber",
//!     Topology::Fiber,
//!     Constituent::new(200.0, 0.25),
//!     Constituent::new(0.015, 0.499),
//!     0.12,
//!     0.05,
//!     LoadingKind::Uniform,
//!     "Steel_Rubber",
//! )
//! .unwrap();
//!
//! let model = PlateModel::analyze(spec, &AnalysisOptions::default()).unwrap();
//! assert!(model.solution.stiffness.bending_rigidity() > 0.0);
//!
//! // Mid-span deflection of each theory
//! for theory in Theory::ALL {
//!     let w = model.field_family(theory).deflection.eval(0.5);
//!     println!("{theory}: w(0.5) = {w:e}");
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod loads;
pub mod materials;
pub mod math;
pub mod model;
pub mod reference;
pub mod report;
pub mod response;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{solve, AnalysisOptions, AsymptoticSolution, PlateStiffness};
    pub use crate::error::{PlateError, PlateResult};
    pub use crate::evaluate::{sample, sample_profile, SampledCurve};
    pub use crate::loads::{LoadingKind, PlateLoad};
    pub use crate::materials::{
        load_catalog, moduli, stiffness, CatalogEntry, Constituent, EngineeringModuli,
        MaterialSpec, StiffnessTensor, Topology,
    };
    pub use crate::math::{Grid, Polynomial};
    pub use crate::model::{run_catalog, PlateModel};
    pub use crate::reference::{read_reference, reference_file_name, AxisRescale};
    pub use crate::report::{render_comparison, Language, RenderConfig};
    pub use crate::response::{respond, FieldFamily, ResponseInputs, StressComponent, Theory};
    pub use crate::results::{BatchReport, Comparison, FieldKind, PlateReport};
}

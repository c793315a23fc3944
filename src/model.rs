//! Plate model - runs one composite plate through the whole pipeline

use std::path::Path;

use log::{error, info, warn};

use crate::analysis::{solve, AnalysisOptions, AsymptoticSolution};
use crate::error::PlateResult;
use crate::evaluate::{sample, sample_profile, SampledCurve};
use crate::loads::PlateLoad;
use crate::materials::{moduli, stiffness, CatalogEntry, EngineeringModuli, MaterialSpec, StiffnessTensor};
use crate::math::Grid;
use crate::reference::{reference_file_name, ReferenceSet};
use crate::response::{respond, FieldFamily, ResponseInputs, Theory};
use crate::results::{BatchReport, Comparison, FieldKind, PlateReport, SpecFailure, TheoryCurve};

/// A fully derived plate: moduli, stiffness and asymptotic solution
#[derive(Debug, Clone)]
pub struct PlateModel {
    pub spec: MaterialSpec,
    pub options: AnalysisOptions,
    pub moduli: EngineeringModuli,
    pub tensor: StiffnessTensor,
    pub solution: AsymptoticSolution,
}

impl PlateModel {
    /// Homogenize, build the stiffness tensor and solve through the thickness
    pub fn analyze(spec: MaterialSpec, options: &AnalysisOptions) -> PlateResult<Self> {
        spec.validate()?;
        options.validate()?;
        let moduli = moduli(&spec)?;
        let tensor = stiffness(&moduli)?;
        let solution = solve(&tensor)?;

        let model = Self {
            spec,
            options: options.clone(),
            moduli,
            tensor,
            solution,
        };
        model.check_invariants();
        Ok(model)
    }

    /// Log violations of the expected derivation properties
    fn check_invariants(&self) {
        let tol = self.options.tolerance;
        if self.moduli.reciprocity_residual() > tol {
            warn!(
                "{}: reciprocity residual {:e} exceeds {tol:e}",
                self.spec.name,
                self.moduli.reciprocity_residual()
            );
        }
        let scale = self
            .solution
            .shapes
            .p1111
            .coeffs()
            .iter()
            .fold(1.0_f64, |m, c| m.max(c.abs()));
        if self.solution.max_correction_mean() > tol * scale {
            warn!(
                "{}: correction mean {:e} is not zero",
                self.spec.name,
                self.solution.max_correction_mean()
            );
        }
        if self.solution.stiffness.bending_rigidity() <= 0.0 {
            warn!(
                "{}: non-positive bending rigidity {:e}",
                self.spec.name,
                self.solution.stiffness.bending_rigidity()
            );
        }
    }

    /// Load applied to this plate
    pub fn load(&self) -> PlateLoad {
        PlateLoad::new(self.spec.loading, self.options.load_magnitude)
    }

    fn inputs(&self) -> ResponseInputs<'_> {
        ResponseInputs {
            load: self.load(),
            moduli: &self.moduli,
            solution: &self.solution,
            thickness: self.spec.thickness,
            shear_profile_scale: self.options.shear_profile_scale,
        }
    }

    /// Closed-form fields of one theory
    pub fn field_family(&self, theory: Theory) -> FieldFamily {
        respond(theory, &self.inputs())
    }

    /// Output stem shared with the reference file of `kind`
    pub fn stem(&self, kind: FieldKind) -> String {
        let suffix = format!("_{}_{}", kind.tag(), self.spec.loading.as_str());
        let file = reference_file_name(
            &self.spec.reference_name,
            self.spec.concentration,
            self.spec.thickness,
            &suffix,
        );
        file.trim_end_matches(".txt").to_string()
    }

    /// Reference files for this plate under `dir`
    pub fn reference_set(&self, dir: &Path) -> ReferenceSet {
        ReferenceSet {
            dir: dir.to_path_buf(),
            base: self.spec.reference_name.clone(),
            concentration: self.spec.concentration,
            thickness: self.spec.thickness,
            loading: self.spec.loading,
        }
    }

    /// Sample every theory for one field and attach `reference`
    pub fn comparison(&self, kind: FieldKind, reference: SampledCurve) -> Comparison {
        let step = self.options.grid_step;
        let mut section = None;
        let curves = Theory::ALL
            .iter()
            .map(|&theory| {
                let family = self.field_family(theory);
                let curve = match kind.stress_component() {
                    None => sample(&family.deflection, &Grid::span(step)),
                    Some(component) => {
                        section = Some(family.sections.get(component));
                        sample_profile(&family.profile(component), &Grid::thickness(step))
                    }
                };
                TheoryCurve { theory, curve }
            })
            .collect();

        Comparison {
            kind,
            loading: self.spec.loading,
            section,
            stem: self.stem(kind),
            curves,
            reference,
        }
    }

    /// Comparisons for every field, reading reference data from `reference_dir`
    pub fn comparisons(&self, reference_dir: Option<&Path>) -> Vec<Comparison> {
        let references = reference_dir.map(|dir| self.reference_set(dir));
        FieldKind::ALL
            .iter()
            .map(|&kind| {
                let reference = match (&references, kind.reference_quantity()) {
                    (Some(set), Some(quantity)) => set.load(quantity),
                    _ => SampledCurve::empty(),
                };
                self.comparison(kind, reference)
            })
            .collect()
    }

    /// Full report for this plate
    pub fn report(&self, reference_dir: Option<&Path>) -> PlateReport {
        PlateReport {
            name: self.spec.name.clone(),
            topology: self.spec.topology,
            loading: self.spec.loading,
            moduli: self.moduli,
            tensor: self.tensor,
            stiffness: self.solution.stiffness,
            comparisons: self.comparisons(reference_dir),
        }
    }
}

/// Analyze every catalogue entry; a failing entry is logged and skipped
pub fn run_catalog(
    entries: &[CatalogEntry],
    options: &AnalysisOptions,
    reference_dir: Option<&Path>,
) -> BatchReport {
    let mut batch = BatchReport::default();

    for entry in entries {
        info!("Analyzing {} ({}, {})", entry.name, entry.topology, entry.loading);
        let outcome = entry
            .to_spec()
            .and_then(|spec| PlateModel::analyze(spec, options));

        match outcome {
            Ok(model) => batch.reports.push(model.report(reference_dir)),
            Err(e) => {
                error!("Skipping {} ({}): {e}", entry.name, entry.topology);
                batch.failures.push(SpecFailure {
                    name: entry.name.clone(),
                    topology: entry.topology.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!("{}", batch.summary());
    batch
}

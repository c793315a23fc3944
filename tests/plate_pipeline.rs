use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use asymptotic_plate::prelude::*;
use asymptotic_plate::report::render_report;

fn steel_rubber(loading: LoadingKind) -> MaterialSpec {
    MaterialSpec::new(
        "Steel-Rubber",
        Topology::Fiber,
        Constituent::new(200.0, 0.25),
        Constituent::new(0.015, 0.499),
        0.12,
        0.05,
        loading,
        "Steel_Rubber",
    )
    .unwrap()
}

fn coarse() -> AnalysisOptions {
    AnalysisOptions::default().with_grid_step(0.01)
}

#[test]
fn steel_rubber_axial_modulus_is_linear_mixture() {
    let m = moduli(&steel_rubber(LoadingKind::Uniform)).unwrap();
    assert_relative_eq!(m.e1, 200.0 * 0.12 + 0.015 * 0.88, max_relative = 1e-12);
    assert_relative_eq!(m.e1, 24.0132, max_relative = 1e-12);
}

#[test]
fn steel_rubber_uniform_pipeline() {
    let model = PlateModel::analyze(steel_rubber(LoadingKind::Uniform), &coarse()).unwrap();

    assert!(model.moduli.reciprocity_residual() < 1e-12);
    assert!(model.solution.stiffness.bending_rigidity() > 0.0);
    for a in &model.solution.approximations {
        let scale = a.correction.coeffs().iter().fold(1.0_f64, |m, c| m.max(c.abs()));
        assert!(a.correction_mean().abs() < 1e-9 * scale, "order {}", a.order);
    }

    for theory in Theory::ALL {
        let family = model.field_family(theory);
        let mid = family.deflection.eval(0.5);
        assert!(mid < 0.0, "{theory} deflects downward");
        assert!(family.deflection.eval(0.0).abs() < 1e-12 * mid.abs());
        assert!(family.deflection.eval(1.0).abs() < 1e-12 * mid.abs());
    }

    // Soft matrix: shear makes every refined theory deflect more than Kirchhoff-Love
    let kl = model.field_family(Theory::KirchhoffLove).deflection.eval(0.5);
    let asym = model.field_family(Theory::Asymptotic).deflection.eval(0.5);
    let rm = model.field_family(Theory::ReissnerMindlin).deflection.eval(0.5);
    assert!(rm < kl);
    assert!(asym.is_finite() && kl.is_finite());
}

#[test]
fn steel_rubber_uniform_asymptotic_values() {
    let model = PlateModel::analyze(steel_rubber(LoadingKind::Uniform), &coarse()).unwrap();
    let d = model.solution.stiffness;
    assert_relative_eq!(d.d1111, -2.001516246250785, max_relative = 1e-12);
    assert_relative_eq!(d.d111111, -845.3635998047351, max_relative = 1e-12);

    let family = model.field_family(Theory::Asymptotic);
    assert_relative_eq!(family.deflection.eval(0.3), -0.06068270475049, max_relative = 1e-11);

    let at = |component: StressComponent| family.profile(component).eval(0.1);
    assert_relative_eq!(at(StressComponent::Sigma11), 0.007237561798927, max_relative = 1e-11);
    assert_relative_eq!(at(StressComponent::Sigma13), -0.0009, max_relative = 1e-11);
    assert_relative_eq!(at(StressComponent::Sigma33), -8.1e-5, max_relative = 1e-11);
}

#[test]
fn steel_rubber_focused_pipeline() {
    let model = PlateModel::analyze(steel_rubber(LoadingKind::Focused), &coarse()).unwrap();
    for theory in Theory::ALL {
        let family = model.field_family(theory);
        let peak = family.deflection.eval(0.5).abs();
        assert!(family.deflection.jump().abs() < 1e-10 * peak, "{theory}");
        assert_eq!(family.sections.sigma11, 0.25);
    }

    let rm = model.field_family(Theory::ReissnerMindlin);
    let reddy = model.field_family(Theory::Reddy);
    assert_eq!(rm.deflection, reddy.deflection);
    assert_eq!(rm.sigma11, reddy.sigma11);

    let report = model.report(None);
    let w = report.comparison(FieldKind::Deflection).unwrap();
    let curve = w.curve(Theory::Asymptotic).unwrap();
    assert_eq!(curve.len(), 100);
    assert!(curve
        .coordinates
        .as_slice()
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
}

fn write_reference(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn reference_data_attaches_to_matching_comparisons() {
    let dir = tempfile::tempdir().unwrap();
    write_reference(
        dir.path(),
        "Steel_Rubber_conc012_h005_SX_uniform.txt",
        "0.0 1.0\n0.025 0.0\n\n0.05 -1.0\n",
    );
    write_reference(
        dir.path(),
        "Steel_Rubber_conc012_h005_W_uniform.txt",
        "0.5 -0.0012\nnot a number\n",
    );

    let model = PlateModel::analyze(steel_rubber(LoadingKind::Uniform), &coarse()).unwrap();
    let report = model.report(Some(dir.path()));

    let sx = report.comparison(FieldKind::Sigma11).unwrap();
    assert_eq!(sx.reference.len(), 3);
    assert_relative_eq!(sx.reference.coordinates[0], -0.5, epsilon = 1e-12);
    assert_relative_eq!(sx.reference.coordinates[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(sx.reference.coordinates[2], 0.5, epsilon = 1e-12);
    assert_eq!(sx.reference.values[2], -1.0);

    // Malformed deflection file and absent shear file only drop their own curves
    assert!(!report.comparison(FieldKind::Deflection).unwrap().has_reference());
    assert!(!report.comparison(FieldKind::Sigma13).unwrap().has_reference());
    assert!(!report.comparison(FieldKind::Sigma33).unwrap().has_reference());
}

#[test]
fn plot_documents_are_written_per_field() {
    let out = tempfile::tempdir().unwrap();
    let model = PlateModel::analyze(steel_rubber(LoadingKind::Uniform), &coarse()).unwrap();
    let report = model.report(None);
    let config = RenderConfig::new(Language::English, out.path());

    let paths = render_report(&report, &config).unwrap();
    assert_eq!(paths.len(), 4);
    assert!(out
        .path()
        .join("Steel_Rubber_conc012_h005_SXY_uniform.json")
        .exists());
}

#[test]
fn bundled_catalog_runs_without_failures() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.json");
    let entries = load_catalog(&path).unwrap();
    assert_eq!(entries.len(), 9);

    let batch = run_catalog(&entries, &AnalysisOptions::default().with_grid_step(0.05), None);
    assert_eq!(batch.failed(), 0, "{:?}", batch.failures);
    assert_eq!(batch.succeeded(), 9);
    assert!(batch
        .reports
        .iter()
        .all(|r| r.stiffness.bending_rigidity() > 0.0));

    let epoxy = batch
        .reports
        .iter()
        .find(|r| r.topology == Topology::Polydisperse)
        .unwrap();
    assert!(epoxy.moduli.e1 > epoxy.moduli.e2);
}

#[test]
fn unknown_topology_produces_no_moduli() {
    let spec = steel_rubber(LoadingKind::Uniform);
    assert!(matches!(
        asymptotic_plate::materials::moduli_for("unknown", &spec),
        Err(PlateError::UnknownTopology(_))
    ));
}

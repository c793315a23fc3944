//! Property-based tests for the homogenization, solver and response chain.
//!
//! Covers: reciprocity of homogenized moduli, zero-mean corrections, positive
//! bending rigidity, clamped-edge and load-point conditions of the asymptotic
//! deflection, and the zero-mean antiderivative of arbitrary polynomials.

use asymptotic_plate::prelude::*;
use proptest::prelude::*;

fn fiber_spec(e_c: f64, nu_c: f64, ratio: f64, nu_m: f64, g: f64, h: f64) -> MaterialSpec {
    MaterialSpec::new(
        "random",
        Topology::Fiber,
        Constituent::new(e_c, nu_c),
        Constituent::new(e_c * ratio, nu_m),
        g,
        h,
        LoadingKind::Uniform,
        "Random",
    )
    .unwrap()
}

fn inputs<'a>(
    kind: LoadingKind,
    m: &'a EngineeringModuli,
    sol: &'a AsymptoticSolution,
    h: f64,
) -> ResponseInputs<'a> {
    ResponseInputs {
        load: PlateLoad::new(kind, 1.0),
        moduli: m,
        solution: sol,
        thickness: h,
        shear_profile_scale: 20.0,
    }
}

// ── Homogenization ───────────────────────────────────────────────────

proptest! {
    /// ν12 E2 = ν21 E1 for every admissible fibre composite.
    #[test]
    fn fiber_moduli_are_reciprocal(
        e_c in 1.0f64..500.0,
        nu_c in 0.0f64..0.45,
        ratio in 1e-4f64..1.0,
        nu_m in 0.0f64..0.45,
        g in 0.01f64..0.99,
    ) {
        let m = moduli(&fiber_spec(e_c, nu_c, ratio, nu_m, g, 0.05)).unwrap();
        prop_assert!(m.reciprocity_residual() < 1e-12);
        prop_assert!(m.e1 > 0.0 && m.e2 > 0.0 && m.g12 > 0.0);
    }

    /// Polydisperse moduli are reciprocal whenever they exist.
    #[test]
    fn polydisperse_moduli_are_reciprocal(
        e_f in 1.0f64..1000.0,
        nu_f in 0.0f64..0.45,
        ratio in 1e-3f64..1.0,
        nu_m in 0.0f64..0.45,
        g in 0.0f64..1.0,
    ) {
        let spec = MaterialSpec::new(
            "random",
            Topology::Polydisperse,
            Constituent::new(e_f, nu_f),
            Constituent::new(e_f * ratio, nu_m),
            g,
            0.05,
            LoadingKind::Uniform,
            "Random",
        )
        .unwrap();
        if let Ok(m) = moduli(&spec) {
            prop_assert!(m.reciprocity_residual() < 1e-12);
        }
    }
}

// ── Through-thickness solution ───────────────────────────────────────

proptest! {
    /// Every correction has zero mean and the bending rigidity is positive.
    #[test]
    fn solution_invariants(
        e_c in 1.0f64..500.0,
        nu_c in 0.0f64..0.45,
        ratio in 1e-4f64..1.0,
        nu_m in 0.0f64..0.45,
        g in 0.01f64..0.99,
    ) {
        let m = moduli(&fiber_spec(e_c, nu_c, ratio, nu_m, g, 0.05)).unwrap();
        let sol = solve(&stiffness(&m).unwrap()).unwrap();

        prop_assert!(sol.stiffness.bending_rigidity() > 0.0);
        for a in &sol.approximations {
            let scale = a.correction.coeffs().iter().fold(1.0f64, |s, c| s.max(c.abs()));
            prop_assert!(a.correction_mean().abs() < 1e-9 * scale, "order {}", a.order);
        }
    }

    /// Uniform deflection vanishes on both edges; point-load deflection is continuous.
    #[test]
    fn asymptotic_deflection_conditions(
        e_c in 1.0f64..500.0,
        ratio in 1e-4f64..1.0,
        g in 0.01f64..0.99,
        h in 0.01f64..0.2,
    ) {
        let m = moduli(&fiber_spec(e_c, 0.3, ratio, 0.4, g, h)).unwrap();
        let sol = solve(&stiffness(&m).unwrap()).unwrap();

        let uniform = respond(Theory::Asymptotic, &inputs(LoadingKind::Uniform, &m, &sol, h));
        let scale = uniform.deflection.eval(0.5).abs();
        prop_assert!(uniform.deflection.eval(0.0).abs() <= 1e-10 * scale);
        prop_assert!(uniform.deflection.eval(1.0).abs() <= 1e-10 * scale);

        let focused = respond(Theory::Asymptotic, &inputs(LoadingKind::Focused, &m, &sol, h));
        let peak = focused.deflection.eval(0.5).abs();
        prop_assert!(focused.deflection.jump().abs() <= 1e-10 * peak);
    }
}

// ── Polynomial algebra ───────────────────────────────────────────────

proptest! {
    /// The zero-mean antiderivative integrates to zero and differentiates back.
    #[test]
    fn zero_mean_antiderivative(coeffs in prop::collection::vec(-10.0f64..10.0, 1..6)) {
        let p = Polynomial::new(coeffs);
        let n = p.zero_mean_antiderivative((-0.5, 0.5));
        prop_assert!(n.definite_integral(-0.5, 0.5).abs() < 1e-12);

        let back = n.derivative();
        for z in [-0.5, -0.1, 0.3] {
            prop_assert!((back.eval(z) - p.eval(z)).abs() < 1e-12);
        }
    }
}

//! Asymptotic through-thickness solver
//!
//! The plate problem is expanded in powers of the thickness. Each order adds a
//! correction function N_k(z) on the normalized thickness z ∈ [-1/2, 1/2],
//! obtained by integrating the previous order's stress through the thickness
//! and fixing the free integration constant by a zero mean. The stress shape
//! functions and the bending stiffnesses follow from these corrections.
//!
//! Orders form a strict chain: order k reads only order k-1. A further order
//! is one more call to [`next_approximation`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};
use crate::materials::StiffnessTensor;
use crate::math::{Polynomial, DEGENERACY_TOLERANCE, THICKNESS_INTERVAL};

/// One order of the asymptotic expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approximation {
    /// Expansion order, starting at 1
    pub order: usize,
    /// Un-normalized point function the correction is integrated from
    pub seed: Polynomial,
    /// Zero-mean correction function N_k(z)
    pub correction: Polynomial,
}

impl Approximation {
    /// Mean of the correction over the thickness; zero up to rounding
    pub fn correction_mean(&self) -> f64 {
        self.correction.mean_over(THICKNESS_INTERVAL)
    }
}

/// Local stress shape functions of the normalized thickness coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeFunctions {
    /// First-order in-plane stress P1111
    pub p1111: Polynomial,
    /// Second-order transverse shear stress P13111 (= P31111)
    pub p13111: Polynomial,
    /// Third-order transverse normal stress P331111
    pub p331111: Polynomial,
    /// Third-order in-plane stress P111111
    pub p111111: Polynomial,
}

/// Plate bending stiffnesses
///
/// With the sign convention P1111 = -C1111 z + ..., D1111 is negative for any
/// positive-definite material; [`PlateStiffness::bending_rigidity`] is the
/// positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateStiffness {
    /// D1111 = ∫ z P1111 dz
    pub d1111: f64,
    /// D111111 = ∫ z P111111 dz
    pub d111111: f64,
}

impl PlateStiffness {
    /// Classical bending rigidity -D1111
    pub fn bending_rigidity(&self) -> f64 {
        -self.d1111
    }
}

/// Complete result of the through-thickness derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsymptoticSolution {
    pub approximations: Vec<Approximation>,
    pub shapes: ShapeFunctions,
    pub stiffness: PlateStiffness,
}

impl AsymptoticSolution {
    /// Approximation of the given order
    pub fn approximation(&self, order: usize) -> Option<&Approximation> {
        self.approximations.iter().find(|a| a.order == order)
    }

    /// Largest absolute correction mean across all orders
    pub fn max_correction_mean(&self) -> f64 {
        self.approximations
            .iter()
            .map(|a| a.correction_mean().abs())
            .fold(0.0, f64::max)
    }
}

/// Advance the expansion by one order
///
/// seed = -(∫_{-1/2}^{z} stress + coupling · previous) / divisor, and the new
/// correction is the zero-mean antiderivative of the seed.
pub fn next_approximation(
    order: usize,
    stress: &Polynomial,
    previous: &Polynomial,
    coupling: f64,
    divisor: f64,
) -> Approximation {
    let through = stress.integral_from(THICKNESS_INTERVAL.0);
    let seed = -(&through + &previous.scale(coupling)).scale(1.0 / divisor);
    let correction = seed.zero_mean_antiderivative(THICKNESS_INTERVAL);
    Approximation {
        order,
        seed,
        correction,
    }
}

/// Derive the three-order asymptotic solution for a stiffness tensor
pub fn solve(c: &StiffnessTensor) -> PlateResult<AsymptoticSolution> {
    let scale = c.c1111.abs().max(c.c3333.abs()).max(c.c1313.abs());
    if c.c3333.abs() <= DEGENERACY_TOLERANCE * scale {
        return Err(PlateError::SingularStiffness(format!(
            "C3333 = {:e}",
            c.c3333
        )));
    }
    if c.c1313.abs() <= DEGENERACY_TOLERANCE * scale {
        return Err(PlateError::SingularStiffness(format!(
            "C1313 = {:e}",
            c.c1313
        )));
    }

    let (lo, hi) = THICKNESS_INTERVAL;
    let z = Polynomial::identity();

    // First order
    let n1 = z.scale(c.c3311 / c.c3333);
    let first = Approximation {
        order: 1,
        correction: n1.zero_mean_antiderivative(THICKNESS_INTERVAL),
        seed: n1,
    };
    // P1111 takes the point value of N1, not the normalized correction
    let p1111 = &z.scale(-c.c1111) + &first.seed.scale(c.c1133);

    // Second order
    let second = next_approximation(2, &p1111, &first.correction, c.c1313, c.c1313);
    let p13111 = (&first.correction + &second.seed).scale(c.c1313);

    // Third order
    let third = next_approximation(3, &p13111, &second.correction, c.c3311, c.c3333);
    let p331111 = &second.correction.scale(c.c1133) + &third.seed.scale(c.c3333);
    let p111111 = &second.correction.scale(c.c1111) + &third.seed.scale(c.c1133);

    let stiffness = PlateStiffness {
        d1111: (&z * &p1111).definite_integral(lo, hi),
        d111111: (&z * &p111111).definite_integral(lo, hi),
    };

    debug!(
        "asymptotic solution: D1111={:.6e} D111111={:.6e}",
        stiffness.d1111, stiffness.d111111
    );
    debug!("P1111(z) = {p1111}");
    debug!("P13111(z) = {p13111}");

    Ok(AsymptoticSolution {
        approximations: vec![first, second, third],
        shapes: ShapeFunctions {
            p1111,
            p13111,
            p331111,
            p111111,
        },
        stiffness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{stiffness, EngineeringModuli};
    use approx::assert_relative_eq;

    fn decoupled_unit() -> StiffnessTensor {
        StiffnessTensor {
            c1111: 1.0,
            c1133: 0.0,
            c3333: 1.0,
            c1313: 1.0,
            c3311: 0.0,
        }
    }

    fn isotropic() -> StiffnessTensor {
        stiffness(&EngineeringModuli::isotropic(200.0, 0.3)).unwrap()
    }

    #[test]
    fn test_decoupled_unit_tensor_stiffness() {
        let sol = solve(&decoupled_unit()).unwrap();
        assert_relative_eq!(sol.stiffness.d1111, -1.0 / 12.0, epsilon = 1e-15);
        assert_relative_eq!(sol.stiffness.d111111, -1.0 / 120.0, epsilon = 1e-15);
        assert_relative_eq!(sol.stiffness.bending_rigidity(), 1.0 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn test_decoupled_unit_tensor_shapes() {
        let sol = solve(&decoupled_unit()).unwrap();
        // P1111 = -z, P13111 = z^2/2 - 1/8, P111111 = z^3/6 - z/8
        assert_eq!(sol.shapes.p1111, Polynomial::new(vec![0.0, -1.0]));
        assert_relative_eq!(sol.shapes.p13111.coeff(0), -0.125, epsilon = 1e-15);
        assert_relative_eq!(sol.shapes.p13111.coeff(2), 0.5, epsilon = 1e-15);
        assert_relative_eq!(sol.shapes.p111111.coeff(1), -0.125, epsilon = 1e-15);
        assert_relative_eq!(sol.shapes.p111111.coeff(3), 1.0 / 6.0, epsilon = 1e-15);
        assert_relative_eq!(sol.shapes.p331111.eval(0.5), 1.0 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn test_corrections_have_zero_mean() {
        let sol = solve(&isotropic()).unwrap();
        assert_eq!(sol.approximations.len(), 3);
        for order in 1..=3 {
            let a = sol.approximation(order).unwrap();
            let scale = a.correction.coeffs().iter().map(|c| c.abs()).fold(1.0, f64::max);
            assert!(a.correction_mean().abs() < 1e-9 * scale, "order {order}");
        }
    }

    #[test]
    fn test_shear_traction_free_faces() {
        let sol = solve(&isotropic()).unwrap();
        let p = &sol.shapes.p13111;
        let scale = p.eval(0.0).abs();
        assert!(p.eval(-0.5).abs() < 1e-10 * scale);
        assert!(p.eval(0.5).abs() < 1e-10 * scale);
        assert!(sol.shapes.p331111.eval(-0.5).abs() < 1e-10 * scale);
    }

    #[test]
    fn test_d1111_matches_reduced_modulus() {
        let c = isotropic();
        let sol = solve(&c).unwrap();
        assert_relative_eq!(
            sol.stiffness.d1111,
            -c.reduced_in_plane() / 12.0,
            max_relative = 1e-12
        );
        assert!(sol.stiffness.bending_rigidity() > 0.0);
    }

    #[test]
    fn test_soft_tensor_is_not_singular() {
        let scale = 1e-9;
        let c = isotropic();
        let soft = StiffnessTensor {
            c1111: c.c1111 * scale,
            c1133: c.c1133 * scale,
            c3333: c.c3333 * scale,
            c1313: c.c1313 * scale,
            c3311: c.c3311 * scale,
        };
        let sol = solve(&soft).unwrap();
        let reference = solve(&c).unwrap();
        assert_relative_eq!(
            sol.stiffness.d1111,
            scale * reference.stiffness.d1111,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            sol.stiffness.d111111,
            scale * reference.stiffness.d111111,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_singular_tensor() {
        let mut c = decoupled_unit();
        c.c1313 = 0.0;
        assert!(matches!(solve(&c), Err(PlateError::SingularStiffness(_))));
        let mut c = decoupled_unit();
        c.c3333 = 0.0;
        assert!(matches!(solve(&c), Err(PlateError::SingularStiffness(_))));
    }
}

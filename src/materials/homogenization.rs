//! Homogenization of a two-phase composite into orthotropic engineering moduli
//!
//! Two micromechanical models are supported:
//! - **Fiber**: rule of mixtures along the fibres, a Reuss-type series estimate
//!   with a Poisson-mismatch correction across them, transversely isotropic.
//! - **Polydisperse**: the generalized self-consistent scheme for cylindrical
//!   inclusions, transverse moduli back-solved from the plane-strain bulk and
//!   shear moduli.

use log::debug;

use super::{Constituent, EngineeringModuli, MaterialSpec, Topology};
use crate::error::{PlateError, PlateResult};
use crate::math::checked_div;

/// Effective engineering moduli of the composite described by `spec`
///
/// Both models are homogeneous of degree one in the constituent moduli, so
/// they are evaluated on moduli normalized by the stiffer phase and scaled
/// back. Degeneracy checks then see dimensionless denominators.
pub fn moduli(spec: &MaterialSpec) -> PlateResult<EngineeringModuli> {
    spec.validate()?;
    let scale = spec.inclusion.e.max(spec.matrix.e);
    let normalized = MaterialSpec {
        inclusion: Constituent::new(spec.inclusion.e / scale, spec.inclusion.nu),
        matrix: Constituent::new(spec.matrix.e / scale, spec.matrix.nu),
        ..spec.clone()
    };
    let m = match spec.topology {
        Topology::Fiber => fiber_moduli(&normalized)?,
        Topology::Polydisperse => polydisperse_moduli(&normalized)?,
    };
    let m = scaled(m, scale);
    ensure_finite(&m)?;
    debug!(
        "{} ({}): E1={:.6e} E2={:.6e} nu12={:.4} G12={:.6e}",
        spec.name, spec.topology, m.e1, m.e2, m.nu12, m.g12
    );
    Ok(m)
}

/// Effective engineering moduli from a textual topology name
///
/// Fails with `UnknownTopology` before any moduli are computed.
pub fn moduli_for(topology: &str, spec: &MaterialSpec) -> PlateResult<EngineeringModuli> {
    let topology: Topology = topology.parse()?;
    let spec = MaterialSpec {
        topology,
        ..spec.clone()
    };
    moduli(&spec)
}

fn degenerate(what: &str) -> impl FnOnce() -> PlateError + '_ {
    move || PlateError::DegenerateStiffness(format!("vanishing denominator in {what}"))
}

fn fiber_moduli(spec: &MaterialSpec) -> PlateResult<EngineeringModuli> {
    let (e_c, nu_c, g_c) = (spec.inclusion.e, spec.inclusion.nu, spec.concentration);
    let (e_r, nu_r, g_r) = (spec.matrix.e, spec.matrix.nu, spec.matrix_fraction());

    let e1 = e_c * g_c + e_r * g_r;

    let mismatch = nu_r / e_r - nu_c / e_c;
    let correction = checked_div(
        g_r * g_c * mismatch * mismatch,
        g_c / e_r + g_r / e_c,
        degenerate("fiber transverse modulus"),
    )?;
    let e2 = checked_div(
        1.0,
        g_c / e_c + g_r / e_r - correction,
        degenerate("fiber transverse modulus"),
    )?;

    let nu12 = nu_c * g_c + nu_r * g_r;
    let nu21 = checked_div(nu12 * e2, e1, degenerate("fiber reciprocal Poisson ratio"))?;

    let g12 = checked_div(
        1.0,
        2.0 * g_c * (1.0 + nu_c) / e_c + 2.0 * g_r * (1.0 + nu_r) / e_r,
        degenerate("fiber shear modulus"),
    )?;

    Ok(EngineeringModuli {
        e1,
        e2,
        e3: e2,
        nu12,
        nu21,
        nu13: nu12,
        nu23: nu12,
        g12,
        g13: g12,
        g23: g12,
    })
}

fn polydisperse_moduli(spec: &MaterialSpec) -> PlateResult<EngineeringModuli> {
    let (e_f, nu_f, g_f) = (spec.inclusion.e, spec.inclusion.nu, spec.concentration);
    let (e_m, nu_m, g_m) = (spec.matrix.e, spec.matrix.nu, spec.matrix_fraction());

    let k_f = spec.inclusion.bulk_modulus().ok_or_else(|| {
        PlateError::DegenerateStiffness("incompressible inclusion (nu = 0.5)".to_string())
    })?;
    let k_m = spec.matrix.bulk_modulus().ok_or_else(|| {
        PlateError::DegenerateStiffness("incompressible matrix (nu = 0.5)".to_string())
    })?;
    let gs_f = spec.inclusion.shear_modulus();
    let gs_m = spec.matrix.shear_modulus();

    // Plane-strain bulk moduli k + G/3
    let kp_f = k_f + gs_f / 3.0;
    let kp_m = k_m + gs_m / 3.0;

    let l = g_m * gs_m / kp_f + g_f * gs_m / kp_m + 1.0;
    let dnu = nu_f - nu_m;

    let e1 = g_f * e_f
        + g_m * e_m
        + checked_div(4.0 * g_f * g_m * dnu * dnu * gs_m, l, degenerate("axial modulus"))?;
    let nu12 = g_m * nu_m
        + g_f * nu_f
        + checked_div(
            g_f * g_m * dnu * (gs_m / kp_m - gs_m / kp_f),
            l,
            degenerate("axial Poisson ratio"),
        )?;

    // g_f / (1/a + g_m/b) written as g_f a b / (b + g_m a) so a = 0 gives the exact limit
    let a = k_f - k_m + 4.0 * (gs_f - gs_m) / 3.0;
    let b = k_m + 4.0 * gs_m / 3.0;
    let k23 = kp_m + checked_div(g_f * a * b, b + g_m * a, degenerate("transverse bulk modulus"))?;

    let g12 = checked_div(
        gs_m * (gs_f * (1.0 + g_f) + gs_m * g_m),
        gs_f * g_m + gs_m * (1.0 + g_f),
        degenerate("axial shear modulus"),
    )?;

    // Same rewrite for g_f / (1/(G_f - G_m) + c)
    let dg = gs_f - gs_m;
    let c = checked_div(
        g_m * (kp_m + 2.0 * gs_m),
        2.0 * gs_m * (kp_m + gs_m),
        degenerate("transverse shear modulus"),
    )?;
    let g23 = gs_m + checked_div(g_f * dg, 1.0 + c * dg, degenerate("transverse shear modulus"))?;

    let coupling = checked_div(
        4.0 * nu12 * nu12 * g23 * k23,
        e1,
        degenerate("transverse modulus"),
    )?;
    let t = k23 + g23 + coupling;
    let e2 = checked_div(4.0 * g23 * k23, t, degenerate("transverse modulus"))?;
    let nu23 = checked_div(k23 - g23 - coupling, t, degenerate("transverse Poisson ratio"))?;
    let nu21 = checked_div(nu12 * e2, e1, degenerate("reciprocal Poisson ratio"))?;

    Ok(EngineeringModuli {
        e1,
        e2,
        e3: e2,
        nu12,
        nu21,
        nu13: nu12,
        nu23,
        g12,
        g13: g12,
        g23,
    })
}

fn scaled(m: EngineeringModuli, scale: f64) -> EngineeringModuli {
    EngineeringModuli {
        e1: m.e1 * scale,
        e2: m.e2 * scale,
        e3: m.e3 * scale,
        g12: m.g12 * scale,
        g13: m.g13 * scale,
        g23: m.g23 * scale,
        ..m
    }
}

fn ensure_finite(m: &EngineeringModuli) -> PlateResult<()> {
    let values = [
        m.e1, m.e2, m.e3, m.nu12, m.nu21, m.nu13, m.nu23, m.g12, m.g13, m.g23,
    ];
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PlateError::DegenerateStiffness(
            "homogenized moduli are not finite".to_string(),
        ))
    }
}

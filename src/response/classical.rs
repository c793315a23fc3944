//! Classical plate theories in cylindrical bending
//!
//! Kirchhoff-Love ignores transverse shear; Reissner-Mindlin adds a constant
//! shear correction; Reddy's third-order theory adds a cubic in-plane term
//! under uniform load. Transverse stresses are recovered from equilibrium with
//! a parabolic (Zhuravsky) shear profile in ζ = 2z / (s h).

use super::{Deflection, FieldFamily, ResponseInputs, Sections, StressField, Theory};
use crate::loads::LoadingKind;
use crate::math::Polynomial;

/// Constants shared by every classical theory
struct Classical {
    p: f64,
    h: f64,
    /// 1 - ν12 ν21
    q: f64,
    e1: f64,
    g13: f64,
    /// Plane-strain in-plane modulus E1 / q
    e_reduced: f64,
    /// Through-thickness profile scale s
    s: f64,
}

impl Classical {
    fn new(inputs: &ResponseInputs<'_>) -> Self {
        let m = inputs.moduli;
        let q = 1.0 - m.nu12 * m.nu21;
        Self {
            p: inputs.load.magnitude,
            h: inputs.thickness,
            q,
            e1: m.e1,
            g13: m.g13,
            e_reduced: m.e1 / q,
            s: inputs.shear_profile_scale,
        }
    }

    /// ζ = 2z / (s h) as a polynomial in z
    fn zeta(&self) -> Polynomial {
        Polynomial::monomial(2.0 / (self.s * self.h), 1)
    }

    /// Shear deflection term 3 p h² / (5 G13)
    fn shear_compliance(&self) -> f64 {
        3.0 * self.p * self.h * self.h / (5.0 * self.g13)
    }

    /// Thin-plate deflection
    fn kirchhoff_deflection(&self, kind: LoadingKind) -> Deflection {
        match kind {
            LoadingKind::Uniform => {
                let k = -self.p * self.q / (2.0 * self.e1);
                Deflection::Continuous(Polynomial::new(vec![0.0, 1.0, 0.0, -2.0, 1.0]).scale(k))
            }
            LoadingKind::Focused => {
                let k = -self.p * self.q / (4.0 * self.e1);
                Deflection::Piecewise {
                    left: Polynomial::new(vec![0.0, 3.0, 0.0, -4.0]).scale(k),
                    right: Polynomial::new(vec![-1.0, 9.0, -12.0, 4.0]).scale(k),
                    split: 0.5,
                }
            }
        }
    }

    /// Thin-plate deflection plus the transverse shear contribution
    fn shear_deflection(&self, kind: LoadingKind) -> Deflection {
        let c = self.shear_compliance();
        match self.kirchhoff_deflection(kind) {
            Deflection::Continuous(w) => {
                Deflection::Continuous(&w + &Polynomial::new(vec![0.0, -c, c]))
            }
            Deflection::Piecewise { left, right, split } => Deflection::Piecewise {
                left: &left + &Polynomial::new(vec![0.0, -c]),
                right: &right + &Polynomial::new(vec![-c, c]),
                split,
            },
        }
    }

    /// Bending stress -E' h z w''(x) from the Kirchhoff deflection
    fn bending_stress(&self, deflection: &Deflection) -> StressField {
        let curvature = deflection.left_segment().nth_derivative(2);
        StressField::new().with_term(
            curvature.scale(-self.h * self.e_reduced),
            Polynomial::identity(),
        )
    }

    /// Parabolic transverse shear from equilibrium
    fn shear_stress(&self, kind: LoadingKind) -> StressField {
        let zeta = self.zeta();
        let profile = &Polynomial::constant(1.0) - &(&zeta * &zeta);
        let h2 = self.h * self.h;
        let along_x = match kind {
            LoadingKind::Uniform => Polynomial::new(vec![-0.5, 1.0]).scale(1.5 * self.p * h2),
            LoadingKind::Focused => Polynomial::constant(-0.75 * self.p * h2),
        };
        StressField::new().with_term(along_x, profile)
    }

    /// Transverse normal stress -3 p h³ (2/3 + ζ - ζ³/3) / 4
    fn normal_stress(&self) -> StressField {
        let zeta = self.zeta();
        let cubic = &(&zeta * &zeta) * &zeta;
        let profile = &(&Polynomial::constant(2.0 / 3.0) + &zeta) - &cubic.scale(1.0 / 3.0);
        StressField::new().with_term(
            Polynomial::constant(-0.75 * self.p * self.h.powi(3)),
            profile,
        )
    }

    fn family(
        &self,
        theory: Theory,
        kind: LoadingKind,
        deflection: Deflection,
        sigma11: StressField,
    ) -> FieldFamily {
        FieldFamily {
            theory,
            loading: kind,
            deflection,
            sigma11,
            sigma13: self.shear_stress(kind),
            sigma33: self.normal_stress(),
            sections: Sections::for_loading(kind),
        }
    }
}

pub(super) fn kirchhoff_love(inputs: &ResponseInputs<'_>) -> FieldFamily {
    let c = Classical::new(inputs);
    let kind = inputs.load.kind;
    let deflection = c.kirchhoff_deflection(kind);
    let sigma11 = c.bending_stress(&deflection);
    c.family(Theory::KirchhoffLove, kind, deflection, sigma11)
}

pub(super) fn reissner_mindlin(inputs: &ResponseInputs<'_>) -> FieldFamily {
    let c = Classical::new(inputs);
    let kind = inputs.load.kind;
    let deflection = c.shear_deflection(kind);
    let sigma11 = match kind {
        // E' h z (6 p h² / (5 G13) - w'')
        LoadingKind::Uniform => {
            let shear = Polynomial::constant(2.0 * c.shear_compliance());
            let along_x = &shear - &deflection.left_segment().nth_derivative(2);
            StressField::new().with_term(along_x.scale(c.e_reduced * c.h), Polynomial::identity())
        }
        LoadingKind::Focused => focused_bending(&c),
    };
    c.family(Theory::ReissnerMindlin, kind, deflection, sigma11)
}

pub(super) fn reddy(inputs: &ResponseInputs<'_>) -> FieldFamily {
    let c = Classical::new(inputs);
    let kind = inputs.load.kind;
    let deflection = c.shear_deflection(kind);
    let sigma11 = match kind {
        // E' (h z (3 p h² / (2 G13) - w'') - 2 p h³ z³ / G13)
        LoadingKind::Uniform => {
            let shear = Polynomial::constant(1.5 * c.p * c.h * c.h / c.g13);
            let along_x = &shear - &deflection.left_segment().nth_derivative(2);
            StressField::new()
                .with_term(along_x.scale(c.e_reduced * c.h), Polynomial::identity())
                .with_term(
                    Polynomial::constant(-2.0 * c.p * c.e_reduced * c.h.powi(3) / c.g13),
                    Polynomial::monomial(1.0, 3),
                )
        }
        LoadingKind::Focused => focused_bending(&c),
    };
    c.family(Theory::Reddy, kind, deflection, sigma11)
}

/// -6 p h x z, the bending stress left of a central point load
fn focused_bending(c: &Classical) -> StressField {
    StressField::new().with_term(
        Polynomial::monomial(-6.0 * c.p * c.h, 1),
        Polynomial::identity(),
    )
}

//! Asymptotic theory fields
//!
//! The deflection is the classical term scaled by 1/D1111 plus a
//! thickness-squared correction scaled by D111111/D1111². Stresses combine
//! x-derivatives of the deflection with the through-thickness shape functions.

use super::{Deflection, FieldFamily, ResponseInputs, Sections, StressField, Theory};
use crate::loads::LoadingKind;
use crate::math::Polynomial;

pub(super) fn fields(inputs: &ResponseInputs<'_>) -> FieldFamily {
    let deflection = deflection(inputs);
    let shapes = &inputs.solution.shapes;
    let h = inputs.thickness;

    // Point loads use the left piece, which holds on the sampled section x = 1/4
    let w = deflection.left_segment();
    let w2 = w.nth_derivative(2);
    let w3 = w.nth_derivative(3);
    let w4 = w.nth_derivative(4);

    let sigma11 = StressField::new()
        .with_term(w2.scale(h), shapes.p1111.clone())
        .with_term(w4.scale(h.powi(3)), shapes.p111111.clone());
    let sigma13 = StressField::new().with_term(w3.scale(h * h), shapes.p13111.clone());
    let sigma33 = StressField::new().with_term(w4.scale(h.powi(3)), shapes.p331111.clone());

    FieldFamily {
        theory: Theory::Asymptotic,
        loading: inputs.load.kind,
        deflection,
        sigma11,
        sigma13,
        sigma33,
        sections: Sections::for_loading(inputs.load.kind),
    }
}

fn deflection(inputs: &ResponseInputs<'_>) -> Deflection {
    let p = inputs.load.magnitude;
    let h = inputs.thickness;
    let d = inputs.solution.stiffness.d1111;
    let d6 = inputs.solution.stiffness.d111111;
    let correction = p * d6 * h * h / (2.0 * d * d);

    match inputs.load.kind {
        LoadingKind::Uniform => {
            let w0 = Polynomial::new(vec![0.0, 1.0 / 24.0, 0.0, -1.0 / 12.0, 1.0 / 24.0]).scale(p / d);
            let w2 = Polynomial::new(vec![0.0, 1.0, -1.0]).scale(correction);
            Deflection::Continuous(&w0 + &w2)
        }
        LoadingKind::Focused => {
            let k = p / (48.0 * d);
            let left = &Polynomial::new(vec![0.0, 3.0, 0.0, -4.0]).scale(k)
                + &Polynomial::new(vec![0.0, 1.0]).scale(correction);
            let right = &Polynomial::new(vec![-1.0, 9.0, -12.0, 4.0]).scale(k)
                + &Polynomial::new(vec![1.0, -1.0]).scale(correction);
            Deflection::Piecewise {
                left,
                right,
                split: 0.5,
            }
        }
    }
}

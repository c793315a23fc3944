//! Closed-form deflection and stress fields

use serde::{Deserialize, Serialize};

use super::Theory;
use crate::loads::LoadingKind;
use crate::math::Polynomial;

/// Transverse deflection w(x)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Deflection {
    /// One polynomial over the whole span
    Continuous(Polynomial),
    /// Separate polynomials left and right of a breakpoint
    Piecewise {
        left: Polynomial,
        right: Polynomial,
        split: f64,
    },
}

impl Deflection {
    /// Evaluate at `x`; the right piece owns the breakpoint itself
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Deflection::Continuous(w) => w.eval(x),
            Deflection::Piecewise { left, right, split } => {
                if x < *split {
                    left.eval(x)
                } else {
                    right.eval(x)
                }
            }
        }
    }

    /// Polynomial used for stress recovery (the left piece of a piecewise field)
    pub fn left_segment(&self) -> &Polynomial {
        match self {
            Deflection::Continuous(w) => w,
            Deflection::Piecewise { left, .. } => left,
        }
    }

    /// Jump between the two pieces at the breakpoint (zero when continuous)
    pub fn jump(&self) -> f64 {
        match self {
            Deflection::Continuous(_) => 0.0,
            Deflection::Piecewise { left, right, split } => right.eval(*split) - left.eval(*split),
        }
    }
}

/// Separable stress field Σ a_i(x) b_i(z)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StressField {
    terms: Vec<(Polynomial, Polynomial)>,
}

impl StressField {
    /// Empty (identically zero) field
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the term `along_x(x) * through_z(z)`
    pub fn with_term(mut self, along_x: Polynomial, through_z: Polynomial) -> Self {
        if !along_x.is_zero() && !through_z.is_zero() {
            self.terms.push((along_x, through_z));
        }
        self
    }

    pub fn terms(&self) -> &[(Polynomial, Polynomial)] {
        &self.terms
    }

    /// Evaluate at (x, z)
    pub fn eval(&self, x: f64, z: f64) -> f64 {
        self.terms.iter().map(|(a, b)| a.eval(x) * b.eval(z)).sum()
    }

    /// Substitute `x` and return the through-thickness profile in z
    pub fn at_section(&self, x: f64) -> Polynomial {
        self.terms
            .iter()
            .fold(Polynomial::zero(), |acc, (a, b)| &acc + &b.scale(a.eval(x)))
    }
}

/// Stress components reported through the thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressComponent {
    Sigma11,
    Sigma13,
    Sigma33,
}

impl StressComponent {
    pub const ALL: [StressComponent; 3] = [
        StressComponent::Sigma11,
        StressComponent::Sigma13,
        StressComponent::Sigma33,
    ];
}

/// Cross sections x at which each stress component is sampled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    pub sigma11: f64,
    pub sigma13: f64,
    pub sigma33: f64,
}

impl Sections {
    /// Representative sections for a loading kind, shared by every theory
    pub fn for_loading(kind: LoadingKind) -> Self {
        match kind {
            LoadingKind::Uniform => Self {
                sigma11: 0.5,
                sigma13: 0.25,
                sigma33: 0.25,
            },
            LoadingKind::Focused => Self {
                sigma11: 0.25,
                sigma13: 0.25,
                sigma33: 0.25,
            },
        }
    }

    pub fn get(&self, component: StressComponent) -> f64 {
        match component {
            StressComponent::Sigma11 => self.sigma11,
            StressComponent::Sigma13 => self.sigma13,
            StressComponent::Sigma33 => self.sigma33,
        }
    }
}

/// Deflection and stresses of one theory under one loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFamily {
    pub theory: Theory,
    pub loading: LoadingKind,
    pub deflection: Deflection,
    pub sigma11: StressField,
    pub sigma13: StressField,
    pub sigma33: StressField,
    pub sections: Sections,
}

impl FieldFamily {
    pub fn stress(&self, component: StressComponent) -> &StressField {
        match component {
            StressComponent::Sigma11 => &self.sigma11,
            StressComponent::Sigma13 => &self.sigma13,
            StressComponent::Sigma33 => &self.sigma33,
        }
    }

    /// Through-thickness profile of a component at its representative section
    pub fn profile(&self, component: StressComponent) -> Polynomial {
        self.stress(component).at_section(self.sections.get(component))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piecewise_eval_and_jump() {
        let w = Deflection::Piecewise {
            left: Polynomial::identity(),
            right: Polynomial::new(vec![1.0, -1.0]),
            split: 0.5,
        };
        assert_eq!(w.eval(0.25), 0.25);
        assert_eq!(w.eval(0.75), 0.25);
        assert_eq!(w.jump(), 0.0);
        assert_eq!(w.left_segment(), &Polynomial::identity());
    }

    #[test]
    fn test_stress_field_section() {
        // σ = x * z + 2 * z^3
        let s = StressField::new()
            .with_term(Polynomial::identity(), Polynomial::identity())
            .with_term(Polynomial::constant(2.0), Polynomial::monomial(1.0, 3))
            .with_term(Polynomial::zero(), Polynomial::constant(7.0));
        assert_eq!(s.terms().len(), 2);
        let profile = s.at_section(0.5);
        assert_eq!(profile, Polynomial::new(vec![0.0, 0.5, 0.0, 2.0]));
        assert_eq!(s.eval(0.5, 0.5), profile.eval(0.5));
    }

    #[test]
    fn test_sections() {
        let u = Sections::for_loading(LoadingKind::Uniform);
        assert_eq!(u.get(StressComponent::Sigma11), 0.5);
        assert_eq!(u.get(StressComponent::Sigma13), 0.25);
        let f = Sections::for_loading(LoadingKind::Focused);
        assert!(StressComponent::ALL.iter().all(|&c| f.get(c) == 0.25));
    }
}

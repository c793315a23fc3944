//! Closed-form polynomials in a single variable
//!
//! Every correction function, stress shape function and deflection in this
//! crate is a polynomial of low degree, so the symbolic operations the
//! asymptotic derivation needs (antiderivative, definite integral,
//! differentiation, substitution) are exact coefficient manipulations.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::Vec as Samples;

/// Polynomial with real coefficients stored in ascending powers
///
/// `coeffs[k]` multiplies `t^k`. Trailing zero coefficients are trimmed so
/// two equal polynomials compare equal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create from coefficients in ascending powers
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Constant polynomial
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// The identity polynomial `t`
    pub fn identity() -> Self {
        Self::new(vec![0.0, 1.0])
    }

    /// Single term `c * t^n`
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    fn trim(&mut self) {
        while self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
    }

    /// Coefficients in ascending powers
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of `t^n` (zero beyond the degree)
    pub fn coeff(&self, n: usize) -> f64 {
        self.coeffs.get(n).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial; the zero polynomial reports degree 0
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluate at `t` (Horner's scheme)
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Evaluate at every point of `points`
    pub fn eval_all(&self, points: &Samples) -> Samples {
        points.map(|t| self.eval(t))
    }

    /// Multiply every coefficient by `k`
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * k).collect())
    }

    /// First derivative
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| c * k as f64)
                .collect(),
        )
    }

    /// `n`-th derivative
    pub fn nth_derivative(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }

    /// Antiderivative with zero constant term
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| c / (k as f64 + 1.0)),
        );
        Self::new(coeffs)
    }

    /// Integral with variable upper limit, `∫_a^t p(s) ds`
    pub fn integral_from(&self, a: f64) -> Self {
        let f = self.antiderivative();
        let fa = f.eval(a);
        f - Self::constant(fa)
    }

    /// Definite integral `∫_a^b p(t) dt`
    pub fn definite_integral(&self, a: f64, b: f64) -> f64 {
        let f = self.antiderivative();
        f.eval(b) - f.eval(a)
    }

    /// Mean value over `[a, b]`
    pub fn mean_over(&self, (a, b): (f64, f64)) -> f64 {
        self.definite_integral(a, b) / (b - a)
    }

    /// Shift by a constant so the mean over `interval` vanishes
    pub fn zero_mean(&self, interval: (f64, f64)) -> Self {
        let mean = self.mean_over(interval);
        self - &Self::constant(mean)
    }

    /// Antiderivative whose free constant is fixed by a zero mean over `interval`
    pub fn zero_mean_antiderivative(&self, interval: (f64, f64)) -> Self {
        self.integral_from(interval.0).zero_mean(interval)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            if !first {
                write!(f, " {} ", if c < 0.0 { '-' } else { '+' })?;
            } else if c < 0.0 {
                write!(f, "-")?;
            }
            let c = c.abs();
            match k {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*t")?,
                _ => write!(f, "{c}*t^{k}")?,
            }
            first = false;
        }
        Ok(())
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new((0..n).map(|k| self.coeff(k) + rhs.coeff(k)).collect())
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new((0..n).map(|k| self.coeff(k) - rhs.coeff(k)).collect())
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, k: f64) -> Polynomial {
        self.scale(k)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, k: f64) -> Polynomial {
        self.scale(k)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

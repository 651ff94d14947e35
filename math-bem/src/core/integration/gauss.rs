//! Gauss-Legendre quadrature rules on the unit interval and the unit square
//!
//! Rules are computed by Newton iteration on the Legendre three-term
//! recurrence and stored once per degree in a [`GaussSquare`] table.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::core::constants::MAXIMUM_QUADRATURE_DEGREE;
use crate::core::error::QuadratureError;

/// Newton iterations per node; convergence takes fewer than ten
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Gauss-Legendre abscissas and weights on [0, 1]
///
/// Returns (points, weights) with points in increasing order. The rule with
/// `n` points integrates polynomials up to degree `2n - 1` exactly.
pub fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut x = vec![0.0; n];
    let mut w = vec![0.0; n];
    let nf = n as f64;

    for i in 0..n.div_ceil(2) {
        // Initial guess for the i-th largest root of P_n on [-1, 1]
        let mut z = (PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
        let mut dp = 1.0;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (p, d) = legendre_with_derivative(n, z);
            dp = d;
            let z_old = z;
            z = z_old - p / d;
            if (z - z_old).abs() <= 1e-15 {
                let (_, d) = legendre_with_derivative(n, z);
                dp = d;
                break;
            }
        }

        let weight = 1.0 / ((1.0 - z * z) * dp * dp);
        x[i] = 0.5 * (1.0 - z);
        x[n - 1 - i] = 0.5 * (1.0 + z);
        w[i] = weight;
        w[n - 1 - i] = weight;
    }

    (x, w)
}

/// Value and derivative of the Legendre polynomial P_n at z
fn legendre_with_derivative(n: usize, z: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 1..=n {
        let jf = j as f64;
        let p3 = p2;
        p2 = p1;
        p1 = ((2.0 * jf - 1.0) * z * p2 - (jf - 1.0) * p3) / jf;
    }
    let dp = n as f64 * (z * p1 - p2) / (z * z - 1.0);
    (p1, dp)
}

/// One-dimensional quadrature rule on [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrature1D {
    /// Abscissas
    pub xi: Vec<f64>,
    /// Weights
    pub w: Vec<f64>,
}

impl Quadrature1D {
    /// Gauss-Legendre rule with `n` points
    pub fn gauss(n: usize) -> Self {
        let (xi, w) = gauss_legendre(n);
        Self { xi, w }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.w.len()
    }

    /// True when the rule has no points
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }
}

/// Tensor-product quadrature rule on [0, 1]^2
#[derive(Debug, Clone, PartialEq)]
pub struct Cubature {
    /// Points (x, y)
    pub xi: Vec<[f64; 2]>,
    /// Weights
    pub w: Vec<f64>,
}

impl Cubature {
    /// Tensor product of a 1D rule with itself
    ///
    /// Point `k` is `(x[k / n], x[k % n])` with weight `w[k / n] * w[k % n]`.
    pub fn tensor(rule: &Quadrature1D) -> Self {
        let n = rule.len();
        let mut xi = Vec::with_capacity(n * n);
        let mut w = Vec::with_capacity(n * n);
        for k in 0..n * n {
            xi.push([rule.xi[k / n], rule.xi[k % n]]);
            w.push(rule.w[k / n] * rule.w[k % n]);
        }
        Self { xi, w }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.w.len()
    }

    /// True when the rule has no points
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }
}

/// Table of tensor Gauss rules indexed by degree
///
/// Entry `d` uses `d + 1` Gauss points per direction.
#[derive(Debug, Clone)]
pub struct GaussSquare {
    rules: Vec<Cubature>,
}

impl GaussSquare {
    /// Build the rules for every degree in `0..=maximum_degree`
    pub fn new(maximum_degree: usize) -> Self {
        let rules = (0..=maximum_degree)
            .map(|d| Cubature::tensor(&Quadrature1D::gauss(d + 1)))
            .collect();
        Self { rules }
    }

    /// Process-wide table for [`MAXIMUM_QUADRATURE_DEGREE`], built on first use
    pub fn shared() -> &'static GaussSquare {
        static TABLE: OnceLock<GaussSquare> = OnceLock::new();
        TABLE.get_or_init(|| GaussSquare::new(MAXIMUM_QUADRATURE_DEGREE))
    }

    /// Highest degree in the table
    pub fn maximum_degree(&self) -> usize {
        self.rules.len().saturating_sub(1)
    }

    /// Rule of the given degree
    pub fn get(&self, degree: usize) -> Result<&Cubature, QuadratureError> {
        self.rules
            .get(degree)
            .ok_or(QuadratureError::DegreeTooLarge {
                degree,
                maximum: self.maximum_degree(),
            })
    }
}

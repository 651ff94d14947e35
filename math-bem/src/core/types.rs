//! Scalar types of the integrand values
//!
//! Operators produce either real (`f64`) or complex (`Complex64`) local
//! matrices. [`BemScalar`] collects what the quadrature needs from them:
//! a zero, accumulation and scaling by real quadrature weights.

use num_complex::Complex64;
use num_traits::{NumAssign, Zero};
use std::fmt::Debug;
use std::ops::Mul;

/// Scalar type of a local interaction matrix
///
/// Provided for `f64` (Laplace kernels) and `Complex64` (Helmholtz kernels).
pub trait BemScalar:
    NumAssign + Copy + Send + Sync + Debug + Zero + Mul<f64, Output = Self> + 'static
{
}

impl BemScalar for f64 {}

impl BemScalar for Complex64 {}

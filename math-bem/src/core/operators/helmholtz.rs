//! Helmholtz single layer
//!
//! Fundamental solution `G(x, y) = exp(-i k |x - y|) / (4 pi |x - y|)` for
//! a fixed wavenumber `k`.

use ndarray::Array2;
use num_complex::Complex64;

use crate::core::ansatz::SuperSpace;
use crate::core::constants::PI4;
use crate::core::mesh::SurfacePoint;
use crate::core::operators::{LinearOperator, difference};

/// Single layer of `-Δu - k²u = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmholtzSingleLayer {
    wavenumber: f64,
}

impl HelmholtzSingleLayer {
    /// Single layer for wavenumber `k`
    pub fn new(wavenumber: f64) -> Self {
        Self { wavenumber }
    }

    /// Wavenumber `k`
    pub fn wavenumber(&self) -> f64 {
        self.wavenumber
    }

    /// Kernel value at distance `r`
    #[inline]
    pub fn kernel(&self, r: f64) -> Complex64 {
        Complex64::new(0.0, -self.wavenumber * r).exp() / (PI4 * r)
    }
}

impl LinearOperator for HelmholtzSingleLayer {
    type Scalar = Complex64;
    const OPERATOR_ORDER: i32 = -1;

    fn evaluate_integrand(
        &self,
        space: &SuperSpace,
        p1: &SurfacePoint,
        p2: &SurfacePoint,
        intval: &mut Array2<Complex64>,
    ) {
        let (_, r) = difference(p1, p2);
        let scale = p1.surface_measure() * p2.surface_measure() * p1.w * p2.w;
        space.add_scaled_basis_interaction(intval, self.kernel(r) * scale, p1.xi, p2.xi);
    }
}

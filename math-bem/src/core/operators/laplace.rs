//! Laplace layer potentials
//!
//! Fundamental solution `G(x, y) = 1 / (4 pi |x - y|)`.

use ndarray::Array2;

use crate::core::ansatz::SuperSpace;
use crate::core::constants::PI4;
use crate::core::mesh::{SurfacePoint, dot_product};
use crate::core::operators::{LinearOperator, difference};

/// Single layer `V u(x) = int G(x, y) u(y) ds_y`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaplaceSingleLayer;

impl LaplaceSingleLayer {
    /// New single layer operator
    pub fn new() -> Self {
        Self
    }
}

impl LinearOperator for LaplaceSingleLayer {
    type Scalar = f64;
    const OPERATOR_ORDER: i32 = -1;

    fn evaluate_integrand(
        &self,
        space: &SuperSpace,
        p1: &SurfacePoint,
        p2: &SurfacePoint,
        intval: &mut Array2<f64>,
    ) {
        let (_, r) = difference(p1, p2);
        let kernel = 1.0 / (PI4 * r);
        let scale = kernel * p1.surface_measure() * p2.surface_measure() * p1.w * p2.w;
        space.add_scaled_basis_interaction(intval, scale, p1.xi, p2.xi);
    }
}

/// Double layer `K u(x) = int dG(x, y)/dn_y u(y) ds_y`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaplaceDoubleLayer;

impl LaplaceDoubleLayer {
    /// New double layer operator
    pub fn new() -> Self {
        Self
    }
}

impl LinearOperator for LaplaceDoubleLayer {
    type Scalar = f64;
    const OPERATOR_ORDER: i32 = 0;

    fn evaluate_integrand(
        &self,
        space: &SuperSpace,
        p1: &SurfacePoint,
        p2: &SurfacePoint,
        intval: &mut Array2<f64>,
    ) {
        let (d, r) = difference(p1, p2);
        // the unnormalised normal carries the surface measure of p2
        let kernel = dot_product(&d, &p2.normal()) / (PI4 * r * r * r);
        let scale = kernel * p1.surface_measure() * p1.w * p2.w;
        space.add_scaled_basis_interaction(intval, scale, p1.xi, p2.xi);
    }
}

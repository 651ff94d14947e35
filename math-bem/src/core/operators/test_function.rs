//! Scalar test functional
//!
//! Integrates a plain function `f(x, y)` of the first two coordinates of
//! both surface points against the quadrature weights. The local matrix is
//! 1x1 and the basis is ignored, so quadrature routines can be checked
//! against closed-form integrals.

use ndarray::Array2;

use crate::core::ansatz::SuperSpace;
use crate::core::mesh::SurfacePoint;
use crate::core::operators::LinearOperator;

/// Function of two planar points
pub type TestFunction = fn([f64; 2], [f64; 2]) -> f64;

fn one(_: [f64; 2], _: [f64; 2]) -> f64 {
    1.0
}

/// `intval[0, 0] += f(x1, x2) * w1 * w2`
#[derive(Clone)]
pub struct TestFunctionOperator<F = TestFunction> {
    function: F,
}

impl TestFunctionOperator<TestFunction> {
    /// Operator for the constant function 1
    pub fn constant() -> Self {
        Self { function: one }
    }
}

impl Default for TestFunctionOperator<TestFunction> {
    fn default() -> Self {
        Self::constant()
    }
}

impl<F> TestFunctionOperator<F>
where
    F: Fn([f64; 2], [f64; 2]) -> f64 + Sync,
{
    /// Wrap a function of the two points' (x, y) coordinates
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Evaluate the wrapped function
    pub fn eval(&self, x: [f64; 2], y: [f64; 2]) -> f64 {
        (self.function)(x, y)
    }
}

impl<F> LinearOperator for TestFunctionOperator<F>
where
    F: Fn([f64; 2], [f64; 2]) -> f64 + Sync,
{
    type Scalar = f64;
    const OPERATOR_ORDER: i32 = 0;

    #[inline]
    fn evaluate_integrand(
        &self,
        _space: &SuperSpace,
        p1: &SurfacePoint,
        p2: &SurfacePoint,
        intval: &mut Array2<f64>,
    ) {
        intval[[0, 0]] +=
            (self.function)([p1.x[0], p1.x[1]], [p2.x[0], p2.x[1]]) * p1.w * p2.w;
    }

    fn local_matrix_size(&self, _space: &SuperSpace) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh::generators::unit_screen;

    #[test]
    fn test_constant_accumulates_weights() {
        let space = SuperSpace::new(unit_screen(), 0, 0).unwrap();
        let op = TestFunctionOperator::constant();
        let mut intval = Array2::zeros((1, 1));
        let p1 = SurfacePoint {
            w: 0.5,
            ..Default::default()
        };
        let p2 = SurfacePoint {
            w: 0.25,
            ..Default::default()
        };
        op.evaluate_integrand(&space, &p1, &p2, &mut intval);
        op.evaluate_integrand(&space, &p1, &p2, &mut intval);
        assert_eq!(intval[[0, 0]], 0.25);
        assert_eq!(op.local_matrix_size(&space), 1);
    }

    #[test]
    fn test_closure_sees_planar_coordinates() {
        let space = SuperSpace::new(unit_screen(), 0, 2).unwrap();
        let op = TestFunctionOperator::new(|x: [f64; 2], y: [f64; 2]| x[0] * y[1]);
        let mut intval = Array2::zeros((1, 1));
        let p1 = SurfacePoint {
            w: 1.0,
            x: [2.0, 5.0, 7.0],
            ..Default::default()
        };
        let p2 = SurfacePoint {
            w: 1.0,
            x: [1.0, 3.0, 9.0],
            ..Default::default()
        };
        op.evaluate_integrand(&space, &p1, &p2, &mut intval);
        assert_eq!(intval[[0, 0]], 6.0);
        assert_eq!(op.eval([2.0, 0.0], [0.0, 3.0]), 6.0);
    }

    #[test]
    fn test_degrees() {
        let op = TestFunctionOperator::constant();
        assert_eq!(op.farfield_quadrature_degree(0), 1);
        assert_eq!(
            op.nearfield_quadrature_degree(1, 0.0, 3),
            crate::core::integration::degree::nearfield_quadrature_degree(0, 1, 0.0, 3)
        );
    }
}

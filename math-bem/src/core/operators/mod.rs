//! Integral operators
//!
//! An operator contributes the kernel evaluated at two surface points,
//! scaled by both quadrature weights and expanded into the local basis,
//! to a local interaction matrix. The quadrature routines never know which
//! kernel they integrate.
//!
//! - [`test_function`] - user supplied scalar function, used to check the quadrature
//! - [`laplace`] - single and double layer of the Laplace equation
//! - [`helmholtz`] - single layer of the Helmholtz equation

pub mod helmholtz;
pub mod laplace;
pub mod test_function;

pub use helmholtz::HelmholtzSingleLayer;
pub use laplace::{LaplaceDoubleLayer, LaplaceSingleLayer};
pub use test_function::TestFunctionOperator;

use ndarray::Array2;

use crate::core::ansatz::SuperSpace;
use crate::core::integration::degree;
use crate::core::mesh::SurfacePoint;
use crate::core::types::BemScalar;

/// Kernel of a boundary integral operator
///
/// `evaluate_integrand` is called once per pair of quadrature points and
/// must add to `intval`, never overwrite it.
pub trait LinearOperator: Sync {
    /// Scalar type of the local matrices
    type Scalar: BemScalar;

    /// Order of the operator as a pseudo-differential operator
    const OPERATOR_ORDER: i32;

    /// Number of vector components per local function
    const NUMBER_OF_COMPONENTS: usize = 1;

    /// Add the contribution of the quadrature pair `(p1, p2)` to `intval`
    fn evaluate_integrand(
        &self,
        space: &SuperSpace,
        p1: &SurfacePoint,
        p2: &SurfacePoint,
        intval: &mut Array2<Self::Scalar>,
    );

    /// Rows (and columns) of the local matrix for one element pair
    fn local_matrix_size(&self, space: &SuperSpace) -> usize {
        Self::NUMBER_OF_COMPONENTS * space.number_of_local_functions()
    }

    /// Quadrature degree for well-separated elements
    fn farfield_quadrature_degree(&self, polynomial_degree: usize) -> i32 {
        degree::farfield_quadrature_degree(Self::OPERATOR_ORDER, polynomial_degree)
    }

    /// Quadrature degree for elements at distance `distance` on `level`
    fn nearfield_quadrature_degree(
        &self,
        polynomial_degree: usize,
        distance: f64,
        level: usize,
    ) -> i32 {
        degree::nearfield_quadrature_degree(
            Self::OPERATOR_ORDER,
            polynomial_degree,
            distance,
            level,
        )
    }
}

/// `x - y` and its length
#[inline]
pub(crate) fn difference(p1: &SurfacePoint, p2: &SurfacePoint) -> ([f64; 3], f64) {
    let d = [p1.x[0] - p2.x[0], p1.x[1] - p2.x[1], p1.x[2] - p2.x[2]];
    let r = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
    (d, r)
}

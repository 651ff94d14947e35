//! Tensor-product quadrature for separated element pairs
//!
//! Both routines integrate the operator over `e1 × e2` with the plain
//! tensor Gauss rule. [`integrate0`] reuses far-field nodes that were
//! mapped to the surface once per element; [`integrate1`] maps the nodes
//! of a finer rule on the fly.

use ndarray::Array2;
use num_traits::Zero;

use crate::core::ansatz::SuperSpace;
use crate::core::integration::gauss::Cubature;
use crate::core::mesh::{ElementTreeNode, SurfacePoint};
use crate::core::operators::LinearOperator;

/// Far-field pair: double loop over precomputed surface points
pub fn integrate0<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    ffield_qnodes1: &[SurfacePoint],
    ffield_qnodes2: &[SurfacePoint],
    intval: &mut Array2<Op::Scalar>,
) {
    intval.fill(Op::Scalar::zero());
    for qp1 in ffield_qnodes1 {
        for qp2 in ffield_qnodes2 {
            op.evaluate_integrand(space, qp1, qp2, intval);
        }
    }
}

/// Separated pair that needs more points than the far-field rule
pub fn integrate1<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    e2: &ElementTreeNode,
    q: &Cubature,
    intval: &mut Array2<Op::Scalar>,
) {
    intval.fill(Op::Scalar::zero());
    let h = e1.h();
    for (xi, w) in q.xi.iter().zip(&q.w) {
        let qp1 = space.map2surface(e1, *xi, h * w);
        for (eta, v) in q.xi.iter().zip(&q.w) {
            let qp2 = space.map2surface(e2, *eta, h * v);
            op.evaluate_integrand(space, &qp1, &qp2, intval);
        }
    }
}

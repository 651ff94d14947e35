//! Duffy transforms for touching element pairs
//!
//! The kernel is singular where the two surface points meet. Splitting the
//! four-dimensional domain `[0,1]^2 × [0,1]^2` into pyramids with apex on
//! the singular set and collapsing each pyramid onto the unit hypercube
//! produces a Jacobian that cancels the `1/r` singularity, after which the
//! tensor Gauss rule converges again.
//!
//! All routines use the mesh width of `e1`; both elements are on the same
//! level. The first surface point of each evaluation carries the weight
//! `h² w_i J`, the second the plain weight of the inner rule.

use ndarray::Array2;
use num_traits::Zero;

use crate::core::ansatz::SuperSpace;
use crate::core::integration::gauss::Cubature;
use crate::core::integration::tau::{tau, tau_point};
use crate::core::mesh::ElementTreeNode;
use crate::core::operators::LinearOperator;

/// Identical elements
///
/// Eight sub-domains around the diagonal, each evaluated in both orders.
pub fn integrate2<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e: &ElementTreeNode,
    q: &Cubature,
    intval: &mut Array2<Op::Scalar>,
) {
    intval.fill(Op::Scalar::zero());
    let h = e.h();
    for (xi, wi) in q.xi.iter().zip(&q.w) {
        let [x0, x1] = *xi;
        let w = h * h * wi * x0 * (1.0 - x0) * (1.0 - x0 * x1);
        for (eta, wj) in q.xi.iter().zip(&q.w) {
            let t1 = eta[0] * (1.0 - x0);
            let t2 = eta[1] * (1.0 - x0 * x1);
            let t3 = t1 + x0;
            let t4 = t2 + x0 * x1;
            let pts = [
                [t1, t2],
                [t3, t4],
                [t1, t4],
                [t3, t2],
                [t2, t1],
                [t4, t3],
                [t2, t3],
                [t4, t1],
            ];
            for pair in pts.chunks_exact(2) {
                let qp1 = space.map2surface(e, pair[0], w);
                let qp2 = space.map2surface(e, pair[1], *wj);
                op.evaluate_integrand(space, &qp1, &qp2, intval);
                op.evaluate_integrand(space, &qp2, &qp1, intval);
            }
        }
    }
}

/// Elements with a common edge
///
/// After rotation the edge is `y = 0` on both elements, with `(0,0)` of
/// `e1` at `(1,0)` of `e2`. Three sub-domains, each with its mirror image.
pub fn integrate3<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    rot1: usize,
    e2: &ElementTreeNode,
    rot2: usize,
    q: &Cubature,
    intval: &mut Array2<Op::Scalar>,
) {
    intval.fill(Op::Scalar::zero());
    let h = e1.h();
    for (xi, wi) in q.xi.iter().zip(&q.w) {
        let [x0, x1] = *xi;
        let w = h * h * wi * x1 * x1;
        let t1 = x0 * (1.0 - x1);
        let t2 = (1.0 - x0) * (1.0 - x1);
        for (y, wj) in q.xi.iter().zip(&q.w) {
            let eta = [x1 * y[0], x1 * y[1]];
            let t3 = x0 * (1.0 - eta[0]);
            let t4 = (1.0 - x0) * (1.0 - eta[0]);
            let w_edge = wj * (1.0 - x1);
            let w_side = wj * (1.0 - eta[0]);

            let evaluations = [
                (tau(t1, eta[0], rot1), tau(t2, eta[1], rot2), w_edge),
                (tau(1.0 - t1, eta[0], rot1), tau(1.0 - t2, eta[1], rot2), w_edge),
                (tau(t3, x1, rot1), tau(t4, eta[1], rot2), w_side),
                (tau(1.0 - t3, x1, rot1), tau(1.0 - t4, eta[1], rot2), w_side),
                (tau(t4, eta[1], rot1), tau(t3, x1, rot2), w_side),
                (tau(1.0 - t4, eta[1], rot1), tau(1.0 - t3, x1, rot2), w_side),
            ];
            for (s, t, w2) in evaluations {
                let qp1 = space.map2surface(e1, s, w);
                let qp2 = space.map2surface(e2, t, w2);
                op.evaluate_integrand(space, &qp1, &qp2, intval);
            }
        }
    }
}

/// Elements with a common vertex
///
/// After rotation the vertex is `(0,0)` on both elements. Two pyramids per
/// element, the inner points shrunk towards the vertex.
pub fn integrate4<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    rot1: usize,
    e2: &ElementTreeNode,
    rot2: usize,
    q: &Cubature,
    intval: &mut Array2<Op::Scalar>,
) {
    intval.fill(Op::Scalar::zero());
    let h = e1.h();
    for (xi, wi) in q.xi.iter().zip(&q.w) {
        let x0 = xi[0];
        let x1 = xi[1] * x0;
        let w = h * h * wi * x0 * x0 * x0;
        let qp1 = space.map2surface(e1, tau(x0, x1, rot1), w);
        let qp2 = space.map2surface(e1, tau(x1, x0, rot1), w);
        let qp3 = space.map2surface(e2, tau(x0, x1, rot2), w);
        let qp4 = space.map2surface(e2, tau(x1, x0, rot2), w);
        for (y, wj) in q.xi.iter().zip(&q.w) {
            let eta = [x0 * y[0], x0 * y[1]];
            let qp5 = space.map2surface(e2, tau_point(eta, rot2), *wj);
            let qp6 = space.map2surface(e1, tau_point(eta, rot1), *wj);
            op.evaluate_integrand(space, &qp1, &qp5, intval);
            op.evaluate_integrand(space, &qp2, &qp5, intval);
            op.evaluate_integrand(space, &qp6, &qp3, intval);
            op.evaluate_integrand(space, &qp6, &qp4, intval);
        }
    }
}

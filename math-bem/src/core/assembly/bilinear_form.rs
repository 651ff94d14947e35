//! Local interaction matrix of one element pair
//!
//! Classifies the pair, estimates the quadrature degree from the pair's
//! distance and level, and dispatches to the matching quadrature routine:
//!
//! | pair          | routine      |
//! |---------------|--------------|
//! | disjoint, far-field degree | `integrate0` (cached nodes) |
//! | disjoint, higher degree    | `integrate1` |
//! | identical     | `integrate2` |
//! | shared edge   | `integrate3` |
//! | shared vertex | `integrate4` |

use ndarray::Array2;

use crate::core::ansatz::SuperSpace;
use crate::core::error::QuadratureError;
use crate::core::integration::{
    Cubature, GaussSquare, PairCase, PairClassification, compare_elements, integrate0, integrate1,
    integrate2, integrate3, integrate4,
};
use crate::core::mesh::{ElementTreeNode, SurfacePoint};
use crate::core::operators::LinearOperator;

/// Quadrature degree for a classified pair, never below the far-field degree
pub fn pair_quadrature_degree<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    classification: &PairClassification,
) -> usize {
    let p = space.polynomial_degree();
    let far = op.farfield_quadrature_degree(p);
    let near = op.nearfield_quadrature_degree(p, classification.distance, e1.level);
    near.max(far).max(0) as usize
}

/// Rule of `degree` from `table`, failing with the pair's identities
fn pair_rule<'t>(
    table: &'t GaussSquare,
    degree: usize,
    e1: &ElementTreeNode,
    e2: &ElementTreeNode,
) -> Result<&'t Cubature, QuadratureError> {
    table
        .get(degree)
        .map_err(|_| QuadratureError::PairDegreeTooLarge {
            degree,
            maximum: table.maximum_degree(),
            element1: e1.id,
            element2: e2.id,
            patch1: e1.patch,
            patch2: e2.patch,
        })
}

/// Overwrite `intval` with the interaction of `e1` (rows) and `e2` (columns)
///
/// `ffield_qnodes1` and `ffield_qnodes2` are the far-field nodes of the two
/// elements; empty slices make separated pairs use `integrate1` instead.
/// Returns the classification that selected the routine.
pub fn evaluate_bilinear_form<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    e2: &ElementTreeNode,
    table: &GaussSquare,
    ffield_qnodes1: &[SurfacePoint],
    ffield_qnodes2: &[SurfacePoint],
    intval: &mut Array2<Op::Scalar>,
) -> Result<PairClassification, QuadratureError> {
    for e in [e1, e2] {
        if space.tree().index_of(e).is_none() {
            return Err(QuadratureError::ForeignElement { element: e.id });
        }
    }
    let n = op.local_matrix_size(space);
    if intval.dim() != (n, n) {
        return Err(QuadratureError::LocalMatrixShape {
            expected: (n, n),
            found: intval.dim(),
        });
    }

    let classification = compare_elements(e1, e2);
    let degree = pair_quadrature_degree(op, space, e1, &classification);
    let q = pair_rule(table, degree, e1, e2)?;
    let (rot1, rot2) = (classification.rot1, classification.rot2);

    match classification.case {
        PairCase::Disjoint => {
            let far = op.farfield_quadrature_degree(space.polynomial_degree());
            if degree as i32 == far && !ffield_qnodes1.is_empty() && !ffield_qnodes2.is_empty()
            {
                integrate0(op, space, ffield_qnodes1, ffield_qnodes2, intval);
            } else {
                integrate1(op, space, e1, e2, q, intval);
            }
        }
        PairCase::Identical => integrate2(op, space, e1, q, intval),
        PairCase::SharedEdge => integrate3(op, space, e1, rot1, e2, rot2, q, intval),
        PairCase::SharedVertex => integrate4(op, space, e1, rot1, e2, rot2, q, intval),
    }
    Ok(classification)
}

/// Same as [`evaluate_bilinear_form`] for a classification given as raw ids
///
/// Lets callers that store `(rot1, rot2, case)` triples replay a pair
/// without classifying it again. Case 1 and unknown ids are rejected.
pub fn evaluate_classified_pair<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    e1: &ElementTreeNode,
    e2: &ElementTreeNode,
    (rot1, rot2, case): (usize, usize, i32),
    distance: f64,
    table: &GaussSquare,
    intval: &mut Array2<Op::Scalar>,
) -> Result<(), QuadratureError> {
    let case = PairCase::from_id(case, e1, e2)?;
    let classification = PairClassification {
        rot1,
        rot2,
        case,
        distance,
    };
    let degree = pair_quadrature_degree(op, space, e1, &classification);
    let q = pair_rule(table, degree, e1, e2)?;
    match case {
        PairCase::Disjoint => integrate1(op, space, e1, e2, q, intval),
        PairCase::Identical => integrate2(op, space, e1, q, intval),
        PairCase::SharedEdge => integrate3(op, space, e1, rot1, e2, rot2, q, intval),
        PairCase::SharedVertex => integrate4(op, space, e1, rot1, e2, rot2, q, intval),
    }
    Ok(())
}

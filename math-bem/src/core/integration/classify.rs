//! Topological classification of element pairs
//!
//! Two leaves are either the same element, share an edge, share a single
//! vertex, or are disjoint. For the touching cases the comparator also
//! returns the rotations that move the shared feature of each element to
//! the canonical position used by the Duffy transforms:
//!
//! - shared edge: `tau((0,0), rot1)` on the first element and
//!   `tau((1,0), rot2)` on the second element are the same vertex, and
//!   vice versa
//! - shared vertex: `tau((0,0), rot1)` and `tau((0,0), rot2)` coincide

use std::fmt;

use crate::core::constants::{NNODPE, SEPARATION_FACTOR};
use crate::core::error::QuadratureError;
use crate::core::mesh::{ElementTreeNode, distance};

/// Relationship between two elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairCase {
    /// No common point; regular quadrature
    Disjoint,
    /// Same element; weakly singular everywhere on the diagonal
    Identical,
    /// One common edge
    SharedEdge,
    /// One common vertex
    SharedVertex,
}

impl PairCase {
    /// Integer case id: 0 disjoint, 2 identical, 3 shared edge, 4 shared vertex
    pub fn id(self) -> i32 {
        match self {
            PairCase::Disjoint => 0,
            PairCase::Identical => 2,
            PairCase::SharedEdge => 3,
            PairCase::SharedVertex => 4,
        }
    }

    /// Convert a raw case id for the pair `(e1, e2)`
    ///
    /// Id 1 is reserved and never valid.
    pub fn from_id(
        case: i32,
        e1: &ElementTreeNode,
        e2: &ElementTreeNode,
    ) -> Result<Self, QuadratureError> {
        Self::try_from(case).map_err(|case| QuadratureError::InvalidClassification {
            case,
            element1: e1.id,
            element2: e2.id,
            patch1: e1.patch,
            patch2: e2.patch,
        })
    }
}

impl TryFrom<i32> for PairCase {
    type Error = i32;

    fn try_from(case: i32) -> Result<Self, Self::Error> {
        match case {
            0 => Ok(PairCase::Disjoint),
            2 => Ok(PairCase::Identical),
            3 => Ok(PairCase::SharedEdge),
            4 => Ok(PairCase::SharedVertex),
            other => Err(other),
        }
    }
}

impl fmt::Display for PairCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairCase::Disjoint => "disjoint",
            PairCase::Identical => "identical",
            PairCase::SharedEdge => "shared edge",
            PairCase::SharedVertex => "shared vertex",
        };
        write!(f, "{}", name)
    }
}

/// Result of [`compare_elements`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairClassification {
    /// Rotation of the first element (0 when irrelevant)
    pub rot1: usize,
    /// Rotation of the second element (0 when irrelevant)
    pub rot2: usize,
    /// Topological case
    pub case: PairCase,
    /// Distance of the enclosing balls, clamped at zero
    pub distance: f64,
}

impl PairClassification {
    fn new(rot1: usize, rot2: usize, case: PairCase, distance: f64) -> Self {
        Self {
            rot1,
            rot2,
            case,
            distance,
        }
    }

    /// `(rot1, rot2, case id)`
    pub fn as_triple(&self) -> (usize, usize, i32) {
        (self.rot1, self.rot2, self.case.id())
    }
}

/// Distance between the enclosing balls of two elements, zero if they overlap
#[inline]
pub fn ball_distance(e1: &ElementTreeNode, e2: &ElementTreeNode) -> f64 {
    (distance(&e1.midpoint, &e2.midpoint) - e1.radius - e2.radius).max(0.0)
}

/// Classify two elements of the same tree
///
/// Identity is decided by address, not by value. Pairs whose balls are more
/// than `SEPARATION_FACTOR / 2^level` apart are disjoint without looking at
/// vertices.
pub fn compare_elements(e1: &ElementTreeNode, e2: &ElementTreeNode) -> PairClassification {
    if std::ptr::eq(e1, e2) {
        return PairClassification::new(0, 0, PairCase::Identical, 0.0);
    }

    let dist = ball_distance(e1, e2);
    if dist > SEPARATION_FACTOR * e1.h() {
        return PairClassification::new(0, 0, PairCase::Disjoint, dist);
    }

    let v1 = &e1.vertices;
    let v2 = &e2.vertices;
    for rot1 in 0..NNODPE {
        for rot2 in 0..NNODPE {
            if v1[rot1] != v2[rot2] {
                continue;
            }
            // the edge is traversed in opposite directions by the two elements
            if v1[3] == v2[(rot2 + 1) % NNODPE] {
                return PairClassification::new(3, rot2, PairCase::SharedEdge, dist);
            }
            if v1[(rot1 + 1) % NNODPE] == v2[(rot2 + 3) % NNODPE] {
                return PairClassification::new(
                    rot1,
                    (rot2 + 3) % NNODPE,
                    PairCase::SharedEdge,
                    dist,
                );
            }
            return PairClassification::new(rot1, rot2, PairCase::SharedVertex, dist);
        }
    }

    PairClassification::new(0, 0, PairCase::Disjoint, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::integration::tau::tau;

    fn element(vertices: [usize; 4]) -> ElementTreeNode {
        let mut e = ElementTreeNode::new(0, 3, 0, Some(0));
        e.vertices = vertices;
        e.radius = 0.1;
        e
    }

    fn shift(v: [usize; 4], s: usize) -> [usize; 4] {
        [v[s % 4], v[(s + 1) % 4], v[(s + 2) % 4], v[(s + 3) % 4]]
    }

    // reference corner (0,0) -> 0, (1,0) -> 1, (1,1) -> 2, (0,1) -> 3
    fn corner(xi: [f64; 2]) -> usize {
        match (xi[0] > 0.5, xi[1] > 0.5) {
            (false, false) => 0,
            (true, false) => 1,
            (true, true) => 2,
            (false, true) => 3,
        }
    }

    #[test]
    fn test_case_ids() {
        for case in [
            PairCase::Disjoint,
            PairCase::Identical,
            PairCase::SharedEdge,
            PairCase::SharedVertex,
        ] {
            assert_eq!(PairCase::try_from(case.id()), Ok(case));
        }
        assert_eq!(PairCase::try_from(1), Err(1));
        assert_eq!(PairCase::try_from(5), Err(5));
    }

    #[test]
    fn test_reserved_case_rejected() {
        let e1 = element([0, 1, 2, 3]);
        let e2 = element([4, 5, 6, 7]);
        let err = PairCase::from_id(1, &e1, &e2).unwrap_err();
        assert!(matches!(
            err,
            QuadratureError::InvalidClassification { case: 1, .. }
        ));
    }

    #[test]
    fn test_identical_by_address() {
        let e = element([0, 1, 2, 3]);
        let c = compare_elements(&e, &e);
        assert_eq!(c.as_triple(), (0, 0, 2));
        assert_eq!(c.distance, 0.0);

        // an equal copy is a different element
        let copy = e.clone();
        let c = compare_elements(&e, &copy);
        assert_ne!(c.case, PairCase::Identical);
    }

    #[test]
    fn test_concrete_shared_edge() {
        let e1 = element([5, 6, 7, 8]);
        let e2 = element([8, 7, 9, 10]);
        let c = compare_elements(&e1, &e2);
        assert_eq!(c.as_triple(), (2, 0, 3));
    }

    #[test]
    fn test_far_apart_is_disjoint() {
        let e1 = element([0, 1, 2, 3]);
        let mut e2 = element([3, 2, 4, 5]);
        e2.midpoint = [1.0, 0.0, 0.0];
        let c = compare_elements(&e1, &e2);
        assert_eq!(c.case, PairCase::Disjoint);
        assert!((c.distance - 0.8).abs() < 1e-15);
    }

    #[test]
    fn test_close_without_common_vertex_is_disjoint() {
        let e1 = element([0, 1, 2, 3]);
        let e2 = element([4, 5, 6, 7]);
        assert_eq!(compare_elements(&e1, &e2).as_triple(), (0, 0, 0));
    }

    #[test]
    fn test_all_shared_edge_rotations() {
        // second element crosses edge 0 of the first one in opposite direction
        let base1 = [0, 1, 2, 3];
        let base2 = [1, 0, 4, 5];
        for s1 in 0..4 {
            for s2 in 0..4 {
                let v1 = shift(base1, s1);
                let v2 = shift(base2, s2);
                let c = compare_elements(&element(v1), &element(v2));
                assert_eq!(c.case, PairCase::SharedEdge, "shifts {s1} {s2}");
                assert!(c.rot1 < 4 && c.rot2 < 4);
                let a = v1[corner(tau(0.0, 0.0, c.rot1))];
                let b = v1[corner(tau(1.0, 0.0, c.rot1))];
                assert_eq!(a, v2[corner(tau(1.0, 0.0, c.rot2))], "shifts {s1} {s2}");
                assert_eq!(b, v2[corner(tau(0.0, 0.0, c.rot2))], "shifts {s1} {s2}");
            }
        }
    }

    #[test]
    fn test_all_shared_vertex_rotations() {
        let base1 = [0, 1, 2, 3];
        let base2 = [0, 4, 5, 6];
        for s1 in 0..4 {
            for s2 in 0..4 {
                let v1 = shift(base1, s1);
                let v2 = shift(base2, s2);
                let c = compare_elements(&element(v1), &element(v2));
                assert_eq!(c.case, PairCase::SharedVertex, "shifts {s1} {s2}");
                assert_eq!(
                    v1[corner(tau(0.0, 0.0, c.rot1))],
                    v2[corner(tau(0.0, 0.0, c.rot2))]
                );
                assert_eq!(v1[c.rot1], 0);
            }
        }
    }
}

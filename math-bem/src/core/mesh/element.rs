//! Element tree nodes and small vector helpers
//!
//! A node is a dyadic sub-square of one patch's parameter domain. Nodes live
//! in the flat arena of an [`ElementTree`](super::element_tree::ElementTree)
//! and refer to their parent, sons and edge neighbours by arena index.

use crate::core::constants::{NNODPE, NO_VERTEX};

/// Cross product of two 3-vectors
#[inline]
pub fn cross_product(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Dot product of two 3-vectors
#[inline]
pub fn dot_product(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean norm
#[inline]
pub fn norm(a: &[f64; 3]) -> f64 {
    dot_product(a, a).sqrt()
}

/// Euclidean distance of two points
#[inline]
pub fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    norm(&[a[0] - b[0], a[1] - b[1], a[2] - b[2]])
}

/// Smallest ball of the form used by the tree that encloses B(mp1, r1) ∪ B(mp2, r2)
///
/// If one ball contains the other it is returned unchanged.
pub fn enclosing_ball(mp1: &[f64; 3], r1: f64, mp2: &[f64; 3], r2: f64) -> ([f64; 3], f64) {
    let z = [mp1[0] - mp2[0], mp1[1] - mp2[1], mp1[2] - mp2[2]];
    let d = norm(&z);
    if d + r2 <= r1 {
        (*mp1, r1)
    } else if d + r1 <= r2 {
        (*mp2, r2)
    } else {
        let s = (r1 - r2) / d;
        let mp = [
            0.5 * (mp1[0] + mp2[0] + s * z[0]),
            0.5 * (mp1[1] + mp2[1] + s * z[1]),
            0.5 * (mp1[2] + mp2[2] + s * z[2]),
        ];
        (mp, 0.5 * (r1 + r2 + d))
    }
}

/// Node of the element tree
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTreeNode {
    /// Centre of the enclosing ball
    pub midpoint: [f64; 3],
    /// Radius of the enclosing ball
    pub radius: f64,
    /// Lower-left corner in the patch parameter domain
    pub llc: [f64; 2],
    /// Refinement level (patches are level 0)
    pub level: usize,
    /// Patch index
    pub patch: usize,
    /// Index within the level
    pub id: usize,
    /// Global vertex ids of the four corners, counter-clockwise
    pub vertices: [usize; NNODPE],
    /// Arena index of the parent (None for the root)
    pub parent: Option<usize>,
    /// Arena indices of the four sons (None for leaves)
    pub sons: Option<[usize; NNODPE]>,
    /// Arena index of the neighbour across edge `i` (vertex `i` to `i+1`)
    pub neighbors: [Option<usize>; NNODPE],
}

impl ElementTreeNode {
    /// Root of the tree; holds no geometry
    pub(crate) fn root() -> Self {
        Self {
            midpoint: [0.0; 3],
            radius: f64::INFINITY,
            llc: [0.0, 0.0],
            level: 0,
            patch: 0,
            id: 0,
            vertices: [NO_VERTEX; NNODPE],
            parent: None,
            sons: None,
            neighbors: [None; NNODPE],
        }
    }

    /// Empty node to be filled in by refinement
    pub(crate) fn new(patch: usize, level: usize, id: usize, parent: Option<usize>) -> Self {
        Self {
            midpoint: [0.0; 3],
            radius: 0.0,
            llc: [0.0, 0.0],
            level,
            patch,
            id,
            vertices: [NO_VERTEX; NNODPE],
            parent,
            sons: None,
            neighbors: [None; NNODPE],
        }
    }

    /// True if the node has no sons
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.sons.is_none()
    }

    /// Parametric side length `2^-level`
    #[inline]
    pub fn h(&self) -> f64 {
        1.0 / (1u64 << self.level) as f64
    }

    /// Map a patch parameter point into the reference square of this element
    pub fn map_to_reference_element(&self, st: [f64; 2]) -> [f64; 2] {
        let h = self.h();
        [(st[0] - self.llc[0]) / h, (st[1] - self.llc[1]) / h]
    }

    /// Parameter point of the element centre
    pub fn reference_midpoint(&self) -> [f64; 2] {
        let h = self.h();
        [self.llc[0] + 0.5 * h, self.llc[1] + 0.5 * h]
    }

    /// Index of the edge shared with the node at arena index `other`
    pub fn edge_to(&self, other: usize) -> Option<usize> {
        self.neighbors.iter().position(|n| *n == Some(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product() {
        let c = cross_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_eq!(c, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_enclosing_ball_contains_both() {
        let (mp, r) = enclosing_ball(&[0.0, 0.0, 0.0], 1.0, &[3.0, 0.0, 0.0], 0.5);
        assert!((r - 2.25).abs() < 1e-15);
        assert!((mp[0] - 1.25).abs() < 1e-15);
        assert!(distance(&mp, &[0.0, 0.0, 0.0]) + 1.0 <= r + 1e-14);
        assert!(distance(&mp, &[3.0, 0.0, 0.0]) + 0.5 <= r + 1e-14);
    }

    #[test]
    fn test_enclosing_ball_nested() {
        let (mp, r) = enclosing_ball(&[0.0, 0.0, 0.0], 2.0, &[0.5, 0.0, 0.0], 1.0);
        assert_eq!(mp, [0.0, 0.0, 0.0]);
        assert_eq!(r, 2.0);
        let (mp, r) = enclosing_ball(&[0.5, 0.0, 0.0], 1.0, &[0.0, 0.0, 0.0], 2.0);
        assert_eq!(mp, [0.0, 0.0, 0.0]);
        assert_eq!(r, 2.0);
    }

    #[test]
    fn test_point_balls() {
        // diagonal of the unit square
        let (mp, r) = enclosing_ball(&[0.0, 0.0, 0.0], 0.0, &[1.0, 1.0, 0.0], 0.0);
        assert_eq!(mp, [0.5, 0.5, 0.0]);
        assert!((r - 0.5 * 2.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_reference_mapping() {
        let mut node = ElementTreeNode::new(0, 2, 5, None);
        node.llc = [0.25, 0.5];
        assert_eq!(node.h(), 0.25);
        assert_eq!(node.map_to_reference_element([0.375, 0.625]), [0.5, 0.5]);
        assert_eq!(node.reference_midpoint(), [0.375, 0.625]);
    }
}

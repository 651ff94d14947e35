//! Far-field quadrature nodes
//!
//! Separated pairs are integrated with the far-field rule, whose nodes are
//! mapped to the surface once per element and shared by every pair the
//! element takes part in.

use crate::core::ansatz::SuperSpace;
use crate::core::integration::gauss::Cubature;
use crate::core::mesh::{ElementTreeNode, SurfacePoint};
use crate::core::parallel::parallel_map;

/// Surface points of the far-field rule for every leaf, indexed by leaf id
#[derive(Debug, Clone, Default)]
pub struct FarFieldQuadratureNodes {
    nodes: Vec<Vec<SurfacePoint>>,
    leaf_level: usize,
}

impl FarFieldQuadratureNodes {
    /// Map `q` onto every leaf of the space
    pub fn new(space: &SuperSpace, q: &Cubature) -> Self {
        let leaves = space.tree().leaves();
        let nodes = parallel_map(leaves, |e| element_nodes(space, e, q));
        log::debug!(
            "far-field nodes: {} elements x {} points",
            nodes.len(),
            q.len()
        );
        Self {
            nodes,
            leaf_level: space.tree().max_level(),
        }
    }

    /// Nodes of the leaf with the given id
    pub fn get(&self, id: usize) -> Option<&[SurfacePoint]> {
        self.nodes.get(id).map(Vec::as_slice)
    }

    /// Nodes of `e`, empty if `e` is not a leaf of the space
    ///
    /// Inner nodes share ids with leaves, so the level decides.
    pub fn of(&self, e: &ElementTreeNode) -> &[SurfacePoint] {
        if !e.is_leaf() || e.level != self.leaf_level {
            return &[];
        }
        self.get(e.id).unwrap_or(&[])
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no element has nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// `q` mapped onto a single element, weights scaled by the mesh width
pub fn element_nodes(space: &SuperSpace, e: &ElementTreeNode, q: &Cubature) -> Vec<SurfacePoint> {
    let h = e.h();
    q.xi.iter()
        .zip(&q.w)
        .map(|(xi, w)| space.map2surface(e, *xi, h * w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::integration::gauss::GaussSquare;
    use crate::core::mesh::generators::{screen_grid, unit_cube};

    #[test]
    fn test_one_set_per_leaf() {
        let space = SuperSpace::new(unit_cube(), 1, 0).unwrap();
        let table = GaussSquare::new(3);
        let q = table.get(2).unwrap();
        let ff = FarFieldQuadratureNodes::new(&space, q);
        assert_eq!(ff.len(), 24);
        for e in space.tree().leaves() {
            let nodes = ff.of(e);
            assert_eq!(nodes.len(), 9);
            // weights sum to the mesh width
            let sum: f64 = nodes.iter().map(|p| p.w).sum();
            assert!((sum - e.h()).abs() < 1e-14);
        }
        assert!(ff.get(24).is_none());
    }

    #[test]
    fn test_nodes_lie_on_element() {
        let space = SuperSpace::new(unit_cube(), 2, 0).unwrap();
        let table = GaussSquare::new(2);
        let q = table.get(1).unwrap();
        let e = &space.tree().leaves()[7];
        let patch = &space.tree().geometry()[e.patch];
        for p in element_nodes(&space, e, q) {
            let st = [e.llc[0] + e.h() * p.xi[0], e.llc[1] + e.h() * p.xi[1]];
            assert_eq!(p.x, patch.eval(st[0], st[1]));
        }
    }

    #[test]
    fn test_inner_nodes_have_no_cached_nodes() {
        let space = SuperSpace::new(screen_grid(2), 2, 0).unwrap();
        let table = GaussSquare::new(3);
        let ff = FarFieldQuadratureNodes::new(&space, table.get(2).unwrap());
        let inner = space.tree().level(1).unwrap();
        assert_eq!(inner[0].id, space.tree().leaves()[0].id);
        assert!(ff.of(&inner[0]).is_empty());
        assert!(ff.of(space.tree().root()).is_empty());
        assert_eq!(ff.of(&space.tree().leaves()[0]).len(), 9);
        assert!(FarFieldQuadratureNodes::default().of(&inner[0]).is_empty());
    }
}

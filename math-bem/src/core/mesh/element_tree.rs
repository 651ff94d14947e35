//! Element tree: uniform quad-tree refinement of every patch
//!
//! All nodes live in one arena in level order:
//!
//! ```text
//! index 0                      root (no geometry)
//! 1 ..= P                      level 0, one node per patch
//! cum(l-1) .. cum(l)           level l, ids 0 .. P*4^l
//! ```
//!
//! where `cum(l) = P*(4^(l+1)-1)/3 + 1` counts the nodes of levels `0..=l`
//! plus the root. The sons of the node with id `k` at level `l` have ids
//! `4k .. 4k+4` at level `l+1`, so the leaves below any node form a
//! contiguous range of the deepest level and the id order equals the
//! depth-first order of the refinement.

use std::collections::HashMap;

use crate::core::constants::{CORNERS, EDGE_MIDPOINTS, NNODPE, SON_OFFSETS};
use crate::core::error::ElementTreeError;
use crate::core::io::QuadratureConfig;
use crate::core::mesh::element::{ElementTreeNode, distance, enclosing_ball};
use crate::core::mesh::patch::Geometry;

/// Edge of the patch topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchEdge {
    /// Patch owning the edge
    pub patch: usize,
    /// Edge index on `patch`
    pub edge: usize,
    /// Patch across the edge and its edge index, None on the boundary
    pub neighbor: Option<(usize, usize)>,
}

/// Hierarchical decomposition of a geometry into elements
#[derive(Debug, Clone)]
pub struct ElementTree {
    geometry: Geometry,
    nodes: Vec<ElementTreeNode>,
    number_of_patches: usize,
    max_level: usize,
    number_of_points: usize,
    points: Vec<[f64; 3]>,
}

impl ElementTree {
    /// Build the tree with the default tolerances
    pub fn new(geometry: Geometry, max_level: usize) -> Result<Self, ElementTreeError> {
        Self::with_config(geometry, max_level, &QuadratureConfig::default())
    }

    /// Build the tree, refining every patch uniformly `max_level` times
    pub fn with_config(
        geometry: Geometry,
        max_level: usize,
        config: &QuadratureConfig,
    ) -> Result<Self, ElementTreeError> {
        let number_of_patches = geometry.len();
        if number_of_patches == 0 {
            return Err(ElementTreeError::EmptyGeometry);
        }

        let mut tree = Self {
            geometry,
            nodes: Vec::with_capacity(cum_num_elements(number_of_patches, max_level)),
            number_of_patches,
            max_level,
            number_of_points: 0,
            points: Vec::new(),
        };

        tree.init_patches(config.point_tolerance);
        if config.check_orientation {
            tree.check_orientation(config.point_tolerance)?;
        }
        for level in 0..max_level {
            tree.refine_level(level);
        }
        tree.compute_element_enclosings();

        log::debug!(
            "Element tree: {} patches, level {}, {} elements, {} points",
            tree.number_of_patches,
            tree.max_level,
            tree.number_of_elements(),
            tree.number_of_points
        );

        Ok(tree)
    }

    /// Level-0 nodes with vertex ids shared between patches whose corner
    /// images coincide
    fn init_patches(&mut self, tolerance: f64) {
        self.nodes.push(ElementTreeNode::root());

        let mut unique_points: Vec<[f64; 3]> = Vec::new();
        for (p, patch) in self.geometry.iter().enumerate() {
            let mut node = ElementTreeNode::new(p, 0, p, Some(0));
            for (j, corner) in CORNERS.iter().enumerate() {
                let v = patch.eval(corner[0], corner[1]);
                node.vertices[j] = match unique_points
                    .iter()
                    .position(|u| distance(u, &v) < tolerance)
                {
                    Some(index) => index,
                    None => {
                        unique_points.push(v);
                        unique_points.len() - 1
                    }
                };
            }
            self.nodes.push(node);
        }
        self.number_of_points = unique_points.len();

        let patches: Vec<usize> = (1..=self.number_of_patches).collect();
        self.update_topology(&patches);
    }

    /// Link the nodes in `elements` that share an edge
    fn update_topology(&mut self, elements: &[usize]) {
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for &e in elements {
            for j in 0..NNODPE {
                let key = edge_key(&self.nodes[e].vertices, j);
                match edges.get(&key) {
                    Some(&other) => {
                        self.nodes[e].neighbors[j] = Some(other);
                        if let Some(k) =
                            (0..NNODPE).find(|&k| edge_key(&self.nodes[other].vertices, k) == key)
                        {
                            self.nodes[other].neighbors[k] = Some(e);
                        }
                    }
                    None => {
                        edges.insert(key, e);
                    }
                }
            }
        }
    }

    /// Patches sharing an edge must traverse it in opposite directions and
    /// agree on its midpoint
    fn check_orientation(&self, tolerance: f64) -> Result<(), ElementTreeError> {
        for edge in self.patch_topology_info() {
            let Some((other, k)) = edge.neighbor else {
                continue;
            };
            let (a, j) = (edge.patch, edge.edge);
            let va = &self.nodes[1 + a].vertices;
            let vb = &self.nodes[1 + other].vertices;
            if va[j] != vb[(k + 1) % NNODPE] || va[(j + 1) % NNODPE] != vb[k] {
                return Err(ElementTreeError::InconsistentOrientation {
                    patch_a: a,
                    patch_b: other,
                    edge_a: j,
                    edge_b: k,
                });
            }

            let (pa, pb) = match (self.geometry.patch(a), self.geometry.patch(other)) {
                (Some(pa), Some(pb)) => (pa, pb),
                _ => continue,
            };
            let xa = pa.eval(EDGE_MIDPOINTS[j][0], EDGE_MIDPOINTS[j][1]);
            let xb = pb.eval(EDGE_MIDPOINTS[k][0], EDGE_MIDPOINTS[k][1]);
            let d = distance(&xa, &xb);
            if d >= tolerance {
                return Err(ElementTreeError::VertexMismatch {
                    patch_a: a,
                    patch_b: other,
                    edge_a: j,
                    edge_b: k,
                    distance: d,
                });
            }
        }
        Ok(())
    }

    /// Refine every node of `level`, appending level `level + 1`
    fn refine_level(&mut self, level: usize) {
        let begin = self.level_begin(level);
        let count = self.number_of_patches << (2 * level);
        let sons_per_patch = 1usize << (2 * (level + 1));

        let son_begin = self.nodes.len();
        for id in 0..4 * count {
            self.nodes.push(ElementTreeNode::new(
                id / sons_per_patch,
                level + 1,
                id,
                Some(begin + id / NNODPE),
            ));
        }
        debug_assert_eq!(son_begin, self.level_begin(level + 1));

        for index in begin..begin + count {
            self.refine_leaf(index, son_begin + NNODPE * (index - begin));
        }
    }

    /// Split one leaf into four sons placed at `first_son ..`
    fn refine_leaf(&mut self, index: usize, first_son: usize) {
        let parent = self.nodes[index].clone();

        let mut point_ids = [0usize; 5];
        let mut elements = Vec::with_capacity(3 * NNODPE);
        for i in 0..NNODPE {
            // midpoint of edge i is shared with a neighbour refined before
            let refined = parent.neighbors[i].and_then(|n| {
                let j = self.nodes[n].edge_to(index)?;
                self.nodes[n].sons.map(|sons| (sons, j))
            });
            match refined {
                Some((sons, j)) => {
                    point_ids[i] = self.nodes[sons[j]].vertices[(j + 1) % NNODPE];
                    elements.push(sons[j]);
                    elements.push(sons[(j + 1) % NNODPE]);
                }
                None => point_ids[i] = self.new_point(),
            }
        }
        point_ids[4] = self.new_point();

        let [v0, v1, v2, v3] = parent.vertices;
        let [m0, m1, m2, m3, c] = point_ids;
        let son_vertices = [
            [v0, m0, c, m3],
            [m0, v1, m1, c],
            [c, m1, v2, m2],
            [m3, c, m2, v3],
        ];

        let sons = [first_son, first_son + 1, first_son + 2, first_son + 3];
        let h = parent.h();
        for (i, &s) in sons.iter().enumerate() {
            let son = &mut self.nodes[s];
            son.llc = [
                parent.llc[0] + SON_OFFSETS[i][0] * h,
                parent.llc[1] + SON_OFFSETS[i][1] * h,
            ];
            son.vertices = son_vertices[i];
            elements.push(s);
        }
        self.nodes[index].sons = Some(sons);

        self.update_topology(&elements);
    }

    fn new_point(&mut self) -> usize {
        self.number_of_points += 1;
        self.number_of_points - 1
    }

    /// Enclosing balls, leaves from their corner points and fathers bottom up
    fn compute_element_enclosings(&mut self) {
        self.points = self.compute_point_list();

        let leaves = self.level_begin(self.max_level);
        for index in leaves..self.nodes.len() {
            let [v0, v1, v2, v3] = self.nodes[index].vertices;
            let p = &self.points;
            let (mp1, r1) = enclosing_ball(&p[v0], 0.0, &p[v2], 0.0);
            let (mp2, r2) = enclosing_ball(&p[v1], 0.0, &p[v3], 0.0);
            let (mp, r) = enclosing_ball(&mp1, r1, &mp2, r2);
            self.nodes[index].midpoint = mp;
            self.nodes[index].radius = r;
        }

        for index in (1..leaves).rev() {
            let Some(sons) = self.nodes[index].sons else {
                continue;
            };
            let s = |k: usize| (self.nodes[sons[k]].midpoint, self.nodes[sons[k]].radius);
            let ((mp0, r0), (mp1, r1), (mp2, r2), (mp3, r3)) = (s(0), s(1), s(2), s(3));
            let (a, ra) = enclosing_ball(&mp0, r0, &mp2, r2);
            let (b, rb) = enclosing_ball(&mp1, r1, &mp3, r3);
            let (mp, r) = enclosing_ball(&a, ra, &b, rb);
            self.nodes[index].midpoint = mp;
            self.nodes[index].radius = r;
        }
    }

    fn compute_point_list(&self) -> Vec<[f64; 3]> {
        let mut points = vec![[0.0; 3]; self.number_of_points];
        for leaf in self.leaves() {
            let Some(patch) = self.geometry.patch(leaf.patch) else {
                continue;
            };
            let h = leaf.h();
            for (j, corner) in CORNERS.iter().enumerate() {
                points[leaf.vertices[j]] =
                    patch.eval(leaf.llc[0] + corner[0] * h, leaf.llc[1] + corner[1] * h);
            }
        }
        points
    }

    /// Arena index of the first node of `level`
    #[inline]
    fn level_begin(&self, level: usize) -> usize {
        if level == 0 {
            1
        } else {
            cum_num_elements(self.number_of_patches, level - 1)
        }
    }

    /// Number of nodes on levels `0..=level` plus the root
    pub fn cum_num_elements(&self, level: usize) -> usize {
        cum_num_elements(self.number_of_patches, level)
    }

    /// The geometry the tree was built on
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of patches
    pub fn number_of_patches(&self) -> usize {
        self.number_of_patches
    }

    /// Deepest level
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Number of distinct vertices
    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    /// Number of leaves
    pub fn number_of_elements(&self) -> usize {
        self.number_of_patches << (2 * self.max_level)
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[ElementTreeNode] {
        &self.nodes
    }

    /// Root node
    pub fn root(&self) -> &ElementTreeNode {
        &self.nodes[0]
    }

    /// Node by arena index
    pub fn node(&self, index: usize) -> Result<&ElementTreeNode, ElementTreeError> {
        self.nodes
            .get(index)
            .ok_or(ElementTreeError::NodeOutOfRange(index))
    }

    /// Nodes of one level in id order
    pub fn level(&self, level: usize) -> Result<&[ElementTreeNode], ElementTreeError> {
        if level > self.max_level {
            return Err(ElementTreeError::LevelOutOfRange {
                level,
                max_level: self.max_level,
            });
        }
        Ok(&self.nodes[self.level_begin(level)..self.cum_num_elements(level)])
    }

    /// Leaves in id order
    pub fn leaves(&self) -> &[ElementTreeNode] {
        &self.nodes[self.level_begin(self.max_level)..]
    }

    /// Leaf with the given id
    pub fn leaf(&self, id: usize) -> Result<&ElementTreeNode, ElementTreeError> {
        self.leaves()
            .get(id)
            .ok_or(ElementTreeError::NodeOutOfRange(self.level_begin(self.max_level) + id))
    }

    /// Leaves below `node`, in id order
    pub fn subtree_leaves(
        &self,
        node: &ElementTreeNode,
    ) -> Result<&[ElementTreeNode], ElementTreeError> {
        if node.parent.is_none() {
            return Ok(self.leaves());
        }
        if node.level > self.max_level {
            return Err(ElementTreeError::LevelOutOfRange {
                level: node.level,
                max_level: self.max_level,
            });
        }
        let width = 1usize << (2 * (self.max_level - node.level));
        let leaves = self.leaves();
        leaves
            .get(node.id * width..(node.id + 1) * width)
            .ok_or(ElementTreeError::NodeOutOfRange(node.id))
    }

    /// Arena index of a node, or None if it is not stored in this tree
    pub fn index_of(&self, node: &ElementTreeNode) -> Option<usize> {
        let size = std::mem::size_of::<ElementTreeNode>();
        let base = self.nodes.as_ptr() as usize;
        let address = node as *const ElementTreeNode as usize;
        let offset = address.checked_sub(base)?;
        (offset % size == 0 && offset / size < self.nodes.len()).then_some(offset / size)
    }

    /// Id of a node among all nodes of levels `0..=level`, excluding the root
    pub fn compute_global_id(&self, node: &ElementTreeNode) -> usize {
        self.number_of_patches * (((1usize << (2 * node.level)) - 1) / 3) + node.id
    }

    /// Vertex coordinates, indexed by vertex id
    pub fn generate_point_list(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Vertex ids of every leaf
    pub fn generate_element_list(&self) -> Vec<[usize; NNODPE]> {
        self.leaves().iter().map(|e| e.vertices).collect()
    }

    /// Enclosing-ball centres of every leaf
    pub fn generate_midpoint_list(&self) -> Vec<[f64; 3]> {
        self.leaves().iter().map(|e| e.midpoint).collect()
    }

    /// Enclosing-ball radii of every leaf
    pub fn generate_radius_list(&self) -> Vec<f64> {
        self.leaves().iter().map(|e| e.radius).collect()
    }

    /// Global ids of every leaf
    pub fn generate_element_labels(&self) -> Vec<usize> {
        self.leaves()
            .iter()
            .map(|e| self.compute_global_id(e))
            .collect()
    }

    /// Patch edges, each interior edge listed once from the patch with the
    /// smaller index
    pub fn patch_topology_info(&self) -> Vec<PatchEdge> {
        let mut edges = Vec::new();
        for patch in &self.nodes[1..=self.number_of_patches] {
            for edge in 0..NNODPE {
                match patch.neighbors[edge] {
                    Some(n) => {
                        let other = &self.nodes[n];
                        if patch.id < other.id {
                            let k = other.edge_to(1 + patch.id).unwrap_or(NNODPE);
                            edges.push(PatchEdge {
                                patch: patch.id,
                                edge,
                                neighbor: Some((other.id, k)),
                            });
                        }
                    }
                    None => edges.push(PatchEdge {
                        patch: patch.id,
                        edge,
                        neighbor: None,
                    }),
                }
            }
        }
        edges
    }

    /// Leaf id for each tensor-product position `patch * n^2 + y * n + x`,
    /// `n = 2^max_level`
    pub fn compute_reordering_vector(&self) -> Vec<usize> {
        let n = 1usize << self.max_level;
        let mut out = vec![0; self.number_of_elements()];
        for leaf in self.leaves() {
            let h = leaf.h();
            let mid = leaf.reference_midpoint();
            let x = (mid[0] / h).floor() as usize;
            let y = (mid[1] / h).floor() as usize;
            out[leaf.patch * n * n + y * n + x] = leaf.id;
        }
        out
    }
}

/// Nodes on levels `0..=level` of a tree over `patches` patches, plus the root
pub fn cum_num_elements(patches: usize, level: usize) -> usize {
    patches * ((1usize << (2 * (level + 1))) - 1) / 3 + 1
}

#[inline]
fn edge_key(vertices: &[usize; NNODPE], j: usize) -> (usize, usize) {
    let a = vertices[j];
    let b = vertices[(j + 1) % NNODPE];
    if a < b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh::generators::{screen_grid, unit_cube, unit_screen};
    use crate::core::mesh::patch::{BilinearPatch, ParametricPatch, Patch};

    #[test]
    fn test_cum_num_elements() {
        assert_eq!(cum_num_elements(1, 0), 2);
        assert_eq!(cum_num_elements(1, 1), 6);
        assert_eq!(cum_num_elements(6, 2), 6 * 21 + 1);

        let tree = ElementTree::new(unit_cube(), 3).unwrap();
        assert_eq!(tree.nodes().len(), tree.cum_num_elements(3));
        for level in 0..=3 {
            assert_eq!(tree.level(level).unwrap().len(), 6 << (2 * level));
        }
    }

    #[test]
    fn test_level_out_of_range() {
        let tree = ElementTree::new(unit_screen(), 2).unwrap();
        assert_eq!(
            tree.level(3).unwrap_err(),
            ElementTreeError::LevelOutOfRange {
                level: 3,
                max_level: 2
            }
        );
    }

    #[test]
    fn test_empty_geometry() {
        let err = ElementTree::new(Geometry::new(Vec::new()), 1).unwrap_err();
        assert_eq!(err, ElementTreeError::EmptyGeometry);
    }

    #[test]
    fn test_ids_and_parents() {
        let tree = ElementTree::new(screen_grid(2), 2).unwrap();
        for level in 0..=2 {
            for (id, node) in tree.level(level).unwrap().iter().enumerate() {
                assert_eq!(node.id, id);
                assert_eq!(node.level, level);
                if let Some(sons) = node.sons {
                    for (i, &s) in sons.iter().enumerate() {
                        let son = tree.node(s).unwrap();
                        assert_eq!(son.id, 4 * id + i);
                        assert_eq!(son.patch, node.patch);
                        assert_eq!(tree.node(son.parent.unwrap()).unwrap(), node);
                    }
                }
            }
        }
    }

    #[test]
    fn test_screen_vertex_count() {
        for level in 0..4 {
            let tree = ElementTree::new(unit_screen(), level).unwrap();
            let n = (1usize << level) + 1;
            assert_eq!(tree.number_of_points(), n * n);
        }
        // patches of a grid share their corners
        let tree = ElementTree::new(screen_grid(3), 1).unwrap();
        assert_eq!(tree.number_of_points(), 7 * 7);
    }

    #[test]
    fn test_cube_is_closed() {
        let tree = ElementTree::new(unit_cube(), 2).unwrap();
        // Euler characteristic of the sphere: V - E + F = 2 with E = 2F
        assert_eq!(tree.number_of_points(), tree.number_of_elements() + 2);
        for leaf in tree.leaves() {
            assert!(leaf.neighbors.iter().all(|n| n.is_some()));
        }
    }

    #[test]
    fn test_neighbors_share_opposite_edges() {
        let tree = ElementTree::new(unit_cube(), 2).unwrap();
        let offset = tree.index_of(&tree.leaves()[0]).unwrap();
        for (i, leaf) in tree.leaves().iter().enumerate() {
            for j in 0..NNODPE {
                let n = leaf.neighbors[j].unwrap();
                let other = tree.node(n).unwrap();
                let k = other.edge_to(offset + i).unwrap();
                assert_eq!(leaf.vertices[j], other.vertices[(k + 1) % NNODPE]);
                assert_eq!(leaf.vertices[(j + 1) % NNODPE], other.vertices[k]);
            }
        }
    }

    #[test]
    fn test_points_match_geometry() {
        let tree = ElementTree::new(unit_cube(), 2).unwrap();
        let points = tree.generate_point_list();
        for leaf in tree.leaves() {
            let patch = tree.geometry().patch(leaf.patch).unwrap();
            let x = patch.eval(leaf.llc[0], leaf.llc[1]);
            assert!(distance(&x, &points[leaf.vertices[0]]) < 1e-12);
        }
    }

    #[test]
    fn test_enclosing_balls_contain_corners() {
        let tree = ElementTree::new(unit_cube(), 2).unwrap();
        let points = tree.generate_point_list();
        for node in &tree.nodes()[1..] {
            for v in node.vertices {
                assert!(distance(&node.midpoint, &points[v]) <= node.radius + 1e-12);
            }
        }
        // flat square leaf: ball through its four corners
        let leaf = &tree.leaves()[0];
        assert!((leaf.radius - 0.25 * 0.5 * 2.0_f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn test_subtree_leaves() {
        let tree = ElementTree::new(screen_grid(2), 2).unwrap();
        let patch = &tree.level(0).unwrap()[1];
        let leaves = tree.subtree_leaves(patch).unwrap();
        assert_eq!(leaves.len(), 16);
        assert!(leaves.iter().all(|e| e.patch == 1));
        assert_eq!(tree.subtree_leaves(tree.root()).unwrap().len(), 64);
    }

    #[test]
    fn test_global_ids() {
        let tree = ElementTree::new(unit_cube(), 2).unwrap();
        for (index, node) in tree.nodes().iter().enumerate().skip(1) {
            assert_eq!(tree.compute_global_id(node) + 1, index);
            assert_eq!(tree.index_of(node), Some(index));
        }
        let labels = tree.generate_element_labels();
        assert_eq!(labels[0], 6 * 5);
    }

    #[test]
    fn test_foreign_node_has_no_index() {
        let tree = ElementTree::new(unit_screen(), 1).unwrap();
        let other = ElementTree::new(unit_screen(), 1).unwrap();
        assert_eq!(tree.index_of(&other.leaves()[0]), None);
        let copy = tree.leaves()[0].clone();
        assert_eq!(tree.index_of(&copy), None);
    }

    #[test]
    fn test_reordering_vector() {
        let tree = ElementTree::new(unit_screen(), 1).unwrap();
        // sons are numbered counter-clockwise, tensor order is row by row
        assert_eq!(tree.compute_reordering_vector(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_patch_topology_info() {
        let tree = ElementTree::new(screen_grid(2), 0).unwrap();
        let info = tree.patch_topology_info();
        let interior: Vec<_> = info.iter().filter(|e| e.neighbor.is_some()).collect();
        assert_eq!(interior.len(), 4);
        assert_eq!(info.len() - interior.len(), 8);
        let first = info
            .iter()
            .find(|e| e.patch == 0 && e.edge == 1)
            .unwrap();
        assert_eq!(first.neighbor, Some((1, 3)));
    }

    #[test]
    fn test_inconsistent_orientation() {
        let patches: Vec<Box<dyn Patch>> = vec![
            Box::new(BilinearPatch::new([
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ])),
            Box::new(BilinearPatch::new([
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [2.0, 1.0, 0.0],
                [2.0, 0.0, 0.0],
            ])),
        ];
        let err = ElementTree::new(Geometry::new(patches), 1).unwrap_err();
        assert!(matches!(
            err,
            ElementTreeError::InconsistentOrientation {
                patch_a: 0,
                patch_b: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_vertex_mismatch() {
        let bent = ParametricPatch::new(
            |s, t| [1.0 + s - 0.1 * (1.0 - s) * t * (1.0 - t), t, 0.0],
            |s, t| {
                (
                    [1.0 + 0.1 * t * (1.0 - t), 0.0, 0.0],
                    [-0.1 * (1.0 - s) * (1.0 - 2.0 * t), 1.0, 0.0],
                )
            },
        );
        let patches: Vec<Box<dyn Patch>> = vec![
            Box::new(BilinearPatch::new([
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ])),
            Box::new(bent),
        ];
        let geometry = Geometry::new(patches);
        let err = ElementTree::new(geometry.clone(), 0).unwrap_err();
        match err {
            ElementTreeError::VertexMismatch { distance, .. } => {
                assert!((distance - 0.025).abs() < 1e-12)
            }
            other => panic!("unexpected error {other:?}"),
        }

        let unchecked = QuadratureConfig::default().with_orientation_check(false);
        assert!(ElementTree::with_config(geometry, 0, &unchecked).is_ok());
    }
}

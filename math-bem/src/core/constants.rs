//! Geometric and quadrature constants
//!
//! Reference-element tables shared by the element tree, the pair
//! classification and the singular quadrature routines.

use std::f64::consts::PI;

/// 4π
pub const PI4: f64 = 4.0 * PI;

/// Vertices (and sons) per quadrilateral element
pub const NNODPE: usize = 4;

/// Highest quadrature degree the precomputed table holds.
/// A near-field estimate above this is a configuration error.
pub const MAXIMUM_QUADRATURE_DEGREE: usize = 50;

/// Highest polynomial degree of the local ansatz functions
pub const MAX_POLYNOMIAL_DEGREE: usize = 18;

/// Tolerance for identifying coincident points on patch boundaries
pub const PT_COMP_TOLERANCE: f64 = 1.0e-9;

/// Elements farther apart than `SEPARATION_FACTOR / 2^level` are disjoint
pub const SEPARATION_FACTOR: f64 = 0.5;

/// Reference corners, counter-clockwise: (0,0), (1,0), (1,1), (0,1)
pub const CORNERS: [[f64; 2]; NNODPE] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Edge midpoints of the reference square; edge `i` runs from corner `i` to corner `i+1`
pub const EDGE_MIDPOINTS: [[f64; 2]; NNODPE] = [[0.5, 0.0], [1.0, 0.5], [0.5, 1.0], [0.0, 0.5]];

/// Lower-left corner offsets of the four sons, before scaling by `1/2^level`
pub const SON_OFFSETS: [[f64; 2]; NNODPE] = [[0.0, 0.0], [0.5, 0.0], [0.5, 0.5], [0.0, 0.5]];

/// Sentinel vertex id for the root node
pub const NO_VERTEX: usize = usize::MAX;

//! Numerical integration over element pairs
//!
//! ## Module Organization
//!
//! - [`gauss`] - Gauss-Legendre rules and the tensor table over the unit square
//! - [`degree`] - far-field and near-field quadrature degree estimates
//! - [`tau`] - rotations of the reference square
//! - [`classify`] - identical / shared edge / shared vertex / disjoint pairs
//! - [`regular`] - tensor quadrature for separated pairs (integrate0, integrate1)
//! - [`singular`] - Duffy transforms for touching pairs (integrate2..4)
//! - [`far_field`] - far-field nodes mapped once per element

pub mod classify;
pub mod degree;
pub mod far_field;
pub mod gauss;
pub mod regular;
pub mod singular;
pub mod tau;

pub use classify::{PairCase, PairClassification, ball_distance, compare_elements};
pub use degree::{farfield_quadrature_degree, nearfield_quadrature_degree, quadrature_degree};
pub use far_field::{FarFieldQuadratureNodes, element_nodes};
pub use gauss::{Cubature, GaussSquare, Quadrature1D, gauss_legendre};
pub use regular::{integrate0, integrate1};
pub use singular::{integrate2, integrate3, integrate4};
pub use tau::tau;

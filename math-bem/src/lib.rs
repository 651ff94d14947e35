//! # BEM Galerkin: singular quadrature for boundary element methods
//!
//! Galerkin matrices of boundary integral operators on patch-based
//! geometries, computed with the Duffy trick for touching element pairs.
//!
//! ## Features
//!
//! - Uniformly refined element trees with neighbour topology and enclosing balls
//! - Pair classification (identical, shared edge, shared vertex, disjoint)
//! - Distance and level dependent quadrature degrees
//! - Parallel assembly with Rayon
//!
//! ## Example
//!
//! ```no_run
//! use math_bem_galerkin::core::mesh::generators::unit_cube;
//! use math_bem_galerkin::core::operators::LaplaceSingleLayer;
//! use math_bem_galerkin::core::{QuadratureConfig, SuperSpace, assemble_dense};
//!
//! let space = SuperSpace::new(unit_cube(), 2, 0)?;
//! let matrix = assemble_dense(&LaplaceSingleLayer, &space, &QuadratureConfig::default())?;
//! assert_eq!(matrix.nrows(), 96);
//! # Ok::<(), math_bem_galerkin::core::BemError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)] // Quadrature routines take both elements, rotations and the rule

pub mod core;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Galerkin assembly
//!
//! - [`bilinear_form`] - local matrix of one element pair, dispatching to the quadrature routines
//! - [`dense`] - full matrix in the discontinuous element basis

pub mod bilinear_form;
pub mod dense;

pub use bilinear_form::{evaluate_bilinear_form, evaluate_classified_pair, pair_quadrature_degree};
pub use dense::{assemble_dense, assemble_dense_with_table};

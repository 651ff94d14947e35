//! Singular quadrature for Galerkin boundary element methods
//!
//! The surface is a union of parametric patches, each uniformly refined into
//! a quadtree of square elements. Pairs of elements are integrated with a
//! tensor Gauss rule when they are apart and with Duffy transforms when they
//! touch.
//!
//! ## Architecture
//!
//! - `constants`: Quadrature limits, tolerances and reference-square tables
//! - `error`: Error types of tree construction, quadrature and configuration
//! - `types`: Scalar types of local matrices
//! - `mesh`: Patches, geometry generators and the element tree
//! - `ansatz`: Element tree plus local polynomial basis
//! - `integration`: Gauss tables, degree estimates, pair classification, Duffy transforms
//! - `operators`: Kernels (test function, Laplace, Helmholtz)
//! - `assembly`: Local matrices per pair and dense assembly
//! - `io`: Configuration files (JSON, TOML)
//! - `parallel`: Portable parallel iteration (rayon or sequential)

pub mod ansatz;
pub mod assembly;
pub mod constants;
pub mod error;
pub mod integration;
pub mod io;
pub mod mesh;
pub mod operators;
pub mod parallel;
pub mod types;

// Re-exports for convenience
pub use ansatz::SuperSpace;
pub use assembly::{assemble_dense, evaluate_bilinear_form};
pub use error::{BemError, ConfigError, ElementTreeError, QuadratureError};
pub use integration::{GaussSquare, PairCase, PairClassification, compare_elements, tau};
pub use io::{DiscretizationConfig, QuadratureConfig};
pub use mesh::{ElementTree, ElementTreeNode, Geometry, Patch, SurfacePoint};
pub use operators::LinearOperator;
pub use types::BemScalar;

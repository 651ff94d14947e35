//! Patch geometry and the element tree built on it

pub mod element;
pub mod element_tree;
pub mod generators;
pub mod patch;

pub use element::*;
pub use element_tree::{ElementTree, PatchEdge, cum_num_elements};
pub use generators::*;
pub use patch::{BilinearPatch, Geometry, ParametricPatch, Patch, SurfacePoint};

//! Error types
//!
//! Construction of the element tree, quadrature dispatch and configuration
//! loading each report their own error enum; [`BemError`] wraps them for
//! callers that drive the whole pipeline.

/// Element tree construction and navigation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementTreeError {
    /// The geometry holds no patches
    #[error("geometry has no patches")]
    EmptyGeometry,

    /// Requested level is outside `0..=max_level`
    #[error("level {level} out of range (max level {max_level})")]
    LevelOutOfRange {
        /// Requested level
        level: usize,
        /// Deepest level of the tree
        max_level: usize,
    },

    /// Arena index past the end of the tree
    #[error("node index {0} out of range")]
    NodeOutOfRange(usize),

    /// Two patches sharing an edge do not meet at its midpoint
    #[error(
        "patches {patch_a} (edge {edge_a}) and {patch_b} (edge {edge_b}) share an edge \
         but its midpoints are {distance:e} apart"
    )]
    VertexMismatch {
        /// First patch
        patch_a: usize,
        /// Second patch
        patch_b: usize,
        /// Edge index on the first patch
        edge_a: usize,
        /// Edge index on the second patch
        edge_b: usize,
        /// Distance of the two edge midpoint images
        distance: f64,
    },

    /// Two patches traverse a shared edge in the same direction
    #[error(
        "patches {patch_a} (edge {edge_a}) and {patch_b} (edge {edge_b}) are inconsistently oriented"
    )]
    InconsistentOrientation {
        /// First patch
        patch_a: usize,
        /// Second patch
        patch_b: usize,
        /// Edge index on the first patch
        edge_a: usize,
        /// Edge index on the second patch
        edge_b: usize,
    },
}

/// Quadrature dispatch errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuadratureError {
    /// The requested degree exceeds the precomputed table
    #[error("quadrature degree {degree} exceeds the maximum of {maximum}")]
    DegreeTooLarge {
        /// Requested degree
        degree: usize,
        /// Highest degree available
        maximum: usize,
    },

    /// The degree estimated for an element pair exceeds the table
    #[error(
        "quadrature degree {degree} exceeds the maximum of {maximum} for element {element1} \
         (patch {patch1}) and element {element2} (patch {patch2})"
    )]
    PairDegreeTooLarge {
        /// Degree estimated for the pair
        degree: usize,
        /// Highest degree available
        maximum: usize,
        /// Leaf id of the first element
        element1: usize,
        /// Leaf id of the second element
        element2: usize,
        /// Patch of the first element
        patch1: usize,
        /// Patch of the second element
        patch2: usize,
    },

    /// A pair classification outside the known cases
    #[error(
        "invalid pair classification {case} for element {element1} (patch {patch1}) \
         and element {element2} (patch {patch2})"
    )]
    InvalidClassification {
        /// Raw case id
        case: i32,
        /// Leaf id of the first element
        element1: usize,
        /// Leaf id of the second element
        element2: usize,
        /// Patch of the first element
        patch1: usize,
        /// Patch of the second element
        patch2: usize,
    },

    /// The element does not belong to the tree of the ansatz space
    #[error("element {element} does not belong to this element tree")]
    ForeignElement {
        /// Leaf id of the element
        element: usize,
    },

    /// Local matrix does not have the shape the operator expects
    #[error("local matrix has shape {found:?}, expected {expected:?}")]
    LocalMatrixShape {
        /// Shape required by the operator
        expected: (usize, usize),
        /// Shape passed in
        found: (usize, usize),
    },
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialize error
    #[error("Serialize error: {0}")]
    SerializeError(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Value outside its admissible range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors of the assembly pipeline
#[derive(Debug, thiserror::Error)]
pub enum BemError {
    /// Element tree error
    #[error(transparent)]
    Tree(#[from] ElementTreeError),

    /// Quadrature error
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

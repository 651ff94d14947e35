//! Portable parallel iteration
//!
//! - `native` feature: rayon work stealing over element pairs and leaves
//! - otherwise: sequential iteration with the same signatures
//!
//! ## Usage
//!
//! ```ignore
//! use crate::core::parallel::*;
//!
//! // One far-field node set per leaf
//! let nodes: Vec<Vec<SurfacePoint>> = parallel_map(&leaves, |e| far_field_nodes(e));
//!
//! // One row block per test element, stopping at the first error
//! let rows = parallel_try_map_indexed(n, |i| assemble_row(i))?;
//! ```

/// Parallel map over a slice
///
/// When the `native` feature is enabled, uses rayon's parallel iterator.
/// Otherwise, falls back to sequential iteration.
#[cfg(feature = "native")]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Fallible parallel map over a range of indices
///
/// Returns the results in index order, or one of the errors if any index fails.
#[cfg(feature = "native")]
pub fn parallel_try_map_indexed<U, E, F>(count: usize, f: F) -> Result<Vec<U>, E>
where
    U: Send,
    E: Send,
    F: Fn(usize) -> Result<U, E> + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_try_map_indexed<U, E, F>(count: usize, f: F) -> Result<Vec<U>, E>
where
    F: Fn(usize) -> Result<U, E>,
{
    (0..count).map(f).collect()
}

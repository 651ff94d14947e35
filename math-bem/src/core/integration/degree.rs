//! Quadrature degree estimates
//!
//! The far-field degree depends only on the ansatz degree and the order of
//! the operator. Close to the singularity the degree grows with the
//! refinement level and shrinks with the distance of the two elements
//! (Harbrecht & Schneider, "Wavelet Galerkin schemes for boundary integral
//! equations: implementation and quadrature").

use std::f64::consts::LN_2;

/// Degree for well-separated elements: `p - order + 1`
#[inline]
pub fn farfield_quadrature_degree(operator_order: i32, ansatz_degree: usize) -> i32 {
    ansatz_degree as i32 - operator_order + 1
}

/// Degree for elements at bounding-sphere distance `distance` on `level`
///
/// Elements closer than one mesh width count as touching. The result is
/// truncated toward zero and may be below the far-field degree, which
/// callers use as the lower bound.
pub fn nearfield_quadrature_degree(
    operator_order: i32,
    ansatz_degree: usize,
    distance: f64,
    level: usize,
) -> i32 {
    let p = ansatz_degree as i32;
    let l = level as f64;
    let distance_log = if distance * ((1u64 << level) as f64) < 1.0 {
        -l * LN_2
    } else {
        distance.ln()
    };

    // alpha / 2 is the convergence rate of the Galerkin solution
    let alpha = 2 - operator_order + 2 * p;

    let numerator =
        f64::from(alpha + p) * l * LN_2 - f64::from(2 - p + operator_order) * distance_log;
    let denominator = (l + 2.0) * LN_2 + distance_log;

    (0.5 * numerator / denominator) as i32
}

/// Degree actually used for a pair: the larger of both estimates
#[inline]
pub fn quadrature_degree(
    operator_order: i32,
    ansatz_degree: usize,
    distance: f64,
    level: usize,
) -> usize {
    let far = farfield_quadrature_degree(operator_order, ansatz_degree);
    let near = nearfield_quadrature_degree(operator_order, ansatz_degree, distance, level);
    near.max(far).max(0) as usize
}

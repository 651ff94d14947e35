//! Rotations of the reference square
//!
//! `tau(x, y, r)` turns the unit square by `r` quarter turns so that the
//! singular corner or edge of a pair lands in the canonical position the
//! Duffy transforms expect.

/// Rotate `(x, y)` by `rotation` quarter turns; unknown values act as identity
#[inline]
pub fn tau(x: f64, y: f64, rotation: usize) -> [f64; 2] {
    match rotation {
        1 => [1.0 - y, x],
        2 => [1.0 - x, 1.0 - y],
        3 => [y, 1.0 - x],
        _ => [x, y],
    }
}

#[inline]
pub(crate) fn tau_point(xi: [f64; 2], rotation: usize) -> [f64; 2] {
    tau(xi[0], xi[1], rotation)
}

//! Ansatz space: element tree plus a local polynomial basis
//!
//! Every element carries the `(p+1)^2` tensor-product Bernstein polynomials
//! of degree `p` on its reference square. Local function `k = j*(p+1) + i`
//! is `B_i(s_0) * B_j(s_1)`. The space maps reference points to the surface
//! and expands a scalar kernel value into a local interaction block.

use ndarray::Array2;

use crate::core::constants::MAX_POLYNOMIAL_DEGREE;
use crate::core::error::{BemError, ConfigError};
use crate::core::io::DiscretizationConfig;
use crate::core::mesh::{ElementTree, ElementTreeNode, Geometry, SurfacePoint};
use crate::core::types::BemScalar;

const MAX_BASIS: usize = MAX_POLYNOMIAL_DEGREE + 1;

/// Discontinuous piecewise polynomial space on an element tree
#[derive(Debug, Clone)]
pub struct SuperSpace {
    tree: ElementTree,
    polynomial_degree: usize,
}

impl SuperSpace {
    /// Refine `geometry` uniformly to `refinement_level` and attach degree `p` polynomials
    pub fn new(
        geometry: Geometry,
        refinement_level: usize,
        polynomial_degree: usize,
    ) -> Result<Self, BemError> {
        Self::from_config(
            geometry,
            &DiscretizationConfig::new(refinement_level, polynomial_degree),
        )
    }

    /// Build the space described by a configuration
    pub fn from_config(geometry: Geometry, config: &DiscretizationConfig) -> Result<Self, BemError> {
        config.validate()?;
        let tree =
            ElementTree::with_config(geometry, config.refinement_level, &config.quadrature)?;
        Self::from_tree(tree, config.polynomial_degree)
    }

    /// Attach degree `p` polynomials to an existing tree
    pub fn from_tree(tree: ElementTree, polynomial_degree: usize) -> Result<Self, BemError> {
        if polynomial_degree > MAX_POLYNOMIAL_DEGREE {
            return Err(ConfigError::Invalid(format!(
                "polynomial degree {} exceeds {}",
                polynomial_degree, MAX_POLYNOMIAL_DEGREE
            ))
            .into());
        }
        Ok(Self {
            tree,
            polynomial_degree,
        })
    }

    /// The element tree
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Polynomial degree p
    pub fn polynomial_degree(&self) -> usize {
        self.polynomial_degree
    }

    /// Local functions per element, `(p+1)^2`
    pub fn polynomial_degree_plus_one_squared(&self) -> usize {
        (self.polynomial_degree + 1) * (self.polynomial_degree + 1)
    }

    /// Local functions per element
    #[inline]
    pub fn number_of_local_functions(&self) -> usize {
        self.polynomial_degree_plus_one_squared()
    }

    /// Number of elements (leaves)
    pub fn number_of_elements(&self) -> usize {
        self.tree.number_of_elements()
    }

    /// Push the reference point `xi` of element `e` onto the surface, with weight `w`
    #[inline]
    pub fn map2surface(&self, e: &ElementTreeNode, xi: [f64; 2], w: f64) -> SurfacePoint {
        let h = e.h();
        let st = [e.llc[0] + h * xi[0], e.llc[1] + h * xi[1]];
        self.tree.geometry()[e.patch].update_surface_point(st, w, xi)
    }

    /// Values of the local basis functions at `xi`
    pub fn basis(&self, xi: [f64; 2]) -> Vec<f64> {
        let p = self.polynomial_degree;
        let (x, y) = (bernstein(p, xi[0]), bernstein(p, xi[1]));
        let mut out = Vec::with_capacity(self.polynomial_degree_plus_one_squared());
        for by in &y[..=p] {
            for bx in &x[..=p] {
                out.push(bx * by);
            }
        }
        out
    }

    /// `intval[k, l] += w * phi_k(s) * phi_l(t)` for all local functions
    pub fn add_scaled_basis_interaction<T: BemScalar>(
        &self,
        intval: &mut Array2<T>,
        w: T,
        s: [f64; 2],
        t: [f64; 2],
    ) {
        let p = self.polynomial_degree;
        let n = p + 1;
        let (xs, ys) = (bernstein(p, s[0]), bernstein(p, s[1]));
        let (xt, yt) = (bernstein(p, t[0]), bernstein(p, t[1]));
        for iy in 0..n {
            for ix in 0..n {
                let phi_s = xs[ix] * ys[iy];
                let row = iy * n + ix;
                for jy in 0..n {
                    for jx in 0..n {
                        intval[[row, jy * n + jx]] += w * (phi_s * xt[jx] * yt[jy]);
                    }
                }
            }
        }
    }

    /// Matrix of all products `phi_k(s) * phi_l(t)`
    pub fn basis_interaction(&self, s: [f64; 2], t: [f64; 2]) -> Array2<f64> {
        let n = self.polynomial_degree_plus_one_squared();
        let mut intval = Array2::zeros((n, n));
        self.add_scaled_basis_interaction(&mut intval, 1.0, s, t);
        intval
    }
}

/// Bernstein polynomials of degree `p` at `x`; entries past `p` are zero
fn bernstein(p: usize, x: f64) -> [f64; MAX_BASIS] {
    let mut b = [0.0; MAX_BASIS];
    b[0] = 1.0;
    for k in 1..=p {
        b[k] = x * b[k - 1];
        for i in (1..k).rev() {
            b[i] = x * b[i - 1] + (1.0 - x) * b[i];
        }
        b[0] *= 1.0 - x;
    }
    b
}

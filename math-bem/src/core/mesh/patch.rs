//! Parametric surface patches
//!
//! A geometry is a list of patches, each a smooth map from the unit square
//! [0,1]^2 into R^3. Elements are dyadic sub-squares of a patch's parameter
//! domain; every quadrature point is pushed through the patch map into a
//! [`SurfacePoint`].

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::core::mesh::element::{cross_product, norm};

/// Quadrature point on the surface
///
/// Reference coordinates, weight, physical point and the two tangent vectors
/// (derivatives with respect to the patch parameters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    /// Reference coordinates in the element
    pub xi: [f64; 2],
    /// Quadrature weight
    pub w: f64,
    /// Physical point
    pub x: [f64; 3],
    /// Derivative along the first patch parameter
    pub ds: [f64; 3],
    /// Derivative along the second patch parameter
    pub dt: [f64; 3],
}

impl SurfacePoint {
    /// Non-normalised normal `ds × dt`
    #[inline]
    pub fn normal(&self) -> [f64; 3] {
        cross_product(&self.ds, &self.dt)
    }

    /// Surface measure |ds × dt|
    #[inline]
    pub fn surface_measure(&self) -> f64 {
        norm(&self.normal())
    }

    /// Unit normal
    pub fn unit_normal(&self) -> [f64; 3] {
        let n = self.normal();
        let len = norm(&n);
        [n[0] / len, n[1] / len, n[2] / len]
    }
}

/// Smooth map of the unit square into R^3
pub trait Patch: Send + Sync {
    /// Image of the parameter point (s, t)
    fn eval(&self, s: f64, t: f64) -> [f64; 3];

    /// Partial derivatives (d/ds, d/dt) at (s, t)
    fn eval_jacobian(&self, s: f64, t: f64) -> ([f64; 3], [f64; 3]);

    /// Non-normalised normal at (s, t)
    fn eval_normal(&self, s: f64, t: f64) -> [f64; 3] {
        let (ds, dt) = self.eval_jacobian(s, t);
        cross_product(&ds, &dt)
    }

    /// Surface point for patch parameters `st`, weight `w` and reference coordinates `xi`
    fn update_surface_point(&self, st: [f64; 2], w: f64, xi: [f64; 2]) -> SurfacePoint {
        let (ds, dt) = self.eval_jacobian(st[0], st[1]);
        SurfacePoint {
            xi,
            w,
            x: self.eval(st[0], st[1]),
            ds,
            dt,
        }
    }
}

/// Bilinear patch spanned by four corners, counter-clockwise
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearPatch {
    /// Images of (0,0), (1,0), (1,1), (0,1)
    pub corners: [[f64; 3]; 4],
}

impl BilinearPatch {
    /// Create a patch from its corners
    pub fn new(corners: [[f64; 3]; 4]) -> Self {
        Self { corners }
    }
}

impl Patch for BilinearPatch {
    fn eval(&self, s: f64, t: f64) -> [f64; 3] {
        let [p0, p1, p2, p3] = &self.corners;
        let mut x = [0.0; 3];
        for k in 0..3 {
            x[k] = (1.0 - s) * (1.0 - t) * p0[k]
                + s * (1.0 - t) * p1[k]
                + s * t * p2[k]
                + (1.0 - s) * t * p3[k];
        }
        x
    }

    fn eval_jacobian(&self, s: f64, t: f64) -> ([f64; 3], [f64; 3]) {
        let [p0, p1, p2, p3] = &self.corners;
        let mut ds = [0.0; 3];
        let mut dt = [0.0; 3];
        for k in 0..3 {
            ds[k] = (1.0 - t) * (p1[k] - p0[k]) + t * (p2[k] - p3[k]);
            dt[k] = (1.0 - s) * (p3[k] - p0[k]) + s * (p2[k] - p1[k]);
        }
        (ds, dt)
    }
}

type MapFn = dyn Fn(f64, f64) -> [f64; 3] + Send + Sync;
type JacobianFn = dyn Fn(f64, f64) -> ([f64; 3], [f64; 3]) + Send + Sync;

/// Patch given by a closure and its Jacobian
///
/// Used for curved test geometries.
pub struct ParametricPatch {
    map: Box<MapFn>,
    jacobian: Box<JacobianFn>,
}

impl ParametricPatch {
    /// Create a patch from a map and its partial derivatives
    pub fn new<F, J>(map: F, jacobian: J) -> Self
    where
        F: Fn(f64, f64) -> [f64; 3] + Send + Sync + 'static,
        J: Fn(f64, f64) -> ([f64; 3], [f64; 3]) + Send + Sync + 'static,
    {
        Self {
            map: Box::new(map),
            jacobian: Box::new(jacobian),
        }
    }
}

impl fmt::Debug for ParametricPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricPatch").finish_non_exhaustive()
    }
}

impl Patch for ParametricPatch {
    fn eval(&self, s: f64, t: f64) -> [f64; 3] {
        (self.map)(s, t)
    }

    fn eval_jacobian(&self, s: f64, t: f64) -> ([f64; 3], [f64; 3]) {
        (self.jacobian)(s, t)
    }
}

/// Shared, immutable list of patches
#[derive(Clone)]
pub struct Geometry {
    patches: Arc<Vec<Box<dyn Patch>>>,
}

impl Geometry {
    /// Create a geometry from its patches
    pub fn new(patches: Vec<Box<dyn Patch>>) -> Self {
        Self {
            patches: Arc::new(patches),
        }
    }

    /// Number of patches
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// True when the geometry has no patches
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patch by index
    pub fn patch(&self, index: usize) -> Option<&dyn Patch> {
        self.patches.get(index).map(|p| p.as_ref())
    }

    /// Iterate over the patches
    pub fn iter(&self) -> impl Iterator<Item = &dyn Patch> {
        self.patches.iter().map(|p| p.as_ref())
    }
}

impl Index<usize> for Geometry {
    type Output = dyn Patch;

    fn index(&self, index: usize) -> &Self::Output {
        self.patches[index].as_ref()
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geometry")
            .field("patches", &self.patches.len())
            .finish()
    }
}

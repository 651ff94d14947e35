//! Geometry generators
//!
//! Patch layouts used by the tests and the examples in the documentation:
//! flat screens, the unit cube and an open cylinder mantle. All patches are
//! oriented counter-clockwise so that shared edges are traversed in opposite
//! directions by the two patches meeting there.

use std::f64::consts::PI;

use crate::core::mesh::patch::{BilinearPatch, Geometry, ParametricPatch, Patch};

/// Unit square [0,1]^2 at z = 0, parametrised by the identity
pub fn unit_screen() -> Geometry {
    screen_grid(1)
}

/// Unit square [0,1]^2 at z = 0 tiled by `n × n` patches
pub fn screen_grid(n: usize) -> Geometry {
    let h = 1.0 / n as f64;
    let mut patches: Vec<Box<dyn Patch>> = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            let (x0, x1) = (i as f64 * h, (i + 1) as f64 * h);
            let (y0, y1) = (j as f64 * h, (j + 1) as f64 * h);
            patches.push(Box::new(BilinearPatch::new([
                [x0, y0, 0.0],
                [x1, y0, 0.0],
                [x1, y1, 0.0],
                [x0, y1, 0.0],
            ])));
        }
    }
    Geometry::new(patches)
}

/// Surface of the unit cube [0,1]^3, six patches with outward normals
pub fn unit_cube() -> Geometry {
    let faces: [[[f64; 3]; 4]; 6] = [
        // z = 0
        [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
        // z = 1
        [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
        // y = 0
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
        // y = 1
        [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
        // x = 0
        [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
        // x = 1
        [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    ];
    let patches: Vec<Box<dyn Patch>> = faces
        .into_iter()
        .map(|corners| Box::new(BilinearPatch::new(corners)) as Box<dyn Patch>)
        .collect();
    Geometry::new(patches)
}

/// Open cylinder mantle of the given radius and height around the z axis,
/// split into `n` patches along the circumference
pub fn cylinder_mantle(radius: f64, height: f64, n: usize) -> Geometry {
    let sector = 2.0 * PI / n as f64;
    let patches: Vec<Box<dyn Patch>> = (0..n)
        .map(|i| {
            let phi0 = i as f64 * sector;
            Box::new(ParametricPatch::new(
                move |s, t| {
                    let phi = phi0 + s * sector;
                    [radius * phi.cos(), radius * phi.sin(), height * t]
                },
                move |s, _t| {
                    let phi = phi0 + s * sector;
                    (
                        [-radius * sector * phi.sin(), radius * sector * phi.cos(), 0.0],
                        [0.0, 0.0, height],
                    )
                },
            )) as Box<dyn Patch>
        })
        .collect();
    Geometry::new(patches)
}

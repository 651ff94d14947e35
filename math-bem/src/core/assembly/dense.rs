//! Dense Galerkin matrix in the discontinuous element basis
//!
//! Every pair of leaves contributes one `nloc × nloc` block at
//! `(nloc * id1, nloc * id2)`. Rows are computed in parallel, one test
//! element per task. No projection onto continuous or spline spaces takes
//! place here.

use ndarray::{Array2, s};

use crate::core::ansatz::SuperSpace;
use crate::core::constants::MAXIMUM_QUADRATURE_DEGREE;
use crate::core::error::{BemError, QuadratureError};
use crate::core::integration::{FarFieldQuadratureNodes, GaussSquare};
use crate::core::io::QuadratureConfig;
use crate::core::operators::LinearOperator;
use crate::core::parallel::parallel_try_map_indexed;

use super::bilinear_form::evaluate_bilinear_form;

/// Assemble the full matrix of `op` on `space`
pub fn assemble_dense<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    config: &QuadratureConfig,
) -> Result<Array2<Op::Scalar>, BemError> {
    config.validate()?;
    let maximum = if config.maximum_quadrature_degree > MAXIMUM_QUADRATURE_DEGREE {
        log::warn!(
            "maximum quadrature degree {} clamped to {}",
            config.maximum_quadrature_degree,
            MAXIMUM_QUADRATURE_DEGREE
        );
        MAXIMUM_QUADRATURE_DEGREE
    } else {
        config.maximum_quadrature_degree
    };

    let owned;
    let table = if maximum == MAXIMUM_QUADRATURE_DEGREE {
        GaussSquare::shared()
    } else {
        owned = GaussSquare::new(maximum);
        &owned
    };
    assemble_dense_with_table(op, space, table)
}

/// Assemble with an explicit quadrature table
pub fn assemble_dense_with_table<Op: LinearOperator>(
    op: &Op,
    space: &SuperSpace,
    table: &GaussSquare,
) -> Result<Array2<Op::Scalar>, BemError> {
    let far = op.farfield_quadrature_degree(space.polynomial_degree()).max(0) as usize;
    // without the far-field rule every pair reports the missing degree itself
    let ffield = match table.get(far) {
        Ok(q) => FarFieldQuadratureNodes::new(space, q),
        Err(_) => FarFieldQuadratureNodes::default(),
    };

    let leaves = space.tree().leaves();
    let n = leaves.len();
    let nloc = op.local_matrix_size(space);
    log::info!(
        "assembling {} x {} element pairs, {} local functions, far-field degree {}, table up to {}",
        n,
        n,
        nloc,
        far,
        table.maximum_degree()
    );

    let rows = parallel_try_map_indexed(n, |i| -> Result<Array2<Op::Scalar>, QuadratureError> {
        let e1 = &leaves[i];
        let mut row = Array2::zeros((nloc, n * nloc));
        let mut intval = Array2::zeros((nloc, nloc));
        for (j, e2) in leaves.iter().enumerate() {
            evaluate_bilinear_form(
                op,
                space,
                e1,
                e2,
                table,
                ffield.of(e1),
                ffield.of(e2),
                &mut intval,
            )?;
            row.slice_mut(s![.., j * nloc..(j + 1) * nloc]).assign(&intval);
        }
        Ok(row)
    })?;

    let mut matrix = Array2::zeros((n * nloc, n * nloc));
    for (i, row) in rows.iter().enumerate() {
        matrix.slice_mut(s![i * nloc..(i + 1) * nloc, ..]).assign(row);
    }
    log::debug!("assembled {} x {} matrix", n * nloc, n * nloc);
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh::generators::{screen_grid, unit_screen};
    use crate::core::operators::{LaplaceSingleLayer, TestFunctionOperator};
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_function_fills_every_block() {
        let space = SuperSpace::new(unit_screen(), 1, 0).unwrap();
        let m = assemble_dense(
            &TestFunctionOperator::constant(),
            &space,
            &QuadratureConfig::default(),
        )
        .unwrap();
        assert_eq!(m.dim(), (4, 4));
        for v in m.iter() {
            assert_relative_eq!(*v, 0.25, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_single_layer_blocks_are_symmetric() {
        let space = SuperSpace::new(unit_screen(), 1, 1).unwrap();
        let m = assemble_dense(&LaplaceSingleLayer, &space, &QuadratureConfig::default()).unwrap();
        assert_eq!(m.dim(), (16, 16));
        for i in 0..16 {
            assert!(m[[i, i]] > 0.0);
            for j in 0..16 {
                assert_relative_eq!(m[[i, j]], m[[j, i]], max_relative = 1e-10);
            }
        }
        // Bernstein functions sum to one, so every block is positive
        for i in 0..4 {
            for j in 0..4 {
                assert!(m.slice(s![4 * i..4 * i + 4, 4 * j..4 * j + 4]).sum() > 0.0);
            }
        }
    }

    #[test]
    fn test_small_table_is_rejected() {
        let space = SuperSpace::new(screen_grid(2), 1, 0).unwrap();
        let config = QuadratureConfig::default().with_maximum_degree(1);
        let err = assemble_dense(&LaplaceSingleLayer, &space, &config).unwrap_err();
        match err {
            BemError::Quadrature(QuadratureError::PairDegreeTooLarge {
                degree,
                maximum,
                element1,
                element2,
                patch1,
                patch2,
            }) => {
                assert!(degree >= 2);
                assert_eq!(maximum, 1);
                assert!(element1 < 4 && element2 < 4);
                assert!(patch1 < 4 && patch2 < 4);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_oversized_table_is_clamped() {
        let space = SuperSpace::new(unit_screen(), 0, 0).unwrap();
        let config = QuadratureConfig::default().with_maximum_degree(80);
        let m = assemble_dense(&TestFunctionOperator::constant(), &space, &config).unwrap();
        assert_relative_eq!(m[[0, 0]], 1.0, epsilon = 1e-14);
    }
}

/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, Out, Output, SwapMode, swap_rows};

/// Invert square matrix `a` by Gauss-Jordan elimination.
///
/// * `a` is `(n x n)`.
/// * `scratch` must be `(n x 2n)` if supplied.  Every element is overwritten,
///   and its row table is left permuted by the row exchanges.
/// * `out` must be `(n x n)` if supplied.
///
/// `a` must be non-singular.  Nothing checks this: a singular matrix or a zero
/// pivot produces `inf`/`NaN` entries that spread through the result.
///
/// Before elimination, a single bottom-up pass exchanges adjacent rows of the
/// augmented matrix whenever the upper one has the smaller first-column
/// entry.  This is not partial pivoting; pivots are never reselected during
/// elimination.
pub fn mat_inv_square<'a, 's>(
    a: &Matrix,
    scratch: impl Into<Out<'s, Matrix>>,
    out: impl Into<Out<'a, Matrix>>,
) -> Output<'a, Matrix>
{
    debug_assert!(a.is_square(), "cannot invert a {:?} matrix", a.shape());
    let n = a.num_rows();
    let mut out = out.into().or_alloc_with(|| Matrix::zeros((n, n)));
    let scratch = scratch.into();
    let had_scratch = !scratch.is_alloc();
    let mut scratch = scratch.or_alloc_with(|| Matrix::zeros((n, 2 * n)));

    augment(a, &mut scratch, n);
    let exchanges = exchange_rows(&mut scratch, n);
    eliminate(&mut scratch, n);
    normalize(&mut scratch, n);

    // [I | A^-1]
    for i in 0..n {
        out.row_mut(i)[..n].copy_from_slice(&scratch.row(i)[n..2 * n]);
    }

    debug!(
        "inverted {}x{} matrix (scratch: {}, out: {}, row exchanges: {})",
        n, n,
        if had_scratch { "caller" } else { "alloc" },
        if out.is_borrowed() { "caller" } else { "alloc" },
        exchanges,
    );
    out
}

// [A | I]
fn augment(a: &Matrix, scratch: &mut Matrix, n: usize)
{
    for i in 0..n {
        let row = scratch.row_mut(i);
        row[..n].copy_from_slice(&a.row(i)[..n]);
        for x in &mut row[n..2 * n] {
            *x = 0.0;
        }
        row[n + i] = 1.0;
    }
}

fn exchange_rows(scratch: &mut Matrix, n: usize) -> usize
{
    let mut count = 0;
    for i in (1..n).rev() {
        if scratch[(i - 1, 0)] < scratch[(i, 0)] {
            trace!("exchanging rows {} and {}", i - 1, i);
            swap_rows(scratch, i, i - 1, SwapMode::Rebind);
            count += 1;
        }
    }
    count
}

// Zero column i of every row but the pivot row i.
fn eliminate(scratch: &mut Matrix, n: usize)
{
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (pivot, target) = scratch.row_pair_mut(i, j);
            let factor = target[i] / pivot[i];
            for (t, &p) in target[..2 * n].iter_mut().zip(&pivot[..2 * n]) {
                *t -= p * factor;
            }
        }
    }
}

fn normalize(scratch: &mut Matrix, n: usize)
{
    for i in 0..n {
        let row = scratch.row_mut(i);
        let diag = row[i];
        for x in &mut row[..2 * n] {
            *x /= diag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat_mul;

    fn init_logger() {
        let _ = ::env_logger::try_init();
    }

    #[test]
    fn two_by_two() {
        init_logger();
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let inv = mat_inv_square(&a, Out::Alloc, Out::Alloc);
        let expected = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]);
        assert_close!(abs=1e-9, &*inv, &expected);
    }

    #[test]
    fn identity_and_diagonal() {
        let inv = mat_inv_square(&Matrix::eye(4), Out::Alloc, Out::Alloc);
        assert_eq!(*inv, Matrix::eye(4));

        let d = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, -8.0]]);
        let inv = mat_inv_square(&d, Out::Alloc, Out::Alloc);
        assert_eq!(*inv, Matrix::from_rows(&[[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, -0.125]]));
    }

    #[test]
    fn reuses_dirty_buffers() {
        init_logger();
        let a = Matrix::from_rows(&[[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let expected = mat_inv_square(&a, Out::Alloc, Out::Alloc).into_owned();

        let mut scratch = Matrix::from_row_major_data((3, 6), vec![123.0; 18]);
        let mut out = Matrix::from_row_major_data((3, 3), vec![-7.0; 9]);
        for _ in 0..3 {
            {
                let res = mat_inv_square(&a, &mut scratch, &mut out);
                assert!(res.is_borrowed());
            }
            assert_eq!(out, expected);
        }
        // the left half of the augmented matrix has been reduced to I
        let eye = Matrix::eye(3);
        for i in 0..3 {
            assert_close!(abs=1e-12, &scratch.row(i)[..3], eye.row(i));
        }
    }

    #[test]
    fn row_exchange_rebinds_scratch() {
        // first column increases downward, so every adjacent pair is exchanged once
        let a = Matrix::from_rows(&[[1.0, 2.0, 0.0], [2.0, 0.0, 1.0], [3.0, 1.0, 2.0]]);
        let mut scratch = Matrix::zeros((3, 6));
        let inv = mat_inv_square(&a, &mut scratch, Out::Alloc);
        assert!(!scratch.is_contiguous());
        assert_close!(abs=1e-12, mat_mul(&a, &inv, Out::Alloc).into_owned(), Matrix::eye(3));
    }

    #[test]
    fn singular_gives_non_finite() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        let inv = mat_inv_square(&a, Out::Alloc, Out::Alloc);
        assert!(inv.backing_data().iter().any(|x| !x.is_finite()), "{:?}", inv);
    }

    #[test]
    fn zero_pivot_is_not_rescued() {
        // invertible, but the exchange pass leaves it alone and the first pivot is 0
        let a = Matrix::from_rows(&[[0.0, 1.0], [-1.0, 0.0]]);
        let mut scratch = Matrix::zeros((2, 4));
        let inv = mat_inv_square(&a, &mut scratch, Out::Alloc);
        assert!(scratch.is_contiguous());
        assert!(inv.backing_data().iter().any(|x| x.is_nan()), "{:?}", inv);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot invert")]
    fn non_square_is_rejected_in_debug() {
        let a = Matrix::zeros((2, 3));
        let _ = mat_inv_square(&a, Out::Alloc, Out::Alloc);
    }

    #[test]
    fn empty() {
        let inv = mat_inv_square(&Matrix::zeros((0, 0)), Out::Alloc, Out::Alloc);
        assert_eq!(inv.shape(), (0, 0));
    }
}

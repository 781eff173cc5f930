/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The straightforward loops.
//!
//! None of these check shapes.  Mismatched operands either panic on an
//! out-of-bounds index or quietly use a prefix of the larger operand.

use crate::{Matrix, Out, Output};

/// Elementwise `a + b`, shaped like `a`.
pub fn mat_add<'a>(a: &Matrix, b: &Matrix, out: impl Into<Out<'a, Matrix>>) -> Output<'a, Matrix>
{ zip_with(a, b, out, |x, y| x + y) }

/// Elementwise `a - b`, shaped like `a`.
pub fn mat_sub<'a>(a: &Matrix, b: &Matrix, out: impl Into<Out<'a, Matrix>>) -> Output<'a, Matrix>
{ zip_with(a, b, out, |x, y| x - y) }

#[inline(always)]
fn zip_with<'a, F>(a: &Matrix, b: &Matrix, out: impl Into<Out<'a, Matrix>>, f: F) -> Output<'a, Matrix>
where F: Fn(f64, f64) -> f64,
{
    let (m, n) = a.shape();
    let mut out = out.into().or_alloc_with(|| Matrix::zeros((m, n)));
    for i in 0..m {
        let (a_row, b_row) = (a.row(i), b.row(i));
        let out_row = out.row_mut(i);
        for j in 0..n {
            out_row[j] = f(a_row[j], b_row[j]);
        }
    }
    out
}

/// A copy of `a` with its own contiguous buffer.
pub fn mat_copy(a: &Matrix) -> Matrix
{
    let mut out = Matrix::zeros(a.shape());
    mat_copy_into(a, &mut out);
    out
}

/// Copy every element of `a` into `b`, which must have the same shape.
///
/// `b` keeps its own row table; only values move.
pub fn mat_copy_into(a: &Matrix, b: &mut Matrix)
{
    let n = a.num_cols();
    for (i, a_row) in a.rows().enumerate() {
        b.row_mut(i)[..n].copy_from_slice(a_row);
    }
}

/// Transpose `(m x n)` matrix `a` into an `(n x m)` output.
pub fn mat_transpose<'a>(a: &Matrix, out: impl Into<Out<'a, Matrix>>) -> Output<'a, Matrix>
{
    let (m, n) = a.shape();
    let mut out = out.into().or_alloc_with(|| Matrix::zeros((n, m)));
    for i in 0..m {
        let a_row = a.row(i);
        for j in 0..n {
            out[(j, i)] = a_row[j];
        }
    }
    out
}

/// Matrix product `C = AB` for `(n x m)` matrix A and `(m x p)` matrix B.
///
/// `out` must be `(n x p)`.  It is zeroed here before accumulation, so its
/// prior contents do not matter.
pub fn mat_mul<'a>(a: &Matrix, b: &Matrix, out: impl Into<Out<'a, Matrix>>) -> Output<'a, Matrix>
{
    let (n, m) = a.shape();
    let p = b.num_cols();
    let mut out = out.into().or_alloc_with(|| Matrix::zeros((n, p)));
    for i in 0..n {
        let a_row = a.row(i);
        let out_row = out.row_mut(i);
        for j in 0..p {
            out_row[j] = 0.0;
            for k in 0..m {
                out_row[j] += a_row[k] * b[(k, j)];
            }
        }
    }
    out
}

/// Matrix-vector product `Ax` for `(m x n)` matrix A and length-`n` vector x.
///
/// `out` must have length `m`.  Each element is zeroed before accumulation.
/// The sum runs over `x.len()`, so a long `x` indexes past the rows of `a`.
pub fn mat_vec_prod<'a>(a: &Matrix, x: &[f64], out: impl Into<Out<'a, [f64]>>) -> Output<'a, [f64]>
{
    let m = a.num_rows();
    let mut out = out.into().or_alloc_with(|| vec![0.0; m]);
    for (i, a_row) in a.rows().enumerate() {
        out[i] = 0.0;
        for j in 0..x.len() {
            out[i] += a_row[j] * x[j];
        }
    }
    out
}

/// Elementwise `a + b`, with the length of `a`.
pub fn vec_add<'a>(a: &[f64], b: &[f64], out: impl Into<Out<'a, [f64]>>) -> Output<'a, [f64]>
{
    let mut out = out.into().or_alloc_with(|| vec![0.0; a.len()]);
    for i in 0..a.len() {
        out[i] = a[i] + b[i];
    }
    out
}

/// Elementwise `a - b`, with the length of `a`.
pub fn vec_sub<'a>(a: &[f64], b: &[f64], out: impl Into<Out<'a, [f64]>>) -> Output<'a, [f64]>
{
    let mut out = out.into().or_alloc_with(|| vec![0.0; a.len()]);
    for i in 0..a.len() {
        out[i] = a[i] - b[i];
    }
    out
}

impl<'a, 'b> ::std::ops::Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix
    { mat_mul(self, rhs, Out::Alloc).into_owned() }
}

impl<'a, 'b> ::std::ops::Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix
    { mat_add(self, rhs, Out::Alloc).into_owned() }
}

impl<'a, 'b> ::std::ops::Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix
    { mat_sub(self, rhs, Out::Alloc).into_owned() }
}

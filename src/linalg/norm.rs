/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Matrix;

/// The **squared** Frobenius norm: the sum of squares of every element.
///
/// No square root is taken.  Callers who want the norm itself should call
/// `.sqrt()` on the result.
pub fn frobenius_norm(a: &Matrix) -> f64
{
    let mut out = 0.0;
    for row in a.rows() {
        for &x in row {
            out += x * x;
        }
    }
    out
}

/// Index of the first largest element.
///
/// NaNs never compare greater, so they are skipped (an all-NaN input gives 0).
///
/// # Panics
///
/// Panics on an empty slice.
pub fn vec_argmax(a: &[f64]) -> usize
{
    assert!(!a.is_empty(), "argmax of an empty vector");
    let mut max = ::std::f64::NEG_INFINITY;
    let mut imax = 0;
    for (i, &x) in a.iter().enumerate() {
        if x > max {
            max = x;
            imax = i;
        }
    }
    imax
}

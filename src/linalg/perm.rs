/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Matrix;
#[cfg(feature = "serde-support")]
use ::serde::{Serialize, Deserialize};

/// How [`swap_rows`] exchanges two rows.
///
/// Both modes leave the same values at every logical position.
///
/// [`swap_rows`]: fn.swap_rows.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
pub enum SwapMode {
    /// Exchange the two row table entries.  O(1).
    ///
    /// The buffer itself is untouched, so afterwards the matrix is generally
    /// no longer contiguous in logical row order.  Anything reaching the
    /// buffer directly sees the rows in their old places.
    Rebind,
    /// Exchange the elements of the two rows.  O(cols).  Contiguity is preserved.
    Copy,
}

/// Swap rows `i` and `j` of `a` in place.
///
/// # Panics
///
/// Panics if either index is out of range.
pub fn swap_rows(a: &mut Matrix, i: usize, j: usize, mode: SwapMode)
{
    match mode {
        SwapMode::Rebind => a.slots.swap(i, j),
        SwapMode::Copy => {
            if i == j {
                // still validate the index
                let _ = a.row(i);
                return;
            }
            let (row_i, row_j) = a.row_pair_mut(i, j);
            row_i.swap_with_slice(row_j);
        },
    }
}

/// Swap columns `i` and `j` of `a` in place.
///
/// Columns are never contiguous, so this always moves elements.
pub fn swap_cols(a: &mut Matrix, i: usize, j: usize)
{
    for r in 0..a.num_rows() {
        a.row_mut(r).swap(i, j);
    }
}

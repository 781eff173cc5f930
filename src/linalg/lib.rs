/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense `f64` matrices and vectors for small, real-time workloads.
//!
//! There are no fancy types here.  A vector is a `[f64]`, and a [`Matrix`]
//! is a single row-major buffer cut into rows of equal length.  The
//! algorithms are not state of the art; they were chosen for small
//! problems (state-space control, Kalman filtering) where a big linear
//! algebra stack is unavailable or not worth its weight.
//!
//! # `out` and `scratch` parameters
//!
//! Every function that produces a matrix or vector takes an `out` argument
//! (and sometimes a `scratch` argument) so that the caller can eliminate
//! allocation on a hot path:
//!
//! ```
//! use smallmat_linalg::{Matrix, Out, mat_mul};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
//! let b = Matrix::eye(2);
//!
//! // allocate and return
//! let c = mat_mul(&a, &b, Out::Alloc);
//!
//! // populate a buffer that already exists
//! let mut d = Matrix::zeros((2, 2));
//! mat_mul(&a, &b, &mut d);
//!
//! assert_eq!(*c, d);
//! ```
//!
//! When a buffer is supplied it must already have the shape documented on the
//! function.  Shapes are **not** validated; a wrongly sized buffer either
//! panics on an out-of-bounds index or silently receives a partial result.
//! Buffers are not cleared before use unless the function says so.
//!
//! # Row layout
//!
//! Rows are addressed through a small table, which lets [`swap_rows`] exchange
//! two rows in O(1) with [`SwapMode::Rebind`].  After such a swap the logical
//! row order no longer matches buffer order; see [`Matrix::is_contiguous`]
//! and [`Matrix::make_contiguous`].

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate slice_of_array;
#[cfg_attr(test, macro_use)]
extern crate smallmat_assert_close;
#[cfg(feature = "serde-support")]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;
#[cfg(test)]
extern crate env_logger;

pub use crate::matrix::{Matrix, Rows};
mod matrix;

pub use crate::out::{Out, Output};
mod out;

pub use crate::kernels::{mat_add, mat_sub, mat_copy, mat_copy_into, mat_transpose};
pub use crate::kernels::{mat_mul, mat_vec_prod, vec_add, vec_sub};
mod kernels;

pub use crate::perm::{SwapMode, swap_rows, swap_cols};
mod perm;

pub use crate::norm::{frobenius_norm, vec_argmax};
mod norm;

pub use crate::inverse::mat_inv_square;
mod inverse;

/// Rejected input to one of the checked matrix constructors.
///
/// The kernels themselves never produce this; they panic on bad shapes.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ShapeError {
    #[fail(display = "data of length {} cannot fill a {}x{} matrix", len, rows, cols)]
    DataLength { len: usize, rows: usize, cols: usize },
    #[fail(display = "row {} has length {}, expected {}", row, len, expected)]
    RaggedRow { row: usize, len: usize, expected: usize },
}

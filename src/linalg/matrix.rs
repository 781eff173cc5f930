/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::ShapeError;
use ::std::fmt;
use ::std::ops::{Index, IndexMut};
use ::slice_of_array::IsSliceomorphic;
use ::slice_of_array::prelude::*;
use ::smallmat_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Owned `f64` matrix over one contiguous row-major buffer.
///
/// The buffer is cut into `num_rows()` equally sized *slots*, and a row table
/// maps each logical row to a slot.  A freshly constructed matrix uses the
/// identity table, so row `i` lives at `[i * cols, (i + 1) * cols)`.
/// [`swap_rows`] in [`SwapMode::Rebind`] mode only exchanges table entries.
///
/// [`swap_rows`]: fn.swap_rows.html
/// [`SwapMode::Rebind`]: enum.SwapMode.html
// please resist the urge to go n-dimensional
#[derive(Clone)]
pub struct Matrix {
    // slot-major data
    // invariant: data.len() == slots.len() * width
    pub(crate) data: Vec<f64>,
    // logical row -> slot
    // invariant: a permutation of 0..slots.len()
    pub(crate) slots: Vec<usize>,
    pub(crate) width: usize,
}

impl Matrix {
    /// Construct a matrix, zero-filled or adopting `data` as its buffer.
    ///
    /// `Some(data)` is taken over as the backing storage without copying.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn new(dims: (usize, usize), data: Option<Vec<f64>>) -> Self
    {
        match data {
            None => Matrix::zeros(dims),
            Some(data) => Matrix::from_row_major_data(dims, data),
        }
    }

    pub fn zeros((rows, cols): (usize, usize)) -> Self
    { Matrix::from_row_major_data((rows, cols), vec![0.0; rows * cols]) }

    /// Adopt `data` (row-major) as the backing buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_major_data((rows, cols): (usize, usize), data: Vec<f64>) -> Self
    {
        assert_eq!(data.len(), rows * cols, "matrix data has the wrong length for {}x{}", rows, cols);
        Matrix { data, slots: (0..rows).collect(), width: cols }
    }

    /// Like `from_row_major_data`, but reports a bad length instead of panicking.
    pub fn try_from_row_major_data((rows, cols): (usize, usize), data: Vec<f64>) -> Result<Self, ShapeError>
    {
        if data.len() != rows * cols {
            return Err(ShapeError::DataLength { len: data.len(), rows, cols });
        }
        Ok(Matrix::from_row_major_data((rows, cols), data))
    }

    /// Build a matrix from fixed-size rows.  Handy for literals.
    ///
    /// ```
    /// # use smallmat_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows<V>(rows: &[V]) -> Self
    where V: IsSliceomorphic<Element = f64>,
    { Matrix::from_row_major_data((rows.len(), V::LEN), rows.flat().to_vec()) }

    /// Build a matrix from rows of arbitrary length, checking that they agree.
    ///
    /// An empty input produces a `0x0` matrix.
    pub fn try_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError>
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(ShapeError::RaggedRow { row, len: r.len(), expected: cols });
            }
            data.extend_from_slice(r);
        }
        Ok(Matrix::from_row_major_data((rows.len(), cols), data))
    }

    /// The `n x n` identity matrix.
    pub fn eye(n: usize) -> Self
    {
        let mut out = Matrix::zeros((n, n));
        for i in 0..n {
            out[(i, i)] = 1.0;
        }
        out
    }
}

impl Matrix {
    /// `(rows, cols)`.
    ///
    /// The column count is stored, so this is well-defined even with zero rows.
    pub fn shape(&self) -> (usize, usize) { (self.slots.len(), self.width) }
    pub fn num_rows(&self) -> usize { self.slots.len() }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn is_square(&self) -> bool { self.num_rows() == self.num_cols() }
    pub fn size(&self) -> usize { self.data.len() }

    #[inline(always)]
    fn slot_range(&self, slot: usize) -> ::std::ops::Range<usize>
    { slot * self.width..(slot + 1) * self.width }

    #[inline]
    pub fn row(&self, r: usize) -> &[f64]
    { &self.data[self.slot_range(self.slots[r])] }

    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [f64]
    {
        let range = self.slot_range(self.slots[r]);
        &mut self.data[range]
    }

    /// Rows in logical order.
    pub fn rows(&self) -> Rows<'_>
    { Rows { matrix: self, next: 0 } }

    /// Borrow two distinct rows at once, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either index is out of range.
    pub fn row_pair_mut(&mut self, a: usize, b: usize) -> (&mut [f64], &mut [f64])
    {
        assert!(a != b, "row_pair_mut needs two distinct rows");
        let w = self.width;
        let (sa, sb) = (self.slots[a], self.slots[b]);
        if sa < sb {
            let (lo, hi) = self.data.split_at_mut(sb * w);
            (&mut lo[sa * w..(sa + 1) * w], &mut hi[..w])
        } else {
            let (lo, hi) = self.data.split_at_mut(sa * w);
            (&mut hi[..w], &mut lo[sb * w..(sb + 1) * w])
        }
    }

    /// The buffer slot currently holding logical row `r`.
    pub fn row_slot(&self, r: usize) -> usize { self.slots[r] }

    /// Whether logical row order matches buffer order.
    ///
    /// This is always true for fresh matrices, and becomes false after a
    /// [`SwapMode::Rebind`] swap of two distinct rows.
    ///
    /// [`SwapMode::Rebind`]: enum.SwapMode.html
    pub fn is_contiguous(&self) -> bool
    { self.slots.iter().enumerate().all(|(i, &s)| i == s) }

    /// Physically reorder the buffer so that it is contiguous again.
    ///
    /// Element values at every logical position are unchanged.
    pub fn make_contiguous(&mut self)
    {
        if self.is_contiguous() {
            return;
        }
        let n = self.num_rows();
        let mut owner = vec![0; n];
        for (row, &slot) in self.slots.iter().enumerate() {
            owner[slot] = row;
        }

        for pos in 0..n {
            let slot = self.slots[pos];
            if slot == pos {
                continue;
            }
            // logical row `pos` moves into slot `pos`, whoever sat there moves out to `slot`
            self.swap_slot_data(pos, slot);
            let displaced = owner[pos];
            self.slots[displaced] = slot;
            owner[slot] = displaced;
            self.slots[pos] = pos;
            owner[pos] = pos;
        }
        debug_assert!(self.is_contiguous());
    }

    fn swap_slot_data(&mut self, a: usize, b: usize)
    {
        let w = self.width;
        let (a, b) = (a.min(b), a.max(b));
        let (lo, hi) = self.data.split_at_mut(b * w);
        lo[a * w..(a + 1) * w].swap_with_slice(&mut hi[..w]);
    }

    /// The raw buffer, in slot order.
    ///
    /// This is row-major only when `is_contiguous()`.
    pub fn backing_data(&self) -> &[f64] { &self.data }

    /// Copy out the data in logical row-major order.
    pub fn to_row_major_vec(&self) -> Vec<f64>
    {
        let mut out = Vec::with_capacity(self.size());
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Give up the buffer, reordered to logical row-major order if necessary.
    pub fn into_row_major_data(mut self) -> Vec<f64>
    {
        self.make_contiguous();
        self.data
    }
}

/// Iterator over the rows of a [`Matrix`] in logical order.
///
/// [`Matrix`]: struct.Matrix.html
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    matrix: &'a Matrix,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]>
    {
        if self.next == self.matrix.num_rows() {
            return None;
        }
        let row = self.matrix.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.matrix.num_rows() - self.next;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64
    { &self.row(r)[c] }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64
    { &mut self.row_mut(r)[c] }
}

// Equality is on shape and logical contents; the row table is not observable.
impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    { self.shape() == other.shape() && self.rows().eq(other.rows()) }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "Matrix{:?} ", self.shape())?;
        f.debug_list().entries(self.rows()).finish()
    }
}

impl CheckClose for Matrix {
    type Scalar = f64;

    fn check_close(&self, other: &Matrix, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    {
        assert_eq!(self.shape(), other.shape(), "shape mismatch in check_close");
        for (r, (a, b)) in self.rows().zip(other.rows()).enumerate() {
            a.check_close(b, tol).map_err(|e| e.within(r))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde-support")]
mod serde_impls {
    use super::*;
    use ::serde::{Serialize, Serializer, Deserialize, Deserializer};

    // Serialized in logical row order; the row table does not survive.
    #[derive(Serialize, Deserialize)]
    struct Raw {
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    }

    impl Serialize for Matrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
        {
            let (rows, cols) = self.shape();
            Raw { rows, cols, data: self.to_row_major_vec() }.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Matrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
        {
            let Raw { rows, cols, data } = Raw::deserialize(deserializer)?;
            Matrix::try_from_row_major_data((rows, cols), data)
                .map_err(::serde::de::Error::custom)
        }
    }
}

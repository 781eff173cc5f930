/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::borrow::{Borrow, BorrowMut};
use ::std::fmt;
use ::std::ops::{Deref, DerefMut};

/// Where a function should put its result.
///
/// `T` is `Matrix` for matrix results and `[f64]` for vector results.
/// Anything convertible into this can be passed as an `out` or `scratch`
/// argument:
///
/// * `Out::Alloc` or `None` allocates a fresh buffer of the right shape.
/// * `&mut buf` or `Some(&mut buf)` writes into `buf`, which must already
///   have the right shape.
pub enum Out<'a, T: ?Sized + ToOwned> {
    Alloc,
    Into(&'a mut T),
}

/// The result of a function that took an `out` argument.
///
/// Derefs to the result either way.  `Borrowed` holds the exact reference
/// that was passed in.
pub enum Output<'a, T: ?Sized + ToOwned> {
    Owned(T::Owned),
    Borrowed(&'a mut T),
}

impl<'a, T: ?Sized + ToOwned> Out<'a, T> {
    pub fn is_alloc(&self) -> bool
    { match self { Out::Alloc => true, Out::Into(_) => false } }

    /// Resolve to a writable buffer, calling `alloc` only for `Out::Alloc`.
    #[inline]
    pub fn or_alloc_with<F>(self, alloc: F) -> Output<'a, T>
    where F: FnOnce() -> T::Owned,
    {
        match self {
            Out::Alloc => Output::Owned(alloc()),
            Out::Into(buf) => Output::Borrowed(buf),
        }
    }
}

impl<'a, T: ?Sized + ToOwned> From<&'a mut T> for Out<'a, T> {
    fn from(buf: &'a mut T) -> Self { Out::Into(buf) }
}

impl<'a, T: ?Sized + ToOwned> From<Option<&'a mut T>> for Out<'a, T> {
    fn from(buf: Option<&'a mut T>) -> Self
    { match buf { None => Out::Alloc, Some(buf) => Out::Into(buf) } }
}

// ergonomics
impl<'a> From<&'a mut Vec<f64>> for Out<'a, [f64]> {
    fn from(buf: &'a mut Vec<f64>) -> Self { Out::Into(&mut buf[..]) }
}

impl<'a, T: ?Sized + ToOwned> Output<'a, T> {
    pub fn is_borrowed(&self) -> bool
    { match self { Output::Owned(_) => false, Output::Borrowed(_) => true } }

    /// Take the result by value.  This clones iff it was written into a caller buffer.
    pub fn into_owned(self) -> T::Owned
    {
        match self {
            Output::Owned(x) => x,
            Output::Borrowed(x) => (*x).to_owned(),
        }
    }
}

impl<'a, T: ?Sized + ToOwned> Deref for Output<'a, T> {
    type Target = T;

    fn deref(&self) -> &T
    {
        match self {
            Output::Owned(x) => <T::Owned as Borrow<T>>::borrow(x),
            Output::Borrowed(x) => &**x,
        }
    }
}

impl<'a, T: ?Sized + ToOwned> DerefMut for Output<'a, T>
where T::Owned: BorrowMut<T>,
{
    fn deref_mut(&mut self) -> &mut T
    {
        match self {
            Output::Owned(x) => <T::Owned as BorrowMut<T>>::borrow_mut(x),
            Output::Borrowed(x) => &mut **x,
        }
    }
}

impl<'a, T: ?Sized + ToOwned + fmt::Debug> fmt::Debug for Output<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { fmt::Debug::fmt(&**self, f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    fn fill<'a>(value: f64, out: impl Into<Out<'a, [f64]>>) -> Output<'a, [f64]>
    {
        let mut out = out.into().or_alloc_with(|| vec![0.0; 3]);
        for x in &mut out[..3] {
            *x = value;
        }
        out
    }

    #[test]
    fn alloc_and_borrow() {
        let owned = fill(1.0, Out::Alloc);
        assert!(!owned.is_borrowed());
        assert_eq!(&*owned, &[1.0, 1.0, 1.0][..]);

        let owned = fill(1.5, None);
        assert_eq!(owned.into_owned(), vec![1.5; 3]);

        let mut buf = vec![0.0; 3];
        let ptr = buf.as_ptr();
        {
            let out = fill(2.0, &mut buf);
            assert!(out.is_borrowed());
            assert_eq!(out.as_ptr(), ptr);
        }
        assert_eq!(buf, vec![2.0; 3]);

        // a larger buffer receives a prefix; nothing checks the size
        let mut big = vec![9.0; 5];
        fill(3.0, Some(&mut big[..]));
        assert_eq!(big, vec![3.0, 3.0, 3.0, 9.0, 9.0]);
    }

    #[test]
    fn matrix_output_into_owned_clones_borrowed() {
        let mut m = Matrix::eye(2);
        let out: Output<Matrix> = Out::from(&mut m).or_alloc_with(|| unreachable!());
        let copy = out.into_owned();
        assert_eq!(copy, Matrix::eye(2));
    }
}

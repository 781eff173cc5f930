#![allow(dead_code)]

use ::rand::Rng;
use ::smallmat::Matrix;

#[allow(unused_macros)]
macro_rules! zip_eq {
    ($a:expr $(,)*) => {
        $a.into_iter().map(|a| (a,))
    };
    ($a:expr, $b:expr $(,)*) => {
        crate::shared::util::zip_eq($a, $b)
    };
}

pub(crate) fn zip_eq<As, Bs>(a: As, b: Bs) -> ::std::iter::Zip<As::IntoIter, Bs::IntoIter>
where
    As: IntoIterator, As::IntoIter: ExactSizeIterator,
    Bs: IntoIterator, Bs::IntoIter: ExactSizeIterator,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    assert_eq!(a.len(), b.len());
    a.zip(b)
}

pub(crate) fn init_logger() {
    let _ = ::env_logger::try_init();
}

/// Uniform in `[-1, 1)`, any shape.
pub(crate) fn random_matrix<R: Rng>(rng: &mut R, (rows, cols): (usize, usize)) -> Matrix {
    let data = (0..rows * cols).map(|_| 1.0 - 2.0 * rng.gen::<f64>()).collect();
    Matrix::from_row_major_data((rows, cols), data)
}

/// Integer-valued entries, so that sums and differences are exact.
pub(crate) fn random_int_vec<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1000i32, 1000) as f64).collect()
}

/// Strictly diagonally dominant, with a first column that never increases
/// going down.
///
/// The row exchange pass of the inverse leaves such a matrix alone, and
/// elimination without pivoting is stable on it.
pub(crate) fn random_well_conditioned<R: Rng>(rng: &mut R, n: usize) -> Matrix {
    let mut m = random_matrix(rng, (n, n));
    let mut first_col: Vec<f64> = (0..n).map(|i| m[(i, 0)]).collect();
    first_col.sort_by(|a, b| b.partial_cmp(a).unwrap());
    for i in 0..n {
        m[(i, 0)] = first_col[i];
    }
    m[(0, 0)] = 2.0 * n as f64 + 1.0;
    for i in 1..n {
        m[(i, i)] += if m[(i, i)] < 0.0 { -(n as f64) } else { n as f64 };
    }
    m
}

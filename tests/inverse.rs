#[macro_use]
extern crate smallmat_assert_close;

#[macro_use]
mod shared;
use self::shared::util::{init_logger, random_well_conditioned};

use ::rand::Rng;
use ::smallmat::{Matrix, Out, mat_inv_square, mat_mul};

#[test]
fn known_two_by_two() {
    init_logger();
    let a = Matrix::new((2, 2), Some(vec![
        1.0, 2.0,
        3.0, 4.0,
    ]));
    let expected = Matrix::new((2, 2), Some(vec![
        -2.0, 1.0,
        1.5, -0.5,
    ]));
    let inv = mat_inv_square(&a, Out::Alloc, Out::Alloc);
    assert_close!(abs=1e-9, rel=0.0, &*inv, &expected);
}

#[test]
fn product_with_inverse_is_identity() {
    init_logger();
    let mut rng = ::rand::thread_rng();

    for _ in 0..200 {
        let n = rng.gen_range(1, 9);
        let a = random_well_conditioned(&mut rng, n);
        let inv = mat_inv_square(&a, Out::Alloc, Out::Alloc);

        let left = mat_mul(&a, &inv, Out::Alloc);
        let right = mat_mul(&inv, &a, Out::Alloc);
        assert_close!(abs=1e-9, &*left, &Matrix::eye(n), "{:?}", a);
        assert_close!(abs=1e-9, &*right, &Matrix::eye(n), "{:?}", a);
    }
}

#[test]
fn caller_buffers_match_allocation() {
    let mut rng = ::rand::thread_rng();
    let n = 5;
    let mut scratch = Matrix::zeros((n, 2 * n));
    let mut out = Matrix::zeros((n, n));

    for _ in 0..20 {
        let a = random_well_conditioned(&mut rng, n);
        let fresh = mat_inv_square(&a, Out::Alloc, Out::Alloc).into_owned();
        let out_ptr = out.backing_data().as_ptr();
        {
            let reused = mat_inv_square(&a, Some(&mut scratch), Some(&mut out));
            assert!(reused.is_borrowed());
            assert_eq!(reused.backing_data().as_ptr(), out_ptr);
        }
        assert_eq!(out, fresh);
    }
}

#[test]
fn column_zero_exchange_is_a_single_pass() {
    // Column 0 reads 1, 2, 3 from the top.  A single bottom-up pass moves the
    // 3 to the top but leaves 1 above 2, so a full sort would differ.
    let a = Matrix::from_rows(&[
        [1.0, 2.0, 0.0],
        [2.0, 0.0, 1.0],
        [3.0, 1.0, 2.0],
    ]);
    let mut scratch = Matrix::zeros((3, 6));
    let inv = mat_inv_square(&a, &mut scratch, Out::Alloc);

    let firsts: Vec<f64> = scratch.rows().map(|row| row[0]).collect();
    assert_close!(abs=1e-12, firsts, vec![1.0, 0.0, 0.0]);
    assert_eq!((0..3).map(|i| scratch.row_slot(i)).collect::<Vec<_>>(), vec![2, 0, 1]);
    assert_close!(abs=1e-12, &*mat_mul(&a, &inv, Out::Alloc), &Matrix::eye(3));
}

#[test]
fn singular_input_is_not_reported() {
    let a = Matrix::from_rows(&[
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [5.0, 7.0, 9.0],
    ]);
    // whatever comes out (inf, NaN, or garbage), it comes out
    let inv = mat_inv_square(&a, Out::Alloc, Out::Alloc);
    assert_eq!(inv.shape(), (3, 3));

    let zero = mat_inv_square(&Matrix::zeros((2, 2)), Out::Alloc, Out::Alloc);
    assert!(zero.backing_data().iter().all(|x| x.is_nan()));
}

#[test]
#[should_panic]
fn undersized_scratch_panics() {
    let a = Matrix::eye(3);
    let mut scratch = Matrix::zeros((3, 5));
    let _ = mat_inv_square(&a, &mut scratch, Out::Alloc);
}

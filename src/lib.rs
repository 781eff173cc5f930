//! Small dense linear algebra on `f64` vectors and matrices.
//!
//! Everything lives in [`smallmat_linalg`]; this crate re-exports it and
//! hosts the integration tests.

pub use smallmat_linalg::*;

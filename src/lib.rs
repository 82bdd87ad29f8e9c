//! Numerical root finding for real univariate polynomials of arbitrary degree.
//!
//! Given only a coefficient list, [`solve`](solver::solve) returns all
//! `degree` roots (real and complex, with multiplicity), without any
//! user-supplied initial guess. The pipeline runs the Aberth-Ehrlich
//! simultaneous iteration from five different seeding strategies, polishes
//! each estimate with Newton-Raphson, merges the runs, recovers roots the
//! seeding missed from a fixed set of canonical starting points, and finally
//! expands clustered duplicates into multiplicity groups so the output length
//! is always exactly the degree.
//!
//! ```
//! use poly_solve::{Poly64, SolverConfig};
//!
//! // x^2 - 4
//! let p = Poly64::from_descending_real(&[1.0, 0.0, -4.0]);
//! let cfg = SolverConfig {
//!     seed: Some(1),
//!     ..SolverConfig::default()
//! };
//! let roots = p.roots(&cfg).unwrap();
//! assert_eq!(roots.len(), 2);
//! assert!(roots.iter().any(|r| (r.re - 2.0).abs() < 1e-6));
//! assert!(roots.iter().any(|r| (r.re + 2.0).abs() < 1e-6));
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

mod scalar;
pub use scalar::RealScalar;

mod error;
pub use error::{Error, Result};

mod poly;
pub use poly::Poly;

pub mod solver;
pub use solver::{solve, GuessStrategy, Root, RootOrigin, SolverConfig};

#[doc(hidden)]
pub mod util;

/// A `f64` polynomial, the type most users want.
pub type Poly64 = Poly<f64>;

/// Shorthand for complex literals.
///
/// ```
/// use poly_solve::complex;
///
/// let z = complex!(1.0, -2.0);
/// assert_eq!(z.re, 1.0);
/// let r = complex!(3.0);
/// assert_eq!(r.im, 0.0);
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

/// Shorthand for a polynomial from real coefficients, least significant first.
///
/// ```
/// use poly_solve::poly;
///
/// // 1 + 2x + 3x^2
/// let p = poly![1.0, 2.0, 3.0];
/// assert_eq!(p.degree(), 2);
/// ```
#[macro_export]
macro_rules! poly {
    [$($coeff:expr),* $(,)?] => {
        $crate::Poly::from_real_slice(&[$($coeff),*])
    };
}

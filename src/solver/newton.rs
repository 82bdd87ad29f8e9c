use num::Complex;

use crate::{Poly, RealScalar};

/// Polish a single estimate with classic Newton-Raphson steps.
///
/// Stops early when the step magnitude drops below `epsilon` (converged) or
/// when the derivative magnitude drops below `guard`. A derivative stall near
/// a multiple root is expected, not fatal: the pre-failure value is returned
/// and may be recovered by a later run or the fallback search.
pub(crate) fn refine_one<T: RealScalar>(
    poly: &Poly<T>,
    deriv: &Poly<T>,
    start: Complex<T>,
    epsilon: T,
    guard: T,
    max_iter: usize,
) -> Complex<T> {
    let mut x = start;
    for _ in 0..max_iter {
        let pv = poly.eval(x);
        let dv = deriv.eval(x);

        if dv.norm() < guard {
            break;
        }

        let next = x - pv / dv;
        if (next - x).norm() < epsilon {
            return next;
        }
        x = next;
    }
    x
}

/// Refine each estimate independently, preserving order.
pub(crate) fn refine_all<T: RealScalar>(
    poly: &Poly<T>,
    deriv: &Poly<T>,
    estimates: &[Complex<T>],
    epsilon: T,
    guard: T,
    max_iter: usize,
) -> Vec<Complex<T>> {
    estimates
        .iter()
        .map(|&z| refine_one(poly, deriv, z, epsilon, guard, max_iter))
        .collect()
}

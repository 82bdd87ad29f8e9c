//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

/// Uniform random complex number in the square `[-radius, radius]^2`.
#[must_use]
pub fn random_complex(rng: &mut Rng, radius: f64) -> Complex64 {
    let re = rng.f64().mul_add(2.0 * radius, -radius);
    let im = rng.f64().mul_add(2.0 * radius, -radius);
    Complex64::new(re, im)
}

/// A random set of well-separated roots, suitable as a known answer.
///
/// Rejects candidates closer than `min_separation` to an earlier root, so
/// the generated polynomial has no accidental near-multiple roots.
#[must_use]
pub fn random_separated_roots(
    rng: &mut Rng,
    degree: usize,
    radius: f64,
    min_separation: f64,
) -> Vec<Complex64> {
    let mut roots: Vec<Complex64> = vec![];
    while roots.len() < degree {
        let candidate = random_complex(rng, radius);
        if roots.iter().all(|r| (candidate - r).norm() >= min_separation) {
            roots.push(candidate);
        }
    }
    roots
}

/// A random set of well-separated conjugate root pairs, plus one real root
/// when `degree` is odd. Expanding these yields real coefficients.
#[must_use]
pub fn random_conjugate_roots(
    rng: &mut Rng,
    degree: usize,
    radius: f64,
    min_separation: f64,
) -> Vec<Complex64> {
    let mut roots: Vec<Complex64> = vec![];
    if degree % 2 == 1 {
        roots.push(Complex64::new(rng.f64().mul_add(2.0 * radius, -radius), 0.0));
    }
    while roots.len() < degree {
        let candidate = random_complex(rng, radius);
        // a pair closer than the separation to the real axis would collide
        // with its own conjugate
        if candidate.im.abs() < min_separation / 2.0 {
            continue;
        }
        let pair = [candidate, candidate.conj()];
        if roots
            .iter()
            .all(|r| pair.iter().all(|c| (c - r).norm() >= min_separation))
        {
            roots.extend(pair);
        }
    }
    roots
}

/// A random set of well-separated purely real roots.
#[must_use]
pub fn random_real_roots(
    rng: &mut Rng,
    degree: usize,
    radius: f64,
    min_separation: f64,
) -> Vec<Complex64> {
    let mut roots: Vec<Complex64> = vec![];
    while roots.len() < degree {
        let candidate = Complex64::new(rng.f64().mul_add(2.0 * radius, -radius), 0.0);
        if roots.iter().all(|r| (candidate - r).norm() >= min_separation) {
            roots.push(candidate);
        }
    }
    roots
}

/// Check that two root multisets match within `tol`, in any order.
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Pretty-print a root set for assertion messages.
#[must_use]
pub fn fmt_roots(roots: &[Complex64]) -> String {
    roots.iter().map(|r| format!("{r:.6}")).join(", ")
}

//! The simultaneous-iteration root-finding engine.
//!
//! [`solve`] runs the full pipeline: for each seeding strategy, an
//! Aberth-Ehrlich run followed by Newton-Raphson refinement; refined roots
//! with a residual below the fallback tolerance merge into a growing
//! accepted set (first accepted wins); if fewer roots than the degree were
//! found, a fallback search probes nine canonical starting points; finally
//! the multiplicity resolver expands clusters and pads or truncates so the
//! output length is exactly the degree.
//!
//! Every invocation is a self-contained computation over immutable inputs,
//! so concurrent solves never need locking. Runs merge in their fixed
//! strategy order, which keeps root identity deterministic under a fixed
//! seed. Cost grows as O(degree²) per Aberth sweep; there is no intrinsic
//! degree limit beyond that.

use num::Complex;

use crate::{Error, Poly, RealScalar, Result};

mod aberth;
mod config;
mod initial_guess;
mod multiplicity;
mod newton;

pub use config::SolverConfig;
pub use initial_guess::GuessStrategy;

/// How a returned root was produced.
///
/// The value contract is identical for all three: callers that only want the
/// root values can ignore this entirely. It exists so that a genuinely
/// clustered multiple root can be told apart from an entry the resolver
/// manufactured after the search came up short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOrigin {
    /// Converged through the Aberth-Ehrlich and Newton-Raphson pipeline.
    Refined,

    /// Recovered by the canonical-point fallback search.
    Fallback,

    /// Manufactured by padding when fewer distinct roots were found than the
    /// degree requires. The value repeats another root (or zero) and is not
    /// guaranteed to be correct.
    Padded,
}

/// One solved root, with the residual `f(root)` as a quality check.
#[derive(Clone, Copy, Debug)]
pub struct Root<T: RealScalar> {
    pub value: Complex<T>,

    /// The polynomial evaluated at [`Root::value`]; near zero indicates a
    /// good solution. Callers should surface this so solution quality can be
    /// judged, particularly for [`RootOrigin::Padded`] entries.
    pub residual: Complex<T>,

    pub origin: RootOrigin,
}

impl<T: RealScalar> Root<T> {
    /// Whether the root is real, i.e. its imaginary magnitude is below 1e-10.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.value.im.abs() < T::from_f64(1e-10).expect("overflow")
    }
}

/// Find all `degree` roots of `poly`, real and complex, with multiplicity.
///
/// The returned list always has exactly `degree` entries, sorted by real
/// part ascending with ties broken by imaginary part ascending, even when
/// the search fails to separate some roots (see [`RootOrigin`]).
///
/// # Errors
/// - [`Error::NoCoefficients`] for an empty coefficient list
/// - [`Error::DegreeZero`] for a constant polynomial
pub fn solve<T: RealScalar>(poly: &Poly<T>, cfg: &SolverConfig<T>) -> Result<Vec<Root<T>>> {
    let degree = match poly.len() {
        0 => return Err(Error::NoCoefficients),
        1 => return Err(Error::DegreeZero),
        n => n - 1,
    };

    let mut rng = cfg
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let deriv = poly.diff();

    let mut accepted: Vec<(Complex<T>, RootOrigin)> = vec![];

    for (run, strategy) in GuessStrategy::ALL
        .iter()
        .copied()
        .cycle()
        .take(cfg.runs)
        .enumerate()
    {
        let seeds = strategy.seeds(degree, cfg.guess_range, &mut rng);
        let outcome = aberth::aberth_ehrlich(poly, &deriv, cfg, &seeds);
        log::debug!(
            "run {run} ({strategy:?}): aberth {} after {} sweeps",
            if outcome.converged {
                "converged"
            } else {
                "hit the iteration cap"
            },
            outcome.iterations,
        );

        let refined = newton::refine_all(
            poly,
            &deriv,
            &outcome.points,
            cfg.newton_epsilon,
            cfg.derivative_guard,
            cfg.max_newton_iter,
        );

        for root in refined {
            // refinement can leave an estimate stranded far from any root;
            // only a genuine root (small residual) may enter the accepted set
            if poly.eval(root).norm() < cfg.fallback_epsilon
                && !is_duplicate(&accepted, root, cfg.merge_distance)
            {
                accepted.push((root, RootOrigin::Refined));
            }
        }
    }

    if accepted.len() < degree {
        log::debug!(
            "found {} of {degree} roots, probing canonical fallback points",
            accepted.len(),
        );
        fallback_search(poly, &deriv, cfg, &mut accepted);
    }

    let resolved = multiplicity::resolve(accepted, degree, cfg.merge_distance, cfg.zero_threshold);

    Ok(resolved
        .into_iter()
        .map(|(value, origin)| Root {
            value,
            residual: poly.eval(value),
            origin,
        })
        .collect())
}

fn is_duplicate<T: RealScalar>(
    accepted: &[(Complex<T>, RootOrigin)],
    candidate: Complex<T>,
    merge_distance: T,
) -> bool {
    accepted
        .iter()
        .any(|&(existing, _)| (candidate - existing).norm() < merge_distance)
}

/// Probe a fixed set of canonical starting points with Newton-Raphson.
///
/// The random and geometric seeding strategies systematically miss roots at
/// or very near the origin and the axes; these nine points cover exactly
/// those spots. A probe result is only accepted if it is genuinely a root
/// (residual below the fallback tolerance) and not a duplicate.
fn fallback_search<T: RealScalar>(
    poly: &Poly<T>,
    deriv: &Poly<T>,
    cfg: &SolverConfig<T>,
    accepted: &mut Vec<(Complex<T>, RootOrigin)>,
) {
    let zero = T::zero();
    let one = T::one();
    let canonical = [
        Complex::new(zero, zero),
        Complex::new(one, zero),
        Complex::new(-one, zero),
        Complex::new(zero, one),
        Complex::new(zero, -one),
        Complex::new(one, one),
        Complex::new(-one, one),
        Complex::new(one, -one),
        Complex::new(-one, -one),
    ];

    for start in canonical {
        let x = newton::refine_one(
            poly,
            deriv,
            start,
            cfg.fallback_epsilon,
            cfg.derivative_guard,
            cfg.max_fallback_iter,
        );
        if !is_duplicate(accepted, x, cfg.merge_distance)
            && poly.eval(x).norm() < cfg.fallback_epsilon
        {
            log::trace!("fallback probe from {start:?} recovered root {x:?}");
            accepted.push((x, RootOrigin::Fallback));
        }
    }
}

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding all roots, discarding residuals and
    /// provenance. See [`solve`].
    ///
    /// # Errors
    /// Same as [`solve`]: the input must have at least two coefficients.
    pub fn roots(&self, cfg: &SolverConfig<T>) -> Result<Vec<Complex<T>>> {
        solve(self, cfg).map(|roots| roots.into_iter().map(|r| r.value).collect())
    }
}

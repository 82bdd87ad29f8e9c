use num::{Complex, One, Zero};

use crate::{Poly, RealScalar};

use super::SolverConfig;

/// Final state of one Aberth-Ehrlich run.
pub(crate) struct AberthOutcome<T: RealScalar> {
    pub points: Vec<Complex<T>>,
    pub iterations: usize,
    pub converged: bool,
}

/// Advance all estimates simultaneously with the Aberth-Ehrlich correction.
///
/// Each sweep computes every correction from a consistent snapshot of the
/// previous sweep's full vector before any point moves (Jacobi-style, not
/// Gauss-Seidel). The coupling sum makes the estimates mutually repel, which
/// separates nearby roots that plain Newton iteration cannot resolve.
///
/// Non-convergence within the iteration cap is not an error: the caller
/// hands whatever state was reached to the Newton refiner.
pub(crate) fn aberth_ehrlich<T: RealScalar>(
    poly: &Poly<T>,
    deriv: &Poly<T>,
    cfg: &SolverConfig<T>,
    initial_guesses: &[Complex<T>],
) -> AberthOutcome<T> {
    let n = initial_guesses.len();
    let mut points = initial_guesses.to_vec();
    let mut corrections = vec![Complex::<T>::zero(); n];

    for iteration in 1..=cfg.max_aberth_iter {
        corrections.fill(Complex::zero());

        for i in 0..n {
            let pv = poly.eval(points[i]);
            let dv = deriv.eval(points[i]);

            // a vanishing derivative means we are near a multiple root;
            // freeze this estimate for the sweep instead of blowing up
            if dv.norm() < cfg.derivative_guard {
                continue;
            }

            let c = pv / dv;

            let mut s = Complex::<T>::zero();
            for j in 0..n {
                if j == i {
                    continue;
                }
                let diff = points[i] - points[j];
                // skip collided estimates
                if diff.norm() > cfg.derivative_guard {
                    s = s + Complex::<T>::one() / diff;
                }
            }

            corrections[i] = Complex::<T>::one() / (c - s);
        }

        let mut converged = true;
        for (point, w) in points.iter_mut().zip(corrections.iter()) {
            let next = *point - *w;
            if (next - *point).norm() > cfg.aberth_epsilon {
                converged = false;
            }
            *point = next;
        }

        log::trace!("aberth sweep {iteration}: {points:?}");

        if converged {
            return AberthOutcome {
                points,
                iterations: iteration,
                converged: true,
            };
        }
    }

    AberthOutcome {
        points,
        iterations: cfg.max_aberth_iter,
        converged: false,
    }
}

#[cfg(test)]
mod test {
    use super::aberth_ehrlich;
    use crate::{
        complex,
        solver::{newton, GuessStrategy, SolverConfig},
        Poly64,
    };

    #[test]
    fn cap_out_returns_full_state() {
        // the simultaneous iteration scatters rather than settles; the
        // contract is that the cap-out state comes back intact, finite,
        // and at full length for the refiner to work on
        let poly = Poly64::from_roots(&[complex!(1.0), complex!(2.0), complex!(3.0)]);
        let deriv = poly.diff();
        let cfg = SolverConfig::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let guesses = GuessStrategy::Circle.seeds(3, 10.0, &mut rng);

        let outcome = aberth_ehrlich(&poly, &deriv, &cfg, &guesses);
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, cfg.max_aberth_iter);
        assert_eq!(outcome.points.len(), 3);
        for p in &outcome.points {
            assert!(p.re.is_finite() && p.im.is_finite());
        }
    }

    #[test]
    fn capped_state_is_recoverable_by_refinement() {
        let expected = [complex!(1.0), complex!(2.0), complex!(3.0)];
        let poly = Poly64::from_roots(&expected);
        let deriv = poly.diff();
        let cfg = SolverConfig::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let guesses = GuessStrategy::Circle.seeds(3, 10.0, &mut rng);

        let outcome = aberth_ehrlich(&poly, &deriv, &cfg, &guesses);
        let refined = newton::refine_all(&poly, &deriv, &outcome.points, 1e-12, 1e-12, 500);
        for r in refined {
            let dist = expected.iter().map(|e| (r - *e).norm()).fold(f64::MAX, f64::min);
            assert!(dist < 1e-6, "refined point {r} is not near any root");
        }
    }

    #[test]
    fn vanishing_derivative_freezes_estimate() {
        // (x - 1)^2 has a vanishing derivative at the double root, so an
        // estimate placed exactly there must not move
        let poly = Poly64::from_roots(&[complex!(1.0), complex!(1.0)]);
        let deriv = poly.diff();
        let cfg = SolverConfig::default();
        let guesses = [complex!(1.0), complex!(5.0)];

        let outcome = aberth_ehrlich(&poly, &deriv, &cfg, &guesses);
        assert_eq!(outcome.points[0], complex!(1.0));
    }

    #[test]
    fn collided_estimates_skip_coupling_without_blowing_up() {
        let poly = Poly64::from_roots(&[complex!(1.0), complex!(2.0)]);
        let deriv = poly.diff();
        let cfg = SolverConfig {
            max_aberth_iter: 1,
            ..SolverConfig::default()
        };
        // identical points would divide by zero in the coupling sum
        let guesses = [complex!(0.0), complex!(0.0)];

        let outcome = aberth_ehrlich(&poly, &deriv, &cfg, &guesses);
        assert_eq!(outcome.points[0], outcome.points[1]);
        assert!((outcome.points[0] - complex!(1.5)).norm() < 1e-12);
    }

    #[test]
    fn iteration_cap_returns_state() {
        let poly = Poly64::from_roots(&[complex!(1.0), complex!(2.0), complex!(3.0)]);
        let deriv = poly.diff();
        let cfg = SolverConfig {
            max_aberth_iter: 1,
            ..SolverConfig::default()
        };
        let mut rng = fastrand::Rng::with_seed(7);
        let guesses = GuessStrategy::Circle.seeds(3, 10.0, &mut rng);

        let outcome = aberth_ehrlich(&poly, &deriv, &cfg, &guesses);
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.points.len(), 3);
    }
}

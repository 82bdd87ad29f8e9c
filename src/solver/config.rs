use crate::RealScalar;

/// Tolerances and iteration caps for one solve invocation.
///
/// All fields are independent and safe to override individually; defaults
/// are applied only here, never inside the algorithm code. The configuration
/// is read-only for the duration of a solve.
#[derive(Clone, Debug)]
pub struct SolverConfig<T: RealScalar> {
    /// Derivative magnitudes below this are treated as a vanishing
    /// derivative: the affected Newton or Aberth step is skipped instead of
    /// dividing by a near-zero value. Also guards collided estimates in the
    /// Aberth coupling sum.
    pub derivative_guard: T,

    /// Aberth-Ehrlich convergence tolerance on the per-sweep step magnitude.
    pub aberth_epsilon: T,

    /// Maximum number of Aberth-Ehrlich sweeps per run.
    pub max_aberth_iter: usize,

    /// Newton-Raphson refinement convergence tolerance on the step magnitude.
    pub newton_epsilon: T,

    /// Maximum number of Newton-Raphson refinement steps per estimate.
    pub max_newton_iter: usize,

    /// Looser tolerance used by the fallback search, both as its Newton step
    /// tolerance and as the residual bound a probed point must satisfy to be
    /// accepted as a genuine root. The same residual bound gates refined
    /// estimates from the main runs, so a diverged estimate cannot enter the
    /// accepted set.
    pub fallback_epsilon: T,

    /// Maximum number of Newton-Raphson steps per fallback probe.
    pub max_fallback_iter: usize,

    /// Two roots closer than this are considered the same root.
    pub merge_distance: T,

    /// Real or imaginary parts below this magnitude are snapped to zero in
    /// the output, so a root computed as `1e-14 + 2i` is reported as `2i`.
    pub zero_threshold: T,

    /// Magnitude of the square the initial guesses are drawn from.
    pub guess_range: T,

    /// Number of independent seeding runs. The five seeding strategies are
    /// consumed in order and cycle if more runs are requested.
    pub runs: usize,

    /// Seed for the per-solve random source. `None` seeds from entropy, so
    /// repeated solves are not forced identical; fix it for deterministic
    /// tests.
    pub seed: Option<u64>,
}

impl<T: RealScalar> Default for SolverConfig<T> {
    fn default() -> Self {
        let f = |x: f64| T::from_f64(x).expect("overflow");
        Self {
            derivative_guard: f(1e-12),
            aberth_epsilon: f(1e-10),
            max_aberth_iter: 100,
            newton_epsilon: f(1e-12),
            max_newton_iter: 30,
            fallback_epsilon: f(1e-6),
            max_fallback_iter: 50,
            merge_distance: f(1e-6),
            zero_threshold: f(1e-8),
            guess_range: f(10.0),
            runs: 5,
            seed: None,
        }
    }
}

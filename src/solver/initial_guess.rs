use num::Complex;

use crate::RealScalar;

/// Seeding strategies for the initial root estimates.
///
/// No single seeding heuristic reliably separates all root configurations:
/// clustered roots want dense seeds, real-axis-dominant polynomials want
/// near-real seeds, widely spread roots want a large square. The solver runs
/// every strategy and merges the results, which maximizes coverage at the
/// cost of a fixed multiple of the per-run iteration work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessStrategy {
    /// Uniform random in the square `[-R, R]^2`.
    UniformSquare,

    /// Evenly spaced on a circle of radius `0.5 R`.
    Circle,

    /// Uniform random in the smaller square `[-0.3 R, 0.3 R]^2`.
    SmallSquare,

    /// Random real part in `[-R, R]`, imaginary part confined to
    /// `[-0.1, 0.1]`, biased towards near-real roots.
    NearRealAxis,

    /// Uniform random in `[-0.5 R, 0.5 R]^2`, a denser variant of
    /// [`GuessStrategy::UniformSquare`].
    HalfSquare,
}

impl GuessStrategy {
    /// All strategies in their fixed run order.
    pub const ALL: [Self; 5] = [
        Self::UniformSquare,
        Self::Circle,
        Self::SmallSquare,
        Self::NearRealAxis,
        Self::HalfSquare,
    ];

    /// Produce `degree` seed points within a square of magnitude `range`.
    pub(crate) fn seeds<T: RealScalar>(
        self,
        degree: usize,
        range: T,
        rng: &mut fastrand::Rng,
    ) -> Vec<Complex<T>> {
        let f = |x: f64| T::from_f64(x).expect("overflow");
        match self {
            Self::UniformSquare => square(degree, range, rng),
            Self::Circle => {
                let radius = range * f(0.5);
                (0..degree)
                    .map(|i| {
                        let angle = T::TAU() * f(i as f64) / f(degree as f64);
                        Complex::from_polar(radius, angle)
                    })
                    .collect()
            }
            Self::SmallSquare => square(degree, range * f(0.3), rng),
            Self::NearRealAxis => (0..degree)
                .map(|_| Complex::new(uniform(rng, -range, range), uniform(rng, f(-0.1), f(0.1))))
                .collect(),
            Self::HalfSquare => square(degree, range * f(0.5), rng),
        }
    }
}

fn uniform<T: RealScalar>(rng: &mut fastrand::Rng, min: T, max: T) -> T {
    T::from_f64(rng.f64())
        .expect("overflow")
        .mul_add(max - min, min)
}

fn square<T: RealScalar>(degree: usize, half_side: T, rng: &mut fastrand::Rng) -> Vec<Complex<T>> {
    (0..degree)
        .map(|_| {
            Complex::new(
                uniform(rng, -half_side, half_side),
                uniform(rng, -half_side, half_side),
            )
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::GuessStrategy;

    #[test]
    fn seed_count_matches_degree() {
        let mut rng = fastrand::Rng::with_seed(0);
        for strategy in GuessStrategy::ALL {
            for degree in [1, 2, 7] {
                assert_eq!(strategy.seeds::<f64>(degree, 10.0, &mut rng).len(), degree);
            }
        }
    }

    #[test]
    fn circle_is_deterministic() {
        let mut rng = fastrand::Rng::with_seed(0);
        let seeds = GuessStrategy::Circle.seeds::<f64>(4, 10.0, &mut rng);
        // radius 5, angles 0, 90, 180, 270 degrees
        assert!((seeds[0].re - 5.0).abs() < 1e-12);
        assert!((seeds[1].im - 5.0).abs() < 1e-12);
        assert!((seeds[2].re + 5.0).abs() < 1e-12);
        assert!((seeds[3].im + 5.0).abs() < 1e-12);
    }

    #[test]
    fn near_real_axis_confines_imaginary_part() {
        let mut rng = fastrand::Rng::with_seed(1);
        let seeds = GuessStrategy::NearRealAxis.seeds::<f64>(100, 10.0, &mut rng);
        assert!(seeds.iter().all(|z| z.im.abs() <= 0.1));
        assert!(seeds.iter().all(|z| z.re.abs() <= 10.0));
    }

    #[test]
    fn squares_stay_in_bounds() {
        let mut rng = fastrand::Rng::with_seed(2);
        let seeds = GuessStrategy::SmallSquare.seeds::<f64>(100, 10.0, &mut rng);
        assert!(seeds.iter().all(|z| z.re.abs() <= 3.0 && z.im.abs() <= 3.0));
    }
}

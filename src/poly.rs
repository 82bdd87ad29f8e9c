use std::fmt;

use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::{
    util::complex::{complex_fmt, complex_sort_mut},
    RealScalar,
};

/// Polynomial as a dense list of complex coefficients, least significant
/// first.
///
/// Coefficients are stored in ascending degree order internally; the
/// conventional "highest degree first" input format is accepted through
/// [`Poly::from_descending_real`]. Real inputs are promoted to complex,
/// because intermediate root estimates are generically complex even for
/// real-coefficient polynomials.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a new polynomial from complex coefficients, least significant
    /// first. Leading zero coefficients are trimmed.
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_vec()).normalize()
    }

    /// Create a new polynomial from real coefficients, least significant
    /// first.
    #[must_use]
    pub fn from_real_slice(coeffs: &[T]) -> Self {
        Self(
            coeffs
                .iter()
                .map(|&c| Complex::new(c, T::zero()))
                .collect_vec(),
        )
        .normalize()
    }

    /// Create a new polynomial from real coefficients ordered from the
    /// highest-degree term down to the constant term, i.e. `[1, 0, -4]` is
    /// `x^2 - 4`.
    ///
    /// Leading zero coefficients are trimmed, so the degree (and the number
    /// of roots found) follows the first nonzero coefficient: `[0, 0, 1, -4]`
    /// is `x - 4`, a degree-1 polynomial with a single root.
    #[must_use]
    pub fn from_descending_real(coeffs: &[T]) -> Self {
        Self(
            coeffs
                .iter()
                .rev()
                .map(|&c| Complex::new(c, T::zero()))
                .collect_vec(),
        )
        .normalize()
    }

    /// Monic polynomial from its complex roots, the expansion of
    /// `(x - r_1)(x - r_2)...(x - r_n)`.
    #[must_use]
    pub fn from_roots(roots: &[Complex<T>]) -> Self {
        if roots.is_empty() {
            return Self(vec![Complex::one()]);
        }

        let mut roots = roots.to_vec();
        complex_sort_mut(&mut roots);

        roots
            .into_iter()
            .fold(Self(vec![Complex::one()]), |acc, r| acc.mul_linear(-r))
    }

    /// Multiply by the linear factor `(x + c0)`.
    fn mul_linear(self, c0: Complex<T>) -> Self {
        let mut out = vec![Complex::zero(); self.0.len() + 1];
        for (i, c) in self.0.iter().enumerate() {
            out[i] = out[i] + *c * c0;
            out[i + 1] = out[i + 1] + *c;
        }
        Self(out)
    }

    /// Number of coefficients, degree + 1 for non-empty polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Degree of the polynomial.
    ///
    /// # Panics
    /// On an empty polynomial, which has no degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        assert!(!self.is_empty(), "an empty polynomial has no degree");
        self.degree_raw()
    }

    pub(crate) fn degree_raw(&self) -> usize {
        self.0.len() - 1
    }

    /// Coefficients in ascending degree order.
    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.0
    }

    fn is_normalized(&self) -> bool {
        match self.0.len() {
            0 => true,
            // a constant is always normalized, it may be the constant zero
            1 => true,
            n => !self.0[n - 1].is_zero(),
        }
    }

    /// Remove leading zero coefficients.
    fn normalize(mut self) -> Self {
        while self.0.len() > 1 && self.0[self.0.len() - 1].is_zero() {
            self.0.pop();
        }
        debug_assert!(self.is_normalized());
        self
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        let mut y = Complex::zero();
        for &c in self.0.iter().rev() {
            y = y * x + c;
        }
        y
    }

    /// First derivative as a new polynomial, by the power rule.
    #[must_use]
    pub fn diff(&self) -> Self {
        if self.0.len() <= 1 {
            return Self(vec![Complex::zero()]);
        }

        let coeffs = self
            .0
            .iter()
            .enumerate()
            .skip(1) // derivative of the constant term is zero
            .map(|(n, c)| c.scale(T::from_usize(n).expect("degree too high to convert to T")))
            .collect_vec();
        Self(coeffs)
    }

    /// Evaluate the k-th derivative at `x` without materializing the
    /// derivative polynomial.
    ///
    /// The k-th derivative coefficients are the original coefficients scaled
    /// by a falling factorial, evaluated with Horner's scheme for numerical
    /// stability at high order. For `k == 0` and `k == 1` this agrees exactly
    /// with [`Poly::eval`] and [`Poly::diff`].
    #[must_use]
    pub fn eval_nth_derivative(&self, x: Complex<T>, k: usize) -> Complex<T> {
        match k {
            0 => return self.eval(x),
            1 => return self.diff().eval(x),
            _ => {}
        }

        if k >= self.0.len() {
            return Complex::zero();
        }

        let mut y = Complex::zero();
        for i in (0..self.0.len() - k).rev() {
            // falling factorial (i+k)(i+k-1)...(i+1)
            let mut scale = T::one();
            for j in (i + 1)..=(i + k) {
                scale = scale * T::from_usize(j).expect("degree too high to convert to T");
            }
            y = y * x + self.0[i + k].scale(scale);
        }
        y
    }
}

/// Renders the conventional equation form, highest-degree term first.
///
/// Zero coefficients are omitted, a coefficient of one is omitted except on
/// the constant term, and positive non-leading terms are prefixed with `+ `.
impl<T: RealScalar> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        let degree = self.degree_raw();
        let mut terms: Vec<String> = vec![];
        for (i, c) in self.0.iter().rev().enumerate() {
            if c.is_zero() {
                continue;
            }
            let power = degree - i;
            let body = if power == 0 {
                complex_fmt(c)
            } else if c.is_one() {
                if power == 1 {
                    "x".to_string()
                } else {
                    format!("x^{power}")
                }
            } else if power == 1 {
                format!("{}x", complex_fmt(c))
            } else {
                format!("{}x^{power}", complex_fmt(c))
            };
            if i > 0 && c.im.is_zero() && c.re > T::zero() {
                terms.push(format!("+ {body}"));
            } else {
                terms.push(body);
            }
        }

        if terms.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", terms.join(" "))
    }
}

#[cfg(test)]
mod test {
    use num::{Complex, Zero};

    use crate::{complex, poly, Poly64};

    #[test]
    fn eval_horner() {
        // 1 + 2x + 3x^2
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.eval(complex!(1.0)), complex!(6.0));
        assert_eq!(p.eval(complex!(-1.0)), complex!(2.0));
        assert_eq!(p.eval(complex!(0.0, 1.0)), complex!(-2.0, 2.0));
    }

    #[test]
    fn descending_matches_ascending() {
        let p = Poly64::from_descending_real(&[3.0, 2.0, 1.0]);
        assert_eq!(p, poly![1.0, 2.0, 3.0]);
    }

    #[test]
    fn leading_zeros_are_trimmed() {
        let p = Poly64::from_descending_real(&[0.0, 0.0, 1.0, -4.0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p, poly![-4.0, 1.0]);
    }

    #[test]
    fn diff_power_rule() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.diff(), poly![2.0, 6.0]);
        assert_eq!(poly![5.0].diff(), poly![0.0]);
    }

    #[test]
    fn nth_derivative_agrees_with_eval_and_diff() {
        let p = poly![1.0, -3.0, 0.0, 2.0, 4.0];
        let xs = [complex!(0.5), complex!(-1.5, 2.0), complex!(0.0)];
        for x in xs {
            assert_eq!(p.eval_nth_derivative(x, 0), p.eval(x));
            assert_eq!(p.eval_nth_derivative(x, 1), p.diff().eval(x));
            // second derivative by repeated power rule
            let d2 = p.diff().diff().eval(x);
            let h2 = p.eval_nth_derivative(x, 2);
            assert!((d2 - h2).norm() < 1e-12, "{d2} != {h2}");
        }
    }

    #[test]
    fn nth_derivative_past_degree_is_zero() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.eval_nth_derivative(complex!(2.0), 3), Complex::zero());
        assert_eq!(p.eval_nth_derivative(complex!(2.0), 10), Complex::zero());
    }

    #[test]
    fn from_roots_expands() {
        // (x - 1)(x + 2) = x^2 + x - 2
        let p = Poly64::from_roots(&[complex!(1.0), complex!(-2.0)]);
        assert_eq!(p, poly![-2.0, 1.0, 1.0]);
    }

    #[test]
    fn display_equation_form() {
        assert_eq!(
            Poly64::from_descending_real(&[1.0, 0.0, -4.0]).to_string(),
            "x^2 -4"
        );
        assert_eq!(
            Poly64::from_descending_real(&[1.0, 0.0, -2.0, 1.0]).to_string(),
            "x^3 -2x + 1"
        );
        assert_eq!(
            Poly64::from_descending_real(&[2.0, 3.0, 1.0]).to_string(),
            "2x^2 + 3x + 1"
        );
        assert_eq!(Poly64::from_descending_real(&[5.0]).to_string(), "5");
        assert_eq!(Poly64::from_descending_real(&[0.0]).to_string(), "0");
    }
}

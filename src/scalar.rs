use std::fmt;

use num::{traits::FloatConst, Float, FromPrimitive};

/// Real number types that can back [`Poly`](crate::Poly) coefficients.
///
/// Blanket-implemented for anything float-like, in practice `f32` and `f64`.
pub trait RealScalar:
    Float + FloatConst + FromPrimitive + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl<T> RealScalar for T where
    T: Float + FloatConst + FromPrimitive + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

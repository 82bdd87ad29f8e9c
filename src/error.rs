use thiserror::Error;

/// The top-level error type for this crate.
///
/// Invalid input is the only condition a solve rejects. Numerical stalls and
/// under-convergence are absorbed by the solver and reflected only in the
/// quality of the returned roots, see [`RootOrigin`](crate::RootOrigin).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The coefficient list was empty, not even a constant term.
    #[error("coefficient list is empty")]
    NoCoefficients,

    /// A single coefficient is a constant polynomial and has no roots.
    #[error("polynomial has degree 0, there are no roots to find")]
    DegreeZero,

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

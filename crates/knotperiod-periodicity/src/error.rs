//! Errors raised while building or running a periodicity check.

use knotperiod_integers::DomainError;
use knotperiod_poly::ParsePolyError;
use thiserror::Error;

/// Errors from the periodicity checkers.
///
/// Unsupported configurations (`UnsupportedPeriod`, `CharacteristicClash`)
/// only end the check for one period; the dispatcher renders them as
/// verdict lines and moves on.
#[derive(Debug, Error)]
pub enum PeriodicityError {
    /// The diagram is a link with more than one component.
    #[error("not a knot: the diagram has {0} components")]
    NotAKnot(usize),

    /// A polynomial of the spectral sequence does not factor as expected.
    #[error("{dividend} is not divisible by {divisor}")]
    NonTerminatingFactorization {
        /// The polynomial being divided.
        dividend: String,
        /// The expected factor.
        divisor: String,
    },

    /// The criterion has no implementation for this period.
    #[error("the criterion does not support period {0}")]
    UnsupportedPeriod(u32),

    /// The period is a multiple of the characteristic of the coefficient
    /// field.
    #[error("period must be coprime to field characteristic")]
    CharacteristicClash {
        /// The requested period.
        period: u32,
        /// Characteristic of the coefficient field.
        characteristic: u64,
    },

    /// A field selector other than `Z2`, `Z3`, `Z5`, `Z7`, `Z11` or `Q`.
    #[error("unknown coefficient field `{0}`")]
    UnknownField(String),

    /// A recorded spectral sequence without pages.
    #[error("spectral sequence has no pages")]
    EmptySpectralSequence,

    /// A line of a page file is not a polynomial.
    #[error("line {line}: {source}")]
    InvalidPage {
        /// One-based line number.
        line: usize,
        /// The parse failure.
        source: ParsePolyError,
    },

    /// An arithmetic precondition failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing a verdict failed.
    #[error("failed to write verdict: {0}")]
    Io(#[from] std::io::Error),
}

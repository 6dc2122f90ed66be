//! Errors raised by exact arithmetic.

use thiserror::Error;

/// A violation of the domain of an arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Division (or remainder) by the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// Reciprocal of an element that is not a unit.
    #[error("element is not invertible")]
    NotInvertible,
}

//! # knotperiod-poly
//!
//! Sparse multivariate Laurent polynomials for knotperiod.
//!
//! This crate provides:
//! - Laurent monomials in indexed variables with signed exponents
//! - Laurent polynomials over any [`knotperiod_rings::Ring`]
//! - Substitution, variable inversion and exact division by `1 + m`
//! - A text form that round-trips through `Display` and `FromStr`
//!
//! Multiplication is the plain convolution over the sparse term sets; the
//! polynomials met in periodicity checks have at most a few hundred terms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod laurent;
pub mod monomial;
pub mod parse;

#[cfg(test)]
mod proptests;

pub use laurent::{invert_variable, LaurentPoly};
pub use monomial::{LaurentMonomial, MAX_EXPONENT};
pub use parse::ParsePolyError;

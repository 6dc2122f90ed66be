//! # knotperiod-integers
//!
//! Arbitrary precision integer and rational arithmetic for knotperiod.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Integers modulo a compile-time prime (`ModInt`)
//!
//! Values are plain owned data: a clone never observes mutations of the
//! value it was cloned from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::DomainError;
pub use integer::Integer;
pub use modular::ModInt;
pub use rational::Rational;

/// Error returned when parsing an integer or a rational fails.
pub use dashu::base::error::ParseError;

//! # knotperiod-rings
//!
//! Coefficient rings for knotperiod.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - Concrete implementations: Z, Q, Z2, Z_p
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── EuclideanDomain   (Z)
//!  └── Field             (Q, Z2, Z_p)
//! ```
//!
//! Polynomials and congruence checkers are generic over [`Ring`], so the
//! inner loops are monomorphized per coefficient type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Forwards the arithmetic operators and `Display` of a newtype to its
/// inner value. `/` panics on a zero divisor through the inner type.
macro_rules! forward_newtype_ops {
    ($outer:ident, $inner:ty) => {
        impl std::ops::Add for $outer {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $outer {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul for $outer {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl std::ops::Div for $outer {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                Self(self.0 / rhs.0)
            }
        }

        impl std::ops::Neg for $outer {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl From<$inner> for $outer {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;
pub mod z2;

#[cfg(test)]
mod proptests;

pub use finite_field::{Zp, Z11, Z13, Z17, Z19, Z3, Z5, Z7};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{EuclideanDomain, Field, Ring};
pub use z2::Z2;

//! The field of rational numbers Q.

use std::str::FromStr;

use crate::traits::{field_extended_gcd, field_gcd, Field, Ring};
use knotperiod_integers::{Integer, ParseError, Rational};

/// The field of rational numbers.
///
/// This is a wrapper around `knotperiod_integers::Rational` that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::ratio(num, den))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn recip(&self) -> Self {
        Self(self.0.recip())
    }

    fn divides(&self, n: &Self) -> bool {
        !self.is_zero() || n.is_zero()
    }

    fn gcd(&self, other: &Self) -> Self {
        field_gcd(self, other)
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        field_extended_gcd(self, other)
    }

    fn from_integer(n: &Integer) -> Self {
        Self(Rational::from(n.clone()))
    }

    fn characteristic() -> u64 {
        0
    }

    fn name() -> String {
        "Q".to_string()
    }
}

impl Field for Q {}

forward_newtype_ops!(Q, Rational);

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self(Rational::from(value))
    }
}

impl FromStr for Q {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

//! The ring of integers Z.

use std::str::FromStr;

use crate::traits::{EuclideanDomain, Ring};
use knotperiod_integers::{DomainError, Integer};

/// The ring of integers.
///
/// This is a wrapper around `knotperiod_integers::Integer` that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }

    /// Truncating division with remainder.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `denom` is zero.
    pub fn divide_with_remainder(&self, denom: &Self) -> Result<(Self, Self), DomainError> {
        let (q, r) = self.0.checked_div_rem(&denom.0)?;
        Ok((Self(q), Self(r)))
    }

    /// Division with a remainder in `[0, |denom|)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `denom` is zero.
    pub fn div_rem_euclid(&self, denom: &Self) -> Result<(Self, Self), DomainError> {
        let (q, r) = self.0.div_rem_euclid(&denom.0)?;
        Ok((Self(q), Self(r)))
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::new(0))
    }

    fn one() -> Self {
        Self(Integer::new(1))
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
        self.0.is_unit()
    }

    fn recip(&self) -> Self {
        assert!(self.is_unit(), "{}", DomainError::NotInvertible);
        self.clone()
    }

    fn divides(&self, n: &Self) -> bool {
        self.0.divides(&n.0)
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (d, s, t) = self.0.extended_gcd(&other.0);
        (Self(d), Self(s), Self(t))
    }

    fn from_integer(n: &Integer) -> Self {
        Self(n.clone())
    }

    fn characteristic() -> u64 {
        0
    }

    fn name() -> String {
        "Z".to_string()
    }
}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        match self.divide_with_remainder(other) {
            Ok(qr) => qr,
            Err(e) => panic!("{e}"),
        }
    }

    fn lcm(&self, other: &Self) -> Self {
        Self(self.0.lcm(&other.0))
    }
}

forward_newtype_ops!(Z, Integer);

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl FromStr for Z {
    type Err = knotperiod_integers::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

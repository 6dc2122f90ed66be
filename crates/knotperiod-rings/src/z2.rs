//! The two-element field Z2.
//!
//! Stored as a single `bool`: addition is xor and multiplication is and.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::traits::{field_extended_gcd, field_gcd, Field, Ring};
use knotperiod_integers::{DomainError, Integer};

/// An element of Z/2Z.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z2(bool);

impl Z2 {
    /// Creates an element from its parity.
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Reduces a signed integer modulo 2.
    #[must_use]
    pub const fn from_signed(value: i64) -> Self {
        Self(value.rem_euclid(2) == 1)
    }

    /// Returns true for the element 1.
    #[must_use]
    pub const fn value(self) -> bool {
        self.0
    }
}

impl Ring for Z2 {
    fn zero() -> Self {
        Self(false)
    }

    fn one() -> Self {
        Self(true)
    }

    fn is_zero(&self) -> bool {
        !self.0
    }

    fn is_one(&self) -> bool {
        self.0
    }

    fn is_unit(&self) -> bool {
        self.0
    }

    fn recip(&self) -> Self {
        assert!(self.0, "{}", DomainError::NotInvertible);
        *self
    }

    fn divides(&self, n: &Self) -> bool {
        self.0 || !n.0
    }

    fn gcd(&self, other: &Self) -> Self {
        field_gcd(self, other)
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        field_extended_gcd(self, other)
    }

    fn from_integer(n: &Integer) -> Self {
        use num_traits::Zero;
        let r = n.clone() % Integer::new(2);
        Self(!r.is_zero())
    }

    fn characteristic() -> u64 {
        2
    }

    fn name() -> String {
        "Z2".to_string()
    }
}

impl Field for Z2 {}

impl Add for Z2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Sub for Z2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for Z2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Div for Z2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.0, "{}", DomainError::DivisionByZero);
        self
    }
}

impl Neg for Z2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl From<bool> for Z2 {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<i64> for Z2 {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl fmt::Display for Z2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl FromStr for Z2 {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::from_signed)
    }
}

//! Prime fields Z_p.

use std::str::FromStr;

use crate::traits::{field_extended_gcd, field_gcd, Field, Ring};
use knotperiod_integers::{DomainError, Integer, ModInt, ParseError};

/// The prime field Z_p.
///
/// This wraps `ModInt<P>` and implements the algebraic traits. `P` must be
/// prime for the field conventions to hold.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Zp<const P: u64>(pub ModInt<P>);

impl<const P: u64> Zp<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(ModInt::new(value))
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(ModInt::from_signed(value))
    }

    /// Returns the canonical representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.value()
    }
}

impl<const P: u64> Ring for Zp<P> {
    fn zero() -> Self {
        Self(ModInt::new(0))
    }

    fn one() -> Self {
        Self(ModInt::new(1))
    }

    fn is_zero(&self) -> bool {
        self.0.value() == 0
    }

    fn is_one(&self) -> bool {
        self.0.value() == 1
    }

    fn is_unit(&self) -> bool {
        self.0.inv().is_some()
    }

    fn recip(&self) -> Self {
        match self.0.inv() {
            Some(inv) => Self(inv),
            None => panic!("{}", DomainError::NotInvertible),
        }
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
        Self(ModInt::from_integer(n))
    }

    fn characteristic() -> u64 {
        P
    }

    fn name() -> String {
        format!("Z{P}")
    }
}

impl<const P: u64> Field for Zp<P> {}

impl<const P: u64> std::ops::Add for Zp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<const P: u64> std::ops::Sub for Zp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<const P: u64> std::ops::Mul for Zp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<const P: u64> std::ops::Div for Zp<P> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "{}", DomainError::DivisionByZero);
        Self(self.0 / rhs.0)
    }
}

impl<const P: u64> std::ops::Neg for Zp<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const P: u64> From<u64> for Zp<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for Zp<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> std::fmt::Display for Zp<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> FromStr for Zp<P> {
    type Err = ParseError;

    /// Parses any integer and reduces it modulo `P`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: Integer = s.trim().parse()?;
        Ok(Self::from_integer(&n))
    }
}

/// Z/3Z.
pub type Z3 = Zp<3>;
/// Z/5Z.
pub type Z5 = Zp<5>;
/// Z/7Z.
pub type Z7 = Zp<7>;
/// Z/11Z.
pub type Z11 = Zp<11>;
/// Z/13Z.
pub type Z13 = Zp<13>;
/// Z/17Z.
pub type Z17 = Zp<17>;
/// Z/19Z.
pub type Z19 = Zp<19>;

//! Arbitrary precision integers over `dashu::IBig`.

use dashu::base::{Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::DomainError;

/// An arbitrary precision integer.
///
/// `/` and `%` truncate toward zero like the primitive integers. The
/// checked forms [`Integer::checked_div_rem`] and
/// [`Integer::div_rem_euclid`] report a zero divisor as an error instead
/// of panicking.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates an integer from an `i64`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true for `1` and `-1`.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.0 == IBig::ONE || self.0 == IBig::NEG_ONE
    }

    /// Returns true if `n` is a multiple of `self`; zero divides only zero.
    #[must_use]
    pub fn divides(&self, n: &Self) -> bool {
        match n.checked_div_rem(self) {
            Ok((_, r)) => r.is_zero(),
            Err(_) => n.is_zero(),
        }
    }

    /// Truncating division: `self = q * d + r` with `r` of the sign of
    /// `self` and `|r| < |d|`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `d` is zero.
    pub fn checked_div_rem(&self, d: &Self) -> Result<(Self, Self), DomainError> {
        if d.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok((Self(&self.0 / &d.0), Self(&self.0 % &d.0)))
    }

    /// Euclidean division: `self = q * d + r` with `0 <= r < |d|`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `d` is zero.
    pub fn div_rem_euclid(&self, d: &Self) -> Result<(Self, Self), DomainError> {
        let (q, r) = self.checked_div_rem(d)?;
        if !r.is_negative() {
            return Ok((q, r));
        }
        // shift r by |d| and q by the matching unit
        Ok(if d.is_negative() {
            (q + Self::one(), r - d.clone())
        } else {
            (q - Self::one(), r + d.clone())
        })
    }

    /// Non-negative greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Non-negative least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let product = Self(&self.0 * &other.0);
        let l = product / self.gcd(other);
        if l.is_negative() {
            -l
        } else {
            l
        }
    }

    /// Returns `(d, s, t)` with `d = gcd(self, other) = s * self + t * other`.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (Self::one(), Self::zero());
        let (mut t0, mut t1) = (Self::zero(), Self::one());

        while !r1.is_zero() {
            let q = Self(&r0.0 / &r1.0);
            let r2 = r0 - q.clone() * r1.clone();
            let s2 = s0 - q.clone() * s1.clone();
            let t2 = t0 - q * t1.clone();
            (r0, r1) = (r1, r2);
            (s0, s1) = (s1, s2);
            (t0, t1) = (t1, t2);
        }

        if r0.is_negative() {
            (-r0, -s0, -t0)
        } else {
            (r0, s0, t0)
        }
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// The value as an `i64`, if it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IBig::from_str_radix(s.trim(), 10).map(Self)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl<'a> $trait<&'a Integer> for &'a Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Div for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with [`DomainError::DivisionByZero`] if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        assert!(!rhs.is_zero(), "{}", DomainError::DivisionByZero);
        Self(self.0 / rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with [`DomainError::DivisionByZero`] if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self {
        assert!(!rhs.is_zero(), "{}", DomainError::DivisionByZero);
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

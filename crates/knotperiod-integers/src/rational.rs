//! Arbitrary precision rationals over `dashu::RBig`.

use dashu::base::error::ParseError;
use dashu::base::{Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{DomainError, Integer};

/// A rational number in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// `numerator / denominator`, normalized.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] for a zero denominator.
    pub fn try_new(numerator: Integer, denominator: &Integer) -> Result<Self, DomainError> {
        if denominator.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let magnitude = denominator.as_inner().unsigned_abs();
        let value = RBig::from_parts(numerator.into_inner(), magnitude);
        Ok(Self(if denominator.is_negative() { -value } else { value }))
    }

    /// `numerator / denominator` for machine integers.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        match Self::try_new(Integer::new(numerator), &Integer::new(denominator)) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// The numerator, carrying the sign.
    #[must_use]
    pub fn numer(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// The positive denominator.
    #[must_use]
    pub fn denom(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "{}", DomainError::NotInvertible);
        Self(self.0.clone().inv())
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    /// `n` for integers, `n/d` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let denom = self.denom();
        if denom.is_one() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{denom}", self.numer())
        }
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    /// Parses `n` or `n/d`; a zero denominator is rejected as an invalid
    /// digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((num, den)) = s.trim().split_once('/') else {
            return Ok(Self::from(s.parse::<Integer>()?));
        };
        let num: Integer = num.parse()?;
        let den: Integer = den.parse()?;
        Self::try_new(num, &den).map_err(|_| ParseError::InvalidDigit)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with [`DomainError::DivisionByZero`] if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        assert!(!rhs.is_zero(), "{}", DomainError::DivisionByZero);
        Self(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from(Integer::new(n))
    }
}

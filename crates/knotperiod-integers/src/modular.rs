//! Integers modulo a compile-time prime.
//!
//! These back the coefficient fields `Z/P` of the Przytycki congruence and
//! of Khovanov homology over finite fields.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{DomainError, Integer};

/// A residue modulo the prime `P`, kept in `[0, P)`.
///
/// `P` must be prime and below `2^32`; products are formed in `u64`
/// without overflow.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    const CHECK_MODULUS: () = assert!(P > 1 && P < (1 << 32), "modulus must lie in (1, 2^32)");

    /// Reduces `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CHECK_MODULUS;
        Self(value % P)
    }

    /// Reduces a signed value into `[0, P)`.
    #[must_use]
    pub const fn from_signed(value: i64) -> Self {
        // |value| < 2^63 and P < 2^32, so the i128 arithmetic is exact
        let r = (value as i128).rem_euclid(P as i128);
        Self::new(r as u64)
    }

    /// Reduces an arbitrary precision integer.
    #[must_use]
    pub fn from_integer(value: &Integer) -> Self {
        let (_, r) = value
            .div_rem_euclid(&Integer::from(P))
            .unwrap_or_else(|_| (Integer::zero(), Integer::zero()));
        // 0 <= r < P < 2^32
        Self::new(r.to_i64().map_or(0, i64::unsigned_abs))
    }

    /// The canonical representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The modulus `P`.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }

    /// `self^exp` by square-and-multiply.
    #[must_use]
    pub fn pow(self, exp: u64) -> Self {
        let mut acc = Self::one();
        let mut square = self;
        let mut e = exp;
        while e != 0 {
            if e & 1 == 1 {
                acc = acc * square;
            }
            square = square * square;
            e >>= 1;
        }
        acc
    }

    /// The multiplicative inverse, `None` when `gcd(self, P) != 1`.
    ///
    /// Runs the extended Euclidean algorithm on `(self, P)`, so a composite
    /// modulus reports its zero divisors as non-invertible.
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        // both operands are below 2^32, so the Bezout coefficients fit in i64
        let (mut r, mut new_r) = (P as i64, self.0 as i64);
        let (mut t, mut new_t) = (0_i64, 1_i64);
        while new_r != 0 {
            let q = r / new_r;
            (r, new_r) = (new_r, r - q * new_r);
            (t, new_t) = (new_t, t - q * new_t);
        }
        (r == 1).then(|| Self::from_signed(t))
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{P}", self.0)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let sum = self.0 + rhs.0;
        Self(if sum >= P { sum - P } else { sum })
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(if self.0 == 0 { 0 } else { P - self.0 })
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0 % P)
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics with [`DomainError::DivisionByZero`] if `rhs` is zero, and
    /// with [`DomainError::NotInvertible`] if it shares a factor with `P`.
    fn div(self, rhs: Self) -> Self {
        match rhs.inv() {
            Some(inv) => self * inv,
            None if rhs.0 == 0 => panic!("{}", DomainError::DivisionByZero),
            None => panic!("{}", DomainError::NotInvertible),
        }
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = ModInt<7>;
    type F19 = ModInt<19>;

    #[test]
    fn test_field_ops() {
        let a = F7::new(5);
        let b = F7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
        assert_eq!((a / b).value(), 3);
        assert_eq!((-F7::zero()).value(), 0);
        assert_eq!(F7::modulus(), 7);
    }

    #[test]
    fn test_inverse_composite_modulus() {
        type R4 = ModInt<4>;
        type R15 = ModInt<15>;
        assert_eq!(R4::new(2).inv(), None);
        assert_eq!(R4::new(3).inv(), Some(R4::new(3)));
        assert_eq!(R15::new(6).inv(), None);
        assert_eq!(R15::new(10).inv(), None);
        assert_eq!(R15::new(7).inv(), Some(R15::new(13)));
        for v in [1, 2, 4, 7, 8, 11, 13, 14] {
            let a = R15::new(v);
            assert_eq!(a * a.inv().unwrap(), R15::one());
        }
    }

    #[test]
    #[should_panic(expected = "not invertible")]
    fn test_division_by_zero_divisor_panics() {
        let _ = ModInt::<4>::new(1) / ModInt::<4>::new(2);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(F7::new(3).inv(), Some(F7::new(5)));
        assert_eq!(F7::new(0).inv(), None);
        for v in 1..19 {
            let a = F19::new(v);
            assert_eq!(a * a.inv().unwrap(), F19::one());
        }
    }

    #[test]
    fn test_pow() {
        let a = F7::new(3);
        assert_eq!(a.pow(0), F7::one());
        assert_eq!(a.pow(2).value(), 2);
        assert_eq!(a.pow(6), F7::one());
    }

    #[test]
    fn test_signed_reduction() {
        assert_eq!(F7::from_signed(-3).value(), 4);
        assert_eq!(F7::from_signed(-14).value(), 0);
        assert_eq!(F7::from_signed(-15).value(), 6);
        assert_eq!(F7::from_signed(i64::MIN), F7::from_integer(&Integer::new(i64::MIN)));
    }

    #[test]
    fn test_from_integer() {
        let big: Integer = "100000000000000000000001".parse().unwrap();
        // 10^23 = 3^23 = 5 (mod 7)
        assert_eq!(F7::from_integer(&big).value(), 6);
        assert_eq!(F7::from_integer(&Integer::new(-10)).value(), 4);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let _ = F7::one() / F7::zero();
    }
}

//! Algebraic structure traits.
//!
//! This module defines the uniform ring interface shared by every
//! coefficient type of the Laurent polynomials.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use knotperiod_integers::Integer;

/// A commutative ring with identity and exact arithmetic.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// `Div` is exact division in a field and truncating division in Z; it
/// panics on a zero divisor.
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if this element has a multiplicative inverse.
    fn is_unit(&self) -> bool;

    /// Returns the multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a unit. Inverting the additive identity is
    /// a precondition violation, not a recoverable error.
    fn recip(&self) -> Self;

    /// Returns true if `self` divides `n`.
    fn divides(&self, n: &Self) -> bool;

    /// Computes a greatest common divisor.
    fn gcd(&self, other: &Self) -> Self;

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(d, s, t)` such that `d = s * self + t * other`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);

    /// The image of an integer under the canonical map Z -> R.
    fn from_integer(n: &Integer) -> Self;

    /// The characteristic of the ring (0 for Z and Q).
    fn characteristic() -> u64;

    /// Short name of the ring, e.g. `Z`, `Q`, `Z2`, `Z5`.
    fn name() -> String;

    /// Fused multiply-add: `self += a * b`.
    fn muladdeq(&mut self, a: &Self, b: &Self) {
        *self = self.clone() + a.clone() * b.clone();
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: Ring {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        self.div_rem(&g).0 * other.clone()
    }
}

/// A field: every non-zero element is a unit.
///
/// Fields share the conventions `gcd(a, b) = 1` for `a, b` not both zero,
/// `divides(n)` iff `self != 0 || n == 0`, and
/// `extended_gcd(a, b) = (a, 1, 0)` if `a != 0` else `(b, 0, 1)`.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

/// Shared `gcd` for fields.
///
/// # Panics
///
/// Panics if both arguments are zero.
pub(crate) fn field_gcd<F: Ring>(a: &F, b: &F) -> F {
    assert!(
        !(a.is_zero() && b.is_zero()),
        "gcd of two zero field elements is undefined"
    );
    F::one()
}

/// Shared `extended_gcd` for fields.
pub(crate) fn field_extended_gcd<F: Ring>(a: &F, b: &F) -> (F, F, F) {
    if a.is_zero() {
        (b.clone(), F::zero(), F::one())
    } else {
        (a.clone(), F::one(), F::zero())
    }
}

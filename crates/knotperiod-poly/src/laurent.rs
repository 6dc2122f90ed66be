//! Sparse multivariate Laurent polynomials.
//!
//! Terms are kept in a `BTreeMap` keyed by monomial, so iteration, display
//! and comparison follow the monomial order. No stored coefficient is ever
//! zero.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use knotperiod_rings::Ring;

use crate::monomial::LaurentMonomial;

/// A Laurent polynomial over the ring `R`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LaurentPoly<R: Ring> {
    terms: BTreeMap<LaurentMonomial, R>,
}

impl<R: Ring> LaurentPoly<R> {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::term(c, LaurentMonomial::one())
    }

    /// The single term `c * m`.
    #[must_use]
    pub fn term(c: R, m: LaurentMonomial) -> Self {
        let mut p = Self::zero();
        p.add_term(m, c);
        p
    }

    /// The single term `c * x_j^e`.
    #[must_use]
    pub fn var(c: R, j: u32, e: i32) -> Self {
        Self::term(c, LaurentMonomial::var_pow(j, e))
    }

    /// Builds a polynomial from `(monomial, coefficient)` pairs, fusing
    /// repeated monomials.
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = (LaurentMonomial, R)>) -> Self {
        let mut p = Self::zero();
        for (m, c) in terms {
            p.add_term(m, c);
        }
        p
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1
            && self
                .terms
                .iter()
                .next()
                .is_some_and(|(m, c)| m.is_one() && c.is_one())
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in monomial order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&LaurentMonomial, &R)> + '_ {
        self.terms.iter()
    }

    /// Coefficient of `m`, zero if absent.
    #[must_use]
    pub fn coefficient(&self, m: &LaurentMonomial) -> R {
        self.terms.get(m).cloned().unwrap_or_else(R::zero)
    }

    /// The smallest term in monomial order.
    #[must_use]
    pub fn head(&self) -> Option<(&LaurentMonomial, &R)> {
        self.terms.iter().next()
    }

    /// The largest term in monomial order.
    #[must_use]
    pub fn tail(&self) -> Option<(&LaurentMonomial, &R)> {
        self.terms.iter().next_back()
    }

    /// Adds `c * m`, removing the term if the coefficient cancels.
    pub fn add_term(&mut self, m: LaurentMonomial, c: R) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(m) {
            Entry::Vacant(v) => {
                v.insert(c);
            }
            Entry::Occupied(mut o) => {
                let sum = o.get().clone() + c;
                if sum.is_zero() {
                    o.remove();
                } else {
                    *o.get_mut() = sum;
                }
            }
        }
    }

    /// `self += a * b`, accumulating products term by term.
    pub fn muladdeq(&mut self, a: &Self, b: &Self) {
        for (ma, ca) in &a.terms {
            for (mb, cb) in &b.terms {
                self.add_term(ma.mul(mb), ca.clone() * cb.clone());
            }
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        let mut p = self.clone();
        p.scale_assign(c);
        p
    }

    /// In-place scalar multiplication. Scaling by zero clears the
    /// polynomial.
    pub fn scale_assign(&mut self, c: &R) {
        if c.is_zero() {
            self.terms.clear();
            return;
        }
        let terms = std::mem::take(&mut self.terms);
        for (m, x) in terms {
            self.add_term(m, x * c.clone());
        }
    }

    /// Multiplies by a single term `c * m`.
    #[must_use]
    pub fn mul_term(&self, m: &LaurentMonomial, c: &R) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone())),
        )
    }

    /// Substitutes `value` for `x_j`.
    ///
    /// Monomials that coincide after substitution are fused and vanishing
    /// terms dropped.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a unit and some term carries a negative
    /// power of `x_j`.
    #[must_use]
    pub fn evaluate(&self, value: &R, j: u32) -> Self {
        let mut result = Self::zero();
        for (m, c) in &self.terms {
            let e = m.exponent(j);
            let factor = if e >= 0 {
                value.pow(e.unsigned_abs())
            } else {
                value.recip().pow(e.unsigned_abs())
            };
            result.add_term(m.without(j), c.clone() * factor);
        }
        result
    }

    /// Replaces `x_j` by `x_j^{-1}`.
    #[must_use]
    pub fn invert_variable(&self, j: u32) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.invert_variable(j), c.clone()))
                .collect(),
        }
    }

    /// Maps every coefficient into another ring.
    #[must_use]
    pub fn map_coefficients<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> LaurentPoly<S> {
        let mut p = LaurentPoly::zero();
        for (m, c) in &self.terms {
            p.add_term(m.clone(), f(c));
        }
        p
    }

    /// Exact division by `1 + m`.
    ///
    /// Peels off the term of `self` that is extreme in the first variable of
    /// `m`, in the direction opposite to its exponent, until nothing is left.
    /// Returns `None` if `1 + m` does not divide `self`.
    #[must_use]
    pub fn exact_div_one_plus(&self, m: &LaurentMonomial) -> Option<Self> {
        let Some(v) = m.first_variable() else {
            return self.exact_div_constant(&(R::one() + R::one()));
        };
        let step = m.exponent(v);

        // Direction-normalized level of a monomial.
        let level = |mono: &LaurentMonomial| -> i64 {
            if step > 0 {
                i64::from(mono.exponent(v))
            } else {
                -i64::from(mono.exponent(v))
            }
        };
        let Some(bound) = self.terms.keys().map(level).max() else {
            return Some(Self::zero());
        };

        let mut rest = self.clone();
        let mut quotient = Self::zero();
        while let Some((mono, c)) = rest
            .terms
            .iter()
            .min_by_key(|(mono, _)| level(*mono))
            .map(|(mono, c)| (mono.clone(), c.clone()))
        {
            if level(&mono) > bound {
                return None;
            }
            rest.add_term(mono.clone(), -c.clone());
            rest.add_term(mono.mul(m), -c.clone());
            quotient.add_term(mono, c);
        }
        Some(quotient)
    }

    fn exact_div_constant(&self, d: &R) -> Option<Self> {
        if d.is_zero() {
            return None;
        }
        let mut p = Self::zero();
        for (m, c) in &self.terms {
            if !d.divides(c) {
                return None;
            }
            p.add_term(m.clone(), c.clone() / d.clone());
        }
        Some(p)
    }
}

/// Returns `p` with `x_j` replaced by `x_j^{-1}`; `p` is left untouched.
#[must_use]
pub fn invert_variable<R: Ring>(p: &LaurentPoly<R>, j: u32) -> LaurentPoly<R> {
    p.invert_variable(j)
}

impl<R: Ring> Default for LaurentPoly<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring> From<R> for LaurentPoly<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}

impl<R: Ring> AddAssign<&LaurentPoly<R>> for LaurentPoly<R> {
    fn add_assign(&mut self, rhs: &LaurentPoly<R>) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), c.clone());
        }
    }
}

impl<R: Ring> AddAssign for LaurentPoly<R> {
    fn add_assign(&mut self, rhs: Self) {
        for (m, c) in rhs.terms {
            self.add_term(m, c);
        }
    }
}

impl<R: Ring> SubAssign<&LaurentPoly<R>> for LaurentPoly<R> {
    fn sub_assign(&mut self, rhs: &LaurentPoly<R>) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), -c.clone());
        }
    }
}

impl<R: Ring> SubAssign for LaurentPoly<R> {
    fn sub_assign(&mut self, rhs: Self) {
        for (m, c) in rhs.terms {
            self.add_term(m, -c);
        }
    }
}

impl<R: Ring> MulAssign<&LaurentPoly<R>> for LaurentPoly<R> {
    fn mul_assign(&mut self, rhs: &LaurentPoly<R>) {
        let lhs = std::mem::take(self);
        self.muladdeq(&lhs, rhs);
    }
}

impl<R: Ring> MulAssign for LaurentPoly<R> {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl<R: Ring> Add for LaurentPoly<R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<R: Ring> Add<&LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn add(self, rhs: &LaurentPoly<R>) -> Self::Output {
        let mut p = self.clone();
        p += rhs;
        p
    }
}

impl<R: Ring> Sub for LaurentPoly<R> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<R: Ring> Sub<&LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn sub(self, rhs: &LaurentPoly<R>) -> Self::Output {
        let mut p = self.clone();
        p -= rhs;
        p
    }
}

impl<R: Ring> Mul for LaurentPoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<R: Ring> Mul<&LaurentPoly<R>> for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn mul(self, rhs: &LaurentPoly<R>) -> Self::Output {
        let mut p = LaurentPoly::zero();
        p.muladdeq(self, rhs);
        p
    }
}

impl<R: Ring> Neg for LaurentPoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }
}

impl<R: Ring> Neg for &LaurentPoly<R> {
    type Output = LaurentPoly<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Ring> fmt::Display for LaurentPoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for (i, (m, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            match (m.is_one(), c.is_one()) {
                (true, _) => write!(f, "{c}")?,
                (false, true) => write!(f, "{m}")?,
                (false, false) => write!(f, "{c}*{m}")?,
            }
        }
        Ok(())
    }
}

//! Bounds for the decomposition search of the Khovanov/Lee criterion.
//!
//! Each quotient coefficient can move a multiple of `period` between the
//! free and the torsion-like part of the decomposition. After evaluation
//! and reduction these moves act on a handful of canonical polynomials
//! (the keys); for every key we record the range of coefficients the moves
//! can reach and then enumerate the product of those ranges.

use std::collections::BTreeMap;

use knotperiod_poly::{LaurentMonomial, LaurentPoly};
use knotperiod_rings::{Ring, Z};

use crate::congruence::PeriodicCongruenceChecker;
use crate::homology::HOMOLOGICAL_VAR;

/// One step of the spectral sequence, split along `period - 1`.
///
/// The page quotient equals `remainder + (period - 1) * quotient`, with
/// every coefficient of `remainder` in `[0, period - 1)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QuotientDecomposition {
    /// Coefficientwise Euclidean quotients.
    pub quotient: LaurentPoly<Z>,
    /// Coefficientwise non-negative remainders.
    pub remainder: LaurentPoly<Z>,
    /// The page multiplier `1 + t q^{2k}`.
    pub mul: LaurentPoly<Z>,
}

/// A closed interval of reachable coefficients, in steps of the period.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoundInterval {
    /// Smallest reachable coefficient.
    pub min: Z,
    /// Largest reachable coefficient.
    pub max: Z,
}

impl Default for BoundInterval {
    fn default() -> Self {
        Self {
            min: Z::zero(),
            max: Z::zero(),
        }
    }
}

impl BoundInterval {
    /// Widens the interval by `count` moves of size `period` in the
    /// direction of the sign of `count`.
    fn extend(&mut self, count: &Z, period: &Z) {
        let step = count.clone() * period.clone();
        if step.is_negative() {
            self.min = self.min.clone() + step;
        } else {
            self.max = self.max.clone() + step;
        }
    }

    /// Number of values `min, min + period, ..., max`.
    #[must_use]
    pub fn len(&self, period: &Z) -> Z {
        match (self.max.clone() - self.min.clone()).div_rem_euclid(period) {
            Ok((q, _)) => q + Z::one(),
            Err(_) => Z::one(),
        }
    }
}

/// Maps every key polynomial to the range its coefficient can reach.
pub type Bounds = BTreeMap<LaurentPoly<Z>, BoundInterval>;

/// Splits `poly` into its leading sign and a key whose first coefficient
/// is positive.
fn normalize_sign(poly: LaurentPoly<Z>) -> (Z, LaurentPoly<Z>) {
    match poly.head() {
        Some((_, c)) if c.is_negative() => (-Z::one(), -poly),
        _ => (Z::one(), poly),
    }
}

/// Accumulates, per canonical key, the interval reachable by moving
/// `0..=c` multiples of `period` for every quotient term `c * m`.
///
/// A term `c * t^a * m'` contributes through
/// `representative((reduce((-1)^a m') * mul)|_{t=-1})`; terms whose image
/// vanishes cannot change the congruence and are skipped.
#[must_use]
pub fn compute_bounds(decompositions: &[QuotientDecomposition], period: u32) -> Bounds {
    let cc = PeriodicCongruenceChecker::quantum(period);
    let p = Z::from(i64::from(period));
    let minus_one = -Z::one();
    let mut bounds = Bounds::new();

    for decomposition in decompositions {
        for (mono, c) in decomposition.quotient.terms() {
            let sign = if mono.exponent(HOMOLOGICAL_VAR) % 2 == 0 {
                Z::one()
            } else {
                -Z::one()
            };
            let base: LaurentMonomial = mono.without(HOMOLOGICAL_VAR);
            let base = cc.reduce(&LaurentPoly::term(sign, base));

            let moved = (&base * &decomposition.mul).evaluate(&minus_one, HOMOLOGICAL_VAR);
            let image = cc.representative(&moved);
            if image.is_zero() {
                continue;
            }

            let (sigma, key) = normalize_sign(image);
            bounds
                .entry(key)
                .or_default()
                .extend(&(sigma * c.clone()), &p);
        }
    }

    bounds
}

/// Number of shifts [`KhBoundsIterator`] enumerates.
#[must_use]
pub fn search_space_size(bounds: &Bounds, period: u32) -> Z {
    let p = Z::from(i64::from(period));
    bounds
        .values()
        .fold(Z::one(), |acc, interval| acc * interval.len(&p))
}

/// Lazily enumerates `Σ digit_k · key_k` over all digit assignments.
///
/// Digit `k` runs from `min_k` to `max_k` in steps of the period. The
/// enumeration is an odometer: the lowest digit with room advances and all
/// lower digits reset to their minimum.
#[derive(Clone, Debug)]
pub struct KhBoundsIterator {
    keys: Vec<LaurentPoly<Z>>,
    intervals: Vec<BoundInterval>,
    digits: Option<Vec<Z>>,
    step: Z,
}

impl KhBoundsIterator {
    /// Creates the iterator. An empty map yields the zero shift once.
    #[must_use]
    pub fn new(bounds: &Bounds, period: u32) -> Self {
        let (keys, intervals): (Vec<_>, Vec<_>) =
            bounds.iter().map(|(k, v)| (k.clone(), v.clone())).unzip();
        let digits = intervals.iter().map(|b| b.min.clone()).collect();
        Self {
            keys,
            intervals,
            digits: Some(digits),
            step: Z::from(i64::from(period)),
        }
    }

    /// The current digit assignment, `None` once exhausted.
    #[must_use]
    pub fn digits(&self) -> Option<&[Z]> {
        self.digits.as_deref()
    }

    fn shift(&self, digits: &[Z]) -> LaurentPoly<Z> {
        let mut shift = LaurentPoly::zero();
        for (key, digit) in self.keys.iter().zip(digits) {
            shift += key.scale(digit);
        }
        shift
    }

    fn advance(&mut self) {
        let Some(digits) = self.digits.as_mut() else {
            return;
        };
        for i in 0..digits.len() {
            let next = digits[i].clone() + self.step.clone();
            if next <= self.intervals[i].max {
                digits[i] = next;
                for (d, b) in digits.iter_mut().zip(&self.intervals).take(i) {
                    *d = b.min.clone();
                }
                return;
            }
        }
        self.digits = None;
    }
}

impl Iterator for KhBoundsIterator {
    type Item = LaurentPoly<Z>;

    fn next(&mut self) -> Option<Self::Item> {
        let shift = self.shift(self.digits.as_deref()?);
        self.advance();
        Some(shift)
    }
}

//! Congruences of Laurent polynomials modulo `x^{2p} = 1`.
//!
//! A `p`-periodic knot has invariants whose antisymmetric part in the
//! quantum variable vanishes once exponents are read modulo `2p`. Folding
//! exponents into `[0, 2p)` turns that condition into a test for zero.

use knotperiod_poly::{invert_variable, LaurentMonomial, LaurentPoly};
use knotperiod_rings::Ring;

use crate::homology::QUANTUM_VAR;

/// Tests the periodicity congruence for one prime and one variable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PeriodicCongruenceChecker {
    prime: u32,
    index: u32,
}

impl PeriodicCongruenceChecker {
    /// Creates a checker for `prime` acting on the variable `x_index`.
    ///
    /// # Panics
    ///
    /// Panics if `prime` is zero or `2 * prime` does not fit in an exponent.
    #[must_use]
    pub fn new(prime: u32, index: u32) -> Self {
        assert!(prime > 0, "period must be positive");
        assert!(
            i32::try_from(2 * u64::from(prime)).is_ok(),
            "period {prime} is too large"
        );
        Self { prime, index }
    }

    /// A checker on the quantum variable.
    #[must_use]
    pub fn quantum(prime: u32) -> Self {
        Self::new(prime, QUANTUM_VAR)
    }

    /// The prime.
    #[must_use]
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// The variable carrying the symmetry.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// `2 * prime` as an exponent.
    fn modulus(&self) -> i32 {
        // fits: checked in `new`
        i32::try_from(2 * u64::from(self.prime)).unwrap_or(i32::MAX)
    }

    /// Folds every exponent of `x_index` into `[0, 2·prime)`.
    ///
    /// Other variables are left alone; terms that land on the same monomial
    /// are added.
    #[must_use]
    pub fn reduce<R: Ring>(&self, p: &LaurentPoly<R>) -> LaurentPoly<R> {
        let modulus = self.modulus();
        let mut result = LaurentPoly::zero();
        for (m, c) in p.terms() {
            let mut folded: LaurentMonomial = m.clone();
            folded.set_exponent(self.index, m.exponent(self.index).rem_euclid(modulus));
            result.add_term(folded, c.clone());
        }
        result
    }

    /// The antisymmetric part `p - p(x_index^{-1})`.
    #[must_use]
    pub fn prepare<R: Ring>(&self, p: &LaurentPoly<R>) -> LaurentPoly<R> {
        p - &invert_variable(p, self.index)
    }

    /// Canonical residue of the antisymmetric part of `p`.
    #[must_use]
    pub fn representative<R: Ring>(&self, p: &LaurentPoly<R>) -> LaurentPoly<R> {
        self.reduce(&self.prepare(p))
    }

    /// Returns true if the congruence holds, i.e. `p` is compatible with
    /// period `prime`.
    #[must_use]
    pub fn check<R: Ring>(&self, p: &LaurentPoly<R>) -> bool {
        self.representative(p).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotperiod_rings::{Z, Z5};

    fn poly(s: &str) -> LaurentPoly<Z> {
        s.parse().unwrap()
    }

    #[test]
    fn test_reduce_is_non_negative() {
        let cc = PeriodicCongruenceChecker::quantum(5);
        assert_eq!(cc.reduce(&poly("q^-1")), poly("q^9"));
        assert_eq!(cc.reduce(&poly("q^-10 + q^10 + q^20")), poly("3"));
        assert_eq!(cc.reduce(&poly("t^-3q^13")), poly("t^-3q^3"));
        assert_eq!(cc.reduce(&poly("q^3 - q^13")), LaurentPoly::zero());
    }

    #[test]
    fn test_full_period_reduces_to_constant() {
        let cc = PeriodicCongruenceChecker::quantum(7);
        let p = poly("q^14");
        assert_eq!(cc.reduce(&p), poly("1"));
        assert!(cc.check(&p));
    }

    #[test]
    fn test_prepare_cancels_symmetric_part() {
        let cc = PeriodicCongruenceChecker::quantum(5);
        assert!(cc.prepare(&poly("q + q^-1 + 7")).is_zero());
        assert_eq!(cc.prepare(&poly("q^2")), poly("q^2 - q^-2"));
    }

    #[test]
    fn test_check() {
        let cc = PeriodicCongruenceChecker::quantum(5);
        assert!(cc.check(&poly("1")));
        assert!(!cc.check(&poly("q^2")));
        // q^2 - q^-2 and q^12 - q^8 agree modulo q^10
        assert!(cc.check(&poly("q^2 - q^12")));
        assert_eq!(cc.representative(&poly("q^2")), poly("q^2 - q^8"));
    }

    #[test]
    fn test_check_over_finite_field() {
        let cc = PeriodicCongruenceChecker::quantum(5);
        let p: LaurentPoly<Z5> = "5*q^2 + 1".parse().unwrap();
        assert!(cc.check(&p));
        let p: LaurentPoly<Z5> = "3*q^2".parse().unwrap();
        assert!(!cc.check(&p));
    }

    #[test]
    fn test_other_variable() {
        let cc = PeriodicCongruenceChecker::new(3, 1);
        assert_eq!(cc.index(), 1);
        assert_eq!(cc.prime(), 3);
        assert_eq!(cc.reduce(&poly("t^-1q")), poly("t^5q"));
    }
}

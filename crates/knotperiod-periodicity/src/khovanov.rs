//! The Khovanov/Lee (BKP) periodicity criterion.
//!
//! The Lee spectral sequence of a knot starts at Khovanov homology and
//! converges to Lee homology. Page `k` differs from page `k - 1` by a
//! multiple of `1 + t q^{2k}`:
//!
//! ```text
//! Kh = Lee + Σ_k (1 + t q^{2k}) · quot_k
//! ```
//!
//! For a `p`-periodic knot the quotients split into free orbits and fixed
//! parts, which bounds how the congruence on `Lee + Σ mul_k · quot_k` can
//! be satisfied. The checker computes the quotients once and then searches
//! the bounded space of decompositions for every requested period.

use knotperiod_poly::{LaurentMonomial, LaurentPoly};
use knotperiod_rings::{Ring, Z};
use tracing::{debug, info, trace};

use crate::bounds::{
    compute_bounds, search_space_size, Bounds, KhBoundsIterator, QuotientDecomposition,
};
use crate::congruence::PeriodicCongruenceChecker;
use crate::error::PeriodicityError;
use crate::field::CoefficientField;
use crate::homology::{Grading, HomologyComplex, KnotHomologyEngine, HOMOLOGICAL_VAR, QUANTUM_VAR};
use crate::przytycki::PrzytyckiChecker;
use crate::verdict::{is_supported_period, Verdict};

/// The monomial `t q^{2k}` of page `k`.
#[must_use]
pub fn page_monomial(k: usize) -> LaurentMonomial {
    // page counts stay far below i32::MAX / 2
    let e = i32::try_from(2 * k).unwrap_or(i32::MAX);
    LaurentMonomial::from_exponents([(HOMOLOGICAL_VAR, 1), (QUANTUM_VAR, e)])
}

/// The page multiplier `1 + t q^{2k}`.
#[must_use]
pub fn page_multiplier(k: usize) -> LaurentPoly<Z> {
    LaurentPoly::one() + LaurentPoly::term(Z::one(), page_monomial(k))
}

/// An immutable, fully computed BKP checker for one knot.
#[derive(Clone, Debug)]
pub struct KhPeriodicityChecker {
    knot: String,
    field: CoefficientField,
    pages: Vec<LaurentPoly<Z>>,
    muls: Vec<LaurentPoly<Z>>,
    quot: Vec<LaurentPoly<Z>>,
    jones: LaurentPoly<Z>,
}

impl KhPeriodicityChecker {
    /// Runs the spectral sequence on `engine` and computes the quotients.
    ///
    /// The Przytycki pre-filter uses the engine's unreduced Jones
    /// polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::NotAKnot`] for links, engine failures
    /// as they come, and [`PeriodicityError::NonTerminatingFactorization`]
    /// if two consecutive pages do not differ by a multiple of their
    /// multiplier.
    pub fn build<E: KnotHomologyEngine>(
        engine: &E,
        knot: impl Into<String>,
        field: CoefficientField,
    ) -> Result<Self, PeriodicityError> {
        let knot = knot.into();
        let components = engine.num_components();
        if components != 1 {
            return Err(PeriodicityError::NotAKnot(components));
        }

        let complex = engine.khovanov_complex(field)?;
        let mut current = engine.simplify(&complex, Grading::new(1, 0))?;
        let mut pages = vec![current.free_poincare_polynomial()];
        debug!(%knot, %field, khp = %pages[0], "Khovanov polynomial");

        let mut k: usize = 1;
        while !current.differential_is_zero() {
            // cuts grow by 2 in the quantum grading per page
            let q = i32::try_from(2 * k).unwrap_or(i32::MAX);
            current = engine.simplify(&current, Grading::new(1, q))?;
            let page = current.free_poincare_polynomial();
            debug!(page = k, poincare = %page, "spectral sequence page");
            pages.push(page);
            k += 1;
        }

        let jones = engine.jones_polynomial(false)?;
        Ok(Self::from_pages(knot, field, pages)?.with_jones(jones))
    }

    /// Builds a checker from already computed pages; the first page is the
    /// Khovanov polynomial and the last the Lee polynomial. The Jones
    /// polynomial defaults to `khp|_{t=-1}`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::EmptySpectralSequence`] without pages and
    /// [`PeriodicityError::NonTerminatingFactorization`] if the pages do not
    /// factor.
    pub fn from_pages(
        knot: impl Into<String>,
        field: CoefficientField,
        pages: Vec<LaurentPoly<Z>>,
    ) -> Result<Self, PeriodicityError> {
        if pages.is_empty() {
            return Err(PeriodicityError::EmptySpectralSequence);
        }
        let muls = (1..pages.len()).map(page_multiplier).collect();
        let jones = pages[0].evaluate(&-Z::one(), HOMOLOGICAL_VAR);
        let mut checker = Self {
            knot: knot.into(),
            field,
            pages,
            muls,
            quot: Vec::new(),
            jones,
        };
        checker.quot = checker.compute_quot()?;
        Ok(checker)
    }

    /// `quot[i-1] = (P[i-1] - P[i]) / mul[i-1]`, divided exactly.
    fn compute_quot(&self) -> Result<Vec<LaurentPoly<Z>>, PeriodicityError> {
        self.pages
            .windows(2)
            .enumerate()
            .map(|(i, pair)| -> Result<LaurentPoly<Z>, PeriodicityError> {
                let diff = &pair[0] - &pair[1];
                let quotient = diff.exact_div_one_plus(&page_monomial(i + 1)).ok_or_else(|| {
                    PeriodicityError::NonTerminatingFactorization {
                        dividend: diff.to_string(),
                        divisor: self.muls[i].to_string(),
                    }
                })?;
                debug!(
                    "Decomposition of the Khovanov polynomial = {} + ({}) * ({})",
                    pair[1], self.muls[i], quotient
                );
                Ok(quotient)
            })
            .collect()
    }

    /// Replaces the Jones polynomial used by the Przytycki pre-filter.
    #[must_use]
    pub fn with_jones(mut self, jones: LaurentPoly<Z>) -> Self {
        self.jones = jones;
        self
    }

    /// The unreduced Jones polynomial checked before the search.
    #[must_use]
    pub fn jones(&self) -> &LaurentPoly<Z> {
        &self.jones
    }

    /// The knot name.
    #[must_use]
    pub fn knot(&self) -> &str {
        &self.knot
    }

    /// The coefficient field of the homology.
    #[must_use]
    pub fn field(&self) -> CoefficientField {
        self.field
    }

    /// The Khovanov polynomial.
    #[must_use]
    pub fn khp(&self) -> &LaurentPoly<Z> {
        &self.pages[0]
    }

    /// The Lee polynomial.
    #[must_use]
    pub fn leep(&self) -> &LaurentPoly<Z> {
        &self.pages[self.pages.len() - 1]
    }

    /// All pages, Khovanov first.
    #[must_use]
    pub fn pages(&self) -> &[LaurentPoly<Z>] {
        &self.pages
    }

    /// The page multipliers `1 + t q^{2k}`.
    #[must_use]
    pub fn multipliers(&self) -> &[LaurentPoly<Z>] {
        &self.muls
    }

    /// The exact quotients between consecutive pages.
    #[must_use]
    pub fn quotients(&self) -> &[LaurentPoly<Z>] {
        &self.quot
    }

    /// Splits every quotient coefficientwise as `r + (period - 1) * q` with
    /// `0 <= r < period - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::Domain`] if `period` is 1.
    pub fn compute_quotient_and_remainder(
        &self,
        period: u32,
    ) -> Result<Vec<QuotientDecomposition>, PeriodicityError> {
        let divisor = Z::from(i64::from(period) - 1);
        self.quot
            .iter()
            .zip(&self.muls)
            .map(|(quot, mul)| -> Result<QuotientDecomposition, PeriodicityError> {
                let mut quotient = LaurentPoly::zero();
                let mut remainder = LaurentPoly::zero();
                for (m, c) in quot.terms() {
                    let (q, r) = c.div_rem_euclid(&divisor)?;
                    quotient.add_term(m.clone(), q);
                    remainder.add_term(m.clone(), r);
                }
                Ok(QuotientDecomposition {
                    quotient,
                    remainder,
                    mul: mul.clone(),
                })
            })
            .collect()
    }

    /// Searches for a decomposition compatible with `period`.
    fn search(&self, decompositions: &[QuotientDecomposition], bounds: &Bounds, period: u32) -> Verdict {
        let cc = PeriodicCongruenceChecker::quantum(period);

        let mut t = self.leep().clone();
        for d in decompositions {
            debug!(
                "Decomposition of the quotient: {} + {} * ({})",
                d.remainder,
                period - 1,
                d.quotient
            );
            t.muladdeq(&d.mul, &(&d.remainder - &d.quotient));
        }
        let s = cc.representative(&t.evaluate(&-Z::one(), HOMOLOGICAL_VAR));
        if s.is_zero() {
            return Verdict::Maybe;
        }
        if decompositions.iter().all(|d| d.quotient.is_zero()) {
            debug!(
                "All coefficients of the quotient are smaller than {}",
                period - 1
            );
            return Verdict::No;
        }

        info!(
            knot = %self.knot,
            period,
            "There are {} cases to check...",
            search_space_size(bounds, period)
        );
        for shift in KhBoundsIterator::new(bounds, period) {
            trace!(%shift, "shift");
            if (&s + &shift).is_zero() {
                debug!(%shift, "Found a candidate...");
                return Verdict::Maybe;
            }
        }
        Verdict::NoNontrivialDecomposition
    }

    /// Runs the criterion for `period`.
    ///
    /// Unsupported periods and periods that are multiples of the field
    /// characteristic are rejected before any polynomial work. Przytycki's
    /// criterion on [`Self::jones`] runs first and a `No` there is final.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::UnsupportedPeriod`] or
    /// [`PeriodicityError::CharacteristicClash`] for rejected periods.
    pub fn check(&self, period: u32) -> Result<Verdict, PeriodicityError> {
        if !is_supported_period(period) {
            return Err(PeriodicityError::UnsupportedPeriod(period));
        }
        if self.field.clashes_with(period) {
            return Err(PeriodicityError::CharacteristicClash {
                period,
                characteristic: self.field.characteristic(),
            });
        }

        let przytycki = PrzytyckiChecker::new(self.knot.clone(), self.jones.clone());
        if przytycki.check(period)? == Verdict::No {
            debug!(knot = %self.knot, period, "Przytycki criterion fails");
            return Ok(Verdict::No);
        }

        let decompositions = self.compute_quotient_and_remainder(period)?;
        let bounds = compute_bounds(&decompositions, period);
        Ok(self.search(&decompositions, &bounds, period))
    }

    /// Formats `"<knot> [<field>]: period = <p>: <verdict>"`; rejected
    /// periods render their message in place of the verdict.
    #[must_use]
    pub fn verdict(&self, period: u32) -> String {
        let outcome = match self.check(period) {
            Ok(v) => v.to_string(),
            Err(e) => e.to_string(),
        };
        format!("{} [{}]: period = {period}: {outcome}", self.knot, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::homology::RecordedSpectralSequence;

    fn poly(s: &str) -> LaurentPoly<Z> {
        s.parse().unwrap()
    }

    fn checker(pages: &[&str]) -> KhPeriodicityChecker {
        KhPeriodicityChecker::from_pages(
            "K",
            CoefficientField::Q,
            pages.iter().map(|s| poly(s)).collect(),
        )
        .unwrap()
    }

    const TREFOIL_KH: &str = "q + q^3 + t^2q^5 + t^3q^9";

    #[test]
    fn test_page_multiplier() {
        assert_eq!(page_multiplier(1), poly("1 + tq^2"));
        assert_eq!(page_multiplier(3), poly("1 + tq^6"));
    }

    #[test]
    fn test_build_from_engine() {
        let engine = RecordedSpectralSequence::new(vec![
            poly(TREFOIL_KH),
            poly(TREFOIL_KH),
            poly("q + q^3"),
        ])
        .unwrap();
        let c = KhPeriodicityChecker::build(&engine, "3_1", CoefficientField::Z2).unwrap();

        assert_eq!(c.khp(), &poly(TREFOIL_KH));
        assert_eq!(c.leep(), &poly("q + q^3"));
        assert_eq!(c.multipliers(), &[poly("1 + tq^2"), poly("1 + tq^4")]);
        // Kh - Lee = t^2q^5 (1 + t q^4)
        assert_eq!(c.quotients(), &[LaurentPoly::zero(), poly("t^2q^5")]);
    }

    #[test]
    fn test_build_rejects_links() {
        let engine = RecordedSpectralSequence::new(vec![poly("q")])
            .unwrap()
            .with_components(2);
        let err = KhPeriodicityChecker::build(&engine, "L", CoefficientField::Z2).unwrap_err();
        assert!(matches!(err, PeriodicityError::NotAKnot(2)));
    }

    #[test]
    fn test_pages_that_do_not_factor() {
        let err = KhPeriodicityChecker::from_pages(
            "K",
            CoefficientField::Q,
            vec![poly("q + q^3"), poly("q")],
        )
        .unwrap_err();
        assert!(matches!(err, PeriodicityError::NonTerminatingFactorization { .. }));
    }

    #[test]
    fn test_quotient_and_remainder() {
        let c = checker(&["q + 11*tq^3 + 11*t^2q^5", "q"]);
        assert_eq!(c.quotients(), &[poly("11*tq^3")]);

        let split = c.compute_quotient_and_remainder(5).unwrap();
        assert_eq!(split.len(), 1);
        assert_eq!(split[0].quotient, poly("2*tq^3"));
        assert_eq!(split[0].remainder, poly("3*tq^3"));
        assert_eq!(split[0].mul, poly("1 + tq^2"));
    }

    #[test]
    fn test_trefoil_is_not_five_periodic() {
        let c = checker(&[TREFOIL_KH, TREFOIL_KH, "q + q^3"]);
        assert_eq!(c.check(5).unwrap(), Verdict::No);
        assert_eq!(c.verdict(5), "K [Q]: period = 5: No");
    }

    #[test]
    fn test_collapsed_sequence_may_be_periodic() {
        // Kh = Lee, no quotient at all
        let c = checker(&["q^-1 + q"]);
        assert!(c.quotients().is_empty());
        assert_eq!(c.check(5).unwrap(), Verdict::Maybe);
        assert_eq!(c.check(19).unwrap(), Verdict::Maybe);
    }

    #[test]
    fn test_engine_jones_drives_the_przytycki_filter() {
        let c = checker(&["q^-1 + q"]);
        assert_eq!(c.jones(), &poly("q^-1 + q"));

        // q^2 fails Przytycki's congruence for period 5
        let engine = RecordedSpectralSequence::new(vec![poly("q^-1 + q")])
            .unwrap()
            .with_jones(poly("q^2"));
        let c = KhPeriodicityChecker::build(&engine, "K", CoefficientField::Q).unwrap();
        assert_eq!(c.jones(), &poly("q^2"));
        assert_eq!(c.check(5).unwrap(), Verdict::No);

        let c = checker(&["q^-1 + q"]).with_jones(poly("q^2"));
        assert_eq!(c.check(5).unwrap(), Verdict::No);
    }

    #[test]
    fn test_unsupported_period_is_reported() {
        let c = checker(&["q^-1 + q"]);
        assert!(matches!(c.check(2), Err(PeriodicityError::UnsupportedPeriod(2))));
        assert!(c.verdict(3).ends_with("does not support period 3"));
    }

    #[test]
    fn test_period_must_be_coprime_to_characteristic() {
        let c = KhPeriodicityChecker::from_pages("K", CoefficientField::Z5, vec![poly("q^-1 + q")])
            .unwrap();
        assert!(matches!(
            c.check(5),
            Err(PeriodicityError::CharacteristicClash { period: 5, characteristic: 5 })
        ));
        assert_eq!(
            c.verdict(5),
            "K [Z5]: period = 5: period must be coprime to field characteristic"
        );
        assert_eq!(c.check(7).unwrap(), Verdict::Maybe);
    }

    #[test]
    fn test_no_nontrivial_decomposition() {
        // quot = 4 splits as 0 + 4 * 1; one move of 5 cannot cancel s
        let c = checker(&["4 + 4*tq^2 + 6*q^8", "6*q^8"]);
        assert_eq!(c.quotients(), &[poly("4")]);
        assert_eq!(c.check(5).unwrap(), Verdict::NoNontrivialDecomposition);
        assert_eq!(c.verdict(5), "K [Q]: period = 5: No (nontrivial decomposition)");
    }

    #[test]
    fn test_search_finds_decomposition() {
        // quot = 8 splits as 0 + 4 * 2; moving one multiple of 5 works
        let c = checker(&["8 + 8*tq^2 + 3*q^2", "3*q^2"]);
        assert_eq!(c.check(5).unwrap(), Verdict::Maybe);
    }

    #[test]
    fn test_all_quotients_below_period() {
        // quot = 1 stays in the remainder; s = 5q^2 - 5q^8 passes Przytycki
        // but there is nothing to search
        let c = checker(&["1 + tq^2 + 6*q^2", "6*q^2"]);
        let split = c.compute_quotient_and_remainder(5).unwrap();
        assert!(split[0].quotient.is_zero());
        assert_eq!(c.check(5).unwrap(), Verdict::No);
    }
}

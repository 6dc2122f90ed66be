//! Przytycki's criterion on the Jones polynomial.

use knotperiod_poly::LaurentPoly;
use knotperiod_rings::{Ring, Zp, Z};
use tracing::debug;

use crate::congruence::PeriodicCongruenceChecker;
use crate::error::PeriodicityError;
use crate::verdict::Verdict;

/// Checks the Jones polynomial of a knot against Przytycki's congruence.
#[derive(Clone, Debug)]
pub struct PrzytyckiChecker {
    knot: String,
    jones: LaurentPoly<Z>,
}

impl PrzytyckiChecker {
    /// Creates a checker for the Jones polynomial `jones` (in `q`).
    #[must_use]
    pub fn new(knot: impl Into<String>, jones: LaurentPoly<Z>) -> Self {
        Self {
            knot: knot.into(),
            jones,
        }
    }

    /// The knot name used in verdict lines.
    #[must_use]
    pub fn knot(&self) -> &str {
        &self.knot
    }

    /// The Jones polynomial.
    #[must_use]
    pub fn jones(&self) -> &LaurentPoly<Z> {
        &self.jones
    }

    /// Runs the congruence over `Z/period`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::UnsupportedPeriod`] unless `period` is
    /// one of 5, 7, 11, 13, 17, 19.
    pub fn check(&self, period: u32) -> Result<Verdict, PeriodicityError> {
        let holds = match period {
            5 => self.check_mod::<5>(),
            7 => self.check_mod::<7>(),
            11 => self.check_mod::<11>(),
            13 => self.check_mod::<13>(),
            17 => self.check_mod::<17>(),
            19 => self.check_mod::<19>(),
            _ => return Err(PeriodicityError::UnsupportedPeriod(period)),
        };
        Ok(Verdict::from(holds))
    }

    fn check_mod<const P: u64>(&self) -> bool {
        let jones: LaurentPoly<Zp<P>> = self
            .jones
            .map_coefficients(|c| Zp::<P>::from_integer(c.as_inner()));
        // P is one of the supported periods, all far below u32::MAX
        let prime = u32::try_from(P).unwrap_or(u32::MAX);
        let cc = PeriodicCongruenceChecker::quantum(prime);
        let residue = cc.representative(&jones);
        debug!(knot = %self.knot, period = P, %residue, "Przytycki congruence");
        residue.is_zero()
    }

    /// Formats `"<knot>: period = <p>: <verdict>"`; errors are rendered in
    /// place of the verdict.
    #[must_use]
    pub fn verdict(&self, period: u32) -> String {
        let outcome = match self.check(period) {
            Ok(v) => v.to_string(),
            Err(e) => e.to_string(),
        };
        format!("{}: period = {period}: {outcome}", self.knot)
    }
}

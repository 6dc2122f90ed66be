//! Running a periodicity check for one knot and writing the verdicts.

use std::io::Write;

use tracing::info;

use crate::error::PeriodicityError;
use crate::field::CoefficientField;
use crate::homology::KnotHomologyEngine;
use crate::khovanov::KhPeriodicityChecker;
use crate::przytycki::PrzytyckiChecker;
use crate::verdict::SUPPORTED_PERIODS;

/// Which periods to test.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PeriodSelection {
    /// A single period.
    Single(u32),
    /// Every period in [`SUPPORTED_PERIODS`].
    AllSupported,
}

impl PeriodSelection {
    /// The periods to test, in increasing order.
    #[must_use]
    pub fn periods(self) -> Vec<u32> {
        match self {
            Self::Single(p) => vec![p],
            Self::AllSupported => SUPPORTED_PERIODS.to_vec(),
        }
    }
}

impl Default for PeriodSelection {
    fn default() -> Self {
        Self::Single(5)
    }
}

/// Which criterion to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Criterion {
    /// Przytycki's criterion on the Jones polynomial only.
    Przytycki,
    /// The Khovanov/Lee criterion, with Przytycki as a pre-filter.
    #[default]
    Khovanov,
}

/// Parameters of a periodicity check.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PeriodicityRequest {
    /// Name printed in every verdict line.
    pub knot: String,
    /// Periods to test.
    pub period: PeriodSelection,
    /// Coefficient field of Khovanov homology.
    pub field: CoefficientField,
    /// Criterion to apply.
    pub criterion: Criterion,
}

impl Default for PeriodicityRequest {
    fn default() -> Self {
        Self {
            knot: "knot".to_string(),
            period: PeriodSelection::default(),
            field: CoefficientField::default(),
            criterion: Criterion::default(),
        }
    }
}

/// Runs `request` against `engine`, writing one verdict line per period
/// to `out`.
///
/// Rejected periods produce a descriptive line and do not stop the other
/// periods.
///
/// # Errors
///
/// Returns [`PeriodicityError::NotAKnot`] for links, any error of the
/// engine or of building the checker, and I/O errors from `out`.
pub fn check_periodicity<E, W>(
    engine: &E,
    request: &PeriodicityRequest,
    out: &mut W,
) -> Result<Vec<String>, PeriodicityError>
where
    E: KnotHomologyEngine,
    W: Write + ?Sized,
{
    let components = engine.num_components();
    if components != 1 {
        return Err(PeriodicityError::NotAKnot(components));
    }

    let periods = request.period.periods();
    info!(
        knot = %request.knot,
        field = %request.field,
        criterion = ?request.criterion,
        ?periods,
        "checking periodicity"
    );

    let lines: Vec<String> = match request.criterion {
        Criterion::Przytycki => {
            let checker = PrzytyckiChecker::new(request.knot.clone(), engine.jones_polynomial(false)?);
            periods.iter().map(|&p| checker.verdict(p)).collect()
        }
        Criterion::Khovanov => {
            let checker = KhPeriodicityChecker::build(engine, request.knot.clone(), request.field)?;
            periods.iter().map(|&p| checker.verdict(p)).collect()
        }
    };

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::homology::RecordedSpectralSequence;
    use knotperiod_poly::LaurentPoly;
    use knotperiod_rings::Z;

    fn poly(s: &str) -> LaurentPoly<Z> {
        s.parse().unwrap()
    }

    fn trefoil() -> RecordedSpectralSequence {
        let kh = poly("q + q^3 + t^2q^5 + t^3q^9");
        RecordedSpectralSequence::new(vec![kh.clone(), kh, poly("q + q^3")]).unwrap()
    }

    #[test]
    fn test_single_period_khovanov() {
        let request = PeriodicityRequest {
            knot: "3_1".to_string(),
            ..PeriodicityRequest::default()
        };
        let mut out = Vec::new();
        let lines = check_periodicity(&trefoil(), &request, &mut out).unwrap();
        assert_eq!(lines, vec!["3_1 [Z2]: period = 5: No".to_string()]);
        assert_eq!(String::from_utf8(out).unwrap(), "3_1 [Z2]: period = 5: No\n");
    }

    #[test]
    fn test_all_periods_przytycki() {
        let engine = RecordedSpectralSequence::new(vec![poly("q")])
            .unwrap()
            .with_jones(poly("1"));
        let request = PeriodicityRequest {
            knot: "U".to_string(),
            period: PeriodSelection::AllSupported,
            criterion: Criterion::Przytycki,
            ..PeriodicityRequest::default()
        };
        let mut out = Vec::new();
        let lines = check_periodicity(&engine, &request, &mut out).unwrap();
        assert_eq!(lines.len(), SUPPORTED_PERIODS.len());
        assert_eq!(lines[0], "U: period = 5: Maybe");
        assert_eq!(lines[5], "U: period = 19: Maybe");
    }

    #[test]
    fn test_rejected_periods_do_not_abort() {
        let request = PeriodicityRequest {
            knot: "3_1".to_string(),
            period: PeriodSelection::Single(2),
            ..PeriodicityRequest::default()
        };
        let lines = check_periodicity(&trefoil(), &request, &mut std::io::sink()).unwrap();
        assert_eq!(lines, vec!["3_1 [Z2]: period = 2: the criterion does not support period 2"]);

        let request = PeriodicityRequest {
            period: PeriodSelection::Single(5),
            field: CoefficientField::Z5,
            ..request
        };
        let lines = check_periodicity(&trefoil(), &request, &mut std::io::sink()).unwrap();
        assert_eq!(
            lines,
            vec!["3_1 [Z5]: period = 5: period must be coprime to field characteristic"]
        );
    }

    #[test]
    fn test_links_are_rejected() {
        let engine = trefoil().with_components(3);
        let err = check_periodicity(&engine, &PeriodicityRequest::default(), &mut std::io::sink())
            .unwrap_err();
        assert!(matches!(err, PeriodicityError::NotAKnot(3)));
        assert_eq!(err.to_string(), "not a knot: the diagram has 3 components");
    }
}

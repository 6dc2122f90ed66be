//! # knotperiod
//!
//! Periodicity criteria for knots.
//!
//! Given the Jones polynomial, or the pages of the Khovanov to Lee spectral
//! sequence, of a knot, decide for small primes `p` whether the knot can be
//! `p`-periodic. A `No` is a proof; a `Maybe` only means the criterion is
//! inconclusive.
//!
//! ## Crates
//!
//! - [`integers`]: arbitrary precision integers, rationals and `Z/P`
//! - [`rings`]: the coefficient rings `Z`, `Q`, `Z2`, `Zp<P>`
//! - [`poly`]: sparse multivariate Laurent polynomials
//! - [`periodicity`]: the congruence checker and both criteria
//!
//! ## Quick Start
//!
//! ```rust
//! use knotperiod::prelude::*;
//!
//! let jones: LaurentPoly<Z> = "q + q^3 + q^5 - q^9".parse().unwrap();
//! let checker = PrzytyckiChecker::new("3_1", jones);
//! assert_eq!(checker.verdict(5), "3_1: period = 5: No");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use knotperiod_integers as integers;
pub use knotperiod_periodicity as periodicity;
pub use knotperiod_poly as poly;
pub use knotperiod_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use knotperiod_integers::{Integer, Rational};
    pub use knotperiod_periodicity::{
        check_periodicity, CoefficientField, Criterion, KhPeriodicityChecker, KnotHomologyEngine,
        PeriodSelection, PeriodicCongruenceChecker, PeriodicityError, PeriodicityRequest,
        PrzytyckiChecker, RecordedSpectralSequence, Verdict, SUPPORTED_PERIODS,
    };
    pub use knotperiod_poly::{LaurentMonomial, LaurentPoly};
    pub use knotperiod_rings::{Field, Ring, Q, Z, Z2};
}

//! # knotperiod-periodicity
//!
//! Periodicity criteria for knots.
//!
//! A knot is `p`-periodic if it is invariant under a rotation of order `p`
//! whose axis misses the knot. Periodicity forces congruences on knot
//! invariants; violating one rules the period out.
//!
//! This crate provides:
//! - [`PeriodicCongruenceChecker`]: the congruence `f(q) ≡ f(q^{-1})`
//!   modulo `q^{2p} = 1`
//! - [`PrzytyckiChecker`]: Przytycki's criterion on the Jones polynomial
//! - [`KhPeriodicityChecker`]: the Borodzik/Politarczyk criterion on the
//!   Khovanov to Lee spectral sequence
//! - [`check_periodicity`]: runs a criterion for a set of periods and
//!   writes one verdict line per period
//!
//! Homology itself comes from a [`KnotHomologyEngine`]. A
//! [`RecordedSpectralSequence`] replays pages computed elsewhere.
//!
//! ## Example
//!
//! ```
//! use knotperiod_periodicity::{CoefficientField, KhPeriodicityChecker, Verdict};
//! use knotperiod_poly::LaurentPoly;
//! use knotperiod_rings::Z;
//!
//! // trefoil over Z2: the first differential vanishes, the second
//! // kills t^2q^5 + t^3q^9 and leaves the Lee polynomial
//! let kh: LaurentPoly<Z> = "q + q^3 + t^2q^5 + t^3q^9".parse().unwrap();
//! let pages = vec![kh.clone(), kh, "q + q^3".parse().unwrap()];
//! let checker = KhPeriodicityChecker::from_pages("3_1", CoefficientField::Z2, pages).unwrap();
//! assert_eq!(checker.check(5).unwrap(), Verdict::No);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounds;
pub mod congruence;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod homology;
pub mod khovanov;
pub mod przytycki;
pub mod verdict;

#[cfg(test)]
mod proptests;

pub use bounds::{compute_bounds, search_space_size, BoundInterval, Bounds, KhBoundsIterator, QuotientDecomposition};
pub use congruence::PeriodicCongruenceChecker;
pub use dispatch::{check_periodicity, Criterion, PeriodSelection, PeriodicityRequest};
pub use error::PeriodicityError;
pub use field::CoefficientField;
pub use homology::{
    Grading, HomologyComplex, KnotHomologyEngine, RecordedPage, RecordedSpectralSequence,
    HOMOLOGICAL_VAR, QUANTUM_VAR,
};
pub use khovanov::{page_monomial, page_multiplier, KhPeriodicityChecker};
pub use przytycki::PrzytyckiChecker;
pub use verdict::{is_supported_period, Verdict, SUPPORTED_PERIODS};

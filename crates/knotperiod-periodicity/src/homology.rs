//! Interface to the knot homology engine.
//!
//! Diagrams, the Khovanov cube and chain-complex simplification live
//! outside this crate. The checkers only see them through
//! [`KnotHomologyEngine`], which hands out complexes that can be simplified
//! at a bigrading cut and summarized by their free Poincaré polynomial.

use std::fmt;
use std::str::FromStr;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use knotperiod_poly::{LaurentMonomial, LaurentPoly};
use knotperiod_rings::{Ring, Z};

use crate::error::PeriodicityError;
use crate::field::CoefficientField;

/// Variable index of the homological grading `t`.
pub const HOMOLOGICAL_VAR: u32 = 1;

/// Variable index of the quantum grading `q`.
pub const QUANTUM_VAR: u32 = 2;

/// A bigrading `(h, q)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Grading {
    /// Homological degree.
    pub h: i32,
    /// Quantum degree.
    pub q: i32,
}

impl Grading {
    /// Creates a grading.
    #[must_use]
    pub const fn new(h: i32, q: i32) -> Self {
        Self { h, q }
    }
}

impl Add for Grading {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.h + rhs.h, self.q + rhs.q)
    }
}

impl Sub for Grading {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.h - rhs.h, self.q - rhs.q)
    }
}

impl AddAssign for Grading {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Grading {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Grading {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.h, -self.q)
    }
}

impl fmt::Display for Grading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.h, self.q)
    }
}

/// A (possibly simplified) chain complex.
pub trait HomologyComplex {
    /// Returns true once the differential vanishes, i.e. the spectral
    /// sequence has collapsed.
    fn differential_is_zero(&self) -> bool;

    /// The graded ranks of the free part, with `t` for the homological and
    /// `q` for the quantum grading.
    fn free_poincare_polynomial(&self) -> LaurentPoly<Z>;
}

/// The external collaborator computing knot homology from a diagram.
///
/// Implementations are deterministic: a failing call fails the whole
/// checker construction and is never retried.
pub trait KnotHomologyEngine {
    /// The complex type produced by the engine.
    type Complex: HomologyComplex;

    /// Number of components of the diagram.
    fn num_components(&self) -> usize;

    /// The Khovanov complex with coefficients in `field`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot build the complex.
    fn khovanov_complex(&self, field: CoefficientField) -> Result<Self::Complex, PeriodicityError>;

    /// Simplifies `complex` at the bigrading cut `cut`.
    ///
    /// Re-applying the simplification to its own output changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails.
    fn simplify(&self, complex: &Self::Complex, cut: Grading) -> Result<Self::Complex, PeriodicityError>;

    /// The Jones polynomial in `q`, reduced or unreduced.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails.
    fn jones_polynomial(&self, reduced: bool) -> Result<LaurentPoly<Z>, PeriodicityError>;
}

/// A spectral sequence whose pages were computed elsewhere.
///
/// Page 0 is the Khovanov polynomial; the differential of the last page is
/// zero. Simplifying at the cut `(h, 2k)` yields page `k`.
#[derive(Clone, Debug)]
pub struct RecordedSpectralSequence {
    pages: Vec<LaurentPoly<Z>>,
    components: usize,
    jones: Option<LaurentPoly<Z>>,
}

/// One page of a [`RecordedSpectralSequence`].
#[derive(Clone, Debug)]
pub struct RecordedPage {
    index: usize,
    last: bool,
    poincare: LaurentPoly<Z>,
}

impl RecordedSpectralSequence {
    /// Records the pages of a knot's spectral sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::EmptySpectralSequence`] if `pages` is
    /// empty.
    pub fn new(pages: Vec<LaurentPoly<Z>>) -> Result<Self, PeriodicityError> {
        if pages.is_empty() {
            return Err(PeriodicityError::EmptySpectralSequence);
        }
        Ok(Self {
            pages,
            components: 1,
            jones: None,
        })
    }

    /// Sets the number of diagram components.
    #[must_use]
    pub fn with_components(mut self, components: usize) -> Self {
        self.components = components;
        self
    }

    /// Sets the unreduced Jones polynomial explicitly.
    #[must_use]
    pub fn with_jones(mut self, jones: LaurentPoly<Z>) -> Self {
        self.jones = Some(jones);
        self
    }

    /// The recorded pages.
    #[must_use]
    pub fn pages(&self) -> &[LaurentPoly<Z>] {
        &self.pages
    }

    /// Parses a page file: one polynomial per line, blank lines and `#`
    /// comments ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodicityError::InvalidPage`] for the first malformed
    /// line and [`PeriodicityError::EmptySpectralSequence`] if no line
    /// holds a polynomial.
    pub fn parse_pages(text: &str) -> Result<Vec<LaurentPoly<Z>>, PeriodicityError> {
        let mut pages = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let page = content
                .parse::<LaurentPoly<Z>>()
                .map_err(|source| PeriodicityError::InvalidPage { line: i + 1, source })?;
            pages.push(page);
        }
        if pages.is_empty() {
            return Err(PeriodicityError::EmptySpectralSequence);
        }
        Ok(pages)
    }

    fn page(&self, index: usize) -> RecordedPage {
        let index = index.min(self.pages.len() - 1);
        RecordedPage {
            index,
            last: index + 1 == self.pages.len(),
            poincare: self.pages[index].clone(),
        }
    }
}

impl FromStr for RecordedSpectralSequence {
    type Err = PeriodicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Self::parse_pages(s)?)
    }
}

impl RecordedPage {
    /// Position of the page in the spectral sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl HomologyComplex for RecordedPage {
    fn differential_is_zero(&self) -> bool {
        self.last
    }

    fn free_poincare_polynomial(&self) -> LaurentPoly<Z> {
        self.poincare.clone()
    }
}

impl KnotHomologyEngine for RecordedSpectralSequence {
    type Complex = RecordedPage;

    fn num_components(&self) -> usize {
        self.components
    }

    fn khovanov_complex(&self, _field: CoefficientField) -> Result<RecordedPage, PeriodicityError> {
        Ok(self.page(0))
    }

    fn simplify(&self, _complex: &RecordedPage, cut: Grading) -> Result<RecordedPage, PeriodicityError> {
        let k = usize::try_from(cut.q.max(0) / 2).unwrap_or_default();
        Ok(self.page(k))
    }

    fn jones_polynomial(&self, reduced: bool) -> Result<LaurentPoly<Z>, PeriodicityError> {
        let jones = match &self.jones {
            Some(j) => j.clone(),
            None => self.pages[0].evaluate(&-Z::one(), HOMOLOGICAL_VAR),
        };
        if !reduced {
            return Ok(jones);
        }
        // J / (q + q^-1) = q J / (1 + q^2)
        let shifted = jones.mul_term(&LaurentMonomial::var(QUANTUM_VAR), &Z::one());
        let m = LaurentMonomial::var_pow(QUANTUM_VAR, 2);
        shifted
            .exact_div_one_plus(&m)
            .ok_or_else(|| PeriodicityError::NonTerminatingFactorization {
                dividend: jones.to_string(),
                divisor: "x2 + x2^-1".to_string(),
            })
    }
}

//! Sparse Laurent monomials in indexed variables.
//!
//! A monomial is stored as a sorted list of `(variable, exponent)` pairs.
//! Variables with exponent zero are never stored, so the identity monomial
//! is the empty list.

use std::fmt;

use smallvec::SmallVec;

/// Largest exponent magnitude accepted from text.
///
/// Inverting, doubling or multiplying monomials within this range stays
/// inside `i32`.
pub const MAX_EXPONENT: i32 = i32::MAX / 2;

/// A Laurent monomial `x_{i1}^{e1} x_{i2}^{e2} ...` with non-zero integer
/// exponents.
///
/// The derived ordering is lexicographic over the `(index, exponent)` pairs
/// in increasing index order. It is used for canonical iteration and output
/// only; no algebraic meaning is attached to it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct LaurentMonomial {
    /// Sorted by variable index, exponents non-zero.
    exps: SmallVec<[(u32, i32); 4]>,
}

impl LaurentMonomial {
    /// The identity monomial.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial `x_j`.
    #[must_use]
    pub fn var(j: u32) -> Self {
        Self::var_pow(j, 1)
    }

    /// The monomial `x_j^e`, which is the identity when `e == 0`.
    #[must_use]
    pub fn var_pow(j: u32, e: i32) -> Self {
        let mut m = Self::one();
        if e != 0 {
            m.exps.push((j, e));
        }
        m
    }

    /// Builds a monomial from arbitrary `(variable, exponent)` pairs.
    ///
    /// Repeated variables are multiplied together and zero exponents are
    /// dropped.
    #[must_use]
    pub fn from_exponents(pairs: impl IntoIterator<Item = (u32, i32)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::one(), |acc, (j, e)| acc.mul(&Self::var_pow(j, e)))
    }

    /// Returns true for the identity monomial.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exps.is_empty()
    }

    /// Sum of all exponents.
    #[must_use]
    pub fn degree(&self) -> i64 {
        self.exps.iter().map(|&(_, e)| i64::from(e)).sum()
    }

    /// Exponent of `x_j`, zero if the variable does not occur.
    #[must_use]
    pub fn exponent(&self, j: u32) -> i32 {
        match self.exps.binary_search_by_key(&j, |&(v, _)| v) {
            Ok(pos) => self.exps[pos].1,
            Err(_) => 0,
        }
    }

    /// Sets the exponent of `x_j`; an exponent of zero removes the variable.
    pub fn set_exponent(&mut self, j: u32, e: i32) {
        match self.exps.binary_search_by_key(&j, |&(v, _)| v) {
            Ok(pos) if e == 0 => {
                self.exps.remove(pos);
            }
            Ok(pos) => self.exps[pos].1 = e,
            Err(_) if e == 0 => {}
            Err(pos) => self.exps.insert(pos, (j, e)),
        }
    }

    /// Adds a variable that is not yet present.
    ///
    /// # Panics
    ///
    /// Panics if `x_j` already occurs in the monomial.
    pub fn push_exponent(&mut self, j: u32, e: i32) {
        assert!(
            self.exponent(j) == 0,
            "variable x{j} is already present in {self}"
        );
        self.set_exponent(j, e);
    }

    /// Returns a copy with `x_j` removed.
    #[must_use]
    pub fn without(&self, j: u32) -> Self {
        let mut m = self.clone();
        m.set_exponent(j, 0);
        m
    }

    /// Product of two monomials: exponents add, cancelled variables vanish.
    ///
    /// # Panics
    ///
    /// Panics if an exponent sum leaves the `i32` range.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut exps = SmallVec::with_capacity(self.exps.len() + other.exps.len());
        let (mut a, mut b) = (self.exps.iter().peekable(), other.exps.iter().peekable());

        loop {
            match (a.peek(), b.peek()) {
                (Some(&&(ja, ea)), Some(&&(jb, eb))) => {
                    if ja < jb {
                        exps.push((ja, ea));
                        a.next();
                    } else if jb < ja {
                        exps.push((jb, eb));
                        b.next();
                    } else {
                        let e = ea
                            .checked_add(eb)
                            .unwrap_or_else(|| panic!("exponent overflow in x{ja}^({ea} + {eb})"));
                        if e != 0 {
                            exps.push((ja, e));
                        }
                        a.next();
                        b.next();
                    }
                }
                (Some(&&p), None) => {
                    exps.push(p);
                    a.next();
                }
                (None, Some(&&p)) => {
                    exps.push(p);
                    b.next();
                }
                (None, None) => break,
            }
        }

        Self { exps }
    }

    /// Returns the monomial with every exponent of `x_j` negated.
    ///
    /// # Panics
    ///
    /// Panics if the exponent of `x_j` is `i32::MIN`.
    #[must_use]
    pub fn invert_variable(&self, j: u32) -> Self {
        let mut m = self.clone();
        let e = m.exponent(j);
        let inverted = e
            .checked_neg()
            .unwrap_or_else(|| panic!("exponent overflow inverting x{j}^{e}"));
        m.set_exponent(j, inverted);
        m
    }

    /// Iterates over the stored `(variable, exponent)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.exps.iter().copied()
    }

    /// The smallest variable index that occurs, if any.
    #[must_use]
    pub fn first_variable(&self) -> Option<u32> {
        self.exps.first().map(|&(j, _)| j)
    }
}

impl fmt::Display for LaurentMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return f.write_str("1");
        }
        for &(j, e) in &self.exps {
            if e == 1 {
                write!(f, "x{j}")?;
            } else {
                write!(f, "x{j}^{e}")?;
            }
        }
        Ok(())
    }
}

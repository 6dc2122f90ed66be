//! Text form of Laurent polynomials.
//!
//! Accepts the output of `Display` (`-2 + 3*x1x2^-1 + x2`) and a slightly
//! looser hand-written form: terms may be separated by `-`, factors by `*`,
//! and `t`, `q` stand for `x1`, `x2`.

use std::fmt::Display;
use std::str::FromStr;

use knotperiod_rings::Ring;
use thiserror::Error;

use crate::laurent::LaurentPoly;
use crate::monomial::{LaurentMonomial, MAX_EXPONENT};

/// Errors from parsing a polynomial or monomial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePolyError {
    /// The input, or one of its terms, is empty.
    #[error("empty term in polynomial")]
    EmptyTerm,

    /// A coefficient failed to parse in the coefficient ring.
    #[error("invalid coefficient `{coefficient}`: {reason}")]
    InvalidCoefficient {
        /// The offending text.
        coefficient: String,
        /// The ring's parse error.
        reason: String,
    },

    /// A monomial is malformed.
    #[error("invalid monomial `{0}`")]
    InvalidMonomial(String),

    /// A variable name other than `x<n>`, `t` or `q`.
    #[error("unknown variable `{0}`")]
    UnknownVariable(char),
}

impl FromStr for LaurentMonomial {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePolyError::EmptyTerm);
        }
        if s == "1" {
            return Ok(Self::one());
        }

        let invalid = || ParsePolyError::InvalidMonomial(s.to_string());
        // exponents are summed per variable in i64 and range-checked at the end
        let mut totals: Vec<(u32, i64)> = Vec::new();
        let mut chars = s.chars().filter(|c| !c.is_whitespace()).peekable();

        while let Some(c) = chars.next() {
            let var = match c {
                '*' => continue,
                't' => 1,
                'q' => 2,
                'x' => {
                    let digits = take_while(&mut chars, |c| c.is_ascii_digit());
                    digits.parse::<u32>().map_err(|_| invalid())?
                }
                other => return Err(ParsePolyError::UnknownVariable(other)),
            };
            let exp = if chars.peek() == Some(&'^') {
                chars.next();
                let mut digits = String::new();
                if let Some(&sign) = chars.peek().filter(|&&c| c == '-' || c == '+') {
                    digits.push(sign);
                    chars.next();
                }
                digits.push_str(&take_while(&mut chars, |c| c.is_ascii_digit()));
                digits.parse::<i32>().map_err(|_| invalid())?
            } else {
                1
            };
            match totals.binary_search_by_key(&var, |&(v, _)| v) {
                Ok(pos) => totals[pos].1 += i64::from(exp),
                Err(pos) => totals.insert(pos, (var, i64::from(exp))),
            }
        }

        let bound = i64::from(MAX_EXPONENT);
        let mut pairs = Vec::with_capacity(totals.len());
        for (var, total) in totals {
            if !(-bound..=bound).contains(&total) {
                return Err(invalid());
            }
            pairs.push((var, i32::try_from(total).map_err(|_| invalid())?));
        }
        Ok(Self::from_exponents(pairs))
    }
}

fn take_while(
    chars: &mut std::iter::Peekable<impl Iterator<Item = char>>,
    pred: impl Fn(char) -> bool,
) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if !pred(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}

/// Splits a polynomial into signed term strings.
///
/// A `-` starts a new term unless it follows `^`, `*` or another sign.
fn split_terms(s: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        match c {
            '+' if !matches!(prev, Some('^')) => {
                terms.push(std::mem::take(&mut current));
                prev = Some('+');
                continue;
            }
            '-' if matches!(prev, Some(p) if !matches!(p, '^' | '*' | '+' | '-')) => {
                terms.push(std::mem::take(&mut current));
            }
            _ => {}
        }
        current.push(c);
        if !c.is_whitespace() {
            prev = Some(c);
        }
    }
    terms.push(current);
    terms
}

fn parse_term<R>(term: &str) -> Result<(LaurentMonomial, R), ParsePolyError>
where
    R: Ring + FromStr,
    R::Err: Display,
{
    let term = term.trim();
    if term.is_empty() {
        return Err(ParsePolyError::EmptyTerm);
    }

    if let Some(rest) = term.strip_prefix('-') {
        let (m, c) = parse_term::<R>(rest)?;
        return Ok((m, -c));
    }

    let parse_coeff = |text: &str| {
        text.trim()
            .parse::<R>()
            .map_err(|e| ParsePolyError::InvalidCoefficient {
                coefficient: text.trim().to_string(),
                reason: e.to_string(),
            })
    };

    if term.starts_with(['x', 't', 'q']) {
        return Ok((term.parse()?, R::one()));
    }
    match term.split_once('*') {
        Some((c, m)) => Ok((m.parse()?, parse_coeff(c)?)),
        None => Ok((LaurentMonomial::one(), parse_coeff(term)?)),
    }
}

impl<R> FromStr for LaurentPoly<R>
where
    R: Ring + FromStr,
    R::Err: Display,
{
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParsePolyError::EmptyTerm);
        }
        let mut p = Self::zero();
        for term in split_terms(s) {
            let (m, c) = parse_term::<R>(&term)?;
            p.add_term(m, c);
        }
        Ok(p)
    }
}

//! Outcomes of a periodicity check.

use std::fmt;

/// The periods both criteria are implemented for.
pub const SUPPORTED_PERIODS: [u32; 6] = [5, 7, 11, 13, 17, 19];

/// Returns true if `period` is one of [`SUPPORTED_PERIODS`].
#[must_use]
pub fn is_supported_period(period: u32) -> bool {
    SUPPORTED_PERIODS.contains(&period)
}

/// The answer of a necessary criterion.
///
/// `Maybe` never proves periodicity; `No` and `NoNontrivialDecomposition`
/// rule it out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Verdict {
    /// The invariants are compatible with the period.
    Maybe,
    /// The congruence fails.
    No,
    /// No decomposition of the Khovanov polynomial satisfies the congruence.
    NoNontrivialDecomposition,
}

impl Verdict {
    /// Returns true for [`Verdict::Maybe`].
    #[must_use]
    pub fn is_maybe(self) -> bool {
        self == Self::Maybe
    }
}

impl From<bool> for Verdict {
    fn from(holds: bool) -> Self {
        if holds {
            Self::Maybe
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Maybe => "Maybe",
            Self::No => "No",
            Self::NoNontrivialDecomposition => "No (nontrivial decomposition)",
        })
    }
}

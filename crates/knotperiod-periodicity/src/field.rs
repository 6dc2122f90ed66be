//! Coefficient field selection.

use std::fmt;
use std::str::FromStr;

use crate::error::PeriodicityError;

/// The field over which Khovanov homology is computed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CoefficientField {
    /// The two-element field.
    #[default]
    Z2,
    /// Z/3Z.
    Z3,
    /// Z/5Z.
    Z5,
    /// Z/7Z.
    Z7,
    /// Z/11Z.
    Z11,
    /// The rationals.
    Q,
}

impl CoefficientField {
    /// Every selectable field.
    pub const ALL: [Self; 6] = [Self::Z2, Self::Z3, Self::Z5, Self::Z7, Self::Z11, Self::Q];

    /// The characteristic, 0 for Q.
    #[must_use]
    pub const fn characteristic(self) -> u64 {
        match self {
            Self::Z2 => 2,
            Self::Z3 => 3,
            Self::Z5 => 5,
            Self::Z7 => 7,
            Self::Z11 => 11,
            Self::Q => 0,
        }
    }

    /// The selector string, e.g. `Z5`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Z2 => "Z2",
            Self::Z3 => "Z3",
            Self::Z5 => "Z5",
            Self::Z7 => "Z7",
            Self::Z11 => "Z11",
            Self::Q => "Q",
        }
    }

    /// Returns true if `period` is a multiple of the characteristic.
    #[must_use]
    pub fn clashes_with(self, period: u32) -> bool {
        let c = self.characteristic();
        c != 0 && u64::from(period) % c == 0
    }
}

impl fmt::Display for CoefficientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoefficientField {
    type Err = PeriodicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PeriodicityError::UnknownField(s.to_string()))
    }
}

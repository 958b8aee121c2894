//! The four-valued truth domain of partial interpretations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A truth value of a partial interpretation.
///
/// `Unknown` facts may still be refined by the solver, while `Error` marks a
/// fact that is both required and forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthValue {
    True,
    False,
    Unknown,
    Error,
}

impl TruthValue {
    /// All truth values in declaration order.
    pub const ALL: [TruthValue; 4] = [
        TruthValue::True,
        TruthValue::False,
        TruthValue::Unknown,
        TruthValue::Error,
    ];

    /// The upper-case spelling used on the wire and in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            TruthValue::True => "TRUE",
            TruthValue::False => "FALSE",
            TruthValue::Unknown => "UNKNOWN",
            TruthValue::Error => "ERROR",
        }
    }

    pub fn is_unknown(self) -> bool {
        self == TruthValue::Unknown
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `TRUE`, `FALSE`, `UNKNOWN`, `ERROR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTruthValue(pub String);

impl fmt::Display for UnknownTruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown truth value '{}'", self.0)
    }
}

impl std::error::Error for UnknownTruthValue {}

impl FromStr for TruthValue {
    type Err = UnknownTruthValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRUE" => Ok(TruthValue::True),
            "FALSE" => Ok(TruthValue::False),
            "UNKNOWN" => Ok(TruthValue::Unknown),
            "ERROR" => Ok(TruthValue::Error),
            other => Err(UnknownTruthValue(other.to_string())),
        }
    }
}

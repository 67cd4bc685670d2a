use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Clinical urgency tier of an alert, in increasing order of urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; the drug is a reasonable choice.
    Green,
    /// Use with monitoring.
    Yellow,
    /// Caution; adjust dose or monitor closely.
    Orange,
    /// High risk; avoid unless justified.
    Red,
    /// Contraindicated until the patient is stabilised.
    Black,
}

/// Fixed ranking score for every severity tier, indexed by declaration order.
pub const SEVERITY_SCORES: [(Severity, u32); 5] = [
    (Severity::Green, 10),
    (Severity::Yellow, 30),
    (Severity::Orange, 60),
    (Severity::Red, 85),
    (Severity::Black, 100),
];

impl Severity {
    /// Every tier, least urgent first.
    pub const ALL: [Self; 5] = [
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Black,
    ];

    /// The ranking score for this tier, read from [`SEVERITY_SCORES`].
    #[must_use]
    pub const fn score(self) -> u32 {
        SEVERITY_SCORES[self as usize].1
    }

    /// Return the `snake_case` string representation (matches serde serialization).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "severity",
                value: s.to_owned(),
            })
    }
}

//! Inclusive intensity ranges and boundary handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridMaskError, Result};

/// An inclusive range of 8-bit intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: u8,
    pub high: u8,
}

impl Range {
    /// Create a range, rejecting `low > high`.
    pub fn new(low: u8, high: u8) -> Result<Self> {
        if low > high {
            return Err(GridMaskError::InvalidValues {
                message: format!("range low {} exceeds high {}", low, high),
            });
        }
        Ok(Self { low, high })
    }

    /// Range covering a single intensity.
    pub const fn single(value: u8) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Check whether an intensity falls inside the range (both ends inclusive).
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// How adjacent ranges treat the divider value between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Neighbouring ranges both include the divider.
    #[default]
    Shared,
    /// The divider belongs to the lower range only.
    Disjoint,
}

impl FromStr for Boundary {
    type Err = GridMaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(Boundary::Shared),
            "disjoint" => Ok(Boundary::Disjoint),
            other => Err(GridMaskError::Parse {
                message: format!("Unknown boundary mode: {}", other),
                help: Some("Use 'shared' or 'disjoint'".to_string()),
            }),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Shared => write!(f, "shared"),
            Boundary::Disjoint => write!(f, "disjoint"),
        }
    }
}

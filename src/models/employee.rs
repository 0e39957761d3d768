//! Employee model and related types.
//!
//! This module defines the [`EmployeeName`] struct and [`ExperienceTier`] enum
//! for representing salespeople in the commission system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minimum length of each part of an employee name.
pub const MIN_NAME_PART_LEN: usize = 2;

/// Represents the experience level of a salesperson.
///
/// The tier selects which rate table and thresholds apply when commission
/// is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// New salesperson, paid at the probationary rates.
    Probationary,
    /// Established salesperson, paid at the experienced rates.
    Experienced,
}

impl ExperienceTier {
    /// All tiers, in legacy code order.
    pub const ALL: [ExperienceTier; 2] = [ExperienceTier::Probationary, ExperienceTier::Experienced];

    /// Returns the snake_case name used in configuration and statements.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceTier::Probationary => "probationary",
            ExperienceTier::Experienced => "experienced",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a legacy integer code (`0` probationary, `1` experienced).
///
/// # Examples
///
/// ```
/// use commission_engine::models::ExperienceTier;
///
/// assert_eq!(ExperienceTier::try_from(1).unwrap(), ExperienceTier::Experienced);
/// assert!(ExperienceTier::try_from(2).is_err());
/// ```
impl TryFrom<i32> for ExperienceTier {
    type Error = EngineError;

    fn try_from(code: i32) -> EngineResult<Self> {
        match code {
            0 => Ok(ExperienceTier::Probationary),
            1 => Ok(ExperienceTier::Experienced),
            other => Err(EngineError::InvalidTier {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for ExperienceTier {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "probationary" => Ok(ExperienceTier::Probationary),
            "experienced" => Ok(ExperienceTier::Experienced),
            _ => Err(EngineError::InvalidTier {
                value: s.to_string(),
            }),
        }
    }
}

/// A validated employee display name.
///
/// A valid name is a first and last name separated by whitespace, with each
/// part at least two characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeName {
    full: String,
    first_len: usize,
}

impl EmployeeName {
    /// Parses and validates an employee name.
    ///
    /// Leading and trailing whitespace is ignored and runs of inner
    /// whitespace collapse to a single space.
    ///
    /// The "at least [`MIN_NAME_PART_LEN`] characters" rule applies to both
    /// parts, so a two-letter first name such as "Al" is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use commission_engine::models::EmployeeName;
    ///
    /// let name = EmployeeName::parse("  Ada   Lovelace ").unwrap();
    /// assert_eq!(name.as_str(), "Ada Lovelace");
    /// assert_eq!(name.first_name(), "Ada");
    ///
    /// assert!(EmployeeName::parse("Ada").is_err());
    /// assert!(EmployeeName::parse("Ada B").is_err());
    /// assert!(EmployeeName::parse("Al Lo").is_ok());
    /// ```
    pub fn parse(raw: &str) -> EngineResult<Self> {
        let parts: Vec<&str> = raw.split_whitespace().collect();

        let invalid = |message: &str| EngineError::InvalidName {
            name: raw.to_string(),
            message: message.to_string(),
        };

        if parts.len() != 2 {
            return Err(invalid("expected a first and last name separated by whitespace"));
        }

        if parts
            .iter()
            .any(|part| part.chars().count() < MIN_NAME_PART_LEN)
        {
            return Err(invalid("each name must be at least 2 characters"));
        }

        Ok(Self {
            full: format!("{} {}", parts[0], parts[1]),
            first_len: parts[0].len(),
        })
    }

    /// Returns the full normalized name.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.full[..self.first_len]
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.full[self.first_len + 1..]
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        Self::parse(&value)
    }
}

impl From<EmployeeName> for String {
    fn from(name: EmployeeName) -> Self {
        name.full
    }
}

//! Subscription tiers.
//!
//! The tier is read from the account or organization context by the caller
//! and passed in explicitly; nothing in this crate stores it globally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Subscription level of the account running a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Starter,
    Pro,
    Business,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Free, Tier::Starter, Tier::Pro, Tier::Business];

    /// Wire name as sent by the accounts API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Starter => "starter",
            Tier::Pro => "pro",
            Tier::Business => "business",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Starter => "Starter",
            Tier::Pro => "Pro",
            Tier::Business => "Business",
        }
    }

    /// Parse a tier name, falling back to [`Tier::Free`] for anything unknown.
    ///
    /// Free carries the most restrictive limits, so a malformed value from
    /// the account context can never widen what the user may select.
    pub fn parse_lenient(value: &str) -> Self {
        match value.parse() {
            Ok(tier) => tier,
            Err(_) => {
                tracing::warn!(tier = value, "unrecognized tier, using free limits");
                Tier::Free
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "starter" => Ok(Tier::Starter),
            "pro" => Ok(Tier::Pro),
            "business" => Ok(Tier::Business),
            _ => Err(ModelError::UnknownTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Pro ".parse::<Tier>(), Ok(Tier::Pro));
        assert_eq!("BUSINESS".parse::<Tier>(), Ok(Tier::Business));
    }

    #[test]
    fn unknown_tier_is_an_error() {
        assert_eq!(
            "enterprise".parse::<Tier>(),
            Err(ModelError::UnknownTier("enterprise".to_string()))
        );
    }

    #[test]
    fn lenient_parse_falls_back_to_free() {
        assert_eq!(Tier::parse_lenient(""), Tier::Free);
        assert_eq!(Tier::parse_lenient("platinum"), Tier::Free);
        assert_eq!(Tier::parse_lenient("starter"), Tier::Starter);
    }

    #[test]
    fn display_matches_wire_name() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>(), Ok(tier));
        }
    }
}

//! Tier policy: how many industry selections a subscription tier allows.

use std::fmt;
use std::num::NonZeroUsize;

use idb_model::Tier;
use serde::{Deserialize, Serialize};

/// Maximum number of simultaneous selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionLimit {
    Limited(NonZeroUsize),
    Unlimited,
}

impl SelectionLimit {
    /// The most restrictive limit: a single selection.
    pub const SINGLE: SelectionLimit = SelectionLimit::Limited(NonZeroUsize::MIN);

    /// A limit of `n`, treating zero as one so a selection is always possible.
    pub fn limited(n: usize) -> Self {
        Self::Limited(NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN))
    }

    /// Whether a list of `count` entries still has room for another.
    pub fn allows(&self, count: usize) -> bool {
        match self {
            Self::Limited(max) => count < max.get(),
            Self::Unlimited => true,
        }
    }

    /// Single-select limits swap instead of rejecting.
    pub fn is_single(&self) -> bool {
        *self == Self::SINGLE
    }

    /// Free slots left, or `None` when unlimited.
    pub fn remaining(&self, count: usize) -> Option<usize> {
        match self {
            Self::Limited(max) => Some(max.get().saturating_sub(count)),
            Self::Unlimited => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Self::Limited(max) => Some(max.get()),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for SelectionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(max) => write!(f, "{max}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Selection limit for a subscription tier.
pub fn max_selections(tier: Tier) -> SelectionLimit {
    match tier {
        Tier::Free => SelectionLimit::SINGLE,
        Tier::Starter => SelectionLimit::limited(2),
        Tier::Pro => SelectionLimit::limited(3),
        Tier::Business => SelectionLimit::Unlimited,
    }
}

/// Selection limit for a raw tier name from the account context.
///
/// Unrecognized names get the free limit.
pub fn limit_for_tier_name(name: &str) -> SelectionLimit {
    max_selections(Tier::parse_lenient(name))
}

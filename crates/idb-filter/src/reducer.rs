//! Selection reducer: toggle, swap, or reject a candidate against a limit.
//!
//! The reducer never mutates its input. It returns the proposed list and an
//! outcome tag so callers (and tests) can see which branch was taken.

use idb_model::{IndustrySelection, SelectionKey};
use tracing::debug;

use crate::policy::SelectionLimit;

/// Which branch [`apply_selection`] took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Candidate was new and there was room.
    Appended,
    /// Single-select limit: the sole existing entry was swapped out.
    Replaced { previous: IndustrySelection },
    /// Candidate was already selected and has been toggled off.
    Removed,
    /// Limit reached; list unchanged. Not an error, the UI shows a soft denial.
    Rejected,
}

impl SelectionOutcome {
    /// Whether the owner should be told about a new list.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appended => "appended",
            Self::Replaced { .. } => "replaced",
            Self::Removed => "removed",
            Self::Rejected => "rejected",
        }
    }
}

/// Result of reducing one selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub selections: Vec<IndustrySelection>,
    pub outcome: SelectionOutcome,
}

/// Apply a user pick to the current list.
///
/// 1. Already present (same industry and sub-niche): removed, whatever the limit.
/// 2. Room left: appended.
/// 3. Limit of one: the existing entry is replaced.
/// 4. Otherwise rejected and the list is returned unchanged.
pub fn apply_selection(
    current: &[IndustrySelection],
    candidate: IndustrySelection,
    limit: SelectionLimit,
) -> SelectionChange {
    let change = if let Some(index) = current.iter().position(|s| s.same_item(&candidate)) {
        let mut selections = current.to_vec();
        selections.remove(index);
        SelectionChange {
            selections,
            outcome: SelectionOutcome::Removed,
        }
    } else if limit.allows(current.len()) {
        let mut selections = current.to_vec();
        selections.push(candidate);
        SelectionChange {
            selections,
            outcome: SelectionOutcome::Appended,
        }
    } else if limit.is_single() {
        // Any extra entries (possible after a downgrade) are dropped as well.
        let previous = current[0].clone();
        SelectionChange {
            selections: vec![candidate],
            outcome: SelectionOutcome::Replaced { previous },
        }
    } else {
        SelectionChange {
            selections: current.to_vec(),
            outcome: SelectionOutcome::Rejected,
        }
    };
    debug!(
        outcome = change.outcome.as_str(),
        count = change.selections.len(),
        %limit,
        "applied industry selection"
    );
    change
}

/// Toggle off the entry with `key`. Removing an absent key is a no-op.
pub fn remove_selection(current: &[IndustrySelection], key: &SelectionKey) -> Vec<IndustrySelection> {
    current.iter().filter(|s| !s.matches(key)).cloned().collect()
}

/// Fit an existing list under a (possibly lower) limit.
///
/// A single-select limit keeps the most recent pick; larger limits keep the
/// oldest entries in order.
pub fn clamp_to_limit(current: &[IndustrySelection], limit: SelectionLimit) -> Vec<IndustrySelection> {
    match limit.as_usize() {
        Some(max) if current.len() > max => {
            if limit.is_single() {
                current[current.len() - 1..].to_vec()
            } else {
                current[..max].to_vec()
            }
        }
        _ => current.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(id: &str) -> IndustrySelection {
        IndustrySelection::new(id, id.to_uppercase()).unwrap()
    }

    #[test]
    fn replaced_carries_previous_entry() {
        let change = apply_selection(&[pick("restaurant")], pick("gym"), SelectionLimit::SINGLE);
        assert_eq!(change.selections, vec![pick("gym")]);
        assert_eq!(
            change.outcome,
            SelectionOutcome::Replaced {
                previous: pick("restaurant")
            }
        );
    }

    #[test]
    fn removal_wins_over_full_list() {
        let current = vec![pick("a"), pick("b")];
        let change = apply_selection(&current, pick("a"), SelectionLimit::limited(2));
        assert_eq!(change.outcome, SelectionOutcome::Removed);
        assert_eq!(change.selections, vec![pick("b")]);
    }

    #[test]
    fn sub_niche_is_a_distinct_item() {
        let whole = pick("restaurant");
        let italian = pick("restaurant").with_sub_niche("italian", "Italian");
        let change = apply_selection(&[whole.clone()], italian.clone(), SelectionLimit::Unlimited);
        assert_eq!(change.outcome, SelectionOutcome::Appended);
        assert_eq!(change.selections, vec![whole, italian]);
    }

    #[test]
    fn clamp_keeps_newest_for_single_and_oldest_otherwise() {
        let current = vec![pick("a"), pick("b"), pick("c")];
        assert_eq!(clamp_to_limit(&current, SelectionLimit::SINGLE), vec![pick("c")]);
        assert_eq!(
            clamp_to_limit(&current, SelectionLimit::limited(2)),
            vec![pick("a"), pick("b")]
        );
        assert_eq!(clamp_to_limit(&current, SelectionLimit::Unlimited), current);
    }

    #[test]
    fn outcome_acceptance() {
        assert!(SelectionOutcome::Appended.is_accepted());
        assert!(SelectionOutcome::Removed.is_accepted());
        assert!(!SelectionOutcome::Rejected.is_accepted());
    }
}

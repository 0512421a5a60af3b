//! Owned selection state with an explicit Empty/Populated phase.

use idb_model::{IndustrySelection, SelectionKey, Tier};

use crate::policy::{SelectionLimit, max_selections};
use crate::reducer::{SelectionOutcome, apply_selection, clamp_to_limit, remove_selection};

/// Observable lifecycle of a selection list. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    Empty,
    Populated,
}

/// A selection list together with the limit it must respect.
///
/// This is the single writer for the list; views read it through
/// [`SelectionState::selections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selections: Vec<IndustrySelection>,
    limit: SelectionLimit,
}

impl SelectionState {
    pub fn new(limit: SelectionLimit) -> Self {
        Self {
            selections: Vec::new(),
            limit,
        }
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self::new(max_selections(tier))
    }

    /// Restore a previously saved list, trimming it to the limit.
    pub fn with_selections(selections: Vec<IndustrySelection>, limit: SelectionLimit) -> Self {
        let mut deduped: Vec<IndustrySelection> = Vec::with_capacity(selections.len());
        for selection in selections {
            if !deduped.iter().any(|s| s.same_item(&selection)) {
                deduped.push(selection);
            }
        }
        Self {
            selections: clamp_to_limit(&deduped, limit),
            limit,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selections.is_empty() {
            SelectionPhase::Empty
        } else {
            SelectionPhase::Populated
        }
    }

    pub fn selections(&self) -> &[IndustrySelection] {
        &self.selections
    }

    pub fn limit(&self) -> SelectionLimit {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.selections.iter().any(|s| s.matches(key))
    }

    /// Toggle `candidate` in or out of the list.
    pub fn select(&mut self, candidate: IndustrySelection) -> SelectionOutcome {
        let change = apply_selection(&self.selections, candidate, self.limit);
        self.selections = change.selections;
        change.outcome
    }

    /// Toggle off `key`. Returns whether anything was removed.
    pub fn deselect(&mut self, key: &SelectionKey) -> bool {
        let before = self.selections.len();
        self.selections = remove_selection(&self.selections, key);
        self.selections.len() != before
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    /// Change the limit (e.g. after a plan change) and clamp the list to it.
    pub fn set_limit(&mut self, limit: SelectionLimit) {
        self.limit = limit;
        self.selections = clamp_to_limit(&self.selections, limit);
    }

    pub fn into_selections(self) -> Vec<IndustrySelection> {
        self.selections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(id: &str) -> IndustrySelection {
        IndustrySelection::new(id, id).unwrap()
    }

    #[test]
    fn phase_transitions() {
        let mut state = SelectionState::for_tier(Tier::Pro);
        assert_eq!(state.phase(), SelectionPhase::Empty);

        state.select(pick("a"));
        assert_eq!(state.phase(), SelectionPhase::Populated);

        state.select(pick("a"));
        assert_eq!(state.phase(), SelectionPhase::Empty);

        state.select(pick("a"));
        state.select(pick("b"));
        state.clear_all();
        assert_eq!(state.phase(), SelectionPhase::Empty);
    }

    #[test]
    fn downgrade_clamps_list() {
        let mut state = SelectionState::for_tier(Tier::Business);
        for id in ["a", "b", "c", "d"] {
            state.select(pick(id));
        }
        state.set_limit(max_selections(Tier::Pro));
        assert_eq!(state.selections(), &[pick("a"), pick("b"), pick("c")]);
        state.set_limit(max_selections(Tier::Free));
        assert_eq!(state.selections(), &[pick("c")]);
    }

    #[test]
    fn restored_list_is_deduplicated_and_clamped() {
        let state = SelectionState::with_selections(
            vec![pick("a"), pick("a"), pick("b"), pick("c")],
            SelectionLimit::limited(2),
        );
        assert_eq!(state.selections(), &[pick("a"), pick("b")]);
    }

    #[test]
    fn deselect_reports_removal() {
        let mut state = SelectionState::new(SelectionLimit::Unlimited);
        state.select(pick("a"));
        assert!(state.deselect(&SelectionKey::industry("a")));
        assert!(!state.deselect(&SelectionKey::industry("a")));
        assert!(state.is_empty());
    }
}

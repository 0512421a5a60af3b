//! Industry selector surface.
//!
//! # Design
//!
//! The surface is a controlled component. It borrows the owner's selection
//! list for one render/event cycle and never writes to it; accepted changes
//! are proposed through `on_change`. Browsing state (search text, open
//! category, last denial) lives in [`SelectorUiState`], which the owner keeps
//! between renders.
//!
//! # Example
//!
//! ```
//! use idb_filter::{IndustryCatalog, SelectionLimit, SelectorSurface, SelectorUiState};
//!
//! let catalog = IndustryCatalog::builtin();
//! let mut ui = SelectorUiState::default();
//! let mut proposed = Vec::new();
//! let mut surface = SelectorSurface::new(&catalog, &[], SelectionLimit::SINGLE, &mut ui, |next| {
//!     proposed = next.to_vec();
//! });
//! surface.toggle_industry("gym").unwrap();
//! drop(surface);
//! assert_eq!(proposed.len(), 1);
//! ```

use std::borrow::Cow;

use idb_model::{IndustrySelection, SelectionKey};

use crate::catalog::{CatalogError, CatalogMatch, Category, Industry, IndustryCatalog};
use crate::policy::SelectionLimit;
use crate::reducer::{SelectionOutcome, apply_selection, remove_selection};

/// Shown after a pick was refused because the tier limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradePrompt {
    pub limit: SelectionLimit,
}

impl UpgradePrompt {
    pub fn message(&self) -> String {
        let noun = if self.limit.is_single() {
            "industry selection"
        } else {
            "industry selections"
        };
        format!(
            "Your plan allows {} {noun}. Upgrade to select more.",
            self.limit
        )
    }
}

/// Browsing state that survives between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorUiState {
    pub search: String,
    pub active_category: Option<String>,
    pub expanded_industry: Option<String>,
    pub denial: Option<UpgradePrompt>,
}

pub struct SelectorSurface<'a, F>
where
    F: FnMut(&[IndustrySelection]),
{
    catalog: &'a IndustryCatalog,
    current: Cow<'a, [IndustrySelection]>,
    limit: SelectionLimit,
    ui: &'a mut SelectorUiState,
    on_change: F,
}

impl<'a, F> SelectorSurface<'a, F>
where
    F: FnMut(&[IndustrySelection]),
{
    pub fn new(
        catalog: &'a IndustryCatalog,
        selections: &'a [IndustrySelection],
        limit: SelectionLimit,
        ui: &'a mut SelectorUiState,
        on_change: F,
    ) -> Self {
        Self {
            catalog,
            current: Cow::Borrowed(selections),
            limit,
            ui,
            on_change,
        }
    }

    /// Selections as this surface currently sees them, including changes it
    /// has already proposed during this cycle.
    pub fn selections(&self) -> &[IndustrySelection] {
        &self.current
    }

    pub fn limit(&self) -> SelectionLimit {
        self.limit
    }

    /// Toggle a selection; `on_change` fires unless the pick is rejected.
    pub fn toggle(&mut self, candidate: IndustrySelection) -> SelectionOutcome {
        let change = apply_selection(&self.current, candidate, self.limit);
        if change.outcome.is_accepted() {
            self.ui.denial = None;
            self.propose(change.selections);
        } else {
            self.ui.denial = Some(UpgradePrompt { limit: self.limit });
        }
        change.outcome
    }

    pub fn toggle_industry(&mut self, industry_id: &str) -> Result<SelectionOutcome, CatalogError> {
        let candidate = self.catalog.selection_for(industry_id, None)?;
        Ok(self.toggle(candidate))
    }

    pub fn toggle_sub_niche(
        &mut self,
        industry_id: &str,
        sub_niche_id: &str,
    ) -> Result<SelectionOutcome, CatalogError> {
        let candidate = self.catalog.selection_for(industry_id, Some(sub_niche_id))?;
        Ok(self.toggle(candidate))
    }

    /// Remove a chip. Absent keys are ignored and do not notify.
    pub fn remove(&mut self, key: &SelectionKey) -> bool {
        let next = remove_selection(&self.current, key);
        if next.len() == self.current.len() {
            return false;
        }
        self.ui.denial = None;
        self.propose(next);
        true
    }

    pub fn clear_all(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.ui.denial = None;
        self.propose(Vec::new());
    }

    fn propose(&mut self, next: Vec<IndustrySelection>) {
        (self.on_change)(&next);
        self.current = Cow::Owned(next);
    }

    pub fn is_selected(&self, key: &SelectionKey) -> bool {
        self.current.iter().any(|s| s.matches(key))
    }

    /// Unselected items are disabled once a multi-select limit is full.
    /// Single-select tiers never disable: a new pick swaps the old one.
    pub fn is_disabled(&self, key: &SelectionKey) -> bool {
        !self.limit.allows(self.current.len()) && !self.limit.is_single() && !self.is_selected(key)
    }

    pub fn denial_hint(&self) -> Option<UpgradePrompt> {
        self.ui.denial
    }

    pub fn remaining(&self) -> Option<usize> {
        self.limit.remaining(self.current.len())
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.ui.search = text.into();
    }

    pub fn open_category(&mut self, category_id: &str) {
        self.ui.active_category = Some(category_id.to_string());
        self.ui.expanded_industry = None;
    }

    pub fn expand_industry(&mut self, industry_id: &str) {
        if self.ui.expanded_industry.as_deref() == Some(industry_id) {
            self.ui.expanded_industry = None;
        } else {
            self.ui.expanded_industry = Some(industry_id.to_string());
        }
    }

    pub fn categories(&self) -> &'a [Category] {
        &self.catalog.categories
    }

    /// The open category tab, defaulting to the first one.
    pub fn active_category(&self) -> Option<&'a Category> {
        let catalog = self.catalog;
        match &self.ui.active_category {
            Some(id) => catalog.category(id),
            None => catalog.categories.first(),
        }
    }

    /// Industries listed under the open category tab.
    pub fn industries(&self) -> &'a [Industry] {
        self.active_category()
            .map(|category| category.industries.as_slice())
            .unwrap_or(&[])
    }

    /// Search hits for the current search text.
    pub fn search_results(&self) -> Vec<CatalogMatch<'a>> {
        self.catalog.search(&self.ui.search)
    }

    /// Badge count for a category tab.
    pub fn selected_in_category(&self, category_id: &str) -> usize {
        let Some(category) = self.catalog.category(category_id) else {
            return 0;
        };
        self.current
            .iter()
            .filter(|s| category.industries.iter().any(|i| i.id == s.industry_id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_pick_sets_denial_without_notifying() {
        let catalog = IndustryCatalog::builtin();
        let selections = vec![
            catalog.selection_for("gym", None).unwrap(),
            catalog.selection_for("spa", None).unwrap(),
        ];
        let mut ui = SelectorUiState::default();
        let mut calls = 0;
        let mut surface = SelectorSurface::new(
            &catalog,
            &selections,
            SelectionLimit::limited(2),
            &mut ui,
            |_| calls += 1,
        );
        assert!(surface.is_disabled(&SelectionKey::industry("bakery")));
        assert!(!surface.is_disabled(&SelectionKey::industry("gym")));

        let outcome = surface.toggle_industry("bakery").unwrap();
        assert_eq!(outcome, SelectionOutcome::Rejected);
        assert_eq!(
            surface.denial_hint(),
            Some(UpgradePrompt {
                limit: SelectionLimit::limited(2)
            })
        );

        surface.toggle_industry("gym").unwrap();
        assert_eq!(surface.denial_hint(), None);
        drop(surface);
        assert_eq!(calls, 1);
    }

    #[test]
    fn upgrade_prompt_wording_follows_limit() {
        assert_eq!(
            UpgradePrompt {
                limit: SelectionLimit::SINGLE
            }
            .message(),
            "Your plan allows 1 industry selection. Upgrade to select more."
        );
        assert_eq!(
            UpgradePrompt {
                limit: SelectionLimit::limited(3)
            }
            .message(),
            "Your plan allows 3 industry selections. Upgrade to select more."
        );
    }

    #[test]
    fn single_select_never_disables() {
        let catalog = IndustryCatalog::builtin();
        let selections = vec![catalog.selection_for("gym", None).unwrap()];
        let mut ui = SelectorUiState::default();
        let surface =
            SelectorSurface::new(&catalog, &selections, SelectionLimit::SINGLE, &mut ui, |_| {});
        assert!(!surface.is_disabled(&SelectionKey::industry("spa")));
    }

    #[test]
    fn consecutive_events_see_proposed_list() {
        let catalog = IndustryCatalog::builtin();
        let mut ui = SelectorUiState::default();
        let mut last = Vec::new();
        let mut surface =
            SelectorSurface::new(&catalog, &[], SelectionLimit::Unlimited, &mut ui, |next| {
                last = next.to_vec()
            });
        surface.toggle_sub_niche("restaurant", "italian").unwrap();
        surface.toggle_sub_niche("restaurant", "mexican").unwrap();
        assert_eq!(surface.selected_in_category("food_beverage"), 2);
        assert!(surface.remove(&SelectionKey::sub_niche("restaurant", "italian")));
        assert!(!surface.remove(&SelectionKey::sub_niche("restaurant", "italian")));
        drop(surface);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].sub_niche_id.as_deref(), Some("mexican"));
    }

    #[test]
    fn browsing_defaults_to_first_category() {
        let catalog = IndustryCatalog::builtin();
        let mut ui = SelectorUiState::default();
        let mut surface =
            SelectorSurface::new(&catalog, &[], SelectionLimit::SINGLE, &mut ui, |_| {});
        assert_eq!(surface.active_category().map(|c| c.id.as_str()), Some("food_beverage"));
        surface.open_category("automotive");
        let ids: Vec<&str> = surface.industries().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["auto_repair", "car_dealer", "car_wash"]);
        surface.expand_industry("auto_repair");
        surface.expand_industry("auto_repair");
        drop(surface);
        assert_eq!(ui.expanded_industry, None);
        assert_eq!(ui.active_category.as_deref(), Some("automotive"));
    }
}

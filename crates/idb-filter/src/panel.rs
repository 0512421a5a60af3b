//! Filter panel: merges industry selections with location, quality and
//! specialty filters into the [`FilterState`] sent with a search.

use idb_model::{
    FilterState, IndustrySelection, LocationFilters, QualityFilters, Result, SpecialtyFilters,
    Tier,
};

use crate::policy::{SelectionLimit, max_selections};
use crate::reducer::clamp_to_limit;

/// Merge the filter groups into one search filter.
///
/// Only the quality range is validated. Nothing is added beyond the inputs;
/// an empty specialty list is treated as unset.
pub fn build_filter_state(
    selections: &[IndustrySelection],
    location: &LocationFilters,
    quality: &QualityFilters,
    specialties: &SpecialtyFilters,
) -> Result<FilterState> {
    quality.validate()?;
    Ok(FilterState {
        selections: selections.to_vec(),
        country: location.country.clone(),
        city: location.city.clone(),
        radius: location.radius_km,
        has_email: quality.has_email,
        has_phone: quality.has_phone,
        has_website: quality.has_website,
        verified: quality.verified,
        quality_score_min: quality.score_min,
        quality_score_max: quality.score_max,
        specialties: if specialties.specialties.is_empty() {
            None
        } else {
            Some(specialties.specialties.clone())
        },
    })
}

/// Owner of the filter groups behind the lead search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    limit: SelectionLimit,
    selections: Vec<IndustrySelection>,
    location: LocationFilters,
    quality: QualityFilters,
    specialties: SpecialtyFilters,
}

impl FilterPanel {
    pub fn new(limit: SelectionLimit) -> Self {
        Self {
            limit,
            selections: Vec::new(),
            location: LocationFilters::default(),
            quality: QualityFilters::default(),
            specialties: SpecialtyFilters::default(),
        }
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self::new(max_selections(tier))
    }

    pub fn limit(&self) -> SelectionLimit {
        self.limit
    }

    pub fn selections(&self) -> &[IndustrySelection] {
        &self.selections
    }

    pub fn location(&self) -> &LocationFilters {
        &self.location
    }

    pub fn quality(&self) -> &QualityFilters {
        &self.quality
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties.specialties
    }

    /// Accept a list proposed by the selector. It is clamped to the limit in
    /// case the proposal was made against a stale tier.
    pub fn set_selections(&mut self, selections: &[IndustrySelection]) {
        self.selections = clamp_to_limit(selections, self.limit);
    }

    pub fn set_location(&mut self, location: LocationFilters) {
        self.location = location;
    }

    /// Replace the quality filters; an invalid range leaves the old ones in place.
    pub fn set_quality(&mut self, quality: QualityFilters) -> Result<()> {
        quality.validate()?;
        self.quality = quality;
        Ok(())
    }

    /// Add a specialty tag, or remove it if already present. Blank tags are ignored.
    pub fn toggle_specialty(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        let tags = &mut self.specialties.specialties;
        if let Some(index) = tags.iter().position(|t| t.eq_ignore_ascii_case(tag)) {
            tags.remove(index);
        } else {
            tags.push(tag.to_string());
        }
    }

    /// Clear every filter; the limit is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.limit);
    }

    pub fn state(&self) -> Result<FilterState> {
        build_filter_state(
            &self.selections,
            &self.location,
            &self.quality,
            &self.specialties,
        )
    }

    pub fn active_filter_count(&self) -> usize {
        self.state().map(|s| s.active_filter_count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(id: &str) -> IndustrySelection {
        IndustrySelection::new(id, id).unwrap()
    }

    #[test]
    fn empty_specialties_are_omitted() {
        let state = build_filter_state(
            &[],
            &LocationFilters::default(),
            &QualityFilters::default(),
            &SpecialtyFilters::default(),
        )
        .unwrap();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn invalid_quality_is_not_applied() {
        let mut panel = FilterPanel::for_tier(Tier::Pro);
        let bad = QualityFilters {
            score_min: Some(90),
            score_max: Some(10),
            ..Default::default()
        };
        assert!(panel.set_quality(bad).is_err());
        assert_eq!(panel.quality(), &QualityFilters::default());
    }

    #[test]
    fn specialty_toggle_is_case_insensitive() {
        let mut panel = FilterPanel::for_tier(Tier::Free);
        panel.toggle_specialty("Vegan");
        panel.toggle_specialty("  ");
        panel.toggle_specialty("Delivery");
        panel.toggle_specialty("vegan");
        assert_eq!(panel.specialties(), &["Delivery".to_string()]);
    }

    #[test]
    fn set_selections_clamps_and_reset_keeps_limit() {
        let mut panel = FilterPanel::for_tier(Tier::Starter);
        panel.set_selections(&[pick("a"), pick("b"), pick("c")]);
        assert_eq!(panel.selections(), &[pick("a"), pick("b")]);
        panel.set_location(LocationFilters {
            country: Some("DE".to_string()),
            ..Default::default()
        });
        assert_eq!(panel.active_filter_count(), 2);
        panel.reset();
        assert_eq!(panel.active_filter_count(), 0);
        assert_eq!(panel.limit(), SelectionLimit::limited(2));
    }
}

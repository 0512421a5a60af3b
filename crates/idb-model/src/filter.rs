//! Filter groups and the combined filter state sent with a lead search.

use serde::{Deserialize, Serialize};

use crate::{IndustrySelection, ModelError, Result};

/// Highest quality score a lead can carry.
pub const QUALITY_SCORE_MAX: u8 = 100;

/// Where leads must be located.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilters {
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub city: Option<String>,
    /// Search radius around `city`, in kilometres.
    pub radius_km: Option<u32>,
}

/// Contact-data and quality requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFilters {
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
    pub has_website: Option<bool>,
    pub verified: Option<bool>,
    pub score_min: Option<u8>,
    pub score_max: Option<u8>,
}

impl QualityFilters {
    /// Check that both bounds lie in `0..=100` and are ordered.
    pub fn validate(&self) -> Result<()> {
        validate_score_range(self.score_min, self.score_max)
    }
}

/// Specialty tags a lead must carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyFilters {
    pub specialties: Vec<String>,
}

/// Full filter object consumed by the lead search request.
///
/// Serialized with camelCase keys; unset filters are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub selections: Vec<IndustrySelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_phone: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_website: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score_min: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score_max: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
}

impl FilterState {
    pub fn validate(&self) -> Result<()> {
        validate_score_range(self.quality_score_min, self.quality_score_max)
    }

    /// Number of filters currently narrowing the search, as shown on the
    /// filter panel badge. The quality range counts once.
    pub fn active_filter_count(&self) -> usize {
        let flags = [self.has_email, self.has_phone, self.has_website, self.verified];
        let mut count = flags.iter().filter(|flag| flag.is_some()).count();
        if !self.selections.is_empty() {
            count += 1;
        }
        count += [self.country.is_some(), self.city.is_some(), self.radius.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if self.quality_score_min.is_some() || self.quality_score_max.is_some() {
            count += 1;
        }
        if self.specialties.as_ref().is_some_and(|tags| !tags.is_empty()) {
            count += 1;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}

fn validate_score_range(min: Option<u8>, max: Option<u8>) -> Result<()> {
    if let Some(value) = min.filter(|v| *v > QUALITY_SCORE_MAX) {
        return Err(ModelError::QualityScoreOutOfRange {
            field: "qualityScoreMin",
            value,
        });
    }
    if let Some(value) = max.filter(|v| *v > QUALITY_SCORE_MAX) {
        return Err(ModelError::QualityScoreOutOfRange {
            field: "qualityScoreMax",
            value,
        });
    }
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(ModelError::QualityRangeInverted { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_rejected() {
        let quality = QualityFilters {
            score_min: Some(80),
            score_max: Some(20),
            ..Default::default()
        };
        assert_eq!(
            quality.validate(),
            Err(ModelError::QualityRangeInverted { min: 80, max: 20 })
        );
    }

    #[test]
    fn out_of_range_bound_is_rejected() {
        let quality = QualityFilters {
            score_max: Some(101),
            ..Default::default()
        };
        assert!(matches!(
            quality.validate(),
            Err(ModelError::QualityScoreOutOfRange {
                field: "qualityScoreMax",
                value: 101
            })
        ));
    }

    #[test]
    fn single_bound_and_equal_bounds_are_valid() {
        for (min, max) in [(Some(0), None), (None, Some(100)), (Some(50), Some(50))] {
            let quality = QualityFilters {
                score_min: min,
                score_max: max,
                ..Default::default()
            };
            assert_eq!(quality.validate(), Ok(()));
        }
    }

    #[test]
    fn active_filter_count_groups_quality_range() {
        let state = FilterState {
            country: Some("US".to_string()),
            has_email: Some(true),
            quality_score_min: Some(70),
            quality_score_max: Some(100),
            specialties: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(state.active_filter_count(), 3);
        assert!(FilterState::default().is_empty());
    }
}

//! Industry selection and filter-state logic for IndustryDB lead search.
//!
//! Everything here is synchronous, single-owner state transformation: the
//! tier policy decides how many industries may be picked, the reducer applies
//! a pick, and the filter panel assembles the request filter.

pub mod catalog;
pub mod country;
pub mod panel;
pub mod policy;
pub mod reducer;
pub mod search;
pub mod state;
pub mod surface;
pub mod usage;

pub use catalog::{CatalogError, CatalogMatch, Category, DEFAULT_ICON, Industry, IndustryCatalog, SubNiche};
pub use country::{Country, CountrySelector, NavKey, Region, RegionGroup, group_by_region};
pub use panel::{FilterPanel, build_filter_state};
pub use policy::{SelectionLimit, limit_for_tier_name, max_selections};
pub use reducer::{SelectionChange, SelectionOutcome, apply_selection, clamp_to_limit, remove_selection};
pub use search::{LeadPage, LeadRecord, LeadSearch, SearchRequest};
pub use state::{SelectionPhase, SelectionState};
pub use surface::{SelectorSurface, SelectorUiState, UpgradePrompt};
pub use usage::UsageMeter;

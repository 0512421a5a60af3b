pub mod error;
pub mod filter;
pub mod selection;
pub mod tier;

pub use error::{ModelError, Result};
pub use filter::{FilterState, LocationFilters, QUALITY_SCORE_MAX, QualityFilters, SpecialtyFilters};
pub use selection::{IndustrySelection, SelectionKey};
pub use tier::Tier;

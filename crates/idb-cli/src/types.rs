use idb_filter::{SelectionLimit, SelectionOutcome, UpgradePrompt};
use idb_model::{IndustrySelection, Tier};

/// What one pick did to the list.
#[derive(Debug, Clone)]
pub struct SelectStep {
    pub pick: String,
    pub outcome: SelectionOutcome,
    pub selections: Vec<IndustrySelection>,
}

#[derive(Debug, Clone)]
pub struct SelectReport {
    pub tier: Tier,
    pub limit: SelectionLimit,
    pub steps: Vec<SelectStep>,
    pub selections: Vec<IndustrySelection>,
    pub denial: Option<UpgradePrompt>,
}

/// A pick parsed from `INDUSTRY` or `INDUSTRY/SUB_NICHE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub industry_id: String,
    pub sub_niche_id: Option<String>,
}

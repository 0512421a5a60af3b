//! Lead search request shaping and the contract of the search collaborator.
//!
//! This crate only builds the request; executing it is left to an
//! implementation of [`LeadSearch`] (the leads API client).

use idb_model::FilterState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 25;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filters: FilterState,
    /// 1-based.
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Page 0 is treated as page 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Clamped to `1..=MAX_PER_PAGE`.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Rows skipped before this page. A deserialized page 0 reads as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.page = self.page.saturating_add(1);
        next
    }
}

/// A lead as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    pub name: String,
    pub industry_id: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub quality_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPage {
    pub leads: Vec<LeadRecord>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl LeadPage {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// Executes a search. Implemented by the API client outside this workspace.
pub trait LeadSearch {
    type Error;

    fn search(&self, request: &SearchRequest) -> Result<LeadPage, Self::Error>;
}

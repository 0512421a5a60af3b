use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ModelError, Result};

/// Identity of a selection: an industry plus an optional sub-niche.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub industry_id: String,
    pub sub_niche_id: Option<String>,
}

impl SelectionKey {
    pub fn industry(industry_id: impl Into<String>) -> Self {
        Self {
            industry_id: industry_id.into(),
            sub_niche_id: None,
        }
    }

    pub fn sub_niche(industry_id: impl Into<String>, sub_niche_id: impl Into<String>) -> Self {
        Self {
            industry_id: industry_id.into(),
            sub_niche_id: Some(sub_niche_id.into()),
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_niche_id {
            Some(sub) => write!(f, "{}/{}", self.industry_id, sub),
            None => f.write_str(&self.industry_id),
        }
    }
}

/// One chosen (industry, optional sub-niche) pair used to filter leads.
///
/// Two selections are the same item when their [`SelectionKey`]s match;
/// display names are carried along for rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustrySelection {
    pub industry_id: String,
    pub industry_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_niche_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_niche_name: Option<String>,
}

impl IndustrySelection {
    /// Selection of a whole industry.
    pub fn new(industry_id: impl Into<String>, industry_name: impl Into<String>) -> Result<Self> {
        let industry_id = industry_id.into().trim().to_string();
        if industry_id.is_empty() {
            return Err(ModelError::EmptyIndustryId);
        }
        Ok(Self {
            industry_id,
            industry_name: industry_name.into(),
            sub_niche_id: None,
            sub_niche_name: None,
        })
    }

    /// Narrow this selection to a sub-niche. A blank id leaves it industry-wide.
    pub fn with_sub_niche(
        mut self,
        sub_niche_id: impl Into<String>,
        sub_niche_name: impl Into<String>,
    ) -> Self {
        let sub_niche_id = sub_niche_id.into().trim().to_string();
        if sub_niche_id.is_empty() {
            self.sub_niche_id = None;
            self.sub_niche_name = None;
        } else {
            self.sub_niche_id = Some(sub_niche_id);
            self.sub_niche_name = Some(sub_niche_name.into());
        }
        self
    }

    pub fn key(&self) -> SelectionKey {
        SelectionKey {
            industry_id: self.industry_id.clone(),
            sub_niche_id: self.sub_niche_id.clone(),
        }
    }

    pub fn matches(&self, key: &SelectionKey) -> bool {
        self.industry_id == key.industry_id && self.sub_niche_id == key.sub_niche_id
    }

    pub fn same_item(&self, other: &IndustrySelection) -> bool {
        self.industry_id == other.industry_id && self.sub_niche_id == other.sub_niche_id
    }

    pub fn label(&self) -> String {
        match &self.sub_niche_name {
            Some(sub) => format!("{} › {}", self.industry_name, sub),
            None => self.industry_name.clone(),
        }
    }
}

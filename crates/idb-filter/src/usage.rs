//! Quota usage arithmetic for the plan and billing widgets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMeter {
    pub used: u64,
    /// `None` means the plan has no cap.
    pub limit: Option<u64>,
}

impl UsageMeter {
    pub fn new(used: u64, limit: Option<u64>) -> Self {
        Self { used, limit }
    }

    /// Rounded percentage used. `None` when uncapped. Only an exhausted
    /// quota reads 100; anything short of it tops out at 99. A zero limit
    /// reads as fully used.
    pub fn percent(&self) -> Option<u8> {
        let limit = self.limit?;
        if limit == 0 || self.used >= limit {
            return Some(100);
        }
        let pct = (u128::from(self.used) * 100 + u128::from(limit) / 2) / u128::from(limit);
        Some(pct.min(99) as u8)
    }

    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|limit| limit.saturating_sub(self.used))
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }
}

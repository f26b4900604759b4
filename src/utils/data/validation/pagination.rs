//! Admin listing parameters

use serde::Deserialize;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 20;
const MAX_LIMIT: u64 = 100;
const MAX_OFFSET: u64 = i64::MAX as u64;

const DEFAULT_RANGE_DAYS: u32 = 30;
const MAX_RANGE_DAYS: u32 = 180;

/// Page/limit pair as received on the query string
///
/// Out-of-range values fall back to defaults instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl Pagination {
    /// 1-based page number
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Page size in 1..=100
    pub fn limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<u64>().ok())
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .unwrap_or(DEFAULT_LIMIT)
    }

    /// Row offset for the current page, capped so it binds as a signed 64-bit integer
    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.limit())
            .min(MAX_OFFSET)
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit())
    }
}

/// Day window for dashboard series, written as `30d` or `30`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange(pub u32);

impl DayRange {
    pub fn parse(raw: Option<&str>) -> Self {
        let days = raw
            .map(|r| r.trim().trim_end_matches(['d', 'D']))
            .and_then(|r| r.parse::<u32>().ok())
            .filter(|d| (1..=MAX_RANGE_DAYS).contains(d))
            .unwrap_or(DEFAULT_RANGE_DAYS);
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self(DEFAULT_RANGE_DAYS)
    }
}

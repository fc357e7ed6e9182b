//! Material audit-log models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{StockOperation, StockReason};

/// One entry in the append-only material audit log
///
/// Created server-side as a side effect of stock mutations; the console only
/// ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialControl {
    pub id: i64,
    pub material: i64,
    #[serde(default)]
    pub material_name: Option<String>,
    pub user: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub quantity: i64,
    pub operation: StockOperation,
    pub reason: StockReason,
    #[serde(default)]
    pub report: Option<i64>,
    #[serde(default)]
    pub ticket: Option<i64>,
    #[serde(default)]
    pub invoice_image: Option<String>,
    pub date: DateTime<Utc>,
}

/// Client-side filters for the audit-log screen
#[derive(Debug, Clone, Default)]
pub struct ControlFilter {
    pub material: Option<i64>,
    pub user: Option<i64>,
    pub reason: Option<StockReason>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl ControlFilter {
    pub fn matches(&self, entry: &MaterialControl) -> bool {
        if self.material.is_some_and(|m| entry.material != m) {
            return false;
        }
        if self.user.is_some_and(|u| entry.user != u) {
            return false;
        }
        if self.reason.is_some_and(|r| entry.reason != r) {
            return false;
        }
        if self.date_from.is_some_and(|from| entry.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| entry.date > to) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(material: i64, reason: StockReason, day: u32) -> MaterialControl {
        MaterialControl {
            id: 1,
            material,
            material_name: None,
            user: 7,
            user_name: None,
            quantity: 3,
            operation: StockOperation::Add,
            reason,
            report: None,
            ticket: None,
            invoice_image: None,
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ControlFilter::default();
        assert!(filter.matches(&entry(1, StockReason::Purchase, 10)));
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filter = ControlFilter {
            material: Some(1),
            reason: Some(StockReason::Purchase),
            ..ControlFilter::default()
        };
        assert!(filter.matches(&entry(1, StockReason::Purchase, 10)));
        assert!(!filter.matches(&entry(2, StockReason::Purchase, 10)));
        assert!(!filter.matches(&entry(1, StockReason::Sale, 10)));
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = ControlFilter {
            date_from: Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()),
            date_to: Some(Utc.with_ymd_and_hms(2024, 3, 12, 23, 59, 59).unwrap()),
            ..ControlFilter::default()
        };
        assert!(!filter.matches(&entry(1, StockReason::Purchase, 9)));
        assert!(filter.matches(&entry(1, StockReason::Purchase, 10)));
        assert!(filter.matches(&entry(1, StockReason::Purchase, 12)));
        assert!(!filter.matches(&entry(1, StockReason::Purchase, 13)));
    }
}

//! Shared request shapes and serde helpers used across domain modules.

pub mod serde_util;

use serde::{Deserialize, Serialize};

// ─── SearchFilters ───────────────────────────────────────────────────────────

/// Optional filters for `get_transactions` and `get_wallets`.
///
/// Every field is optional; unset fields are omitted from the signed body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_timelines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_ascending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sila_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sila_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    pub fn reference_id(mut self, id: impl Into<String>) -> Self {
        self.reference_id = Some(id.into());
        self
    }

    pub fn statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn transaction_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transaction_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn amount_range(mut self, min: u64, max: u64) -> Self {
        self.min_sila_amount = Some(min);
        self.max_sila_amount = Some(max);
        self
    }

    pub fn epoch_range(mut self, start: i64, end: i64) -> Self {
        self.start_epoch = Some(start);
        self.end_epoch = Some(end);
        self
    }

    pub fn show_timelines(mut self, show: bool) -> Self {
        self.show_timelines = Some(show);
        self
    }

    pub fn sort_ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = Some(ascending);
        self
    }

    pub fn blockchain_address(mut self, address: impl Into<String>) -> Self {
        self.blockchain_address = Some(address.into());
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_serialize_to_empty_object() {
        assert_eq!(serde_json::to_string(&SearchFilters::new()).unwrap(), "{}");
    }

    #[test]
    fn test_filters_builder() {
        let f = SearchFilters::new()
            .statuses(["pending", "success"])
            .amount_range(100, 1000)
            .page(2, 20);
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["statuses"], serde_json::json!(["pending", "success"]));
        assert_eq!(v["min_sila_amount"], 100);
        assert_eq!(v["per_page"], 20);
        assert!(v.get("transaction_id").is_none());
    }
}

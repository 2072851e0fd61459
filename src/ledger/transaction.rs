use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates;

/// A single ledger movement as recorded by the upstream application.
///
/// `amount` is always an unsigned magnitude; direction is implied by `kind`.
/// `date` is kept as the raw string the app stores (ISO `YYYY-MM-DD`, or the
/// legacy `"DD Mon"` short form) and normalized on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    pub is_paid: bool,
}

impl Transaction {
    pub fn new(
        kind: TransactionType,
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date: date.into(),
            kind,
            category: None,
            account_id: None,
            is_paid: false,
        }
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn paid(mut self) -> Self {
        self.is_paid = true;
        self
    }

    pub fn mark_paid(&mut self) {
        self.is_paid = true;
    }

    /// The calendar date this transaction belongs to, via the lenient
    /// normalizer.
    pub fn normalized_date(&self) -> NaiveDate {
        dates::transaction_date(&self.date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

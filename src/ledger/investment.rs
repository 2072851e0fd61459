use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An investment position, valued at its recorded amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub date: String,
}

impl Investment {
    pub fn new(name: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date: date.into(),
        }
    }
}

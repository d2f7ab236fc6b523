use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operating expense as returned by `GET /expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub amount: f64,

    pub date: DateTime<Utc>,
}

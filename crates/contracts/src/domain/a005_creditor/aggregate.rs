use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer buying on credit, as returned by `GET /creditors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creditor {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub total_credit: f64,

    #[serde(default)]
    pub total_paid: f64,

    /// `total_credit - total_paid`, maintained by the API
    #[serde(default)]
    pub balance: f64,

    #[serde(default)]
    pub sales: Vec<SaleRef>,
}

/// Sale linked to a creditor, populated or bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaleRef {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default, rename = "invoiceNumber")]
        invoice_number: Option<String>,
    },
    Id(String),
}

impl SaleRef {
    pub fn id(&self) -> &str {
        match self {
            SaleRef::Populated { id, .. } => id,
            SaleRef::Id(id) => id,
        }
    }
}

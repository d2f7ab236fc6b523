use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::ProductRef;

/// The only purchase status that counts as settled
pub const PURCHASE_STATUS_PAID: &str = "Paid";

/// Supplier bill as returned by `GET /purchases`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub bill_number: String,

    #[serde(default)]
    pub supplier_name: String,

    pub purchase_date: DateTime<Utc>,

    #[serde(default)]
    pub gst: f64,

    #[serde(default)]
    pub payment_status: String,

    #[serde(default)]
    pub total_amount: f64,

    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

impl Purchase {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PURCHASE_STATUS_PAID
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    #[serde(default)]
    pub product: Option<ProductRef>,

    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub cost_price: f64,
}

impl PurchaseItem {
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.cost_price
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.name())
    }
}

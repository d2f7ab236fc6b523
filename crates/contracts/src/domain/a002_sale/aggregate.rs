use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::ProductRef;

// ============================================================================
// Enums
// ============================================================================

/// How the customer paid. Anything other than `Cash` is a receivable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMode {
    Cash,
    Upi,
    Card,
    Credit,
    /// Unknown value, preserved verbatim
    Other(String),
}

impl PaymentMode {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::Credit => "Credit",
            PaymentMode::Other(s) => s,
        }
    }
}

impl From<String> for PaymentMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Cash" => PaymentMode::Cash,
            "UPI" => PaymentMode::Upi,
            "Card" => PaymentMode::Card,
            "Credit" => PaymentMode::Credit,
            _ => PaymentMode::Other(s),
        }
    }
}

impl From<PaymentMode> for String {
    fn from(m: PaymentMode) -> Self {
        m.as_str().to_string()
    }
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Other(String::new())
    }
}

/// Settlement state of a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PAID" => PaymentStatus::Paid,
            "UNPAID" => PaymentStatus::Unpaid,
            _ => PaymentStatus::Other(s),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(s: PaymentStatus) -> Self {
        s.as_str().to_string()
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Other(String::new())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer sale (invoice) as returned by `GET /sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub invoice_number: String,

    #[serde(default)]
    pub customer_name: String,

    pub sale_date: DateTime<Utc>,

    #[serde(default)]
    pub payment_mode: PaymentMode,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    /// GST rate in percent applied on top of `sub_total`
    #[serde(default)]
    pub gst: f64,

    #[serde(default)]
    pub sub_total: f64,

    #[serde(default)]
    pub total_amount: f64,

    #[serde(default)]
    pub profit: f64,

    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl Sale {
    pub fn is_cash(&self) -> bool {
        self.payment_mode == PaymentMode::Cash
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// One invoice line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    #[serde(default)]
    pub product: Option<ProductRef>,

    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub selling_price: f64,

    #[serde(default)]
    pub cost_price: f64,
}

impl SaleItem {
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.selling_price
    }

    pub fn cost(&self) -> f64 {
        self.quantity as f64 * self.cost_price
    }

    pub fn profit(&self) -> f64 {
        (self.selling_price - self.cost_price) * self.quantity as f64
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.name())
    }
}

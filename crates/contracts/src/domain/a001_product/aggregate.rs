use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub cost_price: f64,

    #[serde(default)]
    pub selling_price: f64,

    /// On-hand quantity
    #[serde(default)]
    pub stock: i64,

    /// Reorder threshold, inclusive
    #[serde(default)]
    pub min_stock: i64,

    /// GST rate in percent
    #[serde(default)]
    pub gst: f64,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Valuation of the on-hand quantity at cost
    pub fn stock_value(&self) -> f64 {
        self.stock as f64 * self.cost_price
    }
}

// ============================================================================
// Reference from line items
// ============================================================================

/// Product reference inside a sale/purchase line.
///
/// The API either populates the product (`{"_id": "...", "name": "..."}`) or sends
/// the bare id. A deleted product arrives as `null` and is modelled as `Option::None`
/// on the line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated { id, .. } => id,
            ProductRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProductRef::Populated { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
            ProductRef::Id(_) => None,
        }
    }
}

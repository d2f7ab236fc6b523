//! Record builders shared by the metrics, dashboard and report tests.

use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::a001_product::aggregate::{Product, ProductRef};
use contracts::domain::a002_sale::aggregate::{PaymentMode, PaymentStatus, Sale, SaleItem};
use contracts::domain::a003_purchase::aggregate::{Purchase, PurchaseItem};
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_creditor::aggregate::{Creditor, SaleRef};

use super::BusinessClock;

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// UTC clock at noon of the given day
pub fn clock(y: i32, m: u32, d: u32) -> BusinessClock {
    BusinessClock::with_offset_minutes(0, at(y, m, d, 12))
}

pub fn product(id: &str, category: &str, stock: i64, min_stock: i64, cost_price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        category: category.to_string(),
        brand: String::new(),
        cost_price,
        selling_price: cost_price * 1.5,
        stock,
        min_stock,
        gst: 0.0,
    }
}

pub fn item(product_id: Option<&str>, quantity: i64, selling_price: f64, cost_price: f64) -> SaleItem {
    SaleItem {
        product: product_id.map(|id| ProductRef::Populated {
            id: id.to_string(),
            name: Some(format!("Product {}", id)),
        }),
        quantity,
        selling_price,
        cost_price,
    }
}

pub fn sale(
    id: &str,
    date: DateTime<Utc>,
    mode: PaymentMode,
    status: PaymentStatus,
    total_amount: f64,
    profit: f64,
) -> Sale {
    Sale {
        id: id.to_string(),
        invoice_number: format!("INV-{}", id),
        customer_name: "Walk-in".to_string(),
        sale_date: date,
        payment_mode: mode,
        payment_status: status,
        gst: 0.0,
        sub_total: total_amount,
        total_amount,
        profit,
        items: Vec::new(),
    }
}

pub fn cash_sale(id: &str, date: DateTime<Utc>, total_amount: f64, profit: f64) -> Sale {
    sale(id, date, PaymentMode::Cash, PaymentStatus::Paid, total_amount, profit)
}

pub fn purchase(id: &str, date: DateTime<Utc>, status: &str, total_amount: f64) -> Purchase {
    Purchase {
        id: id.to_string(),
        bill_number: format!("BILL-{}", id),
        supplier_name: "Supplier".to_string(),
        purchase_date: date,
        gst: 0.0,
        payment_status: status.to_string(),
        total_amount,
        items: Vec::new(),
    }
}

pub fn purchase_item(product_id: Option<&str>, quantity: i64, cost_price: f64) -> PurchaseItem {
    PurchaseItem {
        product: product_id.map(|id| ProductRef::Populated {
            id: id.to_string(),
            name: Some(format!("Product {}", id)),
        }),
        quantity,
        cost_price,
    }
}

pub fn expense(id: &str, date: DateTime<Utc>, amount: f64) -> Expense {
    Expense {
        id: id.to_string(),
        title: format!("Expense {}", id),
        category: "General".to_string(),
        amount,
        date,
    }
}

pub fn creditor(id: &str, balance: f64, sale_ids: &[&str]) -> Creditor {
    Creditor {
        id: id.to_string(),
        customer_name: format!("Customer {}", id),
        total_credit: balance,
        total_paid: 0.0,
        balance,
        sales: sale_ids.iter().map(|s| SaleRef::Id(s.to_string())).collect(),
    }
}

use std::collections::HashMap;

use contracts::dashboards::d401_alerts::{Alert, AlertSeverity};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a004_expense::aggregate::Expense;

use super::BusinessClock;
use crate::shared::format::{format_amount, format_rupees};

pub const DEFAULT_HIGH_EXPENSE_THRESHOLD: f64 = 2000.0;

#[derive(Debug, Clone, Copy)]
pub struct AlertThresholds {
    /// Today's expenses strictly above this raise a warning
    pub high_expense_today: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            high_expense_today: DEFAULT_HIGH_EXPENSE_THRESHOLD,
        }
    }
}

/// Evaluates the alert rules in fixed order: low stock, fast moving, high expense,
/// daily summary. The result keeps that order.
pub fn generate_alerts(
    products: &[Product],
    sales: &[Sale],
    expenses: &[Expense],
    clock: &BusinessClock,
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let mut alerts = low_stock_alerts(products);
    alerts.extend(fast_moving_alert(products, sales));
    alerts.extend(high_expense_alert(expenses, clock, thresholds));
    alerts.extend(daily_summary_alert(sales, clock));
    alerts
}

fn low_stock_alerts(products: &[Product]) -> Vec<Alert> {
    products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| Alert {
            id: format!("low-stock-{}", p.id),
            title: "Low Stock Alert".to_string(),
            message: format!("{} stock is low ({} left)", p.name, p.stock),
            severity: AlertSeverity::High,
        })
        .collect()
}

/// Units sold per product id across the whole sales history, first-seen order.
/// Lines without a product reference are skipped.
pub fn units_sold_by_product(sales: &[Sale]) -> Vec<(String, i64)> {
    let mut order: Vec<(String, i64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in sales.iter().flat_map(|s| s.items.iter()) {
        let Some(product) = item.product.as_ref() else {
            continue;
        };
        match index.get(product.id()) {
            Some(&i) => order[i].1 += item.quantity,
            None => {
                index.insert(product.id().to_string(), order.len());
                order.push((product.id().to_string(), item.quantity));
            }
        }
    }

    order
}

/// Best seller over all sales; ties go to the product seen first.
/// No alert when nothing was sold or the product is no longer in the catalog.
fn fast_moving_alert(products: &[Product], sales: &[Sale]) -> Option<Alert> {
    let counts = units_sold_by_product(sales);

    let mut top: Option<&(String, i64)> = None;
    for entry in &counts {
        if top.map_or(true, |t| entry.1 > t.1) {
            top = Some(entry);
        }
    }
    let (product_id, units) = top?;

    let Some(product) = products.iter().find(|p| &p.id == product_id) else {
        tracing::debug!("fast moving product {} not found in catalog", product_id);
        return None;
    };

    Some(Alert {
        id: "fast-moving".to_string(),
        title: "Fast Moving Product".to_string(),
        message: format!(
            "{} is selling fast ({} units sold recently)",
            product.name, units
        ),
        severity: AlertSeverity::Medium,
    })
}

fn high_expense_alert(
    expenses: &[Expense],
    clock: &BusinessClock,
    thresholds: &AlertThresholds,
) -> Option<Alert> {
    let today_total: f64 = expenses
        .iter()
        .filter(|e| clock.is_today(&e.date))
        .map(|e| e.amount)
        .sum();

    if today_total <= thresholds.high_expense_today {
        return None;
    }

    Some(Alert {
        id: "high-expense".to_string(),
        title: "High Expense Warning".to_string(),
        message: format!("Today's expenses are high ({})", format_rupees(today_total)),
        severity: AlertSeverity::High,
    })
}

/// All of today's sales, paid or not
fn daily_summary_alert(sales: &[Sale], clock: &BusinessClock) -> Option<Alert> {
    let today: Vec<&Sale> = sales.iter().filter(|s| clock.is_today(&s.sale_date)).collect();
    if today.is_empty() {
        return None;
    }

    let total_sales: f64 = today.iter().map(|s| s.total_amount).sum();
    let total_profit: f64 = today.iter().map(|s| s.profit).sum();

    Some(Alert {
        id: "daily-summary".to_string(),
        title: "Daily Sales Summary".to_string(),
        message: format!(
            "Today's Sales: ₹{} | Profit: ₹{}",
            format_amount(total_sales),
            format_amount(total_profit)
        ),
        severity: AlertSeverity::Low,
    })
}

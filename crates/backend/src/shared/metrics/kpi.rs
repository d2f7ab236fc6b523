use std::collections::HashMap;

use contracts::dashboards::d402_home::{CategoryCount, DashboardKpis, RecentSalePoint};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_creditor::aggregate::Creditor;

use super::BusinessClock;

/// Bars in the recent-sales chart
pub const RECENT_TREND_LEN: usize = 6;

pub fn compute_dashboard_kpis(
    products: &[Product],
    sales: &[Sale],
    expenses: &[Expense],
    creditors: &[Creditor],
    clock: &BusinessClock,
) -> DashboardKpis {
    // settled today; credit sales dated today stay out
    let paid_today: Vec<&Sale> = sales
        .iter()
        .filter(|s| clock.is_today(&s.sale_date) && s.is_paid())
        .collect();

    DashboardKpis {
        today_sales: paid_today.iter().map(|s| s.total_amount).sum(),
        today_profit: paid_today.iter().map(|s| s.profit).sum(),
        today_expenses: expenses
            .iter()
            .filter(|e| clock.is_today(&e.date))
            .map(|e| e.amount)
            .sum(),
        total_products: products.len(),
        low_stock_alerts: products.iter().filter(|p| p.is_low_stock()).count(),
        outstanding_credit: creditors.iter().map(|c| c.balance).sum(),
        credit_sales_count: creditors.iter().map(|c| c.sales.len()).sum(),
        category_breakdown: category_breakdown(products),
        recent_trend: recent_trend(sales, clock),
    }
}

/// Product count per category, first-seen order
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryCount> {
    let mut rows: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for p in products {
        match index.get(p.category.as_str()) {
            Some(&i) => rows[i].total += 1,
            None => {
                index.insert(p.category.as_str(), rows.len());
                rows.push(CategoryCount {
                    name: p.category.clone(),
                    total: 1,
                });
            }
        }
    }

    rows
}

/// Last PAID sales in collection order (not re-sorted by date)
pub fn recent_trend(sales: &[Sale], clock: &BusinessClock) -> Vec<RecentSalePoint> {
    let paid: Vec<&Sale> = sales.iter().filter(|s| s.is_paid()).collect();
    let start = paid.len().saturating_sub(RECENT_TREND_LEN);

    paid[start..]
        .iter()
        .map(|s| RecentSalePoint {
            label: clock.local_date(&s.sale_date).format("%a").to_string(),
            total: s.total_amount,
        })
        .collect()
}

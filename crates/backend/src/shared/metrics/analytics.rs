use contracts::dashboards::d403_analytics::{AnalyticsSummary, FinancialHealth};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::shared::chart::LabeledValue;

use super::capital::total_expenses;
use super::trend::compute_monthly_revenue;
use super::BusinessClock;

pub fn compute_analytics(
    products: &[Product],
    sales: &[Sale],
    expenses: &[Expense],
    clock: &BusinessClock,
) -> AnalyticsSummary {
    let total_revenue: f64 = sales.iter().map(|s| s.total_amount).sum();
    let total_expenses = total_expenses(expenses);
    let net_profit = total_revenue - total_expenses;
    let profit_margin_percent = profit_margin(net_profit, total_revenue);

    let health = if net_profit >= 0.0 {
        FinancialHealth::Strong
    } else {
        FinancialHealth::Critical
    };
    let insight = match health {
        FinancialHealth::Strong => format!(
            "Your business is operating at a {:.1}% profit margin. Consider reinvesting into low stock items.",
            profit_margin_percent
        ),
        FinancialHealth::Critical => "Your cash outflow is currently higher than inflow. Analyze your daily expenses to find leakages.".to_string(),
    };

    AnalyticsSummary {
        total_revenue,
        total_expenses,
        net_profit,
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        profit_margin_percent,
        efficiency_percent: efficiency(total_expenses, total_revenue),
        monthly_sales: compute_monthly_revenue(sales, clock),
        revenue_split: vec![
            LabeledValue::new("Revenue", total_revenue),
            LabeledValue::new("Expenses", total_expenses),
        ],
        health,
        insight,
    }
}

/// net / revenue × 100, one decimal; 0 without revenue
pub fn profit_margin(net_profit: f64, total_revenue: f64) -> f64 {
    if total_revenue > 0.0 {
        (net_profit / total_revenue * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

/// 100 − expense share of revenue (whole percent); `None` without revenue
pub fn efficiency(total_expenses: f64, total_revenue: f64) -> Option<f64> {
    if total_revenue > 0.0 {
        Some(100.0 - (total_expenses / total_revenue * 100.0).round())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::fixtures::*;

    #[test]
    fn test_zero_revenue_sentinels() {
        let clock = clock(2026, 10, 18);
        let expenses = vec![expense("e1", at(2026, 10, 1, 9), 50.0)];
        let a = compute_analytics(&[], &[], &expenses, &clock);
        assert_eq!(a.total_revenue, 0.0);
        assert_eq!(a.net_profit, -50.0);
        assert_eq!(a.profit_margin_percent, 0.0);
        assert_eq!(a.efficiency_percent, None);
        assert_eq!(a.health, FinancialHealth::Critical);
        assert!(a.monthly_sales.is_empty());
    }

    #[test]
    fn test_margin_and_efficiency() {
        let clock = clock(2026, 10, 18);
        let sales = vec![
            cash_sale("s1", at(2026, 9, 3, 9), 600.0, 100.0),
            cash_sale("s2", at(2026, 10, 3, 9), 300.0, 50.0),
        ];
        let expenses = vec![expense("e1", at(2026, 10, 1, 9), 200.0)];
        let products = vec![product("p1", "Pens", 1, 1, 1.0)];

        let a = compute_analytics(&products, &sales, &expenses, &clock);
        assert_eq!(a.total_revenue, 900.0);
        assert_eq!(a.net_profit, 700.0);
        assert_eq!(a.profit_margin_percent, 77.8);
        assert_eq!(a.efficiency_percent, Some(78.0));
        assert_eq!(a.low_stock_count, 1);
        assert_eq!(a.health, FinancialHealth::Strong);
        assert!(a.insight.contains("77.8% profit margin"));
        assert_eq!(
            a.monthly_sales,
            vec![LabeledValue::new("Sep 2026", 600.0), LabeledValue::new("Oct 2026", 300.0)]
        );
    }
}

use std::collections::HashMap;

use contracts::dashboards::d400_capital_overview::{BreakEven, MonthlyTrendPoint};
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::common::MonthKey;
use contracts::shared::chart::LabeledValue;

use super::BusinessClock;

/// Month buckets kept in first-appearance order
#[derive(Default)]
struct MonthBuckets {
    order: Vec<MonthKey>,
    index: HashMap<MonthKey, usize>,
    revenue: Vec<f64>,
    expenses: Vec<f64>,
}

impl MonthBuckets {
    fn slot(&mut self, key: MonthKey) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.order.len();
        self.order.push(key);
        self.index.insert(key, i);
        self.revenue.push(0.0);
        self.expenses.push(0.0);
        i
    }

    fn add_revenue(&mut self, key: MonthKey, amount: f64) {
        let i = self.slot(key);
        self.revenue[i] += amount;
    }

    fn add_expense(&mut self, key: MonthKey, amount: f64) {
        let i = self.slot(key);
        self.expenses[i] += amount;
    }
}

/// Revenue and expenses grouped by local calendar month, net = revenue − expenses.
///
/// Buckets appear in the order they are first seen: sales are scanned before expenses,
/// so a month with only expenses lands after every month that has sales. The output is
/// not sorted chronologically.
pub fn compute_monthly_trend(
    sales: &[Sale],
    expenses: &[Expense],
    clock: &BusinessClock,
) -> Vec<MonthlyTrendPoint> {
    let mut buckets = MonthBuckets::default();

    for s in sales {
        buckets.add_revenue(clock.month_of(&s.sale_date), s.total_amount);
    }
    for e in expenses {
        buckets.add_expense(clock.month_of(&e.date), e.amount);
    }

    buckets
        .order
        .iter()
        .enumerate()
        .map(|(i, key)| MonthlyTrendPoint {
            label: key.label(),
            year: key.year,
            month: key.month,
            revenue: buckets.revenue[i],
            expenses: buckets.expenses[i],
            net: buckets.revenue[i] - buckets.expenses[i],
        })
        .collect()
}

/// Revenue/expenses of the bucket for `reference`, zeros when the month has no activity
pub fn compute_break_even(trend: &[MonthlyTrendPoint], reference: MonthKey) -> BreakEven {
    trend
        .iter()
        .find(|p| p.year == reference.year && p.month == reference.month)
        .map(|p| BreakEven {
            revenue: p.revenue,
            expenses: p.expenses,
        })
        .unwrap_or_default()
}

/// Sales revenue per month as chart pairs, first-seen order
pub fn compute_monthly_revenue(sales: &[Sale], clock: &BusinessClock) -> Vec<LabeledValue> {
    compute_monthly_trend(sales, &[], clock)
        .into_iter()
        .map(|p| LabeledValue::new(p.label, p.revenue))
        .collect()
}

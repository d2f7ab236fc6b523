use contracts::dashboards::d400_capital_overview::{CapitalSummary, CashFlow, Reinvestment};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_expense::aggregate::Expense;

/// Σ stock × cost price
pub fn inventory_value(products: &[Product]) -> f64 {
    products.iter().map(Product::stock_value).sum()
}

/// Σ total of every sale not paid in cash
pub fn receivables(sales: &[Sale]) -> f64 {
    sales
        .iter()
        .filter(|s| !s.is_cash())
        .map(|s| s.total_amount)
        .sum()
}

/// Σ total of purchases whose status is not "Paid"
pub fn payables(purchases: &[Purchase]) -> f64 {
    purchases
        .iter()
        .filter(|p| !p.is_paid())
        .map(|p| p.total_amount)
        .sum()
}

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn compute_capital_summary(
    products: &[Product],
    sales: &[Sale],
    purchases: &[Purchase],
    expenses: &[Expense],
) -> CapitalSummary {
    let inventory_value = inventory_value(products);
    let receivables = receivables(sales);
    let payables = payables(purchases);
    let expenses = total_expenses(expenses);

    CapitalSummary {
        inventory_value,
        receivables,
        payables,
        expenses,
        net_capital: inventory_value + receivables - payables - expenses,
    }
}

/// Cash in: cash sales only. Cash out: every purchase and every expense, regardless
/// of payment status (unlike [`payables`]).
pub fn compute_cash_flow(sales: &[Sale], purchases: &[Purchase], expenses: &[Expense]) -> CashFlow {
    let cash_in = sales
        .iter()
        .filter(|s| s.is_cash())
        .map(|s| s.total_amount)
        .sum();
    let purchases_total: f64 = purchases.iter().map(|p| p.total_amount).sum();

    CashFlow {
        cash_in,
        cash_out: purchases_total + total_expenses(expenses),
    }
}

/// Splits accumulated profit into stock on hand, spent expenses and what is left.
///
/// `inventory_value` is a point-in-time valuation subtracted from a profit flow total.
pub fn compute_reinvestment(sales: &[Sale], inventory_value: f64, total_expenses: f64) -> Reinvestment {
    let total_profit: f64 = sales.iter().map(|s| s.profit).sum();

    Reinvestment {
        inventory: inventory_value,
        expenses: total_expenses,
        free_cash: total_profit - inventory_value - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::fixtures::*;
    use contracts::domain::a002_sale::aggregate::{PaymentMode, PaymentStatus};

    #[test]
    fn test_empty_collections_give_zero() {
        let summary = compute_capital_summary(&[], &[], &[], &[]);
        assert_eq!(summary, CapitalSummary::default());

        let flow = compute_cash_flow(&[], &[], &[]);
        assert_eq!(flow.cash_in, 0.0);
        assert_eq!(flow.cash_out, 0.0);
    }

    #[test]
    fn test_single_low_stock_product_scenario() {
        let products = vec![product("p1", "Pens", 2, 5, 10.0)];
        let summary = compute_capital_summary(&products, &[], &[], &[]);
        assert_eq!(summary.inventory_value, 20.0);
        assert_eq!(summary.net_capital, 20.0);
    }

    #[test]
    fn test_receivables_exclude_cash() {
        let day = at(2026, 10, 18, 9);
        let sales = vec![
            cash_sale("s1", day, 100.0, 10.0),
            sale("s2", day, PaymentMode::Upi, PaymentStatus::Paid, 50.0, 5.0),
            sale("s3", day, PaymentMode::Credit, PaymentStatus::Unpaid, 70.0, 7.0),
        ];
        assert_eq!(receivables(&sales), 120.0);
        assert_eq!(receivables(&sales[..1]), 0.0);
    }

    #[test]
    fn test_net_capital_identity() {
        let day = at(2026, 10, 18, 9);
        let products = vec![
            product("p1", "Pens", 10, 2, 4.5),
            product("p2", "Books", 3, 1, 120.0),
        ];
        let sales = vec![
            cash_sale("s1", day, 300.0, 40.0),
            sale("s2", day, PaymentMode::Card, PaymentStatus::Paid, 212.4, 20.0),
        ];
        let purchases = vec![
            purchase("b1", day, "Paid", 500.0),
            purchase("b2", day, "Pending", 180.25),
        ];
        let expenses = vec![expense("e1", day, 75.0), expense("e2", day, 12.5)];

        let s = compute_capital_summary(&products, &sales, &purchases, &expenses);
        assert_eq!(s.inventory_value, 405.0);
        assert_eq!(s.receivables, 212.4);
        assert_eq!(s.payables, 180.25);
        assert_eq!(s.expenses, 87.5);
        assert_eq!(
            s.net_capital,
            s.inventory_value + s.receivables - s.payables - s.expenses
        );
    }

    #[test]
    fn test_cash_out_counts_paid_and_unpaid_purchases() {
        let day = at(2026, 10, 18, 9);
        let sales = vec![
            cash_sale("s1", day, 100.0, 10.0),
            sale("s2", day, PaymentMode::Upi, PaymentStatus::Paid, 60.0, 5.0),
        ];
        let purchases = vec![
            purchase("b1", day, "Paid", 200.0),
            purchase("b2", day, "Unpaid", 50.0),
        ];
        let expenses = vec![expense("e1", day, 25.0)];

        let flow = compute_cash_flow(&sales, &purchases, &expenses);
        assert_eq!(flow.cash_in, 100.0);
        assert_eq!(flow.cash_out, 275.0);
        assert_eq!(payables(&purchases), 50.0);
    }

    #[test]
    fn test_reinvestment_free_cash() {
        let day = at(2026, 10, 18, 9);
        let sales = vec![cash_sale("s1", day, 1000.0, 400.0), cash_sale("s2", day, 500.0, 100.0)];
        let r = compute_reinvestment(&sales, 300.0, 50.0);
        assert_eq!(r.inventory, 300.0);
        assert_eq!(r.expenses, 50.0);
        assert_eq!(r.free_cash, 150.0);
    }
}

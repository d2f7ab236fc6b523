use anyhow::Result;
use contracts::dashboards::d400_capital_overview::{CapitalChartsResponse, CapitalOverviewResponse};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_expense::aggregate::Expense;

use crate::shared::data_source::DataSource;
use crate::shared::metrics::capital::{compute_cash_flow, compute_capital_summary, compute_reinvestment};
use crate::shared::metrics::trend::{compute_break_even, compute_monthly_trend};
use crate::shared::metrics::BusinessClock;

/// Get capital overview: all four collections, unfiltered
pub async fn get_capital_overview(
    source: &dyn DataSource,
    clock: &BusinessClock,
) -> Result<CapitalOverviewResponse> {
    let (products, sales, purchases, expenses) = tokio::try_join!(
        source.products(),
        source.sales(None),
        source.purchases(None),
        source.expenses(None),
    )?;

    Ok(build_capital_overview(&products, &sales, &purchases, &expenses, clock))
}

pub async fn get_capital_charts(
    source: &dyn DataSource,
    clock: &BusinessClock,
) -> Result<CapitalChartsResponse> {
    let overview = get_capital_overview(source, clock).await?;
    Ok(CapitalChartsResponse::from(&overview))
}

pub fn build_capital_overview(
    products: &[Product],
    sales: &[Sale],
    purchases: &[Purchase],
    expenses: &[Expense],
    clock: &BusinessClock,
) -> CapitalOverviewResponse {
    let summary = compute_capital_summary(products, sales, purchases, expenses);
    let trend = compute_monthly_trend(sales, expenses, clock);
    let break_even = compute_break_even(&trend, clock.current_month());
    let reinvestment = compute_reinvestment(sales, summary.inventory_value, summary.expenses);

    CapitalOverviewResponse {
        cash_flow: compute_cash_flow(sales, purchases, expenses),
        summary,
        trend,
        break_even,
        reinvestment,
    }
}

use anyhow::Result;
use contracts::domain::common::DateRange;
use contracts::shared::report::{BusinessHeader, ReportKind, ReportRequest, ReportTable};

use super::{invoice, tables, ReportError};
use crate::shared::data_source::DataSource;
use crate::shared::metrics::BusinessClock;

/// Explicit `from`/`to` win over a preset; without either the current month is used.
/// A single explicit bound is completed from the preset, or from the current month
/// when no preset is given.
pub fn resolve_range(request: &ReportRequest, clock: &BusinessClock) -> DateRange {
    let today = clock.today();
    let fallback = match request.preset {
        Some(preset) => preset.resolve(today),
        None => DateRange::this_month(today),
    };

    DateRange::new(
        request.from.unwrap_or(fallback.from),
        request.to.unwrap_or(fallback.to),
    )
}

pub async fn build_report(
    source: &dyn DataSource,
    kind: ReportKind,
    request: &ReportRequest,
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable> {
    let range = resolve_range(request, clock);
    tracing::info!(
        "Reports: building {} for {} .. {}",
        kind.display_name(),
        range.from,
        range.to
    );

    let table = match kind {
        ReportKind::Sales => {
            let sales = source.sales(Some(range)).await?;
            tables::sales_report(&sales, &range, business, clock)?
        }
        ReportKind::Purchase => {
            let purchases = source.purchases(Some(range)).await?;
            tables::purchase_report(&purchases, business, clock)?
        }
        ReportKind::Expense => {
            let expenses = source.expenses(Some(range)).await?;
            tables::expense_report(&expenses, business, clock)?
        }
        ReportKind::Stock => {
            let products = source.products().await?;
            tables::stock_report(&products, business)?
        }
        ReportKind::Profit => {
            let sales = source.sales(Some(range)).await?;
            tables::profit_report(&sales, business, clock)?
        }
        ReportKind::Gst => {
            let sales = source.sales(Some(range)).await?;
            tables::gst_report(&sales, business, clock)?
        }
    };

    Ok(table)
}

pub async fn build_sales_invoice(
    source: &dyn DataSource,
    sale_id: &str,
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable> {
    let sales = source.sales(None).await?;
    let sale = sales
        .iter()
        .find(|s| s.id == sale_id)
        .ok_or_else(|| ReportError::NotFound {
            kind: "Sale",
            id: sale_id.to_string(),
        })?;

    Ok(invoice::sales_invoice(sale, business, clock))
}

pub async fn build_purchase_invoice(
    source: &dyn DataSource,
    purchase_id: &str,
    business: &BusinessHeader,
    clock: &BusinessClock,
) -> Result<ReportTable> {
    let purchases = source.purchases(None).await?;
    let purchase = purchases
        .iter()
        .find(|p| p.id == purchase_id)
        .ok_or_else(|| ReportError::NotFound {
            kind: "Purchase",
            id: purchase_id.to_string(),
        })?;

    Ok(invoice::purchase_invoice(purchase, business, clock))
}

use anyhow::Result;
use contracts::dashboards::d403_analytics::AnalyticsSummary;

use crate::shared::data_source::DataSource;
use crate::shared::metrics::analytics::compute_analytics;
use crate::shared::metrics::BusinessClock;

pub async fn get_analytics(source: &dyn DataSource, clock: &BusinessClock) -> Result<AnalyticsSummary> {
    let (sales, expenses, products) = tokio::try_join!(
        source.sales(None),
        source.expenses(None),
        source.products(),
    )?;

    Ok(compute_analytics(&products, &sales, &expenses, clock))
}

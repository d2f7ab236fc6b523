use anyhow::Result;
use contracts::dashboards::d402_home::{DashboardKpis, HomeChartsResponse};

use crate::shared::data_source::DataSource;
use crate::shared::metrics::kpi::compute_dashboard_kpis;
use crate::shared::metrics::BusinessClock;

pub async fn get_home_kpis(source: &dyn DataSource, clock: &BusinessClock) -> Result<DashboardKpis> {
    let (products, sales, expenses, creditors) = tokio::try_join!(
        source.products(),
        source.sales(None),
        source.expenses(None),
        source.creditors(),
    )?;

    Ok(compute_dashboard_kpis(&products, &sales, &expenses, &creditors, clock))
}

pub async fn get_home_charts(
    source: &dyn DataSource,
    clock: &BusinessClock,
) -> Result<HomeChartsResponse> {
    let kpis = get_home_kpis(source, clock).await?;
    Ok(HomeChartsResponse::from(&kpis))
}

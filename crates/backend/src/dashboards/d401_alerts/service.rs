use anyhow::Result;
use contracts::dashboards::d401_alerts::AlertsResponse;

use crate::shared::data_source::DataSource;
use crate::shared::metrics::alerts::{generate_alerts, AlertThresholds};
use crate::shared::metrics::BusinessClock;

pub async fn get_alerts(
    source: &dyn DataSource,
    clock: &BusinessClock,
    thresholds: &AlertThresholds,
) -> Result<AlertsResponse> {
    let (products, sales, expenses) = tokio::try_join!(
        source.products(),
        source.sales(None),
        source.expenses(None),
    )?;

    let alerts = generate_alerts(&products, &sales, &expenses, clock, thresholds);
    Ok(AlertsResponse::from_alerts(alerts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_source::memory::MemorySource;
    use crate::shared::metrics::fixtures::*;

    #[tokio::test]
    async fn test_low_stock_scenario() {
        let src = MemorySource {
            products: vec![product("p1", "Pens", 2, 5, 10.0)],
            ..Default::default()
        };
        let resp = get_alerts(&src, &clock(2026, 10, 18), &AlertThresholds::default())
            .await
            .unwrap();
        assert_eq!(resp.alerts.len(), 1);
        assert_eq!(resp.alerts[0].id, "low-stock-p1");
        assert_eq!(resp.high_count, 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_propagates() {
        let src = MemorySource {
            failing: Some("expenses"),
            ..Default::default()
        };
        assert!(get_alerts(&src, &clock(2026, 10, 18), &AlertThresholds::default())
            .await
            .is_err());
    }
}

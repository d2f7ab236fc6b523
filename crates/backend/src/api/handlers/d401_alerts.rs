use axum::{http::StatusCode, Json};
use contracts::dashboards::d401_alerts::AlertsResponse;

use super::{error_status, RequestContext};
use crate::dashboards::d401_alerts::service;
use crate::shared::metrics::alerts::AlertThresholds;

/// GET /api/d401/alerts
pub async fn get_alerts() -> Result<Json<AlertsResponse>, StatusCode> {
    let ctx = RequestContext::load()?;
    let thresholds = AlertThresholds {
        high_expense_today: ctx.config.alerts.high_expense_threshold,
    };

    match service::get_alerts(ctx.source.as_ref(), &ctx.clock, &thresholds).await {
        Ok(response) => {
            tracing::info!(
                "D401 Alerts: {} alerts ({} high)",
                response.alerts.len(),
                response.high_count
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D401 Alerts: Failed to generate alerts: {}", e);
            Err(error_status(&e))
        }
    }
}

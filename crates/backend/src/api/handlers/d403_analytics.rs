use axum::{http::StatusCode, Json};
use contracts::dashboards::d403_analytics::AnalyticsSummary;

use super::{error_status, RequestContext};
use crate::dashboards::d403_analytics::service;

/// GET /api/d403/analytics
pub async fn get_analytics() -> Result<Json<AnalyticsSummary>, StatusCode> {
    let ctx = RequestContext::load()?;

    match service::get_analytics(ctx.source.as_ref(), &ctx.clock).await {
        Ok(summary) => {
            tracing::info!(
                "D403 Analytics: revenue {}, health {}",
                summary.total_revenue,
                summary.health.title()
            );
            Ok(Json(summary))
        }
        Err(e) => {
            tracing::error!("D403 Analytics: Failed to compute analytics: {}", e);
            Err(error_status(&e))
        }
    }
}

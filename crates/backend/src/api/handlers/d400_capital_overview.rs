use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_capital_overview::{CapitalChartsResponse, CapitalOverviewResponse};

use super::{error_status, RequestContext};
use crate::dashboards::d400_capital_overview::service;

/// GET /api/d400/capital_overview
pub async fn get_capital_overview() -> Result<Json<CapitalOverviewResponse>, StatusCode> {
    let ctx = RequestContext::load()?;
    tracing::info!("D400 Dashboard: Getting capital overview");

    match service::get_capital_overview(ctx.source.as_ref(), &ctx.clock).await {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: net capital {}, {} trend months",
                response.summary.net_capital,
                response.trend.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get capital overview: {}", e);
            Err(error_status(&e))
        }
    }
}

/// GET /api/d400/capital_overview/charts
pub async fn get_capital_charts() -> Result<Json<CapitalChartsResponse>, StatusCode> {
    let ctx = RequestContext::load()?;

    match service::get_capital_charts(ctx.source.as_ref(), &ctx.clock).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get capital charts: {}", e);
            Err(error_status(&e))
        }
    }
}

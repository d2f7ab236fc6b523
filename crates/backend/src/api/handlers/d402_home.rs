use axum::{http::StatusCode, Json};
use contracts::dashboards::d402_home::{DashboardKpis, HomeChartsResponse};

use super::{error_status, RequestContext};
use crate::dashboards::d402_home::service;

/// GET /api/d402/home
pub async fn get_home_kpis() -> Result<Json<DashboardKpis>, StatusCode> {
    let ctx = RequestContext::load()?;

    service::get_home_kpis(ctx.source.as_ref(), &ctx.clock)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("D402 Home: Failed to get KPIs: {}", e);
            error_status(&e)
        })
}

/// GET /api/d402/home/charts
pub async fn get_home_charts() -> Result<Json<HomeChartsResponse>, StatusCode> {
    let ctx = RequestContext::load()?;

    service::get_home_charts(ctx.source.as_ref(), &ctx.clock)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("D402 Home: Failed to get charts: {}", e);
            error_status(&e)
        })
}

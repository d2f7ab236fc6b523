use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Capital Overview
        .route(
            "/api/d400/capital_overview",
            get(handlers::d400_capital_overview::get_capital_overview),
        )
        .route(
            "/api/d400/capital_overview/charts",
            get(handlers::d400_capital_overview::get_capital_charts),
        )
        // D401 Alerts
        .route("/api/d401/alerts", get(handlers::d401_alerts::get_alerts))
        // D402 Home KPIs
        .route("/api/d402/home", get(handlers::d402_home::get_home_kpis))
        .route(
            "/api/d402/home/charts",
            get(handlers::d402_home::get_home_charts),
        )
        // D403 Analytics
        .route(
            "/api/d403/analytics",
            get(handlers::d403_analytics::get_analytics),
        )
        // ========================================
        // REPORTS
        // ========================================
        .route(
            "/api/reports/sales_invoice/:id",
            get(handlers::reports::get_sales_invoice),
        )
        .route(
            "/api/reports/purchase_invoice/:id",
            get(handlers::reports::get_purchase_invoice),
        )
        .route("/api/reports/:kind", get(handlers::reports::get_report))
}

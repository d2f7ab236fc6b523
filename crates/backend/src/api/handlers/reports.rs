use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::report::{ReportFormat, ReportKind, ReportRequest, ReportTable};

use super::{error_status, RequestContext};
use crate::reports::{csv_export, service};

/// GET /api/reports/:kind?from=2026-10-01&to=2026-10-31&preset=this_month&format=csv
pub async fn get_report(
    Path(kind): Path<String>,
    Query(request): Query<ReportRequest>,
) -> Result<Response, StatusCode> {
    let kind = ReportKind::from_slug(&kind).ok_or_else(|| {
        tracing::warn!("Reports: unknown report kind '{}'", kind);
        StatusCode::NOT_FOUND
    })?;
    let ctx = RequestContext::load()?;
    let business = ctx.config.business.header();

    let table = service::build_report(ctx.source.as_ref(), kind, &request, &business, &ctx.clock)
        .await
        .map_err(|e| {
            tracing::error!("Reports: {} failed: {}", kind.display_name(), e);
            error_status(&e)
        })?;

    respond(table, request.format)
}

/// GET /api/reports/sales_invoice/:id
pub async fn get_sales_invoice(Path(id): Path<String>) -> Result<Response, StatusCode> {
    let ctx = RequestContext::load()?;
    let business = ctx.config.business.header();

    let table = service::build_sales_invoice(ctx.source.as_ref(), &id, &business, &ctx.clock)
        .await
        .map_err(|e| {
            tracing::error!("Reports: sales invoice {} failed: {}", id, e);
            error_status(&e)
        })?;

    respond(table, ReportFormat::Json)
}

/// GET /api/reports/purchase_invoice/:id
pub async fn get_purchase_invoice(Path(id): Path<String>) -> Result<Response, StatusCode> {
    let ctx = RequestContext::load()?;
    let business = ctx.config.business.header();

    let table = service::build_purchase_invoice(ctx.source.as_ref(), &id, &business, &ctx.clock)
        .await
        .map_err(|e| {
            tracing::error!("Reports: purchase invoice {} failed: {}", id, e);
            error_status(&e)
        })?;

    respond(table, ReportFormat::Json)
}

fn respond(table: ReportTable, format: ReportFormat) -> Result<Response, StatusCode> {
    match format {
        ReportFormat::Json => Ok(Json(table).into_response()),
        ReportFormat::Csv => {
            let body = csv_export::render_csv(&table).map_err(|e| {
                tracing::error!("Reports: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            let disposition = format!("attachment; filename=\"{}\"", table.file_name("csv"));
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response())
        }
    }
}

// Dashboard handlers (d400-d403)
pub mod d400_capital_overview;
pub mod d401_alerts;
pub mod d402_home;
pub mod d403_analytics;

// Reports
pub mod reports;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;

use crate::reports::ReportError;
use crate::shared::config::{get_config, Config};
use crate::shared::data_source::{get_data_source, DataSource, DataSourceError};
use crate::shared::metrics::BusinessClock;

/// Everything a handler needs for one request
pub struct RequestContext {
    pub config: &'static Config,
    pub source: Arc<dyn DataSource>,
    /// "now" is fixed once per request
    pub clock: BusinessClock,
}

impl RequestContext {
    pub fn load() -> Result<Self, StatusCode> {
        let config = get_config().map_err(|e| {
            tracing::error!("Request context: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        let source = get_data_source().map_err(|e| {
            tracing::error!("Request context: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        Ok(Self {
            config,
            source,
            clock: BusinessClock::with_offset_minutes(config.business.utc_offset_minutes, Utc::now()),
        })
    }
}

/// Маппинг ошибок сервиса в HTTP статус
pub fn error_status(error: &anyhow::Error) -> StatusCode {
    if error.downcast_ref::<DataSourceError>().is_some() {
        return StatusCode::BAD_GATEWAY;
    }
    match error.downcast_ref::<ReportError>() {
        Some(ReportError::NoData { .. }) | Some(ReportError::NotFound { .. }) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status() {
        let upstream = anyhow::Error::from(DataSourceError::Network("refused".to_string()));
        assert_eq!(error_status(&upstream), StatusCode::BAD_GATEWAY);

        let empty = anyhow::Error::from(ReportError::NoData {
            title: "Stock_Report".to_string(),
        });
        assert_eq!(error_status(&empty), StatusCode::NOT_FOUND);

        let missing = anyhow::Error::from(ReportError::NotFound {
            kind: "Sale",
            id: "x".to_string(),
        });
        assert_eq!(error_status(&missing), StatusCode::NOT_FOUND);

        let other = anyhow::anyhow!("boom");
        assert_eq!(error_status(&other), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

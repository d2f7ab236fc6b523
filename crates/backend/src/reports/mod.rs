//! Report tables for the external document renderer.
//!
//! Builders reduce domain records into a [`ReportTable`] of pre-formatted cells.
//! Rendering the PDF itself happens outside this service; CSV export is done here.

pub mod csv_export;
pub mod invoice;
pub mod service;
pub mod tables;

use thiserror::Error;

pub use contracts::shared::report::ReportTable;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No data found for selected period")]
    NoData { title: String },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Failed to render report: {0}")]
    Render(String),
}

/// Fails with [`ReportError::NoData`] when the table has no rows
pub(crate) fn non_empty(table: ReportTable) -> Result<ReportTable, ReportError> {
    if table.is_empty() {
        return Err(ReportError::NoData { title: table.title });
    }
    Ok(table)
}

/// Product cell, `N/A` for unresolved references
pub(crate) fn product_cell(name: Option<&str>) -> String {
    name.unwrap_or("N/A").to_string()
}

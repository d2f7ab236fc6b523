use serde::{Deserialize, Serialize};

use crate::domain::common::RangePreset;

pub const DEFAULT_FOOTER: &str = "Thank you for your business!";
pub const DEFAULT_TOTAL_LABEL: &str = "Total";

/// Company block printed above the title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessHeader {
    pub name: String,
    pub address_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotal {
    pub label: String,
    pub amount: f64,
}

/// Flat table handed to the document renderer.
///
/// Cells are already formatted; the renderer lays them out and performs no arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub business: BusinessHeader,
    /// Meta lines under the title ("Invoice No: ...")
    #[serde(default)]
    pub header_lines: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub total: Option<ReportTotal>,
    pub footer: String,
}

impl ReportTable {
    pub fn new(title: impl Into<String>, columns: &[&str], business: BusinessHeader) -> Self {
        Self {
            title: title.into(),
            business,
            header_lines: Vec::new(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            total: None,
            footer: DEFAULT_FOOTER.to_string(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Total line under the table with the default label
    pub fn set_total(&mut self, amount: f64) {
        self.total = Some(ReportTotal {
            label: DEFAULT_TOTAL_LABEL.to_string(),
            amount,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// File name the renderer should offer for download
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.title, extension)
    }
}

// ---------------------------------------------------------------------------
// Report catalogue & request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Sales,
    Purchase,
    Expense,
    Stock,
    Profit,
    Gst,
}

impl ReportKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "sales" => Some(ReportKind::Sales),
            "purchase" => Some(ReportKind::Purchase),
            "expense" => Some(ReportKind::Expense),
            "stock" => Some(ReportKind::Stock),
            "profit" => Some(ReportKind::Profit),
            "gst" => Some(ReportKind::Gst),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Purchase => "Purchase Report",
            ReportKind::Expense => "Expense Report",
            ReportKind::Stock => "Stock Report",
            ReportKind::Profit => "Profit Report",
            ReportKind::Gst => "GST Report",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![
            ReportKind::Sales,
            ReportKind::Stock,
            ReportKind::Profit,
            ReportKind::Expense,
            ReportKind::Purchase,
            ReportKind::Gst,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

/// Query string of `GET /api/reports/:kind`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub from: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub to: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub preset: Option<RangePreset>,
    #[serde(default)]
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_slugs() {
        for kind in ReportKind::all() {
            let slug = serde_json::to_value(kind).unwrap();
            let slug = slug.as_str().unwrap().to_string();
            assert_eq!(ReportKind::from_slug(&slug), Some(kind));
        }
        assert_eq!(ReportKind::from_slug("inventory"), None);
    }

    #[test]
    fn test_new_table_defaults() {
        let business = BusinessHeader {
            name: "Shop".into(),
            address_line: "Street".into(),
        };
        let table = ReportTable::new("Stock_Report", &["Product", "Stock"], business);
        assert!(table.is_empty());
        assert_eq!(table.footer, DEFAULT_FOOTER);
        assert_eq!(table.file_name("pdf"), "Stock_Report.pdf");
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::chart::LabeledValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancialHealth {
    Strong,
    Critical,
}

impl FinancialHealth {
    pub fn title(&self) -> &'static str {
        match self {
            FinancialHealth::Strong => "Financial Health: Strong",
            FinancialHealth::Critical => "Financial Health: Critical",
        }
    }
}

/// Response for `GET /api/d403/analytics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    /// revenue − expenses
    pub net_profit: f64,
    pub low_stock_count: usize,
    /// One decimal; 0 when there is no revenue
    pub profit_margin_percent: f64,
    /// `None` when there is no revenue to compare against
    pub efficiency_percent: Option<f64>,
    /// Revenue per calendar month, first-seen order
    pub monthly_sales: Vec<LabeledValue>,
    /// Revenue vs expenses doughnut
    pub revenue_split: Vec<LabeledValue>,
    pub health: FinancialHealth,
    pub insight: String,
}

use serde::{Deserialize, Serialize};

use crate::shared::chart::{ChartData, LabeledValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub total: usize,
}

/// Bar of the recent-sales chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSalePoint {
    /// Short weekday of the sale date, e.g. "Sun"
    pub label: String,
    pub total: f64,
}

/// Response for `GET /api/d402/home`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    /// Σ total of today's PAID sales
    pub today_sales: f64,
    /// Σ profit of today's PAID sales
    pub today_profit: f64,
    /// Σ amount of today's expenses
    pub today_expenses: f64,
    pub total_products: usize,
    pub low_stock_alerts: usize,
    /// Σ creditor balance
    pub outstanding_credit: f64,
    /// Σ number of sale references over all creditors (not deduplicated)
    pub credit_sales_count: usize,
    /// First-seen category order
    pub category_breakdown: Vec<CategoryCount>,
    /// Last six PAID sales in collection order
    pub recent_trend: Vec<RecentSalePoint>,
}

impl DashboardKpis {
    pub fn category_pairs(&self) -> Vec<LabeledValue> {
        self.category_breakdown
            .iter()
            .map(|c| LabeledValue::new(c.name.clone(), c.total as f64))
            .collect()
    }

    pub fn recent_pairs(&self) -> Vec<LabeledValue> {
        self.recent_trend
            .iter()
            .map(|p| LabeledValue::new(p.label.clone(), p.total))
            .collect()
    }
}

/// Response for `GET /api/d402/home/charts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeChartsResponse {
    pub categories: ChartData,
    pub recent_sales: ChartData,
}

impl From<&DashboardKpis> for HomeChartsResponse {
    fn from(kpis: &DashboardKpis) -> Self {
        Self {
            categories: ChartData::from_pairs(Some("Products"), &kpis.category_pairs()),
            recent_sales: ChartData::from_pairs(Some("Sales"), &kpis.recent_pairs()),
        }
    }
}

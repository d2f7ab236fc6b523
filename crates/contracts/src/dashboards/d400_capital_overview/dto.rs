use serde::{Deserialize, Serialize};

use crate::shared::chart::{ChartData, LabeledValue};

/// Liquidity snapshot shown on the capital cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalSummary {
    /// Σ stock × cost price
    pub inventory_value: f64,
    /// Σ total of non-cash sales
    pub receivables: f64,
    /// Σ total of purchases not marked "Paid"
    pub payables: f64,
    /// Σ expense amount
    pub expenses: f64,
    /// inventory + receivables − payables − expenses
    pub net_capital: f64,
}

/// One calendar-month bucket of the capital trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// "Oct 2026"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
    pub expenses: f64,
    /// revenue − expenses
    pub net: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    #[serde(rename = "in")]
    pub cash_in: f64,
    #[serde(rename = "out")]
    pub cash_out: f64,
}

impl CashFlow {
    pub fn pairs(&self) -> Vec<LabeledValue> {
        vec![
            LabeledValue::new("Cash In", self.cash_in),
            LabeledValue::new("Cash Out", self.cash_out),
        ]
    }
}

/// Revenue vs expenses of the current calendar month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    pub revenue: f64,
    pub expenses: f64,
}

impl BreakEven {
    pub fn pairs(&self) -> Vec<LabeledValue> {
        vec![
            LabeledValue::new("Revenue", self.revenue),
            LabeledValue::new("Expenses", self.expenses),
        ]
    }
}

/// Split of accumulated profit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reinvestment {
    pub inventory: f64,
    pub expenses: f64,
    /// Σ sale profit − inventory − expenses
    pub free_cash: f64,
}

impl Reinvestment {
    pub fn pairs(&self) -> Vec<LabeledValue> {
        vec![
            LabeledValue::new("Inventory", self.inventory),
            LabeledValue::new("Expenses", self.expenses),
            LabeledValue::new("Free Cash", self.free_cash),
        ]
    }
}

/// Response for `GET /api/d400/capital_overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalOverviewResponse {
    pub summary: CapitalSummary,
    pub trend: Vec<MonthlyTrendPoint>,
    pub cash_flow: CashFlow,
    pub break_even: BreakEven,
    pub reinvestment: Reinvestment,
}

impl CapitalOverviewResponse {
    pub fn trend_pairs(&self) -> Vec<LabeledValue> {
        self.trend
            .iter()
            .map(|p| LabeledValue::new(p.label.clone(), p.net))
            .collect()
    }
}

/// Response for `GET /api/d400/capital_overview/charts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalChartsResponse {
    pub trend: ChartData,
    pub cash_flow: ChartData,
    pub break_even: ChartData,
    pub reinvestment: ChartData,
}

impl From<&CapitalOverviewResponse> for CapitalChartsResponse {
    fn from(overview: &CapitalOverviewResponse) -> Self {
        Self {
            trend: ChartData::from_pairs(None, &overview.trend_pairs()),
            cash_flow: ChartData::from_pairs(None, &overview.cash_flow.pairs()),
            break_even: ChartData::from_pairs(None, &overview.break_even.pairs()),
            reinvestment: ChartData::from_pairs(None, &overview.reinvestment.pairs()),
        }
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic pair produced by the aggregator
// ---------------------------------------------------------------------------

/// One labelled number. Every series the metrics layer exposes is a list of these;
/// chart-library shaping happens in [`ChartData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart adapter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
}

/// `{labels: [...], datasets: [{label, data: [...]}]}` as consumed by chart.js-like renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Single-dataset chart from labelled pairs, order preserved
    pub fn from_pairs(dataset_label: Option<&str>, pairs: &[LabeledValue]) -> Self {
        Self {
            labels: pairs.iter().map(|p| p.label.clone()).collect(),
            datasets: vec![ChartDataset {
                label: dataset_label.map(str::to_string),
                data: pairs.iter().map(|p| p.value).collect(),
            }],
        }
    }
}

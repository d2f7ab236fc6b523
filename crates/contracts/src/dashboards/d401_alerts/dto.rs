use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Stable id, e.g. "low-stock-<productId>", "fast-moving"
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

/// Response for `GET /api/d401/alerts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsResponse {
    /// In rule-evaluation order
    pub alerts: Vec<Alert>,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
}

impl AlertsResponse {
    pub fn from_alerts(alerts: Vec<Alert>) -> Self {
        let count = |s: AlertSeverity| alerts.iter().filter(|a| a.severity == s).count();
        Self {
            high_count: count(AlertSeverity::High),
            medium_count: count(AlertSeverity::Medium),
            low_count: count(AlertSeverity::Low),
            alerts,
        }
    }
}

pub mod client;

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use thiserror::Error;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_creditor::aggregate::Creditor;
use contracts::domain::common::DateRange;

pub use client::ShopApiClient;

static DATA_SOURCE: OnceCell<Arc<dyn DataSource>> = OnceCell::new();

/// Ошибки источника данных
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Read-only access to the shop's record collections.
///
/// Every call returns the unwrapped collection. The metrics layer never talks to
/// this trait directly; dashboard services fetch first and aggregate afterwards.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, DataSourceError>;

    async fn sales(&self, range: Option<DateRange>) -> Result<Vec<Sale>, DataSourceError>;

    async fn purchases(&self, range: Option<DateRange>) -> Result<Vec<Purchase>, DataSourceError>;

    async fn expenses(&self, range: Option<DateRange>) -> Result<Vec<Expense>, DataSourceError>;

    async fn creditors(&self) -> Result<Vec<Creditor>, DataSourceError>;
}

pub fn initialize(source: Arc<dyn DataSource>) -> anyhow::Result<()> {
    DATA_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("data source already initialized"))
}

pub fn get_data_source() -> anyhow::Result<Arc<dyn DataSource>> {
    DATA_SOURCE
        .get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("data source is not initialized"))
}

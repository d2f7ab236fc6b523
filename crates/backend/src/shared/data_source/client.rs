use async_trait::async_trait;
use serde::de::DeserializeOwned;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_creditor::aggregate::Creditor;
use contracts::domain::common::{DateRange, ListEnvelope};

use super::{DataSource, DataSourceError};
use crate::shared::config::DataSourceConfig;

/// HTTP-клиент REST API магазина
pub struct ShopApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ShopApiClient {
    pub fn new(config: &DataSourceConfig) -> Result<Self, DataSourceError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DataSourceError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .no_proxy()
            .build()
            .map_err(|e| DataSourceError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str, range: Option<DateRange>) -> String {
        let mut url = format!("{}/{}", self.base_url, path);
        if let Some(range) = range {
            let query: Vec<String> = range
                .query_pairs()
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }

    /// GET a collection endpoint and unwrap its `data` field
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<T>, DataSourceError> {
        let url = self.url_for(path, range);
        tracing::info!(
            "Shop API: GET {} (token={})",
            url,
            if self.token.is_some() { "***" } else { "NONE" }
        );

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DataSourceError::Network(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Shop API response: {} for {}", status, url);
            return Err(DataSourceError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| DataSourceError::Network(format!("{}: {}", url, e)))?;

        let envelope: ListEnvelope<T> =
            serde_json::from_str(&text).map_err(|e| DataSourceError::Decode {
                url: url.clone(),
                message: e.to_string(),
            })?;

        tracing::info!("Shop API: got {} records from /{}", envelope.data.len(), path);
        Ok(envelope.into_data())
    }
}

#[async_trait]
impl DataSource for ShopApiClient {
    async fn products(&self) -> Result<Vec<Product>, DataSourceError> {
        self.get_list("products", None).await
    }

    async fn sales(&self, range: Option<DateRange>) -> Result<Vec<Sale>, DataSourceError> {
        self.get_list("sales", range).await
    }

    async fn purchases(&self, range: Option<DateRange>) -> Result<Vec<Purchase>, DataSourceError> {
        self.get_list("purchases", range).await
    }

    async fn expenses(&self, range: Option<DateRange>) -> Result<Vec<Expense>, DataSourceError> {
        self.get_list("expenses", range).await
    }

    async fn creditors(&self) -> Result<Vec<Creditor>, DataSourceError> {
        self.get_list("creditors", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(base_url: &str, token: Option<&str>) -> DataSourceConfig {
        DataSourceConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_rejects_base_url_without_scheme() {
        let err = ShopApiClient::new(&config("localhost:5000", None)).err().unwrap();
        assert!(matches!(err, DataSourceError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_url_with_range() {
        let client = ShopApiClient::new(&config("http://shop.local/api/", None)).unwrap();
        assert_eq!(client.base_url(), "http://shop.local/api");
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
        );
        assert_eq!(
            client.url_for("sales", Some(range)),
            "http://shop.local/api/sales?from=2026-10-01&to=2026-10-31"
        );
        assert_eq!(client.url_for("products", None), "http://shop.local/api/products");
    }

    #[tokio::test]
    async fn test_fetches_and_unwraps_envelope() {
        let app = Router::new()
            .route(
                "/products",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    Json(json!({
                        "success": true,
                        "data": [{
                            "_id": "p1",
                            "name": auth,
                            "category": "Pens",
                            "costPrice": 5,
                            "sellingPrice": 8,
                            "stock": 4,
                            "minStock": 2
                        }]
                    }))
                }),
            )
            .route(
                "/sales",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "data": [{
                            "_id": format!("{}_{}", q.get("from").cloned().unwrap_or_default(), q.get("to").cloned().unwrap_or_default()),
                            "saleDate": "2026-10-18T05:00:00Z",
                            "paymentMode": "Cash",
                            "paymentStatus": "PAID",
                            "totalAmount": 10,
                            "items": []
                        }]
                    }))
                }),
            );
        let base = serve(app).await;
        let client = ShopApiClient::new(&config(&base, Some("tkn"))).unwrap();

        let products = client.products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Bearer tkn");
        assert_eq!(products[0].stock, 4);

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
        );
        let sales = client.sales(Some(range)).await.unwrap();
        assert_eq!(sales[0].id, "2026-10-01_2026-10-31");
        assert!(sales[0].is_cash());
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let app = Router::new().route(
            "/creditors",
            get(|| async { (StatusCode::UNAUTHORIZED, "no token") }),
        );
        let base = serve(app).await;
        let client = ShopApiClient::new(&config(&base, None)).unwrap();

        match client.creditors().await {
            Err(DataSourceError::Status { status, body, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "no token");
            }
            other => panic!("expected status error, got {:?}", other.map(|c| c.len())),
        }
    }

    #[tokio::test]
    async fn test_decode_error_on_missing_envelope() {
        let app = Router::new().route("/expenses", get(|| async { Json(json!([{"amount": 1}])) }));
        let base = serve(app).await;
        let client = ShopApiClient::new(&config(&base, None)).unwrap();

        let err = client.expenses(None).await.err().unwrap();
        assert!(matches!(err, DataSourceError::Decode { .. }));
    }
}

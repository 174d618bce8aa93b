//! # Currency Client SDK
//!
//! A typed Rust client for the Currency API.

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use currency_types::{
    ConversionResult, CurrencyCode, ExchangeRatesResponse, HistoricalRatesResponse, PageRequest,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency API client.
pub struct CurrencyClient {
    base_url: String,
    http: Client,
}

impl CurrencyClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Latest rates for `base`.
    pub async fn latest(&self, base: &CurrencyCode) -> Result<ExchangeRatesResponse, ClientError> {
        self.get(
            "/api/currency/latest",
            &[("baseCurrency", base.to_string())],
        )
        .await
    }

    /// Converts `amount` of `from` into `to`.
    pub async fn convert(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: Decimal,
    ) -> Result<ConversionResult, ClientError> {
        self.get(
            "/api/currency/convert",
            &[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("amount", amount.to_string()),
            ],
        )
        .await
    }

    /// One page of historical rates between `start` and `end`.
    pub async fn historical(
        &self,
        base: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
        page: PageRequest,
    ) -> Result<HistoricalRatesResponse, ClientError> {
        self.get(
            "/api/currency/historical",
            &[
                ("baseCurrency", base.to_string()),
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
                ("page", page.page.to_string()),
                ("pageSize", page.page_size.to_string()),
            ],
        )
        .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! The response shapes mirror the Frankfurter API payloads. Rate maps are
//! `IndexMap`s so that entries keep the order in which the upstream sent them.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CurrencyCode, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};

/// Currency code → rate.
pub type RateTable = IndexMap<CurrencyCode, Decimal>;

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Latest rates for a base currency, as returned by the upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRatesResponse {
    /// Amount of the base currency the rates apply to
    #[schema(value_type = f64, example = 1.0)]
    pub amount: Decimal,
    pub base: CurrencyCode,
    /// Publication date of the rates (ISO 8601)
    #[schema(example = "2024-09-11")]
    pub date: String,
    /// Currency code → rate
    #[schema(value_type = Object, example = json!({"USD": 1.1, "GBP": 0.85}))]
    pub rates: RateTable,
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    /// Converted amount as reported by the upstream provider
    #[schema(value_type = f64, example = 110.0)]
    pub amount: Decimal,
    /// The source currency of the conversion
    pub base: CurrencyCode,
    /// Target currency code → converted amount
    #[schema(value_type = Object, example = json!({"USD": 1.1}))]
    pub rates: RateTable,
}

/// A page of historical rates over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRatesResponse {
    pub base: CurrencyCode,
    /// ISO date → (currency code → rate), for the requested page only
    #[schema(value_type = Object, example = json!({"2020-01-01": {"USD": 1.1}}))]
    pub rates: IndexMap<String, RateTable>,
    /// Number of dated entries in the whole range, before paging
    #[serde(default)]
    #[schema(example = 2)]
    pub total_count: usize,
}

impl HistoricalRatesResponse {
    /// Records the full entry count and keeps only the entries on `page`.
    pub fn into_page(mut self, page: PageRequest) -> Self {
        self.total_count = self.rates.len();
        let window = page.window(self.rates.len());
        let paged: IndexMap<String, RateTable> = self.rates.drain(window).collect();
        self.rates = paged;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Query DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query for the latest rates.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LatestQuery {
    /// Base currency code
    #[param(value_type = String, example = "EUR")]
    pub base_currency: CurrencyCode,
}

/// Query for a point-to-point conversion.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Source currency code
    #[param(value_type = String, example = "EUR")]
    pub from: CurrencyCode,
    /// Target currency code
    #[param(value_type = String, example = "USD")]
    pub to: CurrencyCode,
    /// Amount of the source currency
    #[param(value_type = f64, example = 100)]
    pub amount: Decimal,
}

/// Query for a page of historical rates.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HistoricalQuery {
    /// Base currency code
    #[param(value_type = String, example = "EUR")]
    pub base_currency: CurrencyCode,
    /// First day of the range (YYYY-MM-DD)
    #[param(value_type = String, format = Date, example = "2020-01-01")]
    pub start_date: NaiveDate,
    /// Last day of the range (YYYY-MM-DD)
    #[param(value_type = String, format = Date, example = "2020-01-31")]
    pub end_date: NaiveDate,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(example = 1)]
    pub page: i64,
    /// Entries per page
    #[serde(default = "default_page_size")]
    #[param(example = 10)]
    pub page_size: i64,
}

impl HistoricalQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

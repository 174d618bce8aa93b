//! Currency Application Service
//!
//! Orchestrates upstream rate lookups through the provider port.
//! Contains NO infrastructure logic - request shaping, validation and paging only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::error;

use currency_types::{
    AppError, ConversionResult, CurrencyCode, ExchangeRatesResponse, HistoricalRatesResponse,
    PageRequest, ProviderError, RateProvider,
};

/// Currencies that may not take part in a conversion, on either side.
pub const RESTRICTED_CURRENCIES: [&str; 4] = ["TRY", "PLN", "THB", "MXN"];

const RESTRICTED_MESSAGE: &str = "Currency conversion is not allowed for TRY, PLN, THB, and MXN.";

/// Application service for exchange rate operations.
///
/// Generic over `P: RateProvider` - the upstream adapter is injected at compile time.
/// Holds no mutable state; every call is independent.
pub struct CurrencyService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> CurrencyService<P> {
    /// Creates a new currency service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Latest Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets the latest rates for `base`. Any base is allowed here.
    pub async fn latest_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<ExchangeRatesResponse, AppError> {
        let body = self
            .provider
            .fetch("latest", &[("base", base.to_string())])
            .await
            .map_err(|e| upstream_failure("latest rates", e))?;

        parse_body("latest rates", &body)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts `amount` of `from` into `to`.
    pub async fn convert(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: Decimal,
    ) -> Result<ConversionResult, AppError> {
        // Checked before any upstream call.
        if from.is_one_of(&RESTRICTED_CURRENCIES) || to.is_one_of(&RESTRICTED_CURRENCIES) {
            return Err(AppError::InvalidRequest(RESTRICTED_MESSAGE.into()));
        }

        let not_found =
            || AppError::InvalidRequest(format!("Conversion rate from {from} to {to} not found."));

        let query = [
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("amount", amount.to_string()),
        ];

        let body = match self.provider.fetch("latest", &query).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Err(not_found()),
            Err(e) => return Err(upstream_failure("conversion rate", e)),
        };

        let rate: Option<ExchangeRatesResponse> = parse_body("conversion rate", &body)?;
        let rate = rate.ok_or_else(not_found)?;

        Ok(ConversionResult {
            amount: rate.amount,
            base: from.clone(),
            rates: rate.rates,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Historical Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets one page of the rates published between `start` and `end`.
    ///
    /// The upstream returns the whole range; paging happens here, so
    /// `total_count` is always the size of the full range.
    pub async fn historical_rates(
        &self,
        base: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
        page: PageRequest,
    ) -> Result<HistoricalRatesResponse, AppError> {
        let path = format!("{}..{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"));

        let body = self
            .provider
            .fetch(&path, &[("base", base.to_string())])
            .await
            .map_err(|e| upstream_failure("historical rates", e))?;

        let full: HistoricalRatesResponse = parse_body("historical rates", &body)?;
        Ok(full.into_page(page))
    }
}

fn upstream_failure(what: &str, err: ProviderError) -> AppError {
    error!(error = %err, "Failed to fetch {what}");
    AppError::UpstreamFailure
}

fn parse_body<T: DeserializeOwned>(what: &str, body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        error!(error = %e, body, "Failed to parse {what}");
        AppError::UpstreamFailure
    })
}

//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use currency_types::dto::{
    ConversionResult, ConvertQuery, ExchangeRatesResponse, HistoricalQuery,
    HistoricalRatesResponse, LatestQuery,
};
use currency_types::CurrencyCode;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Latest rates for a base currency
#[utoipa::path(
    get,
    path = "/api/currency/latest",
    tag = "currency",
    params(LatestQuery),
    responses(
        (status = 200, description = "Latest exchange rates", body = ExchangeRatesResponse),
        (status = 400, description = "Missing or malformed query parameters"),
        (status = 502, description = "Upstream provider unavailable")
    )
)]
async fn latest_rates() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/api/currency/convert",
    tag = "currency",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResult),
        (status = 400, description = "Restricted currency, unknown rate, or malformed query"),
        (status = 502, description = "Upstream provider unavailable")
    )
)]
async fn convert() {}

/// Historical rates over a date range, paged
#[utoipa::path(
    get,
    path = "/api/currency/historical",
    tag = "currency",
    params(HistoricalQuery),
    responses(
        (status = 200, description = "One page of historical rates", body = HistoricalRatesResponse),
        (status = 400, description = "Missing or malformed query parameters"),
        (status = 502, description = "Upstream provider unavailable")
    )
)]
async fn historical_rates() {}

/// OpenAPI documentation for the Currency API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange API",
        version = "1.0.0",
        description = "Latest rates, conversions and historical rates backed by the Frankfurter API.\n\nConversions involving TRY, PLN, THB or MXN are rejected.",
        license(name = "MIT"),
    ),
    paths(health, latest_rates, convert, historical_rates),
    components(
        schemas(
            ExchangeRatesResponse,
            ConversionResult,
            HistoricalRatesResponse,
            CurrencyCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currency", description = "Exchange rate lookups and conversions"),
    )
)]
pub struct ApiDoc;

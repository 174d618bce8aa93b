//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use currency_types::{AppError, ConvertQuery, HistoricalQuery, LatestQuery, RateProvider};

use crate::CurrencyService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: CurrencyService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Latest rates for a base currency.
#[tracing::instrument(skip(state), fields(base = %query.base_currency))]
pub async fn latest_rates<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<LatestQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.latest_rates(&query.base_currency).await?;
    Ok(Json(rates))
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state), fields(from = %query.from, to = %query.to, amount = %query.amount))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .service
        .convert(&query.from, &query.to, query.amount)
        .await?;
    Ok(Json(result))
}

/// One page of historical rates over a date range.
#[tracing::instrument(
    skip(state),
    fields(
        base = %query.base_currency,
        start = %query.start_date,
        end = %query.end_date,
        page = query.page,
        page_size = query.page_size
    )
)]
pub async fn historical_rates<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(query): Query<HistoricalQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state
        .service
        .historical_rates(
            &query.base_currency,
            query.start_date,
            query.end_date,
            query.page_request(),
        )
        .await?;
    Ok(Json(rates))
}

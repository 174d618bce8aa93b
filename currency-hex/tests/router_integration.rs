//! Integration tests for the HTTP router.
//!
//! These drive the full stack: Axum router → CurrencyService → FrankfurterClient,
//! with the Frankfurter API replaced by a wiremock server.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use currency_hex::{CurrencyService, inbound::HttpServer};
use currency_types::{ConversionResult, ExchangeRatesResponse, HistoricalRatesResponse};
use currency_upstream::{FrankfurterClient, RetryPolicy};

const LATEST_JSON: &str =
    r#"{"amount":1.0,"base":"EUR","date":"2024-09-11","rates":{"USD":1.1,"GBP":0.85}}"#;

const HISTORICAL_JSON: &str = r#"{
    "amount": 1.0,
    "base": "EUR",
    "start_date": "2020-01-01",
    "end_date": "2020-01-31",
    "rates": {
        "2020-01-01": {"USD": 1.1},
        "2020-01-02": {"USD": 1.2}
    }
}"#;

/// Helper to create a router backed by the given mock upstream.
fn create_app(upstream: &MockServer) -> axum::Router {
    let client = FrankfurterClient::builder(upstream.uri())
        .retry_policy(RetryPolicy::new(3, Duration::from_millis(1)))
        .build()
        .unwrap();
    HttpServer::new(CurrencyService::new(client)).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn error_body(response: axum::response::Response) -> (String, u64) {
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    (
        json["error"].as_str().unwrap().to_string(),
        json["code"].as_u64().unwrap(),
    )
}

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let app = create_app(&upstream);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_latest_rates() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("base", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LATEST_JSON))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/latest?baseCurrency=EUR"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let rates: ExchangeRatesResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(rates.base.as_str(), "EUR");
    assert_eq!(rates.date, "2024-09-11");
    assert_eq!(rates.rates.get("GBP"), Some(&dec!(0.85)));
}

#[tokio::test]
async fn test_latest_rates_upstream_down_is_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream detail"))
        .expect(4)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/latest?baseCurrency=EUR"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let (message, code) = error_body(response).await;
    assert_eq!(message, "Failed to fetch data from the Frankfurter API.");
    assert_eq!(code, 502);
}

#[tokio::test]
async fn test_convert() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("from", "EUR"))
        .and(query_param("to", "USD"))
        .and(query_param("amount", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"amount":110.0,"base":"EUR","date":"2024-09-11","rates":{"USD":1.1}}"#,
        ))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/convert?from=EUR&to=USD&amount=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    let result: ConversionResult = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(result.amount, dec!(110.0));
    assert_eq!(result.base.as_str(), "EUR");
    assert_eq!(result.rates.get("USD"), Some(&dec!(1.1)));

    // Amounts are JSON numbers, not strings.
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["amount"].as_f64(), Some(110.0));
    assert_eq!(json["rates"]["USD"].as_f64(), Some(1.1));
}

#[tokio::test]
async fn test_convert_keeps_full_decimal_precision() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("amount", "100.10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"amount":100.10,"base":"EUR","date":"2024-09-11","rates":{"USD":108.7712345678901234}}"#,
        ))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/convert?from=EUR&to=USD&amount=100.10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(
        text,
        r#"{"amount":100.10,"base":"EUR","rates":{"USD":108.7712345678901234}}"#
    );
}

#[tokio::test]
async fn test_convert_restricted_currency_is_bad_request() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/convert?from=USD&to=MXN&amount=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let (message, code) = error_body(response).await;
    assert_eq!(
        message,
        "Currency conversion is not allowed for TRY, PLN, THB, and MXN."
    );
    assert_eq!(code, 400);
}

#[tokio::test]
async fn test_convert_unknown_rate_is_bad_request() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"not found"}"#))
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/convert?from=EUR&to=ZZZ&amount=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let (message, _) = error_body(response).await;
    assert_eq!(message, "Conversion rate from EUR to ZZZ not found.");
}

#[tokio::test]
async fn test_convert_missing_amount_is_rejected() {
    let upstream = MockServer::start().await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get("/api/currency/convert?from=EUR&to=USD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_historical_pages_locally() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2020-01-01..2020-01-31"))
        .and(query_param("base", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HISTORICAL_JSON))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get(
            "/api/currency/historical?baseCurrency=EUR&startDate=2020-01-01&endDate=2020-01-31&page=2&pageSize=1",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    let page: HistoricalRatesResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(page.total_count, 2);
    let dates: Vec<&str> = page.rates.keys().map(String::as_str).collect();
    assert_eq!(dates, ["2020-01-02"]);

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["totalCount"].as_u64(), Some(2));
}

#[tokio::test]
async fn test_historical_defaults_to_first_page() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2020-01-01..2020-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HISTORICAL_JSON))
        .mount(&upstream)
        .await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get(
            "/api/currency/historical?baseCurrency=EUR&startDate=2020-01-01&endDate=2020-01-31",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: HistoricalRatesResponse =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(page.total_count, 2);
    assert_eq!(page.rates.len(), 2);
}

#[tokio::test]
async fn test_historical_invalid_date_is_rejected() {
    let upstream = MockServer::start().await;
    let app = create_app(&upstream);

    let response = app
        .oneshot(get(
            "/api/currency/historical?baseCurrency=EUR&startDate=01/01/2020&endDate=2020-01-31",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let upstream = MockServer::start().await;
    let app = create_app(&upstream);

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["paths"]["/api/currency/convert"].is_object());
}

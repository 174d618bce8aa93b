//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the currency exchange service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (blocklist, conversion, paging)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served alongside the API
//!
//! The service is generic over `P: RateProvider`, allowing
//! different upstream implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{CurrencyService, RESTRICTED_CURRENCIES};

//! # Currency Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only data structures,
//! paging rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, PageRequest)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto.rs` - Data Transfer Objects for API boundaries
//! - `error.rs` - Provider and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, PageRequest};
pub use dto::*;
pub use error::{AppError, ProviderError, UPSTREAM_FAILURE_MESSAGE};
pub use ports::RateProvider;

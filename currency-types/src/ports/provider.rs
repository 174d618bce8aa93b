//! Exchange rate provider port.
//!
//! This trait defines the interface to the upstream rate source.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::error::ProviderError;

/// Query string pairs for an upstream request. Values are encoded by the adapter.
pub type QueryParams<'a> = &'a [(&'static str, String)];

/// Port trait for the upstream exchange rate provider.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Performs a GET against `path` (relative to the provider's base URL)
    /// and returns the raw response body.
    ///
    /// Implementations own the retry policy: an `Err` means every attempt failed.
    async fn fetch(&self, path: &str, query: QueryParams<'_>) -> Result<String, ProviderError>;
}

//! # Currency Upstream
//!
//! Outbound adapter for the Frankfurter exchange rate API.
//!
//! - `frankfurter` - `FrankfurterClient`, the `RateProvider` implementation
//! - `retry` - immutable retry policy with exponential backoff

mod frankfurter;
mod retry;

pub use frankfurter::{BuildError, DEFAULT_BASE_URL, FrankfurterClient, FrankfurterClientBuilder};
pub use retry::{RetryPolicy, with_retry};

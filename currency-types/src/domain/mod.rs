//! Domain types.

mod currency;
mod page;

pub use currency::CurrencyCode;
pub use page::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};

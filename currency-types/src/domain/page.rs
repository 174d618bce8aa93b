//! Paging over an ordered result set.

use std::ops::Range;

/// Default page number when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A 1-based page request.
///
/// Values are taken as-is from the caller. Non-positive values are not
/// rejected; they select an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Index range of the entries on this page, out of `total` entries.
    ///
    /// Skips `(page - 1) * page_size` entries and takes the next `page_size`.
    /// Always returns a range within `0..total`; an out-of-range page is empty.
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.page < 1 || self.page_size < 1 {
            return 0..0;
        }

        let size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let skip = usize::try_from(self.page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(size);

        if skip >= total {
            return 0..0;
        }

        skip..skip.saturating_add(size).min(total)
    }
}

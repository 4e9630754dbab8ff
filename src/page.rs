use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Validated pagination bounds: `page >= 1`, `1 <= size <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// # Errors
    /// Rejects `page == 0` and `size` outside `1..=100`.
    pub fn new(page: u64, size: u64) -> Result<Self, SearchError> {
        if page < 1 {
            return Err(SearchError::InvalidCriteria("page must be >= 1".into()));
        }
        if size < 1 || size > MAX_PAGE_SIZE {
            return Err(SearchError::InvalidCriteria(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self { page, size })
    }

    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Documents to skip before this page starts. Saturates so an absurdly
    /// large page number yields an empty page instead of overflowing.
    #[must_use]
    pub fn skip(&self) -> usize {
        usize::try_from((self.page - 1).saturating_mul(self.size)).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: DEFAULT_PAGE_SIZE }
    }
}

/// One page of results plus the totals the caller needs to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

/// Wraps an already-sliced page of items. `pages == ceil(total/size)`, so a
/// page past the end yields empty items with total/pages still populated.
#[must_use]
pub fn paginate<T>(items: Vec<T>, total: u64, request: PageRequest) -> Paginated<T> {
    Paginated {
        items,
        total,
        page: request.page(),
        size: request.size(),
        pages: total.div_ceil(request.size()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
    }

    #[test]
    fn pages_is_ceiling_division() {
        let req = PageRequest::new(1, 10).unwrap();
        assert_eq!(paginate::<u8>(vec![], 0, req).pages, 0);
        assert_eq!(paginate::<u8>(vec![], 1, req).pages, 1);
        assert_eq!(paginate::<u8>(vec![], 10, req).pages, 1);
        assert_eq!(paginate::<u8>(vec![], 11, req).pages, 2);
    }

    #[test]
    fn skip_walks_pages() {
        let req = PageRequest::new(3, 25).unwrap();
        assert_eq!(req.skip(), 50);
        assert_eq!(req.limit(), 25);
    }

    #[test]
    fn skip_saturates_for_huge_page_numbers() {
        let req = PageRequest::new(u64::MAX, 100).unwrap();
        assert_eq!(req.skip(), usize::MAX);
    }
}

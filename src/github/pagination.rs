//! Position of a fetched page within the open pull request listing.

/// Page state derived from the `Link` header of a listing response.
///
/// The traversal does not rely on `has_next` to terminate; an empty page is
/// the authoritative end of data. The flags are kept for progress logging.
///
/// # Example
///
/// ```
/// use greeter::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 100).with_total_pages(Some(5)).with_has_next(true);
/// assert_eq!(info.current_page(), 2);
/// assert!(!info.is_last_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    current_page: u32,
    per_page: u8,
    total_pages: Option<u32>,
    has_next: bool,
}

impl PageInfo {
    /// Creates page info for a 1-based page number and page size.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            total_pages: None,
            has_next: false,
        }
    }

    /// Sets the total number of pages, when GitHub reported a `last` link.
    #[must_use]
    pub const fn with_total_pages(mut self, total_pages: Option<u32>) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Sets whether GitHub reported a `next` link.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the total number of pages if known.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Returns true when this is the final page GitHub knows about.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next
    }
}

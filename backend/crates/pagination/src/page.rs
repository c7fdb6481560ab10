//! Page requests, page envelopes, and the slicing rule.

use serde::Serialize;

use crate::cursor::Cursor;
use crate::error::PageRequestError;

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Zero-indexed page request with a validated page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a request for `page` with `page_size` items per page.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when `page_size` is zero. Any positive
    /// size is accepted; a size larger than the list yields a single page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert!(PageRequest::new(2, 5).is_ok());
    /// assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::EmptyPageSize));
    /// ```
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        if page_size == 0 {
            return Err(PageRequestError::EmptyPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// First page with the default page size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Request for the page following this one, keeping the page size.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            page_size: self.page_size,
        }
    }

    /// Half-open item range `[start, end)` covered by this page, or `None`
    /// when the bounds overflow `usize`.
    const fn bounds(&self) -> Option<(usize, usize)> {
        let Some(start) = self.page.checked_mul(self.page_size) else {
            return None;
        };
        let Some(end) = start.checked_add(self.page_size) else {
            return None;
        };
        Some((start, end))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus continuation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in list order.
    pub items: Vec<T>,
    /// Whether items remain after this page.
    pub has_more: bool,
    /// Token addressing the next page when `has_more` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// Page with no items and nothing after it.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
            next_cursor: None,
        }
    }
}

/// Slice `items` into the page described by `request`.
///
/// The page covers `[page * page_size, (page + 1) * page_size)`; `has_more`
/// is set only when that upper bound is below `items.len()`. A page past the
/// end of the list is empty with `has_more = false`. The input slice is never
/// modified.
///
/// # Examples
///
/// ```
/// use pagination::{PageRequest, paginate};
///
/// let items = [1, 2, 3, 4, 5];
/// let last = paginate(&items, PageRequest::new(2, 2).expect("valid"));
/// assert_eq!(last.items, vec![5]);
/// assert!(!last.has_more);
///
/// let beyond = paginate(&items, PageRequest::new(9, 2).expect("valid"));
/// assert!(beyond.items.is_empty());
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let Some((start, end)) = request.bounds() else {
        return Page::empty();
    };
    if start >= items.len() {
        return Page::empty();
    }

    let page_items = items
        .get(start..end.min(items.len()))
        .map(<[T]>::to_vec)
        .unwrap_or_default();
    let has_more = end < items.len();
    Page {
        items: page_items,
        has_more,
        next_cursor: has_more.then(|| Cursor::from(request.next())),
    }
}

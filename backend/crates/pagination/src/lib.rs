//! Page slicing and opaque cursor primitives.
//!
//! Discovery results are materialised once and then served page by page. This
//! crate owns the slicing rules, the page envelope returned to callers, and
//! the opaque cursor token that lets a client ask for the next page without
//! knowing how pages are addressed.
//!
//! # Example
//!
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let items = vec!["a", "b", "c"];
//! let request = PageRequest::new(0, 2).expect("valid page size");
//! let page = paginate(&items, request);
//!
//! assert_eq!(page.items, vec!["a", "b"]);
//! assert!(page.has_more);
//! ```

mod cursor;
mod error;
mod page;

pub use cursor::Cursor;
pub use error::{CursorError, PageRequestError};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest, paginate};

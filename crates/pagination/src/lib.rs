//! Paged entity lists and the pagination plumbing that accompanies them.
//!
//! [`EntityList`] pairs a page of entities with the size of the collection
//! it was drawn from. [`RequestQueryParams`] reads the window a client asked
//! for, and [`EntityList::headers`] produces the headers that describe the
//! page that was returned.
//!
//! # Example
//!
//! ```
//! use pagination::{EntityList, RequestQueryParams, headers};
//!
//! let params = RequestQueryParams::parse("limit=2&offset=4").expect("valid query");
//! let list = EntityList::paged(vec!["e", "f"], params.page().with_count(9));
//!
//! assert_eq!(list.count(), 9);
//! assert_eq!(list.headers().get(headers::X_OFFSET), Some("4"));
//! ```

mod entity_list;
mod error;
pub mod headers;
mod page;
mod query;

pub use entity_list::EntityList;
pub use error::PaginationError;
pub use headers::PaginationHeaders;
pub use page::{Page, ZeroHandling};
pub use query::RequestQueryParams;

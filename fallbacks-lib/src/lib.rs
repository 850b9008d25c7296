//! Gallery core: filtering, sorting, share links, and template loading.
//!
//! The filter and sort engines are pure functions over a borrowed
//! catalog. [`Gallery`] layers the user's selection on top of them with a
//! debounced search and a memoized view.

pub mod criteria;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod query;
pub mod settings;
pub mod sort;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

pub use criteria::{Criteria, toggle};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::TemplateError;
pub use filter::{filter_entries, matches_entry};
pub use gallery::{Facets, Gallery, GalleryStats};
pub use query::{GalleryQuery, MAX_SHARE_QUERY_CHARS, QueryError};
pub use settings::Settings;
pub use sort::{SortDirection, SortField, SortSpec, sort_entries};
pub use template::{MAX_TEMPLATE_BYTES, TemplateLoader, TemplateSource};

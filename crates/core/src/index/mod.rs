//! Static documentation search index.
//!
//! The index is an ordered list of [`IndexEntry`] records emitted once by a
//! documentation generator. It is loaded wholesale into an [`IndexStore`],
//! never mutated afterwards, and queried by case-insensitive substring.
//!
//! # Example
//!
//! ```no_run
//! use docsearch_core::index::{IndexStore, SearchQuery, Category};
//! use std::path::Path;
//!
//! let store = IndexStore::load(Path::new("build/search_index.js")).unwrap();
//!
//! for hit in store.search("debugging") {
//!     println!("{} ({})", hit.entry.location, hit.field.as_str());
//! }
//!
//! let query = SearchQuery {
//!     category: Some(Category::Section),
//!     limit: Some(5),
//!     ..SearchQuery::new("bug")
//! };
//! let sections: Vec<_> = store.query(&query).collect();
//! ```

pub mod excerpt;
pub mod format;
pub mod search;
pub mod store;
pub mod types;

pub use excerpt::excerpt;
pub use format::{ExportFormat, SCRIPT_VARIABLE, SourceFormat};
pub use search::{EmptyQuery, MatchField, Matches, SearchEngine, SearchQuery, SearchResult};
pub use store::{IndexError, IndexStore, PageSummary};
pub use types::{Category, IndexEntry};

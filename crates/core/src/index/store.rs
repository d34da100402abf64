//! The loaded, immutable search index.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::format::{self, ExportFormat, SourceFormat};
use super::search::{Matches, SearchEngine, SearchQuery};
use super::types::{Category, IndexEntry};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("search index not found at {0}")]
    NotFound(String),

    #[error("failed to read search index {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("malformed search index {0}: {1}")]
    Malformed(String, #[source] serde_json::Error),

    #[error("malformed search index {source_name}: entry {position}: {reason}")]
    InvalidEntry { source_name: String, position: usize, reason: String },

    #[error("failed to serialize search index: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write search index {0}: {1}")]
    WriteError(String, #[source] std::io::Error),
}

impl IndexError {
    /// True for errors caused by the content of the index rather than I/O.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(..) | Self::InvalidEntry { .. })
    }
}

/// Lowercased copies of the searchable fields, built once at load.
#[derive(Debug)]
pub(crate) struct Folded {
    pub title: String,
    pub text: String,
}

impl Folded {
    fn new(entry: &IndexEntry) -> Self {
        Self { title: entry.title.to_lowercase(), text: entry.text.to_lowercase() }
    }
}

/// A page and how many sections the index holds for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub page: String,
    /// Location of the page-level entry, or `<document>#` when there is none.
    pub location: String,
    pub sections: usize,
}

/// Read-only ordered collection of [`IndexEntry`] records.
///
/// Cloning is cheap and clones share the same entries, so a store can be
/// handed to any number of readers.
#[derive(Debug, Clone)]
pub struct IndexStore {
    entries: Arc<[IndexEntry]>,
    folded: Arc<[Folded]>,
    format: SourceFormat,
}

impl IndexStore {
    /// Build a store from already-parsed entries.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, IndexError> {
        Self::build(entries, SourceFormat::Array, "<entries>")
    }

    /// Parse an index from JSON or the generator's script form.
    pub fn parse(input: &str) -> Result<Self, IndexError> {
        Self::parse_named(input, "<input>")
    }

    /// Load an index file from disk.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let name = path.display().to_string();
        if !path.exists() {
            return Err(IndexError::NotFound(name));
        }
        let raw =
            fs::read_to_string(path).map_err(|e| IndexError::ReadError(name.clone(), e))?;
        Self::parse_named(&raw, &name)
    }

    fn parse_named(input: &str, name: &str) -> Result<Self, IndexError> {
        let prepared = format::prepare(input);
        if prepared.normalized {
            info!(index = name, "search index is not strict JSON; normalized before parsing");
        }
        let entries = format::parse_entries(&prepared)
            .map_err(|e| IndexError::Malformed(name.to_string(), e))?;
        Self::build(entries, prepared.format, name)
    }

    fn build(
        entries: Vec<IndexEntry>,
        format: SourceFormat,
        name: &str,
    ) -> Result<Self, IndexError> {
        for (position, entry) in entries.iter().enumerate() {
            entry.validate().map_err(|reason| IndexError::InvalidEntry {
                source_name: name.to_string(),
                position,
                reason,
            })?;
        }
        let folded: Vec<Folded> = entries.iter().map(Folded::new).collect();
        debug!(
            index = name,
            entries = entries.len(),
            format = format.as_str(),
            "loaded search index"
        );
        Ok(Self { entries: entries.into(), folded: folded.into(), format })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position` in index order.
    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// The shape the index was loaded from.
    pub fn source_format(&self) -> SourceFormat {
        self.format
    }

    pub(crate) fn folded(&self) -> &[Folded] {
        &self.folded
    }

    /// Entry whose location is exactly `location`.
    pub fn find_location(&self, location: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.location == location)
    }

    /// One summary per document (the part of `location` before `#`), in
    /// first-seen order.
    ///
    /// Documents are kept apart even when they share a page title. The first
    /// page-level entry of a document supplies its title and location.
    pub fn pages(&self) -> Vec<PageSummary> {
        let mut pages: Vec<PageSummary> = Vec::new();
        let mut has_page_entry: Vec<bool> = Vec::new();
        let mut by_document: HashMap<&str, usize> = HashMap::new();

        for entry in self.entries.iter() {
            let pos = *by_document.entry(entry.document()).or_insert_with(|| {
                pages.push(PageSummary {
                    page: entry.page.clone(),
                    location: format!("{}#", entry.document()),
                    sections: 0,
                });
                has_page_entry.push(false);
                pages.len() - 1
            });
            match entry.category {
                Category::Page if !has_page_entry[pos] => {
                    has_page_entry[pos] = true;
                    pages[pos].page = entry.page.clone();
                    pages[pos].location = entry.location.clone();
                }
                Category::Page => {}
                Category::Section => pages[pos].sections += 1,
            }
        }
        pages
    }

    /// Case-insensitive substring lookup on `title` and `text`.
    ///
    /// An empty query matches nothing; use [`SearchQuery`] for other policies.
    pub fn search(&self, query: &str) -> Matches<'_> {
        SearchEngine::new(self).search(query)
    }

    /// Run a refined query. See [`SearchQuery`].
    pub fn query(&self, query: &SearchQuery) -> Matches<'_> {
        SearchEngine::new(self).query(query)
    }

    /// Serialize the store in the given shape.
    pub fn to_string_as(&self, format: ExportFormat) -> Result<String, IndexError> {
        format::write_entries(&self.entries, format).map_err(IndexError::Serialize)
    }

    pub fn to_json(&self) -> Result<String, IndexError> {
        self.to_string_as(ExportFormat::Json)
    }

    pub fn to_script(&self) -> Result<String, IndexError> {
        self.to_string_as(ExportFormat::Script)
    }

    /// Write the store to `path` in the given shape.
    pub fn write(&self, path: &Path, format: ExportFormat) -> Result<(), IndexError> {
        let out = self.to_string_as(format)?;
        fs::write(path, out)
            .map_err(|e| IndexError::WriteError(path.display().to_string(), e))
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Substring lookup over the index.
//!
//! Matching is case-insensitive containment on an entry's `title` or
//! `text`. Results keep index order; there is no ranking.

use std::iter::Enumerate;
use std::slice::Iter;

use serde::Deserialize;

use super::store::{Folded, IndexStore};
use super::types::{Category, IndexEntry};

/// What an empty (or whitespace-only) query matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQuery {
    /// No entries.
    #[default]
    None,
    /// Every entry that passes the other filters.
    All,
}

impl EmptyQuery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
        }
    }
}

/// Search query parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Substring to look for in title or text.
    pub text: String,
    /// Only entries of this category.
    pub category: Option<Category>,
    /// Only entries whose location starts with this prefix (e.g. `chap01.html`).
    pub location_prefix: Option<String>,
    /// Maximum results to return.
    pub limit: Option<usize>,
    pub empty_query: EmptyQuery,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }
}

/// Which field produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Text,
    /// Matched by an empty query under [`EmptyQuery::All`].
    Any,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Text => "text",
            Self::Any => "any",
        }
    }
}

/// A matching entry and where it sits in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub entry: &'a IndexEntry,
    /// Position in index order.
    pub position: usize,
    pub field: MatchField,
}

/// Search engine over a loaded store.
pub struct SearchEngine<'a> {
    store: &'a IndexStore,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a IndexStore) -> Self {
        Self { store }
    }

    /// Plain lookup with the default empty-query policy.
    pub fn search(&self, text: &str) -> Matches<'a> {
        self.query(&SearchQuery::new(text))
    }

    /// Execute a search query.
    ///
    /// The returned iterator is lazy; clone it to walk the results again.
    pub fn query(&self, query: &SearchQuery) -> Matches<'a> {
        // Queries match verbatim; surrounding whitespace is part of the needle.
        let needle = if query.text.is_empty() {
            match query.empty_query {
                EmptyQuery::None => Needle::Nothing,
                EmptyQuery::All => Needle::Everything,
            }
        } else {
            Needle::Text(query.text.to_lowercase())
        };

        Matches {
            entries: self.store.entries().iter().enumerate(),
            folded: self.store.folded(),
            needle,
            category: query.category,
            location_prefix: query.location_prefix.clone(),
            remaining: query.limit,
        }
    }
}

#[derive(Debug, Clone)]
enum Needle {
    Nothing,
    Everything,
    Text(String),
}

/// Lazy iterator over search results in index order.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    entries: Enumerate<Iter<'a, IndexEntry>>,
    folded: &'a [Folded],
    needle: Needle,
    category: Option<Category>,
    location_prefix: Option<String>,
    remaining: Option<usize>,
}

impl<'a> Matches<'a> {
    fn passes_filters(&self, entry: &IndexEntry) -> bool {
        if let Some(category) = self.category
            && entry.category != category
        {
            return false;
        }
        if let Some(prefix) = &self.location_prefix
            && !entry.location.starts_with(prefix.as_str())
        {
            return false;
        }
        true
    }

    fn match_field(&self, folded: &Folded) -> Option<MatchField> {
        match &self.needle {
            Needle::Nothing => None,
            Needle::Everything => Some(MatchField::Any),
            Needle::Text(needle) => {
                if folded.title.contains(needle.as_str()) {
                    Some(MatchField::Title)
                } else if folded.text.contains(needle.as_str()) {
                    Some(MatchField::Text)
                } else {
                    None
                }
            }
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = SearchResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.needle, Needle::Nothing) || self.remaining == Some(0) {
            return None;
        }

        while let Some((position, entry)) = self.entries.next() {
            if !self.passes_filters(entry) {
                continue;
            }
            let Some(field) = self.match_field(&self.folded[position]) else {
                continue;
            };
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
            return Some(SearchResult { entry, position, field });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(location: &str, title: &str, category: Category, text: &str) -> IndexEntry {
        IndexEntry {
            location: location.to_string(),
            page: "The way of the program".to_string(),
            title: title.to_string(),
            category,
            text: text.to_string(),
        }
    }

    fn sample_store() -> IndexStore {
        IndexStore::from_entries(vec![
            sample_entry("chap01.html#", "The way of the program", Category::Page, ""),
            sample_entry(
                "chap01.html#Debugging-1",
                "Debugging",
                Category::Section,
                "Programmers make mistakes. Programming errors are called bugs.",
            ),
            sample_entry(
                "chap01.html#Glossary-1",
                "Glossary",
                Category::Section,
                "bug: An error in a program.",
            ),
            sample_entry(
                "chap02.html#Values-1",
                "Values",
                Category::Section,
                "A value is one of the basic things a program works with.",
            ),
        ])
        .unwrap()
    }

    fn locations(matches: Matches<'_>) -> Vec<&str> {
        matches.map(|r| r.entry.location.as_str()).collect()
    }

    #[test]
    fn test_direct_search() {
        let store = sample_store();
        let found = locations(store.search("bug"));
        assert_eq!(found, vec!["chap01.html#Debugging-1", "chap01.html#Glossary-1"]);
    }

    #[test]
    fn test_case_insensitive() {
        let store = sample_store();
        assert_eq!(store.search("BUG").count(), 2);
        assert_eq!(store.search("dEbUgGiNg").count(), 1);
    }

    #[test]
    fn test_title_match_reported_before_text() {
        let store = sample_store();
        let results: Vec<_> = store.search("debug").collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].field, MatchField::Title);
        assert_eq!(results[0].position, 1);

        let results: Vec<_> = store.search("mistakes").collect();
        assert_eq!(results[0].field, MatchField::Text);
    }

    #[test]
    fn test_no_match() {
        let store = sample_store();
        assert_eq!(store.search("nonexistent-term-xyz").count(), 0);
    }

    #[test]
    fn test_empty_query_policies() {
        let store = sample_store();
        assert_eq!(store.search("").count(), 0);

        // Whitespace is an ordinary needle, not an empty query.
        let spaced = locations(store.search(" "));
        assert_eq!(spaced.len(), 4);
        assert_eq!(store.search("   ").count(), 0);

        let query = SearchQuery { empty_query: EmptyQuery::All, ..Default::default() };
        let all: Vec<_> = store.query(&query).collect();
        assert_eq!(all.len(), store.len());
        assert!(all.iter().all(|r| r.field == MatchField::Any));
    }

    #[test]
    fn test_padded_query_matches_verbatim() {
        let store = IndexStore::from_entries(vec![sample_entry(
            "a.html#1",
            "Debugging",
            Category::Section,
            "abug",
        )])
        .unwrap();
        assert_eq!(store.search(" bug").count(), 0);
        assert_eq!(store.search("bug ").count(), 0);
        assert_eq!(locations(store.search("bug")), vec!["a.html#1"]);

        let sample = sample_store();
        assert_eq!(locations(sample.search(" bugs")), vec!["chap01.html#Debugging-1"]);
        assert_eq!(locations(sample.search("bug:")), vec!["chap01.html#Glossary-1"]);
    }

    #[test]
    fn test_filters_and_limit() {
        let store = sample_store();

        let query = SearchQuery {
            category: Some(Category::Page),
            ..SearchQuery::new("program")
        };
        assert_eq!(locations(store.query(&query)), vec!["chap01.html#"]);

        let query = SearchQuery {
            location_prefix: Some("chap02.html".to_string()),
            ..SearchQuery::new("program")
        };
        assert_eq!(locations(store.query(&query)), vec!["chap02.html#Values-1"]);

        let query = SearchQuery { limit: Some(1), ..SearchQuery::new("program") };
        assert_eq!(locations(store.query(&query)), vec!["chap01.html#"]);

        let query = SearchQuery { limit: Some(0), ..SearchQuery::new("program") };
        assert_eq!(store.query(&query).count(), 0);
    }

    #[test]
    fn test_matches_are_restartable() {
        let store = sample_store();
        let matches = store.search("program");
        let first: Vec<_> = matches.clone().collect();
        let second: Vec<_> = matches.collect();
        assert_eq!(first, second);
        assert_eq!(first, store.search("program").collect::<Vec<_>>());
    }

    #[test]
    fn test_matches_are_lazy() {
        let store = sample_store();
        let mut matches = store.search("bug");
        let first = matches.next().unwrap();
        assert_eq!(first.position, 1);
        let second = matches.next().unwrap();
        assert_eq!(second.position, 2);
        assert!(matches.next().is_none());
    }
}

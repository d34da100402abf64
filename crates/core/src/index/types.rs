//! Search index record types.

use serde::{Deserialize, Serialize};

/// Whether an entry describes a whole page or one section of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Page-level entry; `title` may be empty.
    Page,
    /// Section within a page; `title` names the heading.
    Section,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable documentation location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Relative URL with anchor, e.g. `chap01.html#Debugging-1`.
    pub location: String,
    /// Human-readable page title.
    pub page: String,
    /// Section title.
    pub title: String,
    pub category: Category,
    /// Plain text extracted from the page or section.
    pub text: String,
}

impl IndexEntry {
    /// The document part of `location`, without the `#anchor`.
    pub fn document(&self) -> &str {
        self.location.split_once('#').map_or(self.location.as_str(), |(doc, _)| doc)
    }

    /// Check the record-level invariants.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("location is empty".to_string());
        }
        if self.category == Category::Section && self.title.trim().is_empty() {
            return Err(format!("section entry '{}' has an empty title", self.location));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(location: &str, title: &str, category: Category) -> IndexEntry {
        IndexEntry {
            location: location.to_string(),
            page: "The way of the program".to_string(),
            title: title.to_string(),
            category,
            text: String::new(),
        }
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Section).unwrap();
        assert_eq!(json, "\"section\"");
    }

    #[test]
    fn test_document() {
        let e = entry("chap01.html#Debugging-1", "Debugging", Category::Section);
        assert_eq!(e.document(), "chap01.html");

        let bare = entry("index.html", "", Category::Page);
        assert_eq!(bare.document(), "index.html");
    }

    #[test]
    fn test_validate() {
        assert!(entry("chap01.html#", "", Category::Page).validate().is_ok());
        assert!(entry("", "x", Category::Page).validate().is_err());
        assert!(entry("chap01.html#a", " ", Category::Section).validate().is_err());
    }
}

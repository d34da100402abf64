//! Reading and writing the persisted index.
//!
//! Documentation generators emit the index either as plain JSON or as a
//! script assigning `{"docs": [...]}` to a global, e.g.
//!
//! ```text
//! var documenterSearchIndex = {"docs": [
//! { "location": "chap01.html#", ... },
//! ]}
//! ```
//!
//! The script form is not strict JSON: it may end entries with a trailing
//! comma and escape apostrophes as `\'`. Both are normalized before parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::types::IndexEntry;

/// Global the script form assigns to.
pub const SCRIPT_VARIABLE: &str = "documenterSearchIndex";

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:var|let|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*")
        .expect("assignment pattern is valid")
});

/// Shape the index was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A bare JSON array of entries.
    Array,
    /// A JSON object with a `docs` array.
    Docs,
    /// A script assigning the `docs` object to a variable.
    Script,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Docs => "docs",
            Self::Script => "script",
        }
    }
}

/// Output shape for [`write_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// `var documenterSearchIndex = {"docs": [...]}`.
    Script,
}

#[derive(Deserialize)]
struct DocsWrapper {
    docs: Vec<IndexEntry>,
}

/// Result of preparing raw input for the JSON parser.
#[derive(Debug)]
pub(crate) struct Prepared {
    pub body: String,
    pub format: SourceFormat,
    /// Whether trailing commas or `\'` escapes had to be rewritten.
    pub normalized: bool,
}

/// Strip the script wrapper and rewrite non-JSON syntax.
pub(crate) fn prepare(input: &str) -> Prepared {
    let trimmed = input.trim_start_matches('\u{feff}').trim();

    let (body, is_script) = match ASSIGNMENT.find(trimmed) {
        Some(m) => (trimmed[m.end()..].trim(), true),
        None => (trimmed, false),
    };
    let body = body.strip_suffix(';').map_or(body, str::trim_end);

    let format = if is_script {
        SourceFormat::Script
    } else if body.starts_with('{') {
        SourceFormat::Docs
    } else {
        SourceFormat::Array
    };

    let (body, normalized) = normalize(body);
    Prepared { body, format, normalized }
}

/// Parse prepared JSON into entries according to its detected shape.
pub(crate) fn parse_entries(
    prepared: &Prepared,
) -> Result<Vec<IndexEntry>, serde_json::Error> {
    match prepared.format {
        SourceFormat::Array => serde_json::from_str(&prepared.body),
        SourceFormat::Docs | SourceFormat::Script => {
            if prepared.body.starts_with('[') {
                serde_json::from_str(&prepared.body)
            } else {
                let wrapper: DocsWrapper = serde_json::from_str(&prepared.body)?;
                Ok(wrapper.docs)
            }
        }
    }
}

/// Drop trailing commas outside strings and unescape `\'` inside them.
fn normalize(body: &str) -> (String, bool) {
    let mut out = String::with_capacity(body.len());
    let mut changed = false;
    let mut in_string = false;
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => match chars.next() {
                    Some('\'') => {
                        out.push('\'');
                        changed = true;
                    }
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                },
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                _ => out.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' if closes_after_whitespace(chars.clone()) => changed = true,
            _ => out.push(c),
        }
    }

    (out, changed)
}

fn closes_after_whitespace(rest: impl Iterator<Item = char>) -> bool {
    matches!(rest.skip_while(|c| c.is_whitespace()).next(), Some(']' | '}'))
}

/// Serialize entries in the requested shape.
pub fn write_entries(
    entries: &[IndexEntry],
    format: ExportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(entries),
        ExportFormat::Script => write_script(entries),
    }
}

fn write_script(entries: &[IndexEntry]) -> Result<String, serde_json::Error> {
    let mut out = format!("var {SCRIPT_VARIABLE} = {{\"docs\": [\n");
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push('\n');
        out.push_str(&to_string_indented(entry)?);
    }
    out.push_str("\n\n]}\n");
    Ok(out)
}

fn to_string_indented<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(
        &mut buf,
        PrettyFormatter::with_indent(b"    "),
    );
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_detects_array() {
        let p = prepare("  [ ]  ");
        assert_eq!(p.format, SourceFormat::Array);
        assert!(!p.normalized);
        assert_eq!(p.body, "[ ]");
    }

    #[test]
    fn test_prepare_detects_docs_object() {
        let p = prepare(r#"{"docs": []}"#);
        assert_eq!(p.format, SourceFormat::Docs);
    }

    #[test]
    fn test_prepare_strips_assignment_and_semicolon() {
        let p = prepare("var documenterSearchIndex = {\"docs\": []};\n");
        assert_eq!(p.format, SourceFormat::Script);
        assert_eq!(p.body, "{\"docs\": []}");
    }

    #[test]
    fn test_normalize_trailing_comma() {
        let (out, changed) = normalize("[{\"a\": 1},\n\n]");
        assert!(changed);
        assert_eq!(out, "[{\"a\": 1}\n\n]");
    }

    #[test]
    fn test_normalize_keeps_commas_in_strings() {
        let (out, changed) = normalize(r#"["a, ]", "b"]"#);
        assert!(!changed);
        assert_eq!(out, r#"["a, ]", "b"]"#);
    }

    #[test]
    fn test_normalize_apostrophe_escape() {
        let (out, changed) = normalize(r#"["That\'s \"it\"\n"]"#);
        assert!(changed);
        assert_eq!(out, r#"["That's \"it\"\n"]"#);
    }

    #[test]
    fn test_normalize_escaped_backslash_before_quote() {
        let (out, changed) = normalize(r#"["C:\\", "x",]"#);
        assert!(changed);
        assert_eq!(out, r#"["C:\\", "x"]"#);
    }

    #[test]
    fn test_write_script_is_loadable_json_inside() {
        let script = write_entries(&[], ExportFormat::Script).unwrap();
        let p = prepare(&script);
        assert_eq!(p.format, SourceFormat::Script);
        assert!(parse_entries(&p).unwrap().is_empty());
    }
}

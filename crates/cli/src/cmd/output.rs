//! Shared output formatting for query commands.

use docsearch_core::index::{IndexEntry, PageSummary};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::OutputFormat;

/// Formatted page for JSON and table output.
#[derive(Debug, Serialize, Tabled)]
pub struct PageOutput {
    #[tabled(rename = "PAGE")]
    pub page: String,
    #[tabled(rename = "LOCATION")]
    pub location: String,
    #[tabled(rename = "SECTIONS")]
    pub sections: usize,
}

impl From<&PageSummary> for PageOutput {
    fn from(page: &PageSummary) -> Self {
        Self {
            page: page.page.clone(),
            location: page.location.clone(),
            sections: page.sections,
        }
    }
}

/// Print pages as a table.
pub fn print_pages_table(pages: &[PageSummary]) {
    if pages.is_empty() {
        println!("(no pages found)");
        return;
    }
    let rows: Vec<PageOutput> = pages.iter().map(PageOutput::from).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

/// Print pages as JSON.
pub fn print_pages_json(pages: &[PageSummary]) {
    let output: Vec<PageOutput> = pages.iter().map(PageOutput::from).collect();
    print_json(&output);
}

/// Print page locations only.
pub fn print_pages_quiet(pages: &[PageSummary]) {
    for page in pages {
        println!("{}", page.location);
    }
}

/// Print one entry in full.
pub fn print_entry(entry: &IndexEntry) {
    println!("location: {}", entry.location);
    println!("page:     {}", entry.page);
    println!("title:    {}", entry.title);
    println!("category: {}", entry.category);
    if !entry.text.is_empty() {
        println!();
        println!("{}", entry.text);
    }
}

/// Print one entry as JSON, in the persisted record shape.
pub fn print_entry_json(entry: &IndexEntry) {
    print_json(entry);
}

/// Pretty-print `value` as JSON, exiting on failure.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match render_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error formatting JSON output: {}", e);
            std::process::exit(1);
        }
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Shorten to `max_len` characters, marking the cut with `...`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Resolve the output format from flags.
pub fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}

//! Search command implementation.

use docsearch_core::index::{EmptyQuery, SearchQuery, SearchResult, excerpt};
use serde::Serialize;
use tracing::debug;

use super::output::{print_json, resolve_format, truncate};
use super::{Context, load_config, open_store};
use crate::{OutputFormat, SearchArgs};

/// Search result for JSON output.
#[derive(Debug, Serialize)]
struct SearchResultOutput {
    location: String,
    page: String,
    title: String,
    category: String,
    matched: String,
    excerpt: String,
}

impl SearchResultOutput {
    fn new(result: &SearchResult<'_>, query: &str, width: usize) -> Self {
        Self {
            location: result.entry.location.clone(),
            page: result.entry.page.clone(),
            title: result.entry.title.clone(),
            category: result.entry.category.as_str().to_string(),
            matched: result.field.as_str().to_string(),
            excerpt: excerpt(&result.entry.text, query, width),
        }
    }
}

pub fn run(ctx: &Context, args: SearchArgs) {
    let rc = load_config(ctx);
    let store = open_store(&rc);

    let empty_query =
        if args.all_on_empty { EmptyQuery::All } else { rc.search.empty_query };

    let query = SearchQuery {
        text: args.query.clone(),
        category: args.category.map(Into::into),
        location_prefix: args.page,
        limit: args.limit.or(rc.search.limit),
        empty_query,
    };
    debug!(?query, "running search");

    let results: Vec<SearchResult<'_>> = store.query(&query).collect();
    let width = rc.search.excerpt_width;

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_results_table(&results, &args.query, width),
        OutputFormat::Json => print_results_json(&results, &args.query, width),
        OutputFormat::Quiet => print_results_quiet(&results),
    }
}

/// Print search results as a table with an excerpt under each row.
fn print_results_table(results: &[SearchResult<'_>], query: &str, width: usize) {
    if results.is_empty() {
        println!("(no results found)");
        return;
    }

    let location_width = results
        .iter()
        .map(|r| r.entry.location.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 50);
    let title_width = results
        .iter()
        .map(|r| r.entry.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);

    println!(
        "{:<location_width$}  {:<title_width$}  {:<7}  MATCH",
        "LOCATION",
        "TITLE",
        "KIND",
        location_width = location_width,
        title_width = title_width,
    );
    println!(
        "{:-<location_width$}  {:-<title_width$}  {:-<7}  {:-<5}",
        "",
        "",
        "",
        "",
        location_width = location_width,
        title_width = title_width,
    );

    for result in results {
        let location = truncate(&result.entry.location, location_width);
        let title = truncate(&result.entry.title, title_width);
        println!(
            "{:<location_width$}  {:<title_width$}  {:<7}  {}",
            location,
            title,
            result.entry.category.as_str(),
            result.field.as_str(),
            location_width = location_width,
            title_width = title_width,
        );
        let snippet = excerpt(&result.entry.text, query, width);
        if !snippet.is_empty() {
            println!("    {}", snippet);
        }
    }

    println!();
    println!("-- {} results --", results.len());
}

/// Print search results as JSON.
fn print_results_json(results: &[SearchResult<'_>], query: &str, width: usize) {
    let output: Vec<SearchResultOutput> =
        results.iter().map(|r| SearchResultOutput::new(r, query, width)).collect();
    print_json(&output);
}

/// Print search results as locations only.
fn print_results_quiet(results: &[SearchResult<'_>]) {
    for result in results {
        println!("{}", result.entry.location);
    }
}

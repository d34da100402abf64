//! Pages command implementation.

use super::output::{print_pages_json, print_pages_quiet, print_pages_table, resolve_format};
use super::{Context, load_config, open_store};
use crate::{OutputFormat, PagesArgs};

pub fn run(ctx: &Context, args: PagesArgs) {
    let rc = load_config(ctx);
    let store = open_store(&rc);
    let pages = store.pages();

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_pages_table(&pages),
        OutputFormat::Json => print_pages_json(&pages),
        OutputFormat::Quiet => print_pages_quiet(&pages),
    }
}

//! Export command implementation.

use std::io::Write;

use docsearch_core::index::ExportFormat;
use tracing::info;

use super::{Context, load_config, open_store};
use crate::ExportArgs;

pub fn run(ctx: &Context, args: ExportArgs) {
    let rc = load_config(ctx);
    let store = open_store(&rc);
    let format: ExportFormat = args.format.into();

    match args.output {
        Some(path) => {
            if let Err(e) = store.write(&path, format) {
                eprintln!("Error exporting index: {}", e);
                std::process::exit(1);
            }
            info!(entries = store.len(), path = %path.display(), "exported search index");
        }
        None => {
            let out = match store.to_string_as(format) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("Error exporting index: {}", e);
                    std::process::exit(1);
                }
            };
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()) {
                eprintln!("Error writing to stdout: {}", e);
                std::process::exit(1);
            }
        }
    }
}

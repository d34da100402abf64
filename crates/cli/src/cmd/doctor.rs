use docsearch_core::config::loader::default_config_path;
use docsearch_core::index::{Category, IndexStore};

use super::Context;
use crate::logging;

pub fn run(ctx: &Context) {
    let rc = match ctx.resolve() {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL docsearch doctor");
            println!("{e}");
            if ctx.config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    let store = match IndexStore::load(&rc.index_path) {
        Ok(store) => store,
        Err(e) => {
            println!("FAIL docsearch doctor");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let pages = store.iter().filter(|e| e.category == Category::Page).count();

    println!("OK   docsearch doctor");
    let cfg_path = match (&ctx.config, &ctx.index) {
        (Some(p), _) => p.display().to_string(),
        (None, Some(_)) => "(none)".to_string(),
        (None, None) => default_config_path().display().to_string(),
    };
    println!("path: {}", cfg_path);
    println!("profile: {}", rc.active_profile);
    println!("site_root: {}", rc.site_root.display());
    println!("index_path: {}", rc.index_path.display());
    println!("index.format: {}", store.source_format().as_str());
    println!("index.entries: {}", store.len());
    println!("index.pages: {}", pages);
    println!("index.sections: {}", store.len() - pages);
    println!("search.empty_query: {}", rc.search.empty_query.as_str());
    println!(
        "search.limit: {}",
        rc.search.limit.map_or_else(|| "none".to_string(), |l| l.to_string())
    );
    println!("logging.level: {}", rc.logging.level);
}

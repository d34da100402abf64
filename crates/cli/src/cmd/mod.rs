pub mod doctor;
pub mod export;
pub mod output;
pub mod pages;
pub mod search;
pub mod show;

use std::path::PathBuf;

use docsearch_core::config::loader::{ConfigError, ConfigLoader};
use docsearch_core::config::types::ResolvedConfig;
use docsearch_core::index::IndexStore;
use tracing::debug;

use crate::logging;

/// Global options shared by every command.
#[derive(Debug)]
pub struct Context {
    pub config: Option<PathBuf>,
    pub profile: Option<String>,
    pub index: Option<PathBuf>,
}

impl Context {
    /// Resolve configuration. `--index` alone bypasses the config file; with
    /// an explicit `--config` it only overrides the profile's index path.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if let Some(path) = &self.index
            && self.config.is_none()
        {
            return Ok(ResolvedConfig::for_index(path.clone()));
        }
        let mut rc = ConfigLoader::load(self.config.as_deref(), self.profile.as_deref())?;
        if let Some(path) = &self.index {
            rc.index_path = path.clone();
        }
        Ok(rc)
    }
}

/// Load configuration and install logging, exiting on failure.
pub fn load_config(ctx: &Context) -> ResolvedConfig {
    let rc = match ctx.resolve() {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            if ctx.config.is_none() {
                eprintln!("Hint: pass --index <file> to search an index directly.");
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc);
    debug!(profile = %rc.active_profile, index = %rc.index_path.display(), "resolved config");
    rc
}

/// Load the index named by the configuration, exiting on failure.
pub fn open_store(rc: &ResolvedConfig) -> IndexStore {
    match IndexStore::load(&rc.index_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading index: {}", e);
            if e.is_malformed() {
                eprintln!("Hint: expected a JSON array of entries or a documenterSearchIndex script.");
            }
            std::process::exit(1);
        }
    }
}

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::index::EmptyQuery;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root of the built documentation site.
    pub site_root: String,
    /// Index file; may reference `{{site_root}}`.
    #[serde(default = "default_index_path")]
    pub index_path: String,
}

fn default_index_path() -> String {
    "{{site_root}}/search_index.js".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// What an empty query returns: `"none"` or `"all"`.
    #[serde(default)]
    pub empty_query: EmptyQuery,
    /// Default result limit when the command line gives none.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Characters of text shown around a match.
    #[serde(default = "default_excerpt_width")]
    pub excerpt_width: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query: EmptyQuery::default(),
            limit: None,
            excerpt_width: default_excerpt_width(),
        }
    }
}

fn default_excerpt_width() -> usize {
    80
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub site_root: PathBuf,
    pub index_path: PathBuf,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Configuration for running against an explicit index file, with no
    /// config file involved.
    pub fn for_index(index_path: PathBuf) -> Self {
        let site_root = index_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            active_profile: "<none>".to_string(),
            site_root,
            index_path,
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

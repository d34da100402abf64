//! Profile-based TOML configuration.

pub mod loader;
pub mod types;

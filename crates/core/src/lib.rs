//! Core library for docsearch: loading and querying static documentation
//! search indexes.

pub mod config;
pub mod index;

//! Portfolio content administration
//!
//! File-backed counterpart of the site's admin panel: the same project
//! model, gate and backup format, driven from the terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod store;

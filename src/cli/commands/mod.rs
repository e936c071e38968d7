//! CLI command implementations.

pub mod config;
pub mod identify;
pub mod search;
pub mod update;

//! ADE Metadata Agent Library
//!
//! Matches loosely identified media titles against the Adult DVD Empire catalog
//! and scrapes structured movie metadata from the matched detail page.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use crate::core::agent::Agent;
pub use error::{Error, Result};

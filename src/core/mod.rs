//! Core business logic modules.

pub mod agent;
pub mod dates;
pub mod detail_page;
pub mod matcher;
pub mod parser;
pub mod scanner;
pub mod search_page;

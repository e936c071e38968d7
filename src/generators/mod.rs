//! Output file generators.

pub mod nfo;

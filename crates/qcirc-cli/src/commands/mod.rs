//! CLI command implementations.

pub mod common;
pub mod run;
pub mod strategies;
pub mod version;

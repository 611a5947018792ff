//! CLI command implementations.

pub mod write;

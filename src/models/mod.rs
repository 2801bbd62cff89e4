//! Data structures shared by the CLI and core modules.

pub mod config;
pub mod report;

//! Core logic for finding and deleting credentials.

pub mod filter;
pub mod pruner;
pub mod settings;
pub mod store;

//! Utility modules for external tools and logging.

pub mod cmdkey;
pub mod git;
pub mod logging;

//! Prune cached git credentials from the Windows credential manager.
//!
//! Wraps `cmdkey /list` and `cmdkey /delete:` to remove every stored
//! credential whose target matches a pattern (`git` by default).
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Target filter, prune loop, store seam, config loading
//! - `models` — Config and report types
//! - `util` — External tools (cmdkey, git) and logging

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;

//! # coe-cli — Command Center CLI
//!
//! Text frontend over the console state machine. Subcommand handlers
//! live in [`console`] (seeded demo views) and [`remote`] (live backend
//! fetch and submit); `main.rs` only parses arguments, initializes
//! tracing, and dispatches.

pub mod console;
pub mod remote;

//! Per-subcommand handlers
//!
//! Each handler takes its parsed args plus the loaded project and returns
//! the formatted output string; main owns printing and exit codes.

pub mod classify;
pub mod search;
pub mod url;

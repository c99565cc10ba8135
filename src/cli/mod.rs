//! Command-line interface for tiny-pkg-config.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`query`] - Resolve, parse and print the selected field

pub mod args;
pub mod query;

pub use args::{Cli, Selector};
pub use query::QueryCommand;

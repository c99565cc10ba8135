//! Descriptor lookup.
//!
//! A package name is turned into a `.pc` path by probing an ordered list of
//! directories: those from `PKG_CONFIG_PATH` first, then a fixed fallback
//! list of system directories.
//!
//! # Architecture
//!
//! - [`paths`] - Search path configuration
//! - [`resolver`] - First-match lookup over a [`SearchPath`]

pub mod paths;
pub mod resolver;

pub use paths::{SearchPath, DEFAULT_SEARCH_DIRS, SEARCH_PATH_ENV};
pub use resolver::{descriptor_file_name, resolve, DESCRIPTOR_EXTENSION};

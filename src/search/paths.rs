//! Search path configuration.
//!
//! The directories consulted when locating a descriptor, in priority order:
//! 1. Entries of `PKG_CONFIG_PATH`, in the order listed
//! 2. [`DEFAULT_SEARCH_DIRS`], in the order listed

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable holding extra search directories.
pub const SEARCH_PATH_ENV: &str = "PKG_CONFIG_PATH";

/// System directories searched after the environment-supplied ones.
pub const DEFAULT_SEARCH_DIRS: &[&str] = &[
    "/usr/lib/pkgconfig",
    "/usr/share/pkgconfig",
    "/usr/local/lib/pkgconfig",
];

/// Ordered list of directories to probe for descriptors.
///
/// # Example
///
/// ```
/// use tiny_pkg_config::search::SearchPath;
/// use std::path::PathBuf;
///
/// let search = SearchPath::new(vec![PathBuf::from("/opt/foo/pc")], vec![PathBuf::from("/usr/lib/pkgconfig")]);
/// let dirs: Vec<_> = search.dirs().collect();
/// assert_eq!(dirs[0], PathBuf::from("/opt/foo/pc"));
/// assert_eq!(dirs[1], PathBuf::from("/usr/lib/pkgconfig"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    /// Directories from the environment, searched first.
    pub extra: Vec<PathBuf>,

    /// Fallback directories, searched last.
    pub fallback: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from explicit directory lists.
    pub fn new(extra: Vec<PathBuf>, fallback: Vec<PathBuf>) -> Self {
        Self { extra, fallback }
    }

    /// Build the search path from `PKG_CONFIG_PATH` and the default fallback.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(SEARCH_PATH_ENV))
    }

    /// Build the search path from a raw `PKG_CONFIG_PATH` value.
    ///
    /// The value is split with the platform path-list separator. Empty
    /// entries are dropped.
    pub fn from_env_value(value: Option<OsString>) -> Self {
        let extra = value
            .map(|v| {
                std::env::split_paths(&v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self::new(extra, Self::default_fallback())
    }

    /// The fallback list as owned paths.
    pub fn default_fallback() -> Vec<PathBuf> {
        DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect()
    }

    /// All directories in search order.
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.extra
            .iter()
            .chain(self.fallback.iter())
            .map(PathBuf::as_path)
    }
}

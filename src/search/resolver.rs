//! Package name to descriptor path resolution.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{PkgConfigError, Result};
use crate::search::paths::SearchPath;

/// File extension of descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "pc";

/// File name of the descriptor for `package`, e.g. `zlib.pc`.
pub fn descriptor_file_name(package: &str) -> String {
    format!("{}.{}", package, DESCRIPTOR_EXTENSION)
}

/// Find the descriptor for `package`.
///
/// Each directory of `search` is probed in order for `<dir>/<package>.pc`;
/// the first regular file wins. Contents are not inspected.
///
/// # Errors
///
/// Returns `PackageNotFound` if no directory holds the descriptor.
pub fn resolve(package: &str, search: &SearchPath) -> Result<PathBuf> {
    let file_name = descriptor_file_name(package);

    for dir in search.dirs() {
        let candidate = dir.join(&file_name);
        debug!("Checking {}", candidate.display());
        if candidate.is_file() {
            debug!("Found {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(PkgConfigError::PackageNotFound {
        name: package.to_string(),
    })
}

//! tiny-pkg-config - Query compiler and linker flags from `.pc` files.
//!
//! A minimal pkg-config for build scripts: find a package's descriptor on
//! the search path, parse it with variable substitution, and print one field.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the query command
//! - [`descriptor`] - `.pc` parsing and `${name}` expansion
//! - [`error`] - Error types and result aliases
//! - [`search`] - Search path configuration and descriptor lookup
//!
//! # Example
//!
//! ```
//! use tiny_pkg_config::descriptor::parse;
//! use std::path::Path;
//!
//! let content = "Libs: -L${libdir} -lz\nlibdir=/usr/lib\n";
//! let pkg = parse(Path::new("/usr/lib/pkgconfig/zlib.pc"), content.as_bytes()).unwrap();
//! assert_eq!(pkg.libs, "-L/usr/lib -lz");
//! ```

pub mod cli;
pub mod descriptor;
pub mod error;
pub mod search;

pub use error::{PkgConfigError, Result};

//! `.pc` descriptor parsing.
//!
//! A descriptor is a line-oriented file of `Key: value` fields and
//! `key=value` variables, with `${name}` references between them.
//!
//! # Example
//!
//! ```
//! use tiny_pkg_config::descriptor::parse;
//! use std::path::Path;
//!
//! let content = "\
//! prefix=/opt/foo
//! libdir=${prefix}/lib
//! Name: Foo
//! Libs: -L${libdir} -lfoo
//! ";
//!
//! let pkg = parse(Path::new("/opt/foo/foo.pc"), content.as_bytes()).unwrap();
//! assert_eq!(pkg.name, "Foo");
//! assert_eq!(pkg.libs, "-L/opt/foo/lib -lfoo");
//! ```

pub mod interpolation;
pub mod parser;
pub mod record;

pub use interpolation::expand;
pub use parser::{parse, parse_file, PCFILEDIR};
pub use record::{Descriptor, Field};

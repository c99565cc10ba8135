//! Line-oriented descriptor parser.
//!
//! # Line format
//!
//! - Blank lines and lines starting with `#` are skipped
//! - `Key: value` sets a field, when the colon comes before any `=`
//! - `key=value` defines a variable
//! - Anything else is ignored
//!
//! Values are expanded against the variables defined so far. Once every
//! line is consumed, `Libs` and `Cflags` get one more expansion with the
//! final variable set, so they may refer to variables defined below them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::descriptor::interpolation::expand;
use crate::descriptor::record::{Descriptor, Field};
use crate::error::{PkgConfigError, Result};

/// Built-in variable holding the descriptor's directory.
pub const PCFILEDIR: &str = "pcfiledir";

/// A classified descriptor line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Field { key: &'a str, value: &'a str },
    Variable { name: &'a str, value: &'a str },
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Option<Self> {
        let colon = line.find(':');
        let equals = line.find('=');

        match (colon, equals) {
            (Some(c), Some(e)) if c < e => Some(Self::field(line, c)),
            (Some(c), None) => Some(Self::field(line, c)),
            (_, Some(e)) => Some(Self::Variable {
                name: line[..e].trim(),
                value: line[e + 1..].trim(),
            }),
            (None, None) => None,
        }
    }

    fn field(line: &'a str, colon: usize) -> Self {
        Self::Field {
            key: line[..colon].trim(),
            value: line[colon + 1..].trim(),
        }
    }
}

/// Directory of `path` with `/` separators, `.` when there is none.
fn descriptor_dir(path: &Path) -> String {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_string_lossy().into_owned(),
        Some(_) => ".".to_string(),
        None => path.to_string_lossy().into_owned(),
    };

    if cfg!(windows) {
        dir.replace('\\', "/")
    } else {
        dir
    }
}

/// Parse descriptor content read from `reader`.
///
/// `source_path` seeds the `pcfiledir` variable and is reported in errors.
///
/// # Errors
///
/// Returns `ParseFailure` if reading fails, including on invalid UTF-8.
pub fn parse<R: BufRead>(source_path: &Path, reader: R) -> Result<Descriptor> {
    let mut pkg = Descriptor::default();
    pkg.variables
        .insert(PCFILEDIR.to_string(), descriptor_dir(source_path));

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PkgConfigError::ParseFailure {
            path: source_path.to_path_buf(),
            source,
        })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Line::classify(line) {
            Some(Line::Field { key, value }) => match Field::from_key(key) {
                Some(field) => {
                    let value = expand(value, &pkg.variables);
                    trace!("line {}: {} = {}", index + 1, field, value);
                    pkg.set(field, value);
                }
                None => trace!("line {}: ignoring field '{}'", index + 1, key),
            },
            Some(Line::Variable { name, value }) => {
                let value = expand(value, &pkg.variables);
                pkg.variables.insert(name.to_string(), value);
            }
            None => trace!("line {}: not a field or variable", index + 1),
        }
    }

    pkg.libs = expand(&pkg.libs, &pkg.variables);
    pkg.cflags = expand(&pkg.cflags, &pkg.variables);

    debug!(
        "Parsed {} ({} variables)",
        source_path.display(),
        pkg.variables.len()
    );

    Ok(pkg)
}

/// Open and parse the descriptor at `path`.
///
/// # Errors
///
/// Returns `ParseFailure` if the file cannot be opened or read.
pub fn parse_file(path: &Path) -> Result<Descriptor> {
    let file = File::open(path).map_err(|source| PkgConfigError::ParseFailure {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, BufReader::new(file))
}

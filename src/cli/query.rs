//! Query command implementation.
//!
//! Resolves the package's descriptor, parses it and writes the selected
//! field to the output stream, newline-terminated.

use std::io::Write;

use tracing::debug;

use crate::cli::args::{Cli, Selector};
use crate::descriptor::{parse_file, Descriptor, Field};
use crate::error::Result;
use crate::search::{resolve, SearchPath};

/// A single package query.
#[derive(Debug)]
pub struct QueryCommand {
    package: String,
    selector: Option<Selector>,
    exists_only: bool,
    search: SearchPath,
}

impl QueryCommand {
    /// Create a query for `package`.
    pub fn new(package: impl Into<String>, selector: Option<Selector>, search: SearchPath) -> Self {
        Self {
            package: package.into(),
            selector,
            exists_only: false,
            search,
        }
    }

    /// Create a query from parsed CLI arguments.
    ///
    /// Returns `None` when no package name was given.
    pub fn from_cli(cli: &Cli, search: SearchPath) -> Option<Self> {
        let package = cli.package.as_ref()?;
        Some(Self::new(package.clone(), cli.selector(), search).exists_only(cli.exists))
    }

    /// Stop after resolving the descriptor.
    pub fn exists_only(mut self, exists_only: bool) -> Self {
        self.exists_only = exists_only;
        self
    }

    /// Get the package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Run the query, writing output to `out`.
    ///
    /// # Errors
    ///
    /// Returns `PackageNotFound` or `ParseFailure` from the resolver and
    /// parser, or `Io` if writing fails.
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let path = resolve(&self.package, &self.search)?;

        if self.exists_only {
            return Ok(());
        }

        let pkg = parse_file(&path)?;
        debug!("Loaded '{}' version '{}'", pkg.name, pkg.version);

        if let Some(selector) = &self.selector {
            write_selection(&pkg, selector, out)?;
        }
        out.flush()?;

        Ok(())
    }
}

fn write_selection(pkg: &Descriptor, selector: &Selector, out: &mut dyn Write) -> Result<()> {
    match selector {
        Selector::Libs => writeln!(out, "{}", pkg.field(Field::Libs))?,
        Selector::Cflags => writeln!(out, "{}", pkg.field(Field::Cflags))?,
        Selector::ModVersion => writeln!(out, "{}", pkg.field(Field::Version))?,
        Selector::Variable(name) => {
            let value = pkg.variable(name).unwrap_or_else(|| {
                debug!("Variable '{}' is not defined in '{}'", name, pkg.name);
                ""
            });
            writeln!(out, "{}", value)?;
        }
        Selector::PrintRequires => {
            for req in &pkg.requires {
                writeln!(out, "{}", req)?;
            }
        }
        Selector::PrintVariables => {
            for name in pkg.variables.keys() {
                writeln!(out, "{}", name)?;
            }
        }
        Selector::Json => {
            serde_json::to_writer_pretty(&mut *out, pkg).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

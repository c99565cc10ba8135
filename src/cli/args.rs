//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Output flags are collapsed
//! into a single [`Selector`] by [`Cli::selector`].

use clap::Parser;

/// tiny-pkg-config - Query compiler and linker flags from `.pc` files.
#[derive(Debug, Default, Parser)]
#[command(name = "tiny-pkg-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package to query
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Ignored extra arguments
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Output linker flags
    #[arg(long)]
    pub libs: bool,

    /// Output compiler flags
    #[arg(long)]
    pub cflags: bool,

    /// Output the package version
    #[arg(long)]
    pub modversion: bool,

    /// Output the value of a variable
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// Output required packages, one per line
    #[arg(long)]
    pub print_requires: bool,

    /// Output defined variable names, one per line
    #[arg(long)]
    pub print_variables: bool,

    /// Output the whole descriptor as JSON
    #[arg(long)]
    pub json: bool,

    /// Only check that the package can be found
    #[arg(long)]
    pub exists: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What a query prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Libs,
    Cflags,
    ModVersion,
    Variable(String),
    PrintRequires,
    PrintVariables,
    Json,
}

impl Cli {
    /// The output selector to honor, if any.
    ///
    /// When several flags are given, the first in this order wins:
    /// `--libs`, `--cflags`, `--modversion`, `--variable`,
    /// `--print-requires`, `--print-variables`, `--json`.
    pub fn selector(&self) -> Option<Selector> {
        if self.libs {
            Some(Selector::Libs)
        } else if self.cflags {
            Some(Selector::Cflags)
        } else if self.modversion {
            Some(Selector::ModVersion)
        } else if let Some(name) = &self.variable {
            Some(Selector::Variable(name.clone()))
        } else if self.print_requires {
            Some(Selector::PrintRequires)
        } else if self.print_variables {
            Some(Selector::PrintVariables)
        } else if self.json {
            Some(Selector::Json)
        } else {
            None
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text renderers for solve results.

use std::io::{self, Write};

use strum_macros::{Display, EnumString};
use tracing::warn;

use crate::sink::Solutions;

/// Writes a set of solutions to an output stream.
pub trait SolutionPrinter {
    fn print(&self, solutions: &Solutions, out: &mut dyn Write) -> io::Result<()>;
}

/// One line per solution, vertex ids joined by `" - "`.
///
/// ```
/// use stroke_search::render::{CleanPrinter, SolutionPrinter};
/// use stroke_search::sink::Solutions;
///
/// let solutions = Solutions::from(vec![vec![1, 2, 3, 1]]);
/// let mut out = Vec::new();
/// CleanPrinter.print(&solutions, &mut out).unwrap();
/// assert_eq!(out, b"1 - 2 - 3 - 1\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanPrinter;

impl SolutionPrinter for CleanPrinter {
    fn print(&self, solutions: &Solutions, out: &mut dyn Write) -> io::Result<()> {
        for solution in solutions {
            let mut vertices = solution.iter();
            if let Some(first) = vertices.next() {
                write!(out, "{first}")?;
            }
            for vertex in vertices {
                write!(out, " - {vertex}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// The whole result as one compact JSON array of arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPrinter;

impl SolutionPrinter for JsonPrinter {
    fn print(&self, solutions: &Solutions, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *out, solutions)?;
        writeln!(out)
    }
}

/// Output formats selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Clean,
    Json,
}

impl OutputFormat {
    /// Look up a format by name, falling back to `Clean` for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(name, "Unknown output format, using clean");
            OutputFormat::Clean
        })
    }

    pub fn printer(self) -> &'static dyn SolutionPrinter {
        match self {
            OutputFormat::Clean => &CleanPrinter,
            OutputFormat::Json => &JsonPrinter,
        }
    }
}

/// Write a solution count on its own line.
pub fn print_count(count: u64, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{count}")
}

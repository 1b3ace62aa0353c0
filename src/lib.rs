//! # tablefmt
//!
//! A formatter that turns loosely structured tabular text into aligned
//! markdown tables that respect a maximum output width.
//!
//! tablefmt accepts several input shapes and normalizes them all into the
//! same rendered form:
//!
//! - Comma-separated values (with a minimal quote-stripping pass)
//! - Tab-separated values
//! - Markdown tables (re-aligned, separator rows regenerated)
//! - ASCII-art tables as printed by SQL clients (`+---+` borders)
//!
//! Input format is detected from line shapes; callers never have to say what
//! they are pasting. Tables that would render wider than the width budget
//! are either proportionally squeezed (truncating cell content) or split
//! into several side-by-side tables, with a unique first column repeated in
//! every split table so rows stay identifiable.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `tfmt` CLI tool for formatting tables from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install tablefmt
//!
//! # Format CSV from stdin
//! printf 'Name,Age\nJohn Smith,32\n' | tfmt
//!
//! # Format a file within 60 columns
//! tfmt data.csv -w 60
//!
//! # Inspect what was parsed instead of rendering
//! tfmt data.csv --json
//! ```
//!
//! Run `tfmt --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablefmt::Formatter;
//!
//! let input = "Name,Age\nJohn Smith,32\nJane Doe,28";
//!
//! let formatter = Formatter::new();
//! let output = formatter.reformat(input).unwrap();
//!
//! println!("{}", output);
//! ```
//!
//! ## Lower-Level API
//!
//! Parsing and rendering are independent steps with no shared state. Both
//! are infallible: a failed parse is an empty grid, and formatting an empty
//! grid (or one whose columns are all blank) yields an empty string.
//!
//! ```rust
//! use tablefmt::{detect, parse, Formatter, TableFormat};
//!
//! let input = "a\tb\n1\t2\n3\t4";
//! assert_eq!(detect(input), TableFormat::Tsv);
//!
//! let grid = parse(input);
//! let output = Formatter::new().format_grid(&grid);
//! assert!(output.starts_with("| a | b |"));
//! ```
//!
//! ## Configuration
//!
//! Rendering behavior is controlled through [`TableOptions`]:
//!
//! ```rust
//! use tablefmt::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.options.max_table_width = 60;
//!
//! let output = formatter.reformat("a,b\n1,2").unwrap();
//! assert_eq!(output.lines().count(), 3);
//! ```
//!
//! ## Example Output
//!
//! ```text
//! | Name       | Age |
//! |------------|-----|
//! | John Smith | 32  |
//! | Jane Doe   | 28  |
//! ```
//!
//! Output is plain ASCII markdown: pipes, hyphens, and spaces, with no
//! alignment colons.

mod error;
mod formatter;
mod layout;
mod model;
mod options;
mod parser;

pub use crate::error::TableFmtError;
pub use crate::formatter::Formatter;
pub use crate::model::{Grid, TableFormat};
pub use crate::options::TableOptions;
pub use crate::parser::{detect, parse, parse_as};

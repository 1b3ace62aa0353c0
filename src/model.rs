use serde::Serialize;

/// A parsed table: an ordered list of rows, each an ordered list of cell
/// strings.
///
/// Row 0 is treated as the header when rendering. Rows are not required to
/// have equal lengths; the formatter pads short rows with empty cells before
/// doing any width computation.
pub type Grid = Vec<Vec<String>>;

/// The input format assigned to a piece of text by [`detect`](crate::detect).
///
/// This is a pure classification of the input's line shapes. `Unknown` is
/// only produced for blank input; [`parse`](crate::parse) deliberately treats
/// it the same as [`TableFormat::Csv`], so callers that dispatch on the tag
/// themselves should do the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Pipe-delimited markdown table rows (`| a | b |`).
    Markdown,
    /// ASCII-art table as printed by SQL clients (`+---+` borders).
    Sql,
    /// Tab-separated values.
    Tsv,
    /// Comma-separated values. Also the fallback for anything unclassified.
    Csv,
    /// Nothing to classify (blank input).
    Unknown,
}

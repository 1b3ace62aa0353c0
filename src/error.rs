use thiserror::Error;

/// Errors surfaced at the adapter boundary.
///
/// The core parse and format operations never fail; they signal "nothing
/// there" with an empty grid or an empty string.
/// [`Formatter::reformat`](crate::Formatter::reformat) classifies those empty
/// results into this error type so that callers such as the CLI can report
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableFmtError {
    /// The input text was empty or contained only whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// No line of the input matched the detected format's shape.
    #[error("no tabular data recognized in input")]
    NoTabularData,
}

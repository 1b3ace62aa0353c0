/// Configuration options for table rendering.
///
/// This struct contains all settings that control how a parsed grid is laid
/// out. Use [`Default::default()`] or [`TableOptions::recommended()`] to get
/// sensible defaults, then modify individual fields as needed.
///
/// # Example
///
/// ```rust
/// use tablefmt::TableOptions;
///
/// let mut options = TableOptions::default();
/// options.max_table_width = 60;
/// ```
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Maximum character width of a rendered table line. Tables wider than
    /// this are squeezed into the budget or split into several tables.
    /// Default: 100.
    pub max_table_width: usize,

    /// Lower bound on a column's width when cell content is squeezed.
    /// Columns are never truncated below this many characters.
    /// Default: 3.
    pub min_column_width: usize,

    /// Tables with more columns than this are always split into several
    /// tables rather than squeezed, regardless of width.
    /// Default: 10.
    pub max_columns_before_split: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_table_width: 100,
            min_column_width: 3,
            max_columns_before_split: 10,
        }
    }
}

impl TableOptions {
    /// Creates a new `TableOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}

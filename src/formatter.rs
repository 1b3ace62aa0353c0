use crate::error::TableFmtError;
use crate::layout;
use crate::model::Grid;
use crate::options::TableOptions;
use crate::parser;

/// Renders parsed grids as aligned markdown tables within a width budget.
///
/// A too-wide table is handled with a two-phase strategy: first a
/// proportional squeeze that truncates cell content, and when squeezing is
/// unsuitable (too many columns, already-narrow columns, or no room left
/// after per-column overhead) a split into several side-by-side tables. When
/// the first column holds only distinct values it is treated as a key column
/// and repeated in every split table.
///
/// # Example
///
/// ```rust
/// use tablefmt::Formatter;
///
/// let formatter = Formatter::new();
/// let output = formatter.reformat("Name,Age\nJohn Smith,32\nJane Doe,28").unwrap();
/// assert!(output.starts_with("| Name       | Age |"));
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    pub options: TableOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            options: TableOptions::default(),
        }
    }

    pub fn with_options(options: TableOptions) -> Self {
        Self { options }
    }

    /// Parse and format in one step.
    ///
    /// This is the adapter-facing entry point: it turns the core's empty
    /// results into [`TableFmtError`] values so callers can report them.
    pub fn reformat(&self, input: &str) -> Result<String, TableFmtError> {
        if input.trim().is_empty() {
            return Err(TableFmtError::EmptyInput);
        }
        let grid = parser::parse(input);
        if grid.is_empty() {
            return Err(TableFmtError::NoTabularData);
        }
        Ok(self.format_grid(&grid))
    }

    /// Render a grid as one or more markdown tables.
    ///
    /// Row 0 is the header. Short rows are padded, columns whose cells are
    /// all empty or whitespace are dropped, and the result fits within
    /// `options.max_table_width` characters per line wherever the column
    /// floor (`min_column_width`) allows. An empty grid, or a grid whose
    /// every column is vacuous, renders as the empty string.
    pub fn format_grid(&self, grid: &[Vec<String>]) -> String {
        if grid.is_empty() {
            return String::new();
        }

        let normalized = layout::normalize_rows(grid);
        let keep = layout::non_empty_columns(&normalized);
        if keep.is_empty() {
            return String::new();
        }
        let table = layout::project_columns(&normalized, &keep);
        let widths = layout::column_widths(&table);
        let max_width = self.options.max_table_width;

        if layout::rendered_width(&widths) <= max_width {
            return render_table(&table, &widths);
        }

        let repeat_key = layout::is_key_column(&table);
        let num_cols = widths.len();
        let total_content: usize = widths.iter().sum();
        let avg_col_width = total_content / num_cols;
        let force_split = num_cols > self.options.max_columns_before_split
            || avg_col_width < 2 * self.options.min_column_width;

        if !force_split {
            let overhead = 3 * num_cols + 1;
            let available = max_width.saturating_sub(overhead);
            if available > num_cols * self.options.min_column_width {
                let adjusted =
                    layout::squeeze_widths(&widths, available, self.options.min_column_width);
                let truncated: Grid = table
                    .iter()
                    .map(|row| {
                        row.iter()
                            .zip(&adjusted)
                            .map(|(cell, &width)| layout::truncate_cell(cell, width))
                            .collect()
                    })
                    .collect();
                return render_table(&truncated, &adjusted);
            }
            // No room for even minimum-width columns; split instead.
        }

        let groups = layout::split_into_groups(&widths, max_width, repeat_key);
        let tables: Vec<String> = groups
            .iter()
            .map(|group| {
                let sub = layout::project_columns(&table, group);
                let sub_widths = layout::column_widths(&sub);
                render_table(&sub, &sub_widths)
            })
            .collect();
        tables.join("\n\n")
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render header, separator, and data rows at the given column widths.
fn render_table(rows: &[Vec<String>], widths: &[usize]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(&rows[0], widths));
    lines.push(separator_line(widths));
    for row in &rows[1..] {
        lines.push(render_line(row, widths));
    }
    lines.join("\n")
}

fn render_line(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, &width) in row.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        for _ in layout::cell_len(cell)..width {
            line.push(' ');
        }
        line.push(' ');
        line.push('|');
    }
    line
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for &width in widths {
        for _ in 0..width + 2 {
            line.push('-');
        }
        line.push('|');
    }
    line
}

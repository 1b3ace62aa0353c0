//! Width bookkeeping for rendered tables.
//!
//! All widths are measured in characters. A column rendered at width `w`
//! occupies `w + 2` characters between its pipes (one padding space on each
//! side), so a table over widths `w1..wn` occupies
//! `sum(w) + 3*n + 1` characters per line: `2n` padding spaces plus `n + 1`
//! pipes.

use std::collections::HashSet;

use crate::model::Grid;

/// Character length of a cell.
pub(crate) fn cell_len(cell: &str) -> usize {
    cell.chars().count()
}

/// Pad every row of the grid with empty cells up to the longest row.
pub(crate) fn normalize_rows(grid: &[Vec<String>]) -> Grid {
    let num_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    grid.iter()
        .map(|row| {
            let mut padded = row.clone();
            padded.resize(num_cols, String::new());
            padded
        })
        .collect()
}

/// Indices of columns that have at least one non-whitespace value.
///
/// Expects a normalized grid (all rows the same length).
pub(crate) fn non_empty_columns(grid: &[Vec<String>]) -> Vec<usize> {
    let num_cols = grid.first().map(|row| row.len()).unwrap_or(0);
    (0..num_cols)
        .filter(|&col| grid.iter().any(|row| !row[col].trim().is_empty()))
        .collect()
}

/// Project a normalized grid onto the given column indices.
pub(crate) fn project_columns(grid: &[Vec<String>], cols: &[usize]) -> Grid {
    grid.iter()
        .map(|row| cols.iter().map(|&col| row[col].clone()).collect())
        .collect()
}

/// Per-column width vector: the longest cell in each column.
pub(crate) fn column_widths(grid: &[Vec<String>]) -> Vec<usize> {
    let num_cols = grid.first().map(|row| row.len()).unwrap_or(0);
    (0..num_cols)
        .map(|col| grid.iter().map(|row| cell_len(&row[col])).max().unwrap_or(0))
        .collect()
}

/// Total character width of a line rendered over these column widths.
pub(crate) fn rendered_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len() + 1
}

/// Rendered width of a subset of columns.
pub(crate) fn rendered_width_of(cols: &[usize], widths: &[usize]) -> usize {
    cols.iter().map(|&col| widths[col]).sum::<usize>() + 3 * cols.len() + 1
}

/// Whether column 0 of the grid can serve as a key column.
///
/// Empty values are skipped; any repeated non-empty value disqualifies the
/// column. An all-empty (or zero-row) column counts as a key.
pub(crate) fn is_key_column(grid: &[Vec<String>]) -> bool {
    let mut seen = HashSet::new();
    for row in grid {
        let value = row[0].trim();
        if value.is_empty() {
            continue;
        }
        if !seen.insert(value) {
            return false;
        }
    }
    true
}

/// Proportionally shrink column widths to fit `available` content characters.
///
/// Each width is scaled by `available / total` (floor), clamped to
/// `min_width`. Clamping can leave the sum above `available`; the excess is
/// then taken from the widest columns first, never cutting below `min_width`.
pub(crate) fn squeeze_widths(widths: &[usize], available: usize, min_width: usize) -> Vec<usize> {
    let total: usize = widths.iter().sum();
    let mut adjusted: Vec<usize> = widths
        .iter()
        .map(|&w| ((w * available) / total).max(min_width))
        .collect();

    let mut excess = adjusted.iter().sum::<usize>().saturating_sub(available);
    if excess > 0 {
        // Stable sort: equal widths keep their original column order.
        let mut order: Vec<usize> = (0..adjusted.len()).collect();
        order.sort_by(|&a, &b| adjusted[b].cmp(&adjusted[a]));
        for col in order {
            if excess == 0 {
                break;
            }
            let take = excess.min(adjusted[col].saturating_sub(min_width));
            adjusted[col] -= take;
            excess -= take;
        }
    }
    adjusted
}

/// Hard-truncate a cell to `width` characters. No ellipsis.
pub(crate) fn truncate_cell(cell: &str, width: usize) -> String {
    if cell_len(cell) <= width {
        cell.to_string()
    } else {
        cell.chars().take(width).collect()
    }
}

/// Partition column indices into groups that each render within `max_width`.
///
/// Column 0 always opens the first group. Each subsequent column is added to
/// the current group while the group still fits; otherwise the group is
/// closed and a new one starts, seeded with `[0, col]` when the key column is
/// being repeated and `[col]` alone otherwise. A group's seed is never
/// rejected, so an oversized single column still gets a group of its own.
pub(crate) fn split_into_groups(
    widths: &[usize],
    max_width: usize,
    repeat_key: bool,
) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    let mut current = vec![0];
    for col in 1..widths.len() {
        let mut tentative = current.clone();
        tentative.push(col);
        if rendered_width_of(&tentative, widths) <= max_width {
            current = tentative;
        } else {
            groups.push(current);
            current = if repeat_key { vec![0, col] } else { vec![col] };
        }
    }
    groups.push(current);
    groups
}

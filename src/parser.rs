use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Grid, TableFormat};

/// A line that, ignoring surrounding whitespace, starts and ends with a pipe.
static PIPE_ROW_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|.*\|\s*$").expect("static regex must compile"));

/// A line made solely of `+` and `-`, as drawn around SQL client output.
static ASCII_BORDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[-+]+\+$").expect("static regex must compile"));

/// A pipe-wrapped line with no whitespace tolerance.
static PIPE_ROW_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|.*\|$").expect("static regex must compile"));

/// A markdown separator row: only pipes, hyphens and whitespace between the
/// outer pipes. Callers must additionally require at least one hyphen so that
/// data rows made of pipes and spaces are not mistaken for separators.
static MD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-|]+\|$").expect("static regex must compile"));

/// Classify raw input text into one of the supported table formats.
///
/// The classification runs over the non-blank lines of the trimmed input, in
/// a fixed order with first match winning:
///
/// 1. More than half of the lines are pipe-wrapped → [`TableFormat::Markdown`].
/// 2. Any `+---+` border line, or any strictly pipe-wrapped line while the
///    text contains a pipe at all → [`TableFormat::Sql`].
/// 3. More than 70% of the lines contain a tab → [`TableFormat::Tsv`].
/// 4. Otherwise → [`TableFormat::Csv`].
///
/// Blank input yields [`TableFormat::Unknown`], which callers must treat as
/// "no data". Note that rule 2 fires for any pipe-containing text with one
/// pipe-wrapped line, so pipe-heavy CSV can be classified as SQL; this
/// precedence is intentional and relied upon by downstream users.
pub fn detect(text: &str) -> TableFormat {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TableFormat::Unknown;
    }

    let lines: Vec<&str> = trimmed.lines().filter(|l| !l.trim().is_empty()).collect();
    let total = lines.len();

    let pipe_rows = lines.iter().filter(|l| PIPE_ROW_LOOSE.is_match(l)).count();
    if pipe_rows * 2 > total {
        return TableFormat::Markdown;
    }

    let has_border = lines.iter().any(|l| ASCII_BORDER.is_match(l));
    let has_pipe_row = lines.iter().any(|l| PIPE_ROW_STRICT.is_match(l));
    if has_border || (has_pipe_row && trimmed.contains('|')) {
        return TableFormat::Sql;
    }

    let tab_rows = lines.iter().filter(|l| l.contains('\t')).count();
    if tab_rows * 10 > total * 7 {
        return TableFormat::Tsv;
    }

    TableFormat::Csv
}

/// Parse input text into a [`Grid`], detecting the format first.
///
/// This is the entry point adapters should use. It never fails: blank input
/// and input where no line matches the detected format's shape both produce
/// an empty grid, which callers must treat as a parse failure.
pub fn parse(text: &str) -> Grid {
    if text.trim().is_empty() {
        return Grid::new();
    }
    parse_as(text, detect(text))
}

/// Parse input text as a specific format, bypassing detection.
///
/// [`TableFormat::Unknown`] falls back to CSV parsing, the most permissive
/// shape, rather than returning an empty grid.
pub fn parse_as(text: &str, format: TableFormat) -> Grid {
    match format {
        TableFormat::Markdown => parse_markdown(text),
        TableFormat::Sql => parse_sql(text),
        TableFormat::Tsv => parse_tsv(text),
        TableFormat::Csv => parse_csv(text),
        TableFormat::Unknown => parse_csv(text),
    }
}

/// Strip one leading and one trailing pipe, leaving inner pipes alone.
fn strip_outer_pipes(line: &str) -> &str {
    let inner = line.strip_prefix('|').unwrap_or(line);
    inner.strip_suffix('|').unwrap_or(inner)
}

/// Strip a single pair of matching outer quotes (`"` or `'`) from a cell.
///
/// This is a minimal unescaping pass, not a quoted-field parser: an unmatched
/// quote is left alone, and nothing inside the cell is rewritten.
fn strip_outer_quotes(cell: &str) -> &str {
    let bytes = cell.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &cell[1..cell.len() - 1];
        }
    }
    cell
}

fn parse_markdown(text: &str) -> Grid {
    let mut grid = Grid::new();
    for line in text.lines() {
        let line = line.trim();
        if !(line.starts_with('|') && line.ends_with('|')) {
            continue;
        }
        if MD_SEPARATOR.is_match(line) && line.contains('-') {
            continue;
        }
        let cells: Vec<String> = strip_outer_pipes(line)
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect();
        if !cells.is_empty() {
            grid.push(cells);
        }
    }
    grid
}

fn parse_csv(text: &str) -> Grid {
    // Cells are split on every comma: a comma inside a quoted field is NOT
    // protected and splits the field. Known limitation, kept for
    // compatibility with existing consumers.
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(',')
                .map(|cell| strip_outer_quotes(cell.trim()).to_string())
                .collect()
        })
        .collect()
}

fn parse_tsv(text: &str) -> Grid {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

fn parse_sql(text: &str) -> Grid {
    let mut grid = Grid::new();
    for line in text.lines() {
        let line = line.trim();
        if ASCII_BORDER.is_match(line) {
            continue;
        }
        if line.starts_with('|') && line.ends_with('|') {
            let cells: Vec<String> = strip_outer_pipes(line)
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect();
            if !cells.is_empty() {
                grid.push(cells);
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_blank_input_is_unknown() {
        assert_eq!(detect(""), TableFormat::Unknown);
        assert_eq!(detect("   \n  "), TableFormat::Unknown);
    }

    #[test]
    fn detect_markdown_when_majority_of_lines_are_piped() {
        let text = "| a | b |\n|---|---|\n| 1 | 2 |\nstray note";
        assert_eq!(detect(text), TableFormat::Markdown);
    }

    #[test]
    fn detect_sql_on_ascii_border() {
        let text = "+----+------+\nid  name\nmore prose\nand more\nstill more";
        assert_eq!(detect(text), TableFormat::Sql);
    }

    #[test]
    fn detect_sql_when_one_pipe_row_among_prose() {
        // A single pipe-wrapped line is not a markdown majority, but the
        // pipe-row-plus-pipe condition still classifies the text as SQL.
        let text = "|id|name|\nplain line\nplain line\nplain line";
        assert_eq!(detect(text), TableFormat::Sql);
    }

    #[test]
    fn detect_tsv_above_seventy_percent_tabs() {
        let text = "a\tb\nc\td\ne\tf\ng,h";
        assert_eq!(detect(text), TableFormat::Tsv);
    }

    #[test]
    fn detect_tsv_boundary_is_strict() {
        // Exactly 70% tab lines is not enough.
        let lines: Vec<&str> = vec!["a\tb", "c\td", "e\tf", "g\th", "i\tj", "k\tl", "m\tn", "o,p", "q,r", "s,t"];
        assert_eq!(detect(&lines.join("\n")), TableFormat::Csv);
    }

    #[test]
    fn detect_falls_back_to_csv() {
        assert_eq!(detect("a,b,c\n1,2,3"), TableFormat::Csv);
        assert_eq!(detect("just one line of prose"), TableFormat::Csv);
    }

    #[test]
    fn parse_blank_input_is_empty_grid() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn parse_markdown_drops_separator_rows() {
        let grid = parse("| Name | Age |\n|------|-----|\n| Ann | 4 |");
        assert_eq!(
            grid,
            vec![vec!["Name".to_string(), "Age".to_string()], vec!["Ann".to_string(), "4".to_string()]]
        );
    }

    #[test]
    fn parse_markdown_keeps_pipe_and_space_rows_without_hyphens() {
        // "| | |" looks separator-shaped but has no hyphen, so it is data.
        let grid = parse("| a | b |\n| | |\n| c | d |");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec!["".to_string(), "".to_string()]);
    }

    #[test]
    fn parse_markdown_ignores_unpiped_lines() {
        let grid = parse("| a | b |\n|---|---|\nnot a table row\n| 1 | 2 |");
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn parse_csv_splits_and_trims() {
        let grid = parse("Name,Age\nJohn Smith , 32");
        assert_eq!(
            grid,
            vec![
                vec!["Name".to_string(), "Age".to_string()],
                vec!["John Smith".to_string(), "32".to_string()],
            ]
        );
    }

    #[test]
    fn parse_csv_strips_matching_outer_quotes() {
        let grid = parse("\"hello\",'world',it's\nx,y,z");
        assert_eq!(grid[0], vec!["hello".to_string(), "world".to_string(), "it's".to_string()]);
    }

    #[test]
    fn parse_csv_comma_inside_quotes_still_splits() {
        // Accepted limitation: quoting does not protect commas.
        let grid = parse("\"a,b\",c\nx,y,z");
        assert_eq!(grid[0], vec!["\"a".to_string(), "b\"".to_string(), "c".to_string()]);
    }

    #[test]
    fn parse_tsv_splits_on_tabs() {
        let grid = parse("a\tb\tc\n1\t2\t3\n4\t5\t6");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn parse_sql_skips_borders_and_keeps_pipe_rows() {
        let text = "+----+-------+\n| id | name  |\n+----+-------+\n| 1  | Alice |\n| 2  | Bob   |\n+----+-------+";
        let grid = parse(text);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["id".to_string(), "name".to_string()]);
        assert_eq!(grid[2], vec!["2".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn parse_as_unknown_falls_back_to_csv() {
        let grid = parse_as("a,b\n1,2", TableFormat::Unknown);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn strip_outer_quotes_requires_a_matching_pair() {
        assert_eq!(strip_outer_quotes("\"hi\""), "hi");
        assert_eq!(strip_outer_quotes("'hi'"), "hi");
        assert_eq!(strip_outer_quotes("\"hi'"), "\"hi'");
        assert_eq!(strip_outer_quotes("\""), "\"");
        assert_eq!(strip_outer_quotes(""), "");
    }
}

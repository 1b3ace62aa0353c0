use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use serde::Serialize;
use tablefmt::{detect, parse_as, Formatter, TableFmtError, TableFormat};

/// Reformat loosely structured tabular text as aligned markdown tables.
///
/// tfmt reads CSV, TSV, markdown tables, or SQL client output from stdin or
/// files, detects the format, and prints aligned markdown tables that fit a
/// character-width budget. Wide tables are squeezed or split automatically.
#[derive(Parser, Debug)]
#[command(name = "tfmt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum width of a rendered table line (minimum 20).
    #[arg(short = 'w', long, default_value = "100")]
    width: usize,

    /// Force the input format instead of detecting it.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Print the detected format and parsed rows as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Sql,
    Tsv,
    Csv,
}

/// What `--json` emits: the classification plus the raw parsed grid.
#[derive(Debug, Serialize)]
struct ParsedDocument<'a> {
    format: TableFormat,
    rows: &'a [Vec<String>],
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("tfmt: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.width < 20 {
        return Err(format!("width must be at least 20, got {}", args.width).into());
    }

    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files and stdin is a terminal; pipe data or pass a file".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    if input.trim().is_empty() {
        return Err(TableFmtError::EmptyInput.into());
    }

    let format = match args.format {
        Some(FormatArg::Markdown) => TableFormat::Markdown,
        Some(FormatArg::Sql) => TableFormat::Sql,
        Some(FormatArg::Tsv) => TableFormat::Tsv,
        Some(FormatArg::Csv) => TableFormat::Csv,
        None => detect(&input),
    };

    let grid = parse_as(&input, format);
    if grid.is_empty() {
        return Err(TableFmtError::NoTabularData.into());
    }

    let mut output = if args.json {
        serde_json::to_string_pretty(&ParsedDocument {
            format,
            rows: &grid,
        })?
    } else {
        let mut formatter = Formatter::new();
        formatter.options.max_table_width = args.width;
        formatter.format_grid(&grid)
    };
    output.push('\n');

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
